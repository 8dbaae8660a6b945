//! Net worth component generation.
//!
//! Net worth is the sum of four independent parts, one per attribute plus a purely random
//! "circumstance" term. Each part is computed separately so callers can inspect or
//! replace any one of them.

use rand::Rng;
use rand_distr::{Distribution, Normal};
use serde::{Deserialize, Serialize};

use crate::config::{
    CIRCUMSTANCE_WORTH_FLOOR, CIRCUMSTANCE_WORTH_MEAN, CIRCUMSTANCE_WORTH_STD_DEV,
};
use crate::error::{GenerateError, GenerateResult};

/// The four additive net worth components for one individual.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetWorthComponents {
    pub age_worth: i64,
    pub csv_worth: i64,
    pub clicks_worth: i64,
    pub circumstance_worth: i64,
}

impl NetWorthComponents {
    /// Computes all four components for one individual.
    ///
    /// Draws happen in a fixed order (clicks, then circumstance).
    pub fn generate(
        age: i32,
        credit_score: i32,
        clicks: i32,
        rng: &mut impl Rng,
    ) -> GenerateResult<Self> {
        Ok(Self {
            age_worth: age_worth(age),
            csv_worth: csv_worth(credit_score)?,
            clicks_worth: clicks_worth(clicks, rng),
            circumstance_worth: circumstance_worth(rng),
        })
    }

    /// Total net worth. Fails instead of wrapping if the sum leaves the `i64` range.
    pub fn total(&self) -> GenerateResult<i64> {
        [self.csv_worth, self.clicks_worth, self.circumstance_worth]
            .into_iter()
            .try_fold(self.age_worth, i64::checked_add)
            .ok_or(GenerateError::NetWorthOverflow(*self))
    }
}

/// Net worth attributable to credit score.
///
/// Computes `log2(score) ^ (score / 680)`, scaled by 2000 below a score of 500 and by
/// 5000 from 500 up. The exponent grows with the score, so scores far above the usual
/// 300..=900 band overflow `i64` and are rejected.
pub fn csv_worth(credit_score: i32) -> GenerateResult<i64> {
    if credit_score <= 0 {
        return Err(GenerateError::NonPositiveCreditScore(credit_score));
    }

    let score = credit_score as f64;
    let exponent = score / 680.0;
    let value = score.log2().powf(exponent);
    let scale = if credit_score < 500 { 2000.0 } else { 5000.0 };
    let worth = value * scale;

    // i64::MAX as f64 rounds up to 2^63, which is itself out of range
    if !worth.is_finite() || worth >= i64::MAX as f64 {
        return Err(GenerateError::CreditScoreOutOfRange(credit_score));
    }
    Ok(worth as i64)
}

/// Net worth attributable to age.
///
/// Grows with years past 30 (with a floor of 5), raised to an exponent that steps up
/// every 20 years and shrinks again past 74. Defined for every `i32`; the result stays
/// small because the exponent shrinks as fast as the base grows.
pub fn age_worth(age: i32) -> i64 {
    let age = i64::from(age);
    let base = (age - 30).max(5) as f64;
    let bucket = (age as f64 / 20.0).ceil();
    // Never below 5
    let denominator = 5.0 + (age - 74).max(0) as f64;
    let value = base.powf(bucket / denominator);

    (value * 8000.0) as i64
}

/// Net worth attributable to exploring products: 500 per click plus a little noise.
///
/// The noise is a half-open `-10..10` draw: -10 to 9 inclusive, never +10.
pub fn clicks_worth(clicks: i32, rng: &mut impl Rng) -> i64 {
    i64::from(clicks) * 500 + rng.gen_range(-10..10)
}

/// Net worth attributable to random circumstance, floored at
/// [`CIRCUMSTANCE_WORTH_FLOOR`].
pub fn circumstance_worth(rng: &mut impl Rng) -> i64 {
    let normal = Normal::new(CIRCUMSTANCE_WORTH_MEAN, CIRCUMSTANCE_WORTH_STD_DEV)
        .expect("circumstance distribution constants are valid");
    let sample: f64 = normal.sample(rng);

    (sample as i64).max(CIRCUMSTANCE_WORTH_FLOOR)
}
