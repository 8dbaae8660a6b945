//! Click count generation.
//!
//! Each individual's click count is built from three independent contributions:
//! - [`age_count`]: a bucketed random amount driven by age
//! - [`csv_count`]: grows with distance from the mean credit score
//! - [`personality_count`]: a clamped linear map of the personality z-score
//!
//! [`generate_clicks`] applies all three rules to every row of a population.

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::CREDIT_SCORE_MEAN;
use crate::error::{GenerateError, GenerateResult};

/// Every click contribution starts from this value before the age rule adds to it.
const BASE_CLICKS: i32 = 10;

/// Largest magnitude [`personality_count`] can return.
const PERSONALITY_CLICK_CAP: f64 = 30.0;

/// Per-individual inputs to the click rules.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClickInputs {
    pub age: i32,
    pub credit_score: i32,
    pub personality_z_score: f64,
}

impl ClickInputs {
    /// Zips three parallel columns into per-row records.
    ///
    /// Fails if the columns have different lengths, since rows could no longer be
    /// matched up by position.
    pub fn from_columns(
        ages: &[i32],
        credit_scores: &[i32],
        z_scores: &[f64],
    ) -> GenerateResult<Vec<Self>> {
        if ages.len() != credit_scores.len() || ages.len() != z_scores.len() {
            return Err(GenerateError::ColumnLengthMismatch {
                ages: ages.len(),
                credit_scores: credit_scores.len(),
                z_scores: z_scores.len(),
            });
        }

        Ok(ages
            .iter()
            .zip(credit_scores)
            .zip(z_scores)
            .map(|((&age, &credit_score), &personality_z_score)| Self {
                age,
                credit_score,
                personality_z_score,
            })
            .collect())
    }
}

/// The three click contributions for one individual.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClickCounts {
    pub age_count: i32,
    pub csv_count: i32,
    pub personality_count: i32,
}

impl ClickCounts {
    /// Total clicks: the sum of all three contributions.
    pub fn total(&self) -> i32 {
        self.age_count + self.csv_count + self.personality_count
    }
}

/// Applies the three click rules to every row, preserving row order.
///
/// Per row the draws happen in a fixed order (age, then credit score), so a seeded
/// `rng` reproduces the same counts.
pub fn generate_clicks(
    rows: &[ClickInputs],
    rng: &mut impl Rng,
) -> GenerateResult<Vec<ClickCounts>> {
    debug!(count = rows.len(), "Generating click counts");

    rows.iter()
        .enumerate()
        .map(|(row, inputs)| {
            if !inputs.personality_z_score.is_finite() {
                return Err(GenerateError::NonFiniteZScore {
                    row,
                    value: inputs.personality_z_score,
                });
            }

            Ok(ClickCounts {
                age_count: age_count(inputs.age, rng),
                csv_count: csv_count(inputs.credit_score, rng),
                personality_count: personality_count(inputs.personality_z_score),
            })
        })
        .collect()
}

/// Click contribution driven by age.
///
/// Ages fall into 20-year bins. Teenagers click less than the base, people in their
/// twenties and thirties more, forty- and fifty-somethings the most, and everyone older
/// slightly more than the base.
pub fn age_count(age: i32, rng: &mut impl Rng) -> i32 {
    match age / 20 {
        0 => BASE_CLICKS - rng.gen_range(10..=19),
        1 => BASE_CLICKS + rng.gen_range(10..=19) + rng.gen_range(10..=19),
        2 => {
            BASE_CLICKS
                + rng.gen_range(12..=23)
                + rng.gen_range(12..=23)
                + rng.gen_range(12..=23)
        }
        _ => BASE_CLICKS + rng.gen_range(2..=17),
    }
}

/// Click contribution driven by how far a credit score sits from the mean.
pub fn csv_count(credit_score: i32, rng: &mut impl Rng) -> i32 {
    let distance = (credit_score as f64 - CREDIT_SCORE_MEAN).abs();
    let modifier = distance.powf(0.75) as i32;
    modifier + rng.gen_range(1..=3)
}

/// Click contribution driven by a personality z-score.
///
/// Maps `z` to `(z + 1) * 10`, truncated toward zero, and clamps the result to
/// `[-30, 30]`. The magnitude check runs on the untruncated value.
///
/// Non-finite input is not rejected here: NaN maps to 0 and an infinite z-score to
/// the cap with its sign. [`generate_clicks`] rejects both before calling this.
pub fn personality_count(z_score: f64) -> i32 {
    let value = (z_score + 1.0) * 10.0;
    if value == 0.0 {
        return 0;
    }

    if value.abs() > PERSONALITY_CLICK_CAP {
        (PERSONALITY_CLICK_CAP * value.signum()) as i32
    } else {
        value as i32
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn sample_range(mut f: impl FnMut(&mut StdRng) -> i32) -> (i32, i32) {
        let mut rng = StdRng::seed_from_u64(12345);
        (0..5000).map(|_| f(&mut rng)).fold((i32::MAX, i32::MIN), |(lo, hi), v| {
            (lo.min(v), hi.max(v))
        })
    }

    #[test]
    fn test_age_count_ranges() {
        assert_eq!(sample_range(|rng| age_count(10, rng)), (-9, 0));
        assert_eq!(sample_range(|rng| age_count(70, rng)), (12, 27));

        // Sums of several draws rarely reach their extremes, so only check containment
        let (lo, hi) = sample_range(|rng| age_count(25, rng));
        assert!(lo >= 30 && hi <= 48, "age_count(25) in [{lo}, {hi}]");
        let (lo, hi) = sample_range(|rng| age_count(50, rng));
        assert!(lo >= 46 && hi <= 79, "age_count(50) in [{lo}, {hi}]");
    }

    #[test]
    fn test_age_count_bin_edges() {
        let mut rng = StdRng::seed_from_u64(1);
        assert!(age_count(19, &mut rng) <= 0);
        assert!(age_count(20, &mut rng) >= 30);
        assert!(age_count(39, &mut rng) <= 48);
        assert!(age_count(40, &mut rng) >= 46);
        assert!((12..=27).contains(&age_count(60, &mut rng)));
        assert!((12..=27).contains(&age_count(120, &mut rng)));
    }

    #[test]
    fn test_csv_count_ranges() {
        assert_eq!(sample_range(|rng| csv_count(730, rng)), (1, 3));

        // |300 - 730| = 430 and floor(430^0.75) = 94
        assert_eq!(sample_range(|rng| csv_count(300, rng)), (95, 97));

        // Symmetric around the mean
        assert_eq!(
            sample_range(|rng| csv_count(630, rng)),
            sample_range(|rng| csv_count(830, rng))
        );
    }

    #[test]
    fn test_personality_count() {
        assert_eq!(personality_count(2.0), 30);
        assert_eq!(personality_count(4.0), 30);
        assert_eq!(personality_count(-1.0), 0);
        assert_eq!(personality_count(0.0), 10);
        assert_eq!(personality_count(0.55), 15);
        assert_eq!(personality_count(-1.55), -5);
        assert_eq!(personality_count(-6.0), -30);
    }

    #[test]
    fn test_personality_count_non_finite() {
        assert_eq!(personality_count(f64::NAN), 0);
        assert_eq!(personality_count(f64::INFINITY), 30);
        assert_eq!(personality_count(f64::NEG_INFINITY), -30);
    }

    #[test]
    fn test_generate_clicks_preserves_rows() {
        let rows = ClickInputs::from_columns(&[10, 70, 25], &[730, 730, 300], &[2.0, -1.0, 4.0])
            .unwrap();
        let mut rng = StdRng::seed_from_u64(99);
        let clicks = generate_clicks(&rows, &mut rng).unwrap();

        assert_eq!(clicks.len(), 3);
        assert!((-9..=0).contains(&clicks[0].age_count));
        assert!((12..=27).contains(&clicks[1].age_count));
        assert!((30..=48).contains(&clicks[2].age_count));
        assert!((95..=97).contains(&clicks[2].csv_count));
        assert_eq!(
            clicks.iter().map(|c| c.personality_count).collect::<Vec<_>>(),
            vec![30, 0, 30]
        );
    }

    #[test]
    fn test_generate_clicks_seeded() {
        let rows = ClickInputs::from_columns(&[18, 44, 61], &[650, 700, 810], &[0.1, 0.2, 0.3])
            .unwrap();
        let first = generate_clicks(&rows, &mut StdRng::seed_from_u64(5)).unwrap();
        let second = generate_clicks(&rows, &mut StdRng::seed_from_u64(5)).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_mismatched_columns() {
        let err = ClickInputs::from_columns(&[20, 30], &[700], &[0.0, 0.0]).unwrap_err();
        assert_eq!(
            err,
            GenerateError::ColumnLengthMismatch {
                ages: 2,
                credit_scores: 1,
                z_scores: 2,
            }
        );
    }

    #[test]
    fn test_non_finite_z_score() {
        let rows = ClickInputs::from_columns(&[20, 30], &[700, 700], &[0.0, f64::NAN]).unwrap();
        let err = generate_clicks(&rows, &mut StdRng::seed_from_u64(1)).unwrap_err();
        assert!(matches!(err, GenerateError::NonFiniteZScore { row: 1, .. }));
    }

    #[test]
    fn test_total() {
        let counts = ClickCounts {
            age_count: 12,
            csv_count: 4,
            personality_count: -3,
        };
        assert_eq!(counts.total(), 13);
    }
}
