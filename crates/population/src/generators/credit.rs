//! Credit score column generation.
//!
//! Scores are normally distributed around [`CREDIT_SCORE_MEAN`], then shifted down for
//! younger individuals: the youngest lose up to [`CREDIT_SCORE_AGE_PENALTY`] points and
//! the oldest lose nothing.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, Normal};
use tracing::debug;

use crate::config::{
    CREDIT_SCORE_AGE_PENALTY, CREDIT_SCORE_MEAN, CREDIT_SCORE_STD_DEV, MAX_AGE,
    MAX_CREDIT_SCORE, MIN_AGE, MIN_CREDIT_SCORE,
};

/// Generates one credit score per age, seeded.
///
/// Output row `i` belongs to the individual with age `ages[i]`.
pub fn generate_credit_scores(ages: &[i32], seed: u64) -> Vec<i32> {
    debug!(count = ages.len(), seed, "Generating credit scores");
    let mut rng = StdRng::seed_from_u64(seed);
    generate_credit_scores_with_rng(ages, &mut rng)
}

/// Generates one credit score per age, drawing from the supplied random source.
pub fn generate_credit_scores_with_rng(ages: &[i32], rng: &mut impl Rng) -> Vec<i32> {
    let normal = credit_score_normal();

    ages.iter()
        .map(|&age| {
            let sample: f64 = normal.sample(rng);
            (sample + age_deviation(age))
                .clamp(MIN_CREDIT_SCORE as f64, MAX_CREDIT_SCORE as f64) as i32
        })
        .collect()
}

/// Shift applied to a credit score for a given age. Zero at [`MAX_AGE`], and
/// `-CREDIT_SCORE_AGE_PENALTY` at [`MIN_AGE`].
pub fn age_deviation(age: i32) -> f64 {
    let span = (MAX_AGE - MIN_AGE) as f64;
    (age - MAX_AGE) as f64 / span * CREDIT_SCORE_AGE_PENALTY
}

fn credit_score_normal() -> Normal<f64> {
    Normal::new(CREDIT_SCORE_MEAN, CREDIT_SCORE_STD_DEV)
        .expect("credit score distribution constants are valid")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_age_deviation() {
        assert_eq!(age_deviation(MAX_AGE), 0.0);
        assert!((age_deviation(MIN_AGE) + CREDIT_SCORE_AGE_PENALTY).abs() < 1e-9);
        assert!((age_deviation(48) + 20.0).abs() < 1e-9);
    }

    #[test]
    fn test_scores_within_bounds_and_aligned() {
        let ages: Vec<i32> = (0..600).map(|i| MIN_AGE + i % 61).collect();
        let scores = generate_credit_scores(&ages, 42);

        assert_eq!(scores.len(), ages.len());
        assert!(
            scores
                .iter()
                .all(|&s| (MIN_CREDIT_SCORE..=MAX_CREDIT_SCORE).contains(&s))
        );
    }

    #[test]
    fn test_same_seed_same_scores() {
        let ages = vec![20, 35, 50, 65, 78];
        assert_eq!(
            generate_credit_scores(&ages, 3),
            generate_credit_scores(&ages, 3)
        );
    }

    #[test]
    fn test_older_never_lowers_score() {
        // Same seed means the same underlying samples, so only the age shift differs
        let young = generate_credit_scores(&[MIN_AGE; 200], 11);
        let old = generate_credit_scores(&[MAX_AGE; 200], 11);

        for (y, o) in young.iter().zip(&old) {
            assert!(o >= y, "older score {o} below younger score {y}");
        }

        let mean = |v: &[i32]| v.iter().map(|&s| s as f64).sum::<f64>() / v.len() as f64;
        assert!(mean(&old) - mean(&young) > 30.0);
    }
}
