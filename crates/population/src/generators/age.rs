//! Age column generation.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, Normal};
use tracing::debug;

use crate::config::{AgeDistribution, MAX_AGE, MIN_AGE};
use crate::error::{GenerateError, GenerateResult};

/// Generates `count` adult ages from a normal distribution clipped to
/// [`MIN_AGE`]..=[`MAX_AGE`].
///
/// The same `(mean, std_dev, count, seed)` always produces the same ages.
pub fn generate_ages(
    mean: f64,
    std_dev: f64,
    count: usize,
    seed: u64,
) -> GenerateResult<Vec<i32>> {
    debug!(mean, std_dev, count, seed, "Generating ages");
    let mut rng = StdRng::seed_from_u64(seed);
    generate_ages_with_rng(AgeDistribution::new(mean, std_dev), count, &mut rng)
}

/// Generates `count` ages drawing from the supplied random source.
pub fn generate_ages_with_rng(
    distribution: AgeDistribution,
    count: usize,
    rng: &mut impl Rng,
) -> GenerateResult<Vec<i32>> {
    let normal = age_normal(distribution)?;

    Ok((0..count)
        .map(|_| {
            let sample: f64 = normal.sample(rng);
            // Clip, then truncate toward zero
            sample.clamp(MIN_AGE as f64, MAX_AGE as f64) as i32
        })
        .collect())
}

fn age_normal(distribution: AgeDistribution) -> GenerateResult<Normal<f64>> {
    let AgeDistribution { mean, std_dev } = distribution;
    let invalid = GenerateError::InvalidDistribution { mean, std_dev };

    // Normal::new accepts a negative deviation
    if !mean.is_finite() || !std_dev.is_finite() || std_dev < 0.0 {
        return Err(invalid);
    }
    Normal::new(mean, std_dev).map_err(|_| invalid)
}
