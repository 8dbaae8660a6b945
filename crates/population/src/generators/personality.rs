//! Personality z-score generation.

use rand::Rng;
use rand_distr::{Distribution, StandardNormal};

/// Draws `count` standard-normal personality z-scores.
pub fn generate_z_scores(count: usize, rng: &mut impl Rng) -> Vec<f64> {
    (0..count)
        .map(|_| {
            let z: f64 = StandardNormal.sample(rng);
            z
        })
        .collect()
}
