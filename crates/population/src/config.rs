//! Configuration types and fixed distribution parameters.

use serde::{Deserialize, Serialize};

/// Youngest age any generated individual can have.
pub const MIN_AGE: i32 = 18;
/// Oldest age any generated individual can have.
pub const MAX_AGE: i32 = 78;

/// Lowest credit score.
pub const MIN_CREDIT_SCORE: i32 = 300;
/// Highest credit score.
pub const MAX_CREDIT_SCORE: i32 = 900;
/// Mean of the unbiased credit score distribution.
pub const CREDIT_SCORE_MEAN: f64 = 730.0;
/// Standard deviation of the credit score distribution.
pub const CREDIT_SCORE_STD_DEV: f64 = 60.0;
/// Largest downward shift applied to the youngest individuals' credit scores.
pub const CREDIT_SCORE_AGE_PENALTY: f64 = 40.0;

/// Mean of the random-circumstance net worth component.
pub const CIRCUMSTANCE_WORTH_MEAN: f64 = 40_000.0;
/// Standard deviation of the random-circumstance net worth component.
pub const CIRCUMSTANCE_WORTH_STD_DEV: f64 = 5_000.0;
/// Floor of the random-circumstance net worth component.
pub const CIRCUMSTANCE_WORTH_FLOOR: i64 = 10_000;

/// Normal distribution that ages are drawn from before clipping to
/// [`MIN_AGE`]..=[`MAX_AGE`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AgeDistribution {
    pub mean: f64,
    pub std_dev: f64,
}

impl AgeDistribution {
    pub const fn new(mean: f64, std_dev: f64) -> Self {
        Self { mean, std_dev }
    }
}

impl Default for AgeDistribution {
    fn default() -> Self {
        // Roughly an adult customer base
        Self::new(45.0, 15.0)
    }
}

/// Configuration for building a population.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PopulationConfig {
    /// Number of individuals to generate.
    pub individuals: usize,

    /// Distribution ages are drawn from.
    pub age: AgeDistribution,

    /// Master seed. When set, every stage is reproducible; when unset, ages and credit
    /// scores still use [`PopulationConfig::column_seed`] and the remaining stages draw
    /// from the thread-local generator.
    pub seed: Option<u64>,

    /// Seed for the age and credit score columns when no master seed is given.
    pub column_seed: u64,
}

impl Default for PopulationConfig {
    fn default() -> Self {
        Self {
            individuals: 1000,
            age: AgeDistribution::default(),
            seed: None,
            column_seed: 42,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = PopulationConfig::default();
        assert_eq!(config.individuals, 1000);
        assert_eq!(config.column_seed, 42);
        assert!(config.seed.is_none());
    }

    #[test]
    fn test_config_from_json() {
        let json = r#"{
            "individuals": 25,
            "age": { "mean": 35.0, "std_dev": 5.0 },
            "seed": 9,
            "column_seed": 1
        }"#;
        let config: PopulationConfig = serde_json::from_str(json).unwrap();

        assert_eq!(config.individuals, 25);
        assert_eq!(config.age, AgeDistribution::new(35.0, 5.0));
        assert_eq!(config.seed, Some(9));
    }
}
