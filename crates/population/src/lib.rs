//! Synthetic population generation.
//!
//! This crate generates tabular data for simulated individuals whose attributes are
//! correlated through closed-form rules: age drives credit score, age and credit score
//! drive click counts, and every attribute feeds a component of net worth.
//!
//! The generators are plain functions over an explicit random source. The two column
//! generators ([`generate_ages`](generators::generate_ages) and
//! [`generate_credit_scores`](generators::generate_credit_scores)) also come in a
//! seeded form. [`PopulationBuilder`](builders::PopulationBuilder) composes all of them
//! into a [`Population`](builders::Population) table.
//!
//! # Quick Start
//!
//! ```rust
//! use population::prelude::*;
//!
//! let population = PopulationBuilder::new()
//!     .with_individuals(100)
//!     .with_age_distribution(AgeDistribution::new(42.0, 12.0))
//!     .with_seed(7)
//!     .build()?;
//!
//! assert_eq!(population.len(), 100);
//! # Ok::<(), population::GenerateError>(())
//! ```

pub mod builders;
pub mod config;
pub mod error;
pub mod generators;
pub mod rng;

pub use error::{GenerateError, GenerateResult};

pub mod prelude {
    //! Convenient re-exports for common usage.

    pub use crate::builders::{Individual, Population, PopulationBuilder, PopulationMetrics};
    pub use crate::config::{AgeDistribution, PopulationConfig};
    pub use crate::error::{GenerateError, GenerateResult};
    pub use crate::generators::{
        ClickCounts, ClickInputs, NetWorthComponents, age_count, age_worth, circumstance_worth,
        clicks_worth, csv_count, csv_worth, generate_ages, generate_ages_with_rng,
        generate_clicks, generate_credit_scores, generate_credit_scores_with_rng,
        generate_z_scores, personality_count,
    };
    pub use crate::rng::{SeedStreams, Stage};
}
