//! Fluent builder APIs for populations.
//!
//! The [`PopulationBuilder`] composes every generator into a complete
//! [`Population`] table, summing click and net worth components per individual.

mod population;

pub use population::{Individual, Population, PopulationBuilder, PopulationMetrics};
