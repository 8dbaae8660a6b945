//! Attribute generators.
//!
//! This module provides one generator per population attribute:
//! - [`generate_ages`]: clipped normal ages
//! - [`generate_credit_scores`]: age-biased credit scores
//! - [`generate_z_scores`]: standard-normal personality z-scores
//! - [`generate_clicks`]: the three click contributions per individual
//! - [`NetWorthComponents`]: the four additive net worth contributions

pub mod age;
pub mod clicks;
pub mod credit;
pub mod net_worth;
pub mod personality;

pub use age::{generate_ages, generate_ages_with_rng};
pub use clicks::{
    ClickCounts, ClickInputs, age_count, csv_count, generate_clicks, personality_count,
};
pub use credit::{generate_credit_scores, generate_credit_scores_with_rng};
pub use net_worth::{NetWorthComponents, age_worth, circumstance_worth, clicks_worth, csv_worth};
pub use personality::generate_z_scores;
