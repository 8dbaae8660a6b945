//! Error types for population generation.

use thiserror::Error;

use crate::generators::NetWorthComponents;

/// Errors raised when a generator is handed input outside its contract.
///
/// None of these are recoverable inside the crate; they are surfaced to the caller as soon
/// as the bad input is seen.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum GenerateError {
    #[error("Invalid normal distribution: mean {mean}, standard deviation {std_dev}")]
    InvalidDistribution { mean: f64, std_dev: f64 },

    #[error("Credit score must be positive, got {0}")]
    NonPositiveCreditScore(i32),

    #[error("Credit score {0} is too large: its net worth component overflows i64")]
    CreditScoreOutOfRange(i32),

    #[error("Net worth components overflow i64 when summed: {0:?}")]
    NetWorthOverflow(NetWorthComponents),

    #[error(
        "Column lengths differ: {ages} ages, {credit_scores} credit scores, {z_scores} z-scores"
    )]
    ColumnLengthMismatch {
        ages: usize,
        credit_scores: usize,
        z_scores: usize,
    },

    #[error("Expected {expected} z-scores, got {actual}")]
    ZScoreCountMismatch { expected: usize, actual: usize },

    #[error("Personality z-score in row {row} is not finite: {value}")]
    NonFiniteZScore { row: usize, value: f64 },
}

/// Result alias used throughout the crate.
pub type GenerateResult<T> = Result<T, GenerateError>;
