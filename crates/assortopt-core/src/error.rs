//! Error types for assortopt

use thiserror::Error;

/// Main error type for assortopt operations.
///
/// Every variant is raised while validating inputs, before any search runs.
/// Optimization is deterministic, so retrying with the same inputs fails the
/// same way.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AssortOptError {
    /// The catalog has no items.
    #[error("Configuration error: empty catalog, nothing to optimize over")]
    EmptyCatalog,

    /// Weight and revenue vectors have different lengths.
    #[error("Configuration error: {weights} attraction weights but {revenues} revenues")]
    LengthMismatch { weights: usize, revenues: usize },

    /// A cardinality cap that admits no non-empty assortment.
    #[error("Configuration error: cardinality cap {0} must be at least 1")]
    InvalidCardinality(usize),

    /// MNL attraction weights must be non-negative.
    #[error("Configuration error: attraction weight {weight} of item {index} is negative")]
    NegativeWeight { index: usize, weight: f64 },

    /// NaN or infinite weight/revenue.
    #[error("Configuration error: item {index} has non-finite value {value}")]
    NonFiniteValue { index: usize, value: f64 },

    /// Assortment with duplicate or out-of-range items, or too many items.
    #[error("Invalid assortment: {0}")]
    InvalidAssortment(String),

    /// Any other configuration problem.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl AssortOptError {
    /// Returns true for errors caused by malformed catalog or cap inputs.
    pub fn is_config_error(&self) -> bool {
        !matches!(self, AssortOptError::InvalidAssortment(_))
    }
}

/// Result type alias for assortopt operations
pub type Result<T> = std::result::Result<T, AssortOptError>;
