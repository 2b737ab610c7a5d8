//! Error types for snapshot validation.

use chrono::NaiveDate;
use thiserror::Error;

/// Errors reported by the opt-in validation helpers.
///
/// Malformed records are rejected at the snapshot boundary; the computation
/// functions themselves assume validated input, are total over it, and never
/// return errors.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EngineError {
    /// A stay of zero or negative nights (`check_out <= check_in`).
    #[error("booking {id}: check-out {check_out} is not after check-in {check_in}")]
    InvalidInterval {
        id: String,
        check_in: NaiveDate,
        check_out: NaiveDate,
    },

    /// A negative total price.
    #[error("booking {id}: negative total price {price}")]
    InvalidPrice { id: String, price: f64 },

    /// A date axis that is not gap-free and strictly increasing.
    #[error("invalid date axis: {0}")]
    InvalidAxis(String),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, EngineError>;
