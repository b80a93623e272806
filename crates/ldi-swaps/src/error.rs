//! Error types for swap pricing.

use thiserror::Error;

/// A specialized Result type for swap operations.
pub type SwapResult<T> = Result<T, SwapError>;

/// Errors raised when building or pricing swaps.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SwapError {
    /// The payment schedule cannot be built.
    #[error("Invalid schedule: {maturity_years}y at {payments_per_year}/y: {reason}")]
    InvalidSchedule {
        /// Swap maturity in years.
        maturity_years: u32,
        /// Payments per year.
        payments_per_year: u32,
        /// Why it was rejected.
        reason: &'static str,
    },

    /// A swap term is not a finite number.
    #[error("Invalid {field}: {value}")]
    InvalidTerm {
        /// Name of the offending term.
        field: &'static str,
        /// Supplied value.
        value: f64,
    },
}

impl SwapError {
    /// Creates an invalid schedule error.
    #[must_use]
    pub fn invalid_schedule(maturity_years: u32, payments_per_year: u32, reason: &'static str) -> Self {
        Self::InvalidSchedule {
            maturity_years,
            payments_per_year,
            reason,
        }
    }
}
