//! Error types for liability valuation.

use thiserror::Error;

/// A specialized Result type for liability operations.
pub type LiabilityResult<T> = Result<T, LiabilityError>;

/// Errors raised by liability models.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LiabilityError {
    /// A valuation call was given an unusable combination of arguments.
    #[error("Invalid argument: {reason}")]
    InvalidArgument {
        /// What was wrong.
        reason: String,
    },

    /// Mortality law parameters are outside their domain.
    #[error("Invalid mortality parameter {parameter} = {value}: {reason}")]
    InvalidMortality {
        /// Parameter name.
        parameter: &'static str,
        /// Supplied value.
        value: f64,
        /// Why it was rejected.
        reason: &'static str,
    },
}

impl LiabilityError {
    /// Creates an invalid argument error.
    #[must_use]
    pub fn invalid_argument(reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            reason: reason.into(),
        }
    }

    /// Creates an invalid mortality error.
    #[must_use]
    pub fn invalid_mortality(parameter: &'static str, value: f64, reason: &'static str) -> Self {
        Self::InvalidMortality {
            parameter,
            value,
            reason,
        }
    }
}
