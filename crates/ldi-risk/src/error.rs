//! Error types for risk calculations.

use ldi_curves::CurveError;
use ldi_liabilities::LiabilityError;
use ldi_math::MathError;
use ldi_swaps::SwapError;
use thiserror::Error;

/// A specialized Result type for risk calculations.
pub type RiskResult<T> = Result<T, RiskError>;

/// Errors that can occur during risk calculations.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum RiskError {
    /// Invalid input parameters.
    #[error("invalid input: {reason}")]
    InvalidInput {
        /// What was wrong.
        reason: String,
    },

    /// The hedge sensitivity matrix is singular or nearly so.
    #[error("degenerate hedge system: det = {determinant:.3e}, threshold {threshold:.1e}")]
    DegenerateSystem {
        /// Determinant of the sensitivity matrix.
        determinant: f64,
        /// Threshold it was compared against.
        threshold: f64,
    },

    /// A ratio is undefined because its denominator (a base PV) is zero.
    #[error("undefined ratio: {context}")]
    UndefinedRatio {
        /// Which quantity could not be normalized.
        context: String,
    },

    /// Curve error.
    #[error("curve error: {0}")]
    Curve(#[from] CurveError),

    /// Swap error.
    #[error("swap error: {0}")]
    Swap(#[from] SwapError),

    /// Liability error.
    #[error("liability error: {0}")]
    Liability(#[from] LiabilityError),
}

impl RiskError {
    /// Creates an invalid input error.
    #[must_use]
    pub fn invalid_input(reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            reason: reason.into(),
        }
    }

    /// Creates an undefined ratio error.
    #[must_use]
    pub fn undefined_ratio(context: impl Into<String>) -> Self {
        Self::UndefinedRatio {
            context: context.into(),
        }
    }
}

impl From<MathError> for RiskError {
    fn from(err: MathError) -> Self {
        match err {
            MathError::SingularMatrix {
                determinant,
                threshold,
            } => Self::DegenerateSystem {
                determinant,
                threshold,
            },
            other => Self::invalid_input(other.to_string()),
        }
    }
}
