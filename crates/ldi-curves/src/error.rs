//! Error types for curve operations.

use ldi_math::MathError;
use thiserror::Error;

/// A specialized Result type for curve operations.
pub type CurveResult<T> = Result<T, CurveError>;

/// Error types for curve construction and manipulation.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CurveError {
    /// Not enough pillars to build a curve.
    #[error("Insufficient points: need at least {required}, got {got}")]
    InsufficientPoints {
        /// Minimum required points.
        required: usize,
        /// Actual number of points provided.
        got: usize,
    },

    /// Pillar and rate vectors differ in length.
    #[error("Length mismatch: {pillars} pillars but {rates} rates")]
    LengthMismatch {
        /// Number of pillars.
        pillars: usize,
        /// Number of rates.
        rates: usize,
    },

    /// Pillars are not strictly increasing.
    #[error("Non-monotonic pillars at index {index}: {prev:.4} >= {current:.4}")]
    NonMonotonicPillars {
        /// Index where monotonicity violation occurred.
        index: usize,
        /// Previous pillar value.
        prev: f64,
        /// Current pillar value.
        current: f64,
    },

    /// A pillar index outside the curve was requested.
    #[error("Pillar index {index} out of range for curve with {len} pillars")]
    PillarIndexOutOfRange {
        /// Requested index.
        index: usize,
        /// Number of pillars on the curve.
        len: usize,
    },

    /// Invalid value (NaN, Inf, or domain error).
    #[error("Invalid value: {reason}")]
    InvalidValue {
        /// Description of why value is invalid.
        reason: String,
    },
}

impl CurveError {
    /// Creates an insufficient points error.
    #[must_use]
    pub fn insufficient_points(required: usize, got: usize) -> Self {
        Self::InsufficientPoints { required, got }
    }

    /// Creates a non-monotonic pillars error.
    #[must_use]
    pub fn non_monotonic_pillars(index: usize, prev: f64, current: f64) -> Self {
        Self::NonMonotonicPillars {
            index,
            prev,
            current,
        }
    }

    /// Creates an invalid value error.
    #[must_use]
    pub fn invalid_value(reason: impl Into<String>) -> Self {
        Self::InvalidValue {
            reason: reason.into(),
        }
    }
}

impl From<MathError> for CurveError {
    fn from(err: MathError) -> Self {
        match err {
            MathError::InsufficientData { required, actual } => {
                Self::insufficient_points(required, actual)
            }
            other => Self::invalid_value(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_monotonic_pillars() {
        let err = CurveError::non_monotonic_pillars(3, 2.0, 1.5);
        let msg = format!("{}", err);
        assert!(msg.contains("Non-monotonic"));
        assert!(msg.contains("index 3"));
    }

    #[test]
    fn test_length_mismatch_display() {
        let err = CurveError::LengthMismatch { pillars: 3, rates: 2 };
        assert!(err.to_string().contains("3 pillars but 2 rates"));
    }

    #[test]
    fn test_from_math_error() {
        let err: CurveError = MathError::insufficient_data(1, 0).into();
        assert_eq!(err, CurveError::insufficient_points(1, 0));
    }
}
