//! Error types for scenario generation.

use ldi_curves::CurveError;
use thiserror::Error;

/// A specialized Result type for scenario operations.
pub type ScenarioResult<T> = Result<T, ScenarioError>;

/// Errors raised while generating or valuing scenarios.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ScenarioError {
    /// A model or simulation parameter is outside its domain.
    #[error("Invalid parameter {name} = {value}: {reason}")]
    InvalidParameter {
        /// Parameter name.
        name: &'static str,
        /// Supplied value.
        value: f64,
        /// Why it was rejected.
        reason: &'static str,
    },

    /// A time step beyond the simulated horizon was requested.
    #[error("Step {step} out of range: scenarios have steps 0..={n_steps}")]
    StepOutOfRange {
        /// Requested step.
        step: usize,
        /// Last simulated step.
        n_steps: usize,
    },

    /// A summary statistic was requested over no values.
    #[error("Cannot summarize an empty sample")]
    EmptySample,

    /// Curve construction failed.
    #[error(transparent)]
    Curve(#[from] CurveError),
}

impl ScenarioError {
    /// Creates an invalid parameter error.
    #[must_use]
    pub fn invalid_parameter(name: &'static str, value: f64, reason: &'static str) -> Self {
        Self::InvalidParameter {
            name,
            value,
            reason,
        }
    }
}
