//! # LDI Math
//!
//! Mathematical utilities for the LDI liability hedging library.
//!
//! This crate provides:
//!
//! - **Interpolation**: Linear interpolation with flat extrapolation
//! - **Linear Algebra**: Dense linear solves with an explicit degeneracy check
//!
//! Everything here is plain `f64` arithmetic; the valuation crates build on
//! top of it.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::similar_names)]

pub mod error;
pub mod interpolation;
pub mod linear_algebra;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{MathError, MathResult};
    pub use crate::interpolation::LinearInterpolator;
    pub use crate::linear_algebra::{solve_2x2, solve_linear_system, DEFAULT_SINGULARITY_THRESHOLD};
}

pub use error::{MathError, MathResult};
