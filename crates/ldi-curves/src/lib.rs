//! # LDI Curves
//!
//! Zero curves and curve bumps for the LDI liability hedging library.
//!
//! This crate provides:
//!
//! - **Zero Curve**: [`ZeroCurve`] with linear interpolation and flat extrapolation
//! - **Compounding**: [`Compounding`] conventions for flat-rate discounting
//! - **Bumping**: [`ParallelBump`](bumping::ParallelBump) and
//!   [`KeyRateBump`](bumping::KeyRateBump) for finite-difference risk
//! - **Shapes**: flat, upward and inverted parametric curves
//! - **Pricing capability**: the [`Priceable`] trait the risk engine works against
//!
//! ## Quick Start
//!
//! ```rust
//! use ldi_curves::prelude::*;
//!
//! let curve = ZeroCurve::new(
//!     vec![0.5, 1.0, 2.0, 5.0, 10.0, 20.0],
//!     vec![0.030, 0.031, 0.033, 0.036, 0.038, 0.039],
//! )
//! .unwrap();
//!
//! let df = curve.discount_factor(7.0);
//! let shocked = curve.bumped_parallel(0.01);
//! assert!(shocked.discount_factor(7.0) < df);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]

pub mod bumping;
pub mod compounding;
pub mod curves;
pub mod error;
pub mod traits;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::bumping::{KeyRateBump, ParallelBump};
    pub use crate::compounding::Compounding;
    pub use crate::curves::{make_curve, parametric_curve, CurveShape, ZeroCurve};
    pub use crate::error::{CurveError, CurveResult};
    pub use crate::traits::Priceable;
}

pub use compounding::Compounding;
pub use curves::{make_curve, parametric_curve, CurveShape, ZeroCurve};
pub use error::{CurveError, CurveResult};
pub use traits::Priceable;
