//! # LDI Swaps
//!
//! Single-curve interest rate swap pricing for the LDI liability hedging
//! library.
//!
//! - [`build_schedule`]: equally spaced fixed-leg payments
//! - [`annuity_factor`], [`par_swap_rate`], [`payer_fixed_pv`]: pricing primitives
//! - [`SizedSwap`]: a hedge swap with a locked fixed rate
//! - [`Hedge`]: no hedge, one swap, or a book of swaps, priced uniformly
//!
//! ```rust
//! use ldi_curves::ZeroCurve;
//! use ldi_swaps::prelude::*;
//!
//! let curve = ZeroCurve::new(vec![1.0, 5.0, 10.0], vec![0.03, 0.035, 0.038]).unwrap();
//! let schedule = build_schedule(10, 1).unwrap();
//! let annuity = annuity_factor(&curve, &schedule);
//! let par = par_swap_rate(&curve, 10, 1).unwrap();
//! assert!((par * annuity - (1.0 - curve.discount_factor(10.0))).abs() < 1e-12);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]

pub mod error;
pub mod hedge;
pub mod pricing;
pub mod schedule;
pub mod swap;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{SwapError, SwapResult};
    pub use crate::hedge::Hedge;
    pub use crate::pricing::{annuity_factor, par_swap_rate, payer_fixed_pv};
    pub use crate::schedule::{build_schedule, Schedule};
    pub use crate::swap::{SizedSwap, SwapDirection};
}

pub use error::{SwapError, SwapResult};
pub use hedge::Hedge;
pub use pricing::{annuity_factor, par_swap_rate, payer_fixed_pv};
pub use schedule::{build_schedule, Schedule};
pub use swap::{SizedSwap, SwapDirection};
