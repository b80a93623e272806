//! Curve bumping for sensitivity analysis.
//!
//! - [`ParallelBump`]: uniform shift of every pillar rate (DV01, duration)
//! - [`KeyRateBump`]: shift of a single pillar rate (key-rate DV01/duration)
//!
//! Bumps are expressed in basis points and materialize a new [`ZeroCurve`]
//! when applied; the base curve is never modified.
//!
//! # Example: central-difference DV01
//!
//! ```rust
//! use ldi_curves::bumping::ParallelBump;
//! use ldi_curves::ZeroCurve;
//!
//! let curve = ZeroCurve::flat(vec![1.0, 10.0], 0.04).unwrap();
//! let (up, down) = ParallelBump::symmetric(1.0);
//!
//! let pv = |c: &ZeroCurve| 100.0 * c.discount_factor(10.0);
//! let dv01 = (pv(&down.apply(&curve)) - pv(&up.apply(&curve))) / 2.0;
//! assert!(dv01 > 0.0);
//! ```
//!
//! [`ZeroCurve`]: crate::ZeroCurve

mod key_rate;
mod parallel;

pub use key_rate::KeyRateBump;
pub use parallel::ParallelBump;

/// Converts basis points to rate units (1bp = 0.0001).
#[inline]
#[must_use]
pub fn bps_to_decimal(bps: f64) -> f64 {
    bps / 10_000.0
}
