//! Interpolation methods for zero curve construction.
//!
//! Only piecewise-linear interpolation is needed: zero rates are
//! interpolated linearly in maturity between pillars and held flat
//! outside the pillar range.

mod linear;

pub use linear::LinearInterpolator;
