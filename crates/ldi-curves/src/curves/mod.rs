//! Curve types.
//!
//! - [`ZeroCurve`]: pillar-based continuously-compounded zero curve
//! - [`parametric_curve`] / [`make_curve`]: simple shaped curves for demos and tests

mod parametric;
mod zero;

pub use parametric::{make_curve, parametric_curve, CurveShape};
pub use zero::ZeroCurve;
