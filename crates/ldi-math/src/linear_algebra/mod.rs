//! Linear algebra utilities.
//!
//! Dense square solves used by multi-instrument hedge sizing. Every solve
//! checks the determinant against an explicit threshold and reports a
//! [`MathError::SingularMatrix`] instead of dividing by a near-zero pivot.

use crate::error::{MathError, MathResult};
use nalgebra::{DMatrix, DVector};

/// Determinant magnitude below which a system is treated as degenerate.
pub const DEFAULT_SINGULARITY_THRESHOLD: f64 = 1e-12;

/// Solves a 2x2 system by Cramer's rule.
///
/// ```text
/// | a11  a12 | | x1 |   | b1 |
/// | a21  a22 | | x2 | = | b2 |
/// ```
///
/// # Errors
///
/// Returns [`MathError::SingularMatrix`] when `|det| < threshold`.
///
/// # Example
///
/// ```rust
/// use ldi_math::linear_algebra::solve_2x2;
///
/// let (x1, x2) = solve_2x2([[2.0, 1.0], [1.0, 3.0]], [5.0, 5.0], 1e-12).unwrap();
/// assert!((x1 - 2.0).abs() < 1e-12);
/// assert!((x2 - 1.0).abs() < 1e-12);
/// ```
pub fn solve_2x2(a: [[f64; 2]; 2], b: [f64; 2], threshold: f64) -> MathResult<(f64, f64)> {
    let [[a11, a12], [a21, a22]] = a;
    let [b1, b2] = b;

    let det = a11 * a22 - a12 * a21;
    if !det.is_finite() || det.abs() < threshold {
        return Err(MathError::singular(det, threshold));
    }

    let x1 = (b1 * a22 - b2 * a12) / det;
    let x2 = (-b1 * a21 + b2 * a11) / det;
    Ok((x1, x2))
}

/// Solves a square linear system `Ax = b` using LU decomposition.
///
/// # Errors
///
/// - [`MathError::InvalidInput`] if `a` is not square or is empty
/// - [`MathError::DimensionMismatch`] if `b` does not match `a`
/// - [`MathError::SingularMatrix`] if `|det(a)| < threshold`
pub fn solve_linear_system(
    a: &DMatrix<f64>,
    b: &DVector<f64>,
    threshold: f64,
) -> MathResult<DVector<f64>> {
    let n = a.nrows();
    if n != a.ncols() {
        return Err(MathError::invalid_input("Matrix must be square"));
    }
    if n == 0 {
        return Err(MathError::insufficient_data(1, 0));
    }
    if n != b.len() {
        return Err(MathError::DimensionMismatch {
            rows1: n,
            cols1: n,
            rows2: b.len(),
            cols2: 1,
        });
    }

    let lu = a.clone().lu();
    let det = lu.determinant();
    if !det.is_finite() || det.abs() < threshold {
        return Err(MathError::singular(det, threshold));
    }

    lu.solve(b).ok_or_else(|| MathError::singular(det, threshold))
}
