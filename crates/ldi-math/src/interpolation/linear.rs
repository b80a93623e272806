//! Linear interpolation with flat extrapolation.

use crate::error::{MathError, MathResult};

/// Linear interpolation between data points, flat outside the data range.
///
/// Below the first abscissa the first ordinate is returned; at or above the
/// last abscissa the last ordinate is returned. There is no extrapolation
/// slope.
///
/// # Example
///
/// ```rust
/// use ldi_math::interpolation::LinearInterpolator;
///
/// let interp = LinearInterpolator::new(vec![1.0, 2.0], vec![0.03, 0.04]).unwrap();
/// assert!((interp.interpolate(1.5) - 0.035).abs() < 1e-12);
/// assert_eq!(interp.interpolate(0.5), 0.03);
/// assert_eq!(interp.interpolate(9.0), 0.04);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct LinearInterpolator {
    xs: Vec<f64>,
    ys: Vec<f64>,
}

impl LinearInterpolator {
    /// Creates a new linear interpolator.
    ///
    /// # Arguments
    ///
    /// * `xs` - X coordinates (strictly increasing)
    /// * `ys` - Y coordinates (same length as `xs`)
    ///
    /// # Errors
    ///
    /// Returns an error if there are no points, if lengths differ, or if the
    /// abscissae are not strictly increasing (or not finite).
    pub fn new(xs: Vec<f64>, ys: Vec<f64>) -> MathResult<Self> {
        if xs.is_empty() {
            return Err(MathError::insufficient_data(1, 0));
        }
        if xs.len() != ys.len() {
            return Err(MathError::invalid_input(format!(
                "xs and ys must have same length: {} vs {}",
                xs.len(),
                ys.len()
            )));
        }
        if xs.iter().chain(ys.iter()).any(|v| !v.is_finite()) {
            return Err(MathError::invalid_input("values must be finite"));
        }
        if xs.windows(2).any(|w| w[1] <= w[0]) {
            return Err(MathError::invalid_input(
                "x values must be strictly increasing",
            ));
        }

        Ok(Self { xs, ys })
    }

    /// Returns the abscissae.
    pub fn xs(&self) -> &[f64] {
        &self.xs
    }

    /// Returns the ordinates.
    pub fn ys(&self) -> &[f64] {
        &self.ys
    }

    /// Number of data points.
    pub fn len(&self) -> usize {
        self.xs.len()
    }

    /// Always false: construction rejects empty data.
    pub fn is_empty(&self) -> bool {
        self.xs.is_empty()
    }

    /// Returns the interpolated value at `x`.
    ///
    /// The bracketing pair is located by binary search; with
    /// `w = (x - x0) / (x1 - x0)` the result is `y0 * (1 - w) + y1 * w`,
    /// which reproduces the stored ordinate exactly at every abscissa.
    pub fn interpolate(&self, x: f64) -> f64 {
        // first index with xs[i] >= x
        let i = self.xs.partition_point(|&probe| probe < x);
        if i == 0 {
            return self.ys[0];
        }
        if i >= self.xs.len() {
            return self.ys[self.ys.len() - 1];
        }

        let (x0, x1) = (self.xs[i - 1], self.xs[i]);
        let (y0, y1) = (self.ys[i - 1], self.ys[i]);
        let w = (x - x0) / (x1 - x0);
        y0 * (1.0 - w) + y1 * w
    }

    /// Returns a copy whose ordinates are `f(index, y)`.
    ///
    /// The abscissae are reused unchanged, so no re-validation is needed.
    #[must_use]
    pub fn map_ys(&self, mut f: impl FnMut(usize, f64) -> f64) -> Self {
        Self {
            xs: self.xs.clone(),
            ys: self.ys.iter().enumerate().map(|(i, &y)| f(i, y)).collect(),
        }
    }
}
