//! Parametric curve shapes.
//!
//! `z(t) = base + slope * t / max(pillar)`: a straight line in maturity,
//! anchored at `base` for `t = 0`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::curves::ZeroCurve;
use crate::error::{CurveError, CurveResult};

/// Shape of a parametric curve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CurveShape {
    /// Slope forced to zero.
    #[default]
    Flat,
    /// Rates rise with maturity.
    Upward,
    /// Rates fall with maturity.
    Inverted,
}

impl CurveShape {
    /// Applies the shape's sign to a slope magnitude.
    #[must_use]
    pub fn signed_slope(self, slope: f64) -> f64 {
        match self {
            CurveShape::Flat => 0.0,
            CurveShape::Upward => slope.abs(),
            CurveShape::Inverted => -slope.abs(),
        }
    }
}

impl fmt::Display for CurveShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CurveShape::Flat => "flat",
            CurveShape::Upward => "upward",
            CurveShape::Inverted => "inverted",
        };
        write!(f, "{name}")
    }
}

impl FromStr for CurveShape {
    type Err = CurveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "flat" => Ok(CurveShape::Flat),
            "upward" => Ok(CurveShape::Upward),
            "inverted" => Ok(CurveShape::Inverted),
            other => Err(CurveError::invalid_value(format!(
                "unknown curve shape '{other}' (expected flat, upward or inverted)"
            ))),
        }
    }
}

/// Builds `z(t) = base + slope * t / max(pillar)` at each pillar.
///
/// # Errors
///
/// Returns [`CurveError::InsufficientPoints`] for an empty pillar list and
/// any error from [`ZeroCurve::new`].
pub fn parametric_curve(pillars: Vec<f64>, base: f64, slope: f64) -> CurveResult<ZeroCurve> {
    let max_t = pillars
        .iter()
        .copied()
        .reduce(f64::max)
        .ok_or_else(|| CurveError::insufficient_points(1, 0))?;
    if max_t <= 0.0 {
        return Err(CurveError::invalid_value("longest pillar must be positive"));
    }
    let zeros = pillars.iter().map(|&t| base + slope * t / max_t).collect();
    ZeroCurve::new(pillars, zeros)
}

/// Builds a flat, upward or inverted parametric curve.
///
/// `slope` is a magnitude; its sign comes from `shape`.
///
/// # Example
///
/// ```rust
/// use ldi_curves::{make_curve, CurveShape};
///
/// let up = make_curve(CurveShape::Upward, vec![1.0, 10.0, 30.0], 0.03, 0.01).unwrap();
/// assert!((up.zero_rate_at(30.0) - 0.04).abs() < 1e-12);
/// ```
pub fn make_curve(
    shape: CurveShape,
    pillars: Vec<f64>,
    base: f64,
    slope: f64,
) -> CurveResult<ZeroCurve> {
    parametric_curve(pillars, base, shape.signed_slope(slope))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const PILLARS: [f64; 6] = [0.5, 1.0, 2.0, 5.0, 10.0, 30.0];

    #[test]
    fn test_flat_ignores_slope() {
        let curve = make_curve(CurveShape::Flat, PILLARS.to_vec(), 0.035, 0.02).unwrap();
        assert!(curve.rates().iter().all(|&z| z == 0.035));
    }

    #[test]
    fn test_upward_and_inverted() {
        let up = make_curve(CurveShape::Upward, PILLARS.to_vec(), 0.03, -0.01).unwrap();
        let inv = make_curve(CurveShape::Inverted, PILLARS.to_vec(), 0.03, 0.01).unwrap();

        assert_relative_eq!(up.zero_rate_at(30.0), 0.04, epsilon = 1e-12);
        assert_relative_eq!(inv.zero_rate_at(30.0), 0.02, epsilon = 1e-12);
        assert_relative_eq!(up.zero_rate_at(10.0), 0.03 + 0.01 / 3.0, epsilon = 1e-12);
        assert!(up.rates().windows(2).all(|w| w[1] > w[0]));
        assert!(inv.rates().windows(2).all(|w| w[1] < w[0]));
    }

    #[test]
    fn test_empty_pillars_rejected() {
        assert!(matches!(
            parametric_curve(vec![], 0.03, 0.0),
            Err(CurveError::InsufficientPoints { .. })
        ));
    }

    #[test]
    fn test_shape_parsing() {
        assert_eq!("Upward".parse::<CurveShape>().unwrap(), CurveShape::Upward);
        assert_eq!("inverted".parse::<CurveShape>().unwrap(), CurveShape::Inverted);
        assert!("humped".parse::<CurveShape>().is_err());
        assert_eq!(CurveShape::Flat.to_string(), "flat");
    }
}
