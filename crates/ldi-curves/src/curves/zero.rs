//! Zero-coupon yield curve.

use serde::{Deserialize, Serialize};

use ldi_math::interpolation::LinearInterpolator;

use crate::error::{CurveError, CurveResult};

/// A zero-coupon yield curve.
///
/// Continuously-compounded zero rates at strictly increasing pillar
/// maturities (in years). Rates are interpolated linearly in maturity and
/// held flat outside the pillar range.
///
/// The curve is immutable: every bump returns a new curve and leaves the
/// original untouched.
///
/// # Example
///
/// ```rust
/// use ldi_curves::ZeroCurve;
///
/// let curve = ZeroCurve::new(vec![1.0, 5.0, 10.0], vec![0.03, 0.035, 0.04]).unwrap();
///
/// assert_eq!(curve.discount_factor(0.0), 1.0);
/// assert_eq!(curve.zero_rate_at(5.0), 0.035);
///
/// let up = curve.bumped_parallel(0.0001);
/// assert!(up.discount_factor(7.0) < curve.discount_factor(7.0));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ZeroCurveData", into = "ZeroCurveData")]
pub struct ZeroCurve {
    rates: LinearInterpolator,
}

/// Serialized form of a [`ZeroCurve`].
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ZeroCurveData {
    pillars: Vec<f64>,
    zero_rates: Vec<f64>,
}

impl TryFrom<ZeroCurveData> for ZeroCurve {
    type Error = CurveError;

    fn try_from(data: ZeroCurveData) -> CurveResult<Self> {
        Self::new(data.pillars, data.zero_rates)
    }
}

impl From<ZeroCurve> for ZeroCurveData {
    fn from(curve: ZeroCurve) -> Self {
        Self {
            pillars: curve.pillars().to_vec(),
            zero_rates: curve.rates().to_vec(),
        }
    }
}

impl ZeroCurve {
    /// Creates a new zero curve.
    ///
    /// # Arguments
    ///
    /// * `pillars` - Pillar maturities in years (strictly increasing)
    /// * `zero_rates` - Continuously-compounded zero rates, one per pillar
    ///
    /// # Errors
    ///
    /// - [`CurveError::LengthMismatch`] if the vectors differ in length
    /// - [`CurveError::InsufficientPoints`] if there are no pillars
    /// - [`CurveError::InvalidValue`] for NaN or infinite inputs
    /// - [`CurveError::NonMonotonicPillars`] if pillars are not strictly increasing
    pub fn new(pillars: Vec<f64>, zero_rates: Vec<f64>) -> CurveResult<Self> {
        if pillars.len() != zero_rates.len() {
            return Err(CurveError::LengthMismatch {
                pillars: pillars.len(),
                rates: zero_rates.len(),
            });
        }
        if pillars.is_empty() {
            return Err(CurveError::insufficient_points(1, 0));
        }
        if pillars.iter().chain(zero_rates.iter()).any(|v| !v.is_finite()) {
            return Err(CurveError::invalid_value("pillars and rates must be finite"));
        }
        if let Some(i) = pillars.windows(2).position(|w| w[1] <= w[0]) {
            return Err(CurveError::non_monotonic_pillars(
                i + 1,
                pillars[i],
                pillars[i + 1],
            ));
        }

        Ok(Self {
            rates: LinearInterpolator::new(pillars, zero_rates)?,
        })
    }

    /// Creates a curve with the same rate at every pillar.
    pub fn flat(pillars: Vec<f64>, rate: f64) -> CurveResult<Self> {
        let rates = vec![rate; pillars.len()];
        Self::new(pillars, rates)
    }

    /// Pillar maturities in years.
    pub fn pillars(&self) -> &[f64] {
        self.rates.xs()
    }

    /// Zero rates at the pillars.
    pub fn rates(&self) -> &[f64] {
        self.rates.ys()
    }

    /// Number of pillars.
    pub fn len(&self) -> usize {
        self.rates.len()
    }

    /// Always false: a curve has at least one pillar.
    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }

    /// Index of the pillar whose maturity equals `tenor`, if any.
    pub fn pillar_index(&self, tenor: f64) -> Option<usize> {
        self.pillars()
            .iter()
            .position(|&p| (p - tenor).abs() < 1e-12)
    }

    /// Continuously-compounded zero rate at maturity `t`.
    pub fn zero_rate_at(&self, t: f64) -> f64 {
        self.rates.interpolate(t)
    }

    /// Discount factor `exp(-z(t) t)`; 1.0 for `t <= 0`.
    pub fn discount_factor(&self, t: f64) -> f64 {
        if t <= 0.0 {
            return 1.0;
        }
        (-self.zero_rate_at(t) * t).exp()
    }

    /// Simply-compounded forward rate between `t1` and `t2`.
    ///
    /// Returns 0.0 when `t2 <= t1`.
    pub fn forward_rate(&self, t1: f64, t2: f64) -> f64 {
        if t2 <= t1 {
            return 0.0;
        }
        let df1 = self.discount_factor(t1);
        let df2 = self.discount_factor(t2);
        (df1 / df2 - 1.0) / (t2 - t1)
    }

    /// Returns a new curve with every zero rate shifted by `dr`.
    #[must_use]
    pub fn bumped_parallel(&self, dr: f64) -> Self {
        Self {
            rates: self.rates.map_ys(|_, z| z + dr),
        }
    }

    /// Returns a new curve with only the rate at pillar `idx` shifted by `dr`.
    ///
    /// # Panics
    ///
    /// Panics if `idx` is not a valid pillar index. Use
    /// [`try_bumped_at_index`](Self::try_bumped_at_index) for a checked version.
    #[must_use]
    pub fn bumped_at_index(&self, idx: usize, dr: f64) -> Self {
        assert!(
            idx < self.len(),
            "pillar index {idx} out of range for curve with {} pillars",
            self.len()
        );
        Self {
            rates: self.rates.map_ys(|i, z| if i == idx { z + dr } else { z }),
        }
    }

    /// Checked variant of [`bumped_at_index`](Self::bumped_at_index).
    ///
    /// # Errors
    ///
    /// Returns [`CurveError::PillarIndexOutOfRange`] for an invalid index.
    pub fn try_bumped_at_index(&self, idx: usize, dr: f64) -> CurveResult<Self> {
        if idx >= self.len() {
            return Err(CurveError::PillarIndexOutOfRange {
                index: idx,
                len: self.len(),
            });
        }
        Ok(self.bumped_at_index(idx, dr))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    fn sample_curve() -> ZeroCurve {
        ZeroCurve::new(
            vec![0.5, 1.0, 2.0, 5.0, 10.0, 20.0],
            vec![0.030, 0.031, 0.033, 0.036, 0.038, 0.039],
        )
        .unwrap()
    }

    #[test]
    fn test_discount_factor_at_and_before_zero() {
        let curve = sample_curve();
        assert_eq!(curve.discount_factor(0.0), 1.0);
        assert_eq!(curve.discount_factor(-1.0), 1.0);
    }

    #[test]
    fn test_discount_factor_interior() {
        let curve = sample_curve();
        // 3.5y sits halfway between 2y (3.3%) and 5y (3.6%)
        assert_relative_eq!(curve.zero_rate_at(3.5), 0.0345, epsilon = 1e-12);
        assert_relative_eq!(
            curve.discount_factor(3.5),
            (-0.0345_f64 * 3.5).exp(),
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_flat_extrapolation() {
        let curve = sample_curve();
        assert_eq!(curve.zero_rate_at(0.1), 0.030);
        assert_eq!(curve.zero_rate_at(20.0), 0.039);
        assert_eq!(curve.zero_rate_at(40.0), 0.039);
    }

    #[test]
    fn test_bumped_parallel() {
        let curve = sample_curve();
        let bumped = curve.bumped_parallel(0.0001);
        for (b, z) in bumped.rates().iter().zip(curve.rates()) {
            assert_relative_eq!(*b, z + 0.0001, epsilon = 1e-15);
        }
        assert_eq!(bumped.pillars(), curve.pillars());
        // original untouched
        assert_eq!(curve.rates()[0], 0.030);
    }

    #[test]
    fn test_bumped_at_index() {
        let curve = sample_curve();
        let bumped = curve.bumped_at_index(3, 0.001);
        assert_relative_eq!(bumped.rates()[3], 0.037, epsilon = 1e-15);
        for i in [0, 1, 2, 4, 5] {
            assert_eq!(bumped.rates()[i], curve.rates()[i]);
        }
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_bumped_at_index_out_of_range_panics() {
        let _ = sample_curve().bumped_at_index(6, 0.0001);
    }

    #[test]
    fn test_try_bumped_at_index() {
        let curve = sample_curve();
        assert!(curve.try_bumped_at_index(5, 0.0001).is_ok());
        assert_eq!(
            curve.try_bumped_at_index(6, 0.0001).unwrap_err(),
            CurveError::PillarIndexOutOfRange { index: 6, len: 6 }
        );
    }

    #[test]
    fn test_construction_errors() {
        assert!(matches!(
            ZeroCurve::new(vec![1.0, 2.0], vec![0.03]),
            Err(CurveError::LengthMismatch { pillars: 2, rates: 1 })
        ));
        assert!(matches!(
            ZeroCurve::new(vec![], vec![]),
            Err(CurveError::InsufficientPoints { .. })
        ));
        assert!(matches!(
            ZeroCurve::new(vec![1.0, 3.0, 2.0], vec![0.03, 0.03, 0.03]),
            Err(CurveError::NonMonotonicPillars { index: 2, .. })
        ));
        assert!(matches!(
            ZeroCurve::new(vec![1.0, f64::NAN], vec![0.03, 0.03]),
            Err(CurveError::InvalidValue { .. })
        ));
    }

    #[test]
    fn test_pillar_index() {
        let curve = sample_curve();
        assert_eq!(curve.pillar_index(10.0), Some(4));
        assert_eq!(curve.pillar_index(7.0), None);
    }

    #[test]
    fn test_forward_rate_flat_curve() {
        let curve = ZeroCurve::flat(vec![1.0, 10.0], 0.04).unwrap();
        let fwd = curve.forward_rate(2.0, 3.0);
        assert_relative_eq!(fwd, 0.04_f64.exp() - 1.0, epsilon = 1e-12);
        assert_eq!(curve.forward_rate(3.0, 3.0), 0.0);
    }

    #[test]
    fn test_serde_roundtrip() {
        let curve = sample_curve();
        let json = serde_json::to_string(&curve).unwrap();
        assert!(json.contains("\"pillars\""));
        assert!(json.contains("\"zero_rates\""));
        let parsed: ZeroCurve = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, curve);
    }

    #[test]
    fn test_deserialize_rejects_bad_data() {
        let json = r#"{"pillars":[2.0,1.0],"zero_rates":[0.03,0.03]}"#;
        assert!(serde_json::from_str::<ZeroCurve>(json).is_err());
    }

    proptest! {
        #[test]
        fn prop_df_one_at_non_positive_time(t in -50.0f64..=0.0, z in -0.02f64..0.10) {
            let curve = ZeroCurve::flat(vec![1.0, 5.0, 30.0], z).unwrap();
            prop_assert_eq!(curve.discount_factor(t), 1.0);
        }

        #[test]
        fn prop_exact_at_pillars(rates in proptest::collection::vec(-0.01f64..0.10, 6)) {
            let pillars = vec![0.5, 1.0, 2.0, 5.0, 10.0, 20.0];
            let curve = ZeroCurve::new(pillars.clone(), rates.clone()).unwrap();
            for (p, z) in pillars.iter().zip(rates.iter()) {
                prop_assert_eq!(curve.zero_rate_at(*p), *z);
            }
        }
    }
}
