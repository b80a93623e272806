//! Vasicek short-rate model.
//!
//! ```text
//! dr = kappa (theta - r) dt + sigma dW
//! ```
//!
//! Zero-coupon bonds have the closed form `P(T) = exp(A(T) - B(T) r)` with
//!
//! ```text
//! B(T) = (1 - exp(-kappa T)) / kappa
//! A(T) = (theta - sigma^2 / (2 kappa^2)) (B(T) - T) - sigma^2 B(T)^2 / (4 kappa)
//! ```
//!
//! and continuously-compounded zero rate `z(T) = -ln P(T) / T`.

use ldi_curves::ZeroCurve;
use serde::{Deserialize, Serialize};

use crate::error::{ScenarioError, ScenarioResult};

/// Validated Vasicek parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VasicekModel {
    kappa: f64,
    theta: f64,
    sigma: f64,
}

impl VasicekModel {
    /// Creates a model.
    ///
    /// # Errors
    ///
    /// Returns [`ScenarioError::InvalidParameter`] unless `kappa > 0`,
    /// `sigma >= 0` and `theta` is finite.
    pub fn new(kappa: f64, theta: f64, sigma: f64) -> ScenarioResult<Self> {
        if !(kappa.is_finite() && kappa > 0.0) {
            return Err(ScenarioError::invalid_parameter("kappa", kappa, "must be positive"));
        }
        if !theta.is_finite() {
            return Err(ScenarioError::invalid_parameter("theta", theta, "must be finite"));
        }
        if !(sigma.is_finite() && sigma >= 0.0) {
            return Err(ScenarioError::invalid_parameter("sigma", sigma, "must be non-negative"));
        }
        Ok(Self { kappa, theta, sigma })
    }

    /// Mean-reversion speed.
    pub fn kappa(&self) -> f64 {
        self.kappa
    }

    /// Long-run mean.
    pub fn theta(&self) -> f64 {
        self.theta
    }

    /// Volatility.
    pub fn sigma(&self) -> f64 {
        self.sigma
    }

    /// One Euler step from `r` over `dt` with standard normal draw `z`.
    #[inline]
    pub fn euler_step(&self, r: f64, dt: f64, z: f64) -> f64 {
        r + self.kappa * (self.theta - r) * dt + self.sigma * dt.sqrt() * z
    }

    /// `(A(T), B(T))` of the bond-price formula.
    fn affine_coefficients(&self, t: f64) -> (f64, f64) {
        let (k, s2) = (self.kappa, self.sigma * self.sigma);
        let b = (1.0 - (-k * t).exp()) / k;
        let a = (self.theta - s2 / (2.0 * k * k)) * (b - t) - s2 * b * b / (4.0 * k);
        (a, b)
    }

    /// Zero-coupon bond price for maturity `t` given short rate `rt`.
    ///
    /// Returns 1.0 for `t <= 0`.
    pub fn bond_price(&self, rt: f64, t: f64) -> f64 {
        if t <= 0.0 {
            return 1.0;
        }
        let (a, b) = self.affine_coefficients(t);
        (a - b * rt).exp()
    }

    /// Continuously-compounded zero rate for maturity `t`.
    ///
    /// Returns 0.0 for `t <= 0`.
    pub fn zero_rate(&self, rt: f64, t: f64) -> f64 {
        if t <= 0.0 {
            return 0.0;
        }
        let (a, b) = self.affine_coefficients(t);
        -(a - b * rt) / t
    }

    /// Zero curve on `pillars` implied by short rate `rt`.
    ///
    /// # Errors
    ///
    /// Propagates curve construction errors (empty or unsorted pillars).
    pub fn zero_curve(&self, rt: f64, pillars: &[f64]) -> ScenarioResult<ZeroCurve> {
        let rates = pillars.iter().map(|&t| self.zero_rate(rt, t)).collect();
        Ok(ZeroCurve::new(pillars.to_vec(), rates)?)
    }
}

/// Zero curve on `pillars` from the closed-form Vasicek bond price.
///
/// # Errors
///
/// Returns [`ScenarioError::InvalidParameter`] for invalid model parameters
/// and [`ScenarioError::Curve`] for invalid pillars.
///
/// # Example
///
/// ```rust
/// use ldi_scenarios::vasicek_zero_curve;
///
/// // No volatility and r_t at the long-run mean: the curve is flat at theta.
/// let curve = vasicek_zero_curve(0.04, 0.3, 0.04, 0.0, &[1.0, 5.0, 30.0]).unwrap();
/// for z in curve.rates() {
///     assert!((z - 0.04).abs() < 1e-12);
/// }
/// ```
pub fn vasicek_zero_curve(
    rt: f64,
    kappa: f64,
    theta: f64,
    sigma: f64,
    pillars: &[f64],
) -> ScenarioResult<ZeroCurve> {
    VasicekModel::new(kappa, theta, sigma)?.zero_curve(rt, pillars)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    #[test]
    fn test_flat_at_theta_without_volatility() {
        let model = VasicekModel::new(0.5, 0.03, 0.0).unwrap();
        for t in [0.25, 1.0, 5.0, 10.0, 30.0] {
            assert_relative_eq!(model.zero_rate(0.03, t), 0.03, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_price_and_rate_agree() {
        let model = VasicekModel::new(0.5, 0.04, 0.01).unwrap();
        let t = 7.0;
        let p = model.bond_price(0.02, t);
        assert_relative_eq!(model.zero_rate(0.02, t), -p.ln() / t, epsilon = 1e-14);
    }

    #[test]
    fn test_non_positive_maturity() {
        let model = VasicekModel::new(0.5, 0.04, 0.01).unwrap();
        assert_eq!(model.zero_rate(0.02, 0.0), 0.0);
        assert_eq!(model.bond_price(0.02, -1.0), 1.0);
    }

    #[test]
    fn test_short_end_tends_to_short_rate() {
        let model = VasicekModel::new(0.5, 0.05, 0.01).unwrap();
        assert_relative_eq!(model.zero_rate(0.02, 1e-6), 0.02, epsilon = 1e-6);
    }

    #[test]
    fn test_long_end_below_theta_with_volatility() {
        // Convexity pulls long yields below the drift-only level.
        let model = VasicekModel::new(0.3, 0.04, 0.02).unwrap();
        assert!(model.zero_rate(0.04, 30.0) < 0.04);
    }

    #[test]
    fn test_invalid_parameters() {
        assert!(VasicekModel::new(0.0, 0.03, 0.01).is_err());
        assert!(VasicekModel::new(-0.5, 0.03, 0.01).is_err());
        assert!(VasicekModel::new(0.5, 0.03, -0.01).is_err());
        assert!(VasicekModel::new(0.5, f64::INFINITY, 0.01).is_err());
    }

    #[test]
    fn test_zero_curve_pillars() {
        let curve = vasicek_zero_curve(0.02, 0.5, 0.04, 0.01, &[1.0, 2.0, 10.0]).unwrap();
        assert_eq!(curve.pillars(), &[1.0, 2.0, 10.0]);
        assert!(vasicek_zero_curve(0.02, 0.5, 0.04, 0.01, &[]).is_err());
    }

    #[test]
    fn test_euler_step_deterministic() {
        let model = VasicekModel::new(1.0, 0.03, 0.01).unwrap();
        assert_relative_eq!(model.euler_step(0.05, 0.5, 0.0), 0.04, epsilon = 1e-15);
        assert_relative_eq!(
            model.euler_step(0.05, 0.25, 1.0),
            0.05 - 0.02 * 0.25 + 0.01 * 0.5,
            epsilon = 1e-15
        );
    }

    proptest! {
        #[test]
        fn prop_curve_rises_with_short_rate(r1 in -0.02f64..0.08, dr in 0.001f64..0.05, t in 0.5f64..40.0) {
            let model = VasicekModel::new(0.4, 0.03, 0.01).unwrap();
            prop_assert!(model.zero_rate(r1 + dr, t) > model.zero_rate(r1, t));
        }
    }
}
