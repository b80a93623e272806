//! Pricing basis: a flat rate or a zero curve, never both.

use ldi_curves::{Compounding, ZeroCurve};

use crate::error::{LiabilityError, LiabilityResult};

/// How cash flows are discounted.
///
/// Exactly one basis is chosen per valuation, so the "both" and "neither"
/// states cannot be expressed. [`PricingBasis::from_parts`] bridges from
/// optional inputs (e.g. command-line flags) and rejects those states.
///
/// # Example
///
/// ```rust
/// use ldi_curves::{Compounding, ZeroCurve};
/// use ldi_liabilities::PricingBasis;
///
/// let flat = PricingBasis::flat(0.04, Compounding::Annual);
/// assert!((flat.discount_factor(2.0) - 1.04_f64.powi(-2)).abs() < 1e-12);
///
/// let curve = ZeroCurve::flat(vec![1.0, 30.0], 0.04).unwrap();
/// let on_curve = PricingBasis::Curve(&curve);
/// assert!((on_curve.discount_factor(2.0) - (-0.08_f64).exp()).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PricingBasis<'a> {
    /// Single flat rate with its compounding convention.
    FlatRate {
        /// Annualized rate.
        rate: f64,
        /// Compounding convention for `rate`.
        compounding: Compounding,
    },
    /// Discount off a zero curve.
    Curve(&'a ZeroCurve),
}

impl<'a> PricingBasis<'a> {
    /// Flat-rate basis.
    #[must_use]
    pub fn flat(rate: f64, compounding: Compounding) -> Self {
        Self::FlatRate { rate, compounding }
    }

    /// Builds a basis from an optional rate and an optional curve.
    ///
    /// `compounding` applies only to the flat-rate case.
    ///
    /// # Errors
    ///
    /// Returns [`LiabilityError::InvalidArgument`] unless exactly one of
    /// `rate` and `curve` is given.
    pub fn from_parts(
        rate: Option<f64>,
        curve: Option<&'a ZeroCurve>,
        compounding: Compounding,
    ) -> LiabilityResult<Self> {
        match (rate, curve) {
            (Some(rate), None) => Ok(Self::flat(rate, compounding)),
            (None, Some(curve)) => Ok(Self::Curve(curve)),
            (Some(_), Some(_)) => Err(LiabilityError::invalid_argument(
                "provide exactly one of rate or curve, not both",
            )),
            (None, None) => Err(LiabilityError::invalid_argument(
                "provide exactly one of rate or curve",
            )),
        }
    }

    /// Discount factor at `t` years; 1.0 for `t <= 0`.
    pub fn discount_factor(&self, t: f64) -> f64 {
        match self {
            Self::FlatRate { rate, compounding } => compounding.discount_factor(*rate, t),
            Self::Curve(curve) => curve.discount_factor(t),
        }
    }
}

impl<'a> From<&'a ZeroCurve> for PricingBasis<'a> {
    fn from(curve: &'a ZeroCurve) -> Self {
        Self::Curve(curve)
    }
}
