//! Annuity liability models.
//!
//! Every model produces a deterministic schedule of annual cash flows and
//! values it under a [`PricingBasis`]. The shared valuation rule is
//!
//! ```text
//! PV = sum over cash flows of amount * survival(t) * DF(t)
//! ```
//!
//! where `survival(t)` is 1 for the certain annuities.

mod certain;
mod deferred;
mod life;

pub use certain::AnnuityCertain;
pub use deferred::DeferredAnnuityCertain;
pub use life::LifeAnnuityImmediate;

use ldi_curves::{Compounding, Priceable, ZeroCurve};
use serde::{Deserialize, Serialize};

use crate::basis::PricingBasis;
use crate::cashflow::CashFlow;
use crate::error::LiabilityResult;

/// A liability valued as a stream of (possibly survival-weighted) cash flows.
pub trait Liability {
    /// Scheduled cash flows, unweighted by survival.
    fn cash_flows(&self) -> Vec<CashFlow>;

    /// Compounding convention used for flat-rate valuation.
    fn compounding(&self) -> Compounding;

    /// Probability that the payment due at `t` is made.
    fn survival_weight(&self, _t: f64) -> f64 {
        1.0
    }

    /// Present value under `basis`.
    fn pv(&self, basis: PricingBasis<'_>) -> f64 {
        self.cash_flows()
            .iter()
            .map(|cf| cf.amount * self.survival_weight(cf.time) * basis.discount_factor(cf.time))
            .sum()
    }

    /// Present value at a flat rate in the instrument's own compounding.
    fn pv_at_rate(&self, rate: f64) -> f64 {
        self.pv(PricingBasis::flat(rate, self.compounding()))
    }

    /// Present value from an optional rate and an optional curve.
    ///
    /// # Errors
    ///
    /// Returns [`LiabilityError::InvalidArgument`](crate::LiabilityError::InvalidArgument)
    /// unless exactly one of `rate` and `curve` is given.
    fn try_pv(&self, rate: Option<f64>, curve: Option<&ZeroCurve>) -> LiabilityResult<f64> {
        let basis = PricingBasis::from_parts(rate, curve, self.compounding())?;
        Ok(self.pv(basis))
    }
}

/// Any of the supported liability models.
///
/// Lets drivers and configuration files choose the model at run time.
///
/// ```rust
/// use ldi_liabilities::{AnnuityCertain, Liability, LiabilityInstrument};
///
/// let liability: LiabilityInstrument = AnnuityCertain::new(100.0, 20).into();
/// assert_eq!(liability.cash_flows().len(), 20);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum LiabilityInstrument {
    /// Level annuity certain.
    AnnuityCertain(AnnuityCertain),
    /// Annuity certain starting after a deferral period.
    DeferredAnnuityCertain(DeferredAnnuityCertain),
    /// Survival-contingent immediate annuity.
    LifeAnnuityImmediate(LifeAnnuityImmediate),
}

impl LiabilityInstrument {
    fn as_liability(&self) -> &dyn Liability {
        match self {
            Self::AnnuityCertain(inner) => inner,
            Self::DeferredAnnuityCertain(inner) => inner,
            Self::LifeAnnuityImmediate(inner) => inner,
        }
    }

    /// Short human-readable description.
    pub fn describe(&self) -> String {
        match self {
            Self::AnnuityCertain(a) => {
                format!("Annuity certain: {} x {}", a.payment(), a.n_payments())
            }
            Self::DeferredAnnuityCertain(a) => format!(
                "Deferred annuity: {} x {} after {}y",
                a.payment(),
                a.n_payments(),
                a.defer_years()
            ),
            Self::LifeAnnuityImmediate(a) => format!(
                "Life annuity: {} x {} from age {}",
                a.payment(),
                a.n_payments(),
                a.issue_age()
            ),
        }
    }
}

impl Liability for LiabilityInstrument {
    fn cash_flows(&self) -> Vec<CashFlow> {
        self.as_liability().cash_flows()
    }

    fn compounding(&self) -> Compounding {
        self.as_liability().compounding()
    }

    fn survival_weight(&self, t: f64) -> f64 {
        self.as_liability().survival_weight(t)
    }
}

impl Priceable for LiabilityInstrument {
    fn present_value(&self, curve: &ZeroCurve) -> f64 {
        self.pv(PricingBasis::Curve(curve))
    }
}

impl From<AnnuityCertain> for LiabilityInstrument {
    fn from(a: AnnuityCertain) -> Self {
        Self::AnnuityCertain(a)
    }
}

impl From<DeferredAnnuityCertain> for LiabilityInstrument {
    fn from(a: DeferredAnnuityCertain) -> Self {
        Self::DeferredAnnuityCertain(a)
    }
}

impl From<LifeAnnuityImmediate> for LiabilityInstrument {
    fn from(a: LifeAnnuityImmediate) -> Self {
        Self::LifeAnnuityImmediate(a)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mortality::GompertzMakeham;
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    fn curve() -> ZeroCurve {
        ZeroCurve::new(
            vec![0.5, 1.0, 2.0, 5.0, 10.0, 20.0],
            vec![0.030, 0.031, 0.033, 0.036, 0.038, 0.039],
        )
        .unwrap()
    }

    #[test]
    fn test_instrument_delegates() {
        let curve = curve();
        let life = LifeAnnuityImmediate::new(100.0, 20, 65.0, GompertzMakeham::default());
        let wrapped = LiabilityInstrument::from(life.clone());

        assert_eq!(wrapped.present_value(&curve), life.present_value(&curve));
        assert_eq!(wrapped.pv_at_rate(0.04), life.pv_at_rate(0.04));
        assert!(wrapped.describe().starts_with("Life annuity"));
    }

    #[test]
    fn test_try_pv_requires_exactly_one_basis() {
        let curve = curve();
        let annuity = AnnuityCertain::new(100.0, 20);

        assert!(annuity.try_pv(Some(0.03), Some(&curve)).is_err());
        assert!(annuity.try_pv(None, None).is_err());
        assert_relative_eq!(
            annuity.try_pv(Some(0.03), None).unwrap(),
            annuity.pv_at_rate(0.03),
            epsilon = 1e-12
        );
        assert_relative_eq!(
            annuity.try_pv(None, Some(&curve)).unwrap(),
            annuity.present_value(&curve),
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_tagged_serde() {
        let json = r#"{"type":"deferred_annuity_certain","payment":50.0,"n_payments":10,"defer_years":5}"#;
        let parsed: LiabilityInstrument = serde_json::from_str(json).unwrap();
        assert_eq!(
            parsed,
            LiabilityInstrument::DeferredAnnuityCertain(DeferredAnnuityCertain::new(50.0, 10, 5))
        );
    }

    #[test]
    fn test_flat_curve_reproduces_flat_rate_pv() {
        let flat = ZeroCurve::flat(vec![1.0, 5.0, 30.0], 0.035).unwrap();
        let instruments: Vec<LiabilityInstrument> = vec![
            AnnuityCertain::new(100.0, 20).into(),
            DeferredAnnuityCertain::new(100.0, 20, 5).into(),
            LifeAnnuityImmediate::new(100.0, 20, 65.0, GompertzMakeham::default()).into(),
        ];
        for liability in &instruments {
            assert_relative_eq!(
                liability.present_value(&flat),
                liability.pv_at_rate(0.035),
                max_relative = 1e-6
            );
        }
    }

    proptest! {
        #[test]
        fn prop_pv_strictly_decreasing_in_rate(
            r in -0.01f64..0.10,
            dr in 0.0005f64..0.02,
            n in 1u32..40,
        ) {
            let annuity = AnnuityCertain::new(100.0, n);
            let life = LifeAnnuityImmediate::new(100.0, n, 60.0, GompertzMakeham::default());
            prop_assert!(annuity.pv_at_rate(r + dr) < annuity.pv_at_rate(r));
            prop_assert!(life.pv_at_rate(r + dr) < life.pv_at_rate(r));
        }

        #[test]
        fn prop_deferred_below_certain(r in 0.001f64..0.10, defer in 1u32..20, n in 1u32..30) {
            let certain = AnnuityCertain::new(100.0, n);
            let deferred = DeferredAnnuityCertain::new(100.0, n, defer);
            prop_assert!(deferred.pv_at_rate(r) < certain.pv_at_rate(r));
        }

        #[test]
        fn prop_life_below_certain(r in -0.01f64..0.10, age in 20.0f64..90.0, n in 1u32..40) {
            let certain = AnnuityCertain::new(100.0, n);
            let life = LifeAnnuityImmediate::new(100.0, n, age, GompertzMakeham::default());
            prop_assert!(life.pv_at_rate(r) < certain.pv_at_rate(r));
        }
    }
}
