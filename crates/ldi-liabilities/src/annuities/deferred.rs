use ldi_curves::{Compounding, Priceable, ZeroCurve};
use serde::{Deserialize, Serialize};

use super::Liability;
use crate::basis::PricingBasis;
use crate::cashflow::{annual_schedule, CashFlow};

/// Level annual payments at `defer_years + 1 ..= defer_years + n_payments`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeferredAnnuityCertain {
    payment: f64,
    n_payments: u32,
    defer_years: u32,
    #[serde(default)]
    compounding: Compounding,
}

impl DeferredAnnuityCertain {
    /// Creates a deferred annuity with continuous flat-rate compounding.
    #[must_use]
    pub fn new(payment: f64, n_payments: u32, defer_years: u32) -> Self {
        Self {
            payment,
            n_payments,
            defer_years,
            compounding: Compounding::Continuous,
        }
    }

    /// Sets the flat-rate compounding convention.
    #[must_use]
    pub fn with_compounding(mut self, compounding: Compounding) -> Self {
        self.compounding = compounding;
        self
    }

    /// Payment per period.
    pub fn payment(&self) -> f64 {
        self.payment
    }

    /// Number of payments.
    pub fn n_payments(&self) -> u32 {
        self.n_payments
    }

    /// Years before the first payment period starts.
    pub fn defer_years(&self) -> u32 {
        self.defer_years
    }
}

impl Liability for DeferredAnnuityCertain {
    fn cash_flows(&self) -> Vec<CashFlow> {
        annual_schedule(u64::from(self.defer_years) + 1, self.n_payments, self.payment)
    }

    fn compounding(&self) -> Compounding {
        self.compounding
    }
}

impl Priceable for DeferredAnnuityCertain {
    fn present_value(&self, curve: &ZeroCurve) -> f64 {
        self.pv(PricingBasis::Curve(curve))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::annuities::AnnuityCertain;
    use approx::assert_relative_eq;

    #[test]
    fn test_cash_flow_timing() {
        let flows = DeferredAnnuityCertain::new(100.0, 20, 5).cash_flows();
        assert_eq!(flows.len(), 20);
        assert_eq!(flows[0].time, 6.0);
        assert_eq!(flows[19].time, 25.0);
    }

    #[test]
    fn test_deferral_discounts_certain_pv() {
        // Under a flat continuous rate, deferring by d years scales PV by exp(-r d).
        let r = 0.035;
        let certain = AnnuityCertain::new(100.0, 20);
        let deferred = DeferredAnnuityCertain::new(100.0, 20, 5);
        assert_relative_eq!(
            deferred.pv_at_rate(r),
            certain.pv_at_rate(r) * (-r * 5.0_f64).exp(),
            max_relative = 1e-12
        );
    }

    #[test]
    fn test_maximum_deferral_does_not_wrap() {
        let annuity = DeferredAnnuityCertain::new(100.0, 2, u32::MAX);
        let flows = annuity.cash_flows();
        assert_eq!(flows.len(), 2);
        assert_eq!(flows[0].time, 4_294_967_296.0);
        assert_eq!(flows[1].time, 4_294_967_297.0);
        // Discounted far beyond any curve horizon, but never negative or NaN.
        assert_eq!(annuity.pv_at_rate(0.03), 0.0);

        let parsed: DeferredAnnuityCertain =
            serde_json::from_str(r#"{"payment":100.0,"n_payments":2,"defer_years":4294967295}"#).unwrap();
        assert_eq!(parsed.cash_flows(), flows);
    }

    #[test]
    fn test_zero_deferral_matches_certain() {
        let curve = ZeroCurve::new(vec![1.0, 10.0], vec![0.03, 0.04]).unwrap();
        let certain = AnnuityCertain::new(100.0, 10);
        let deferred = DeferredAnnuityCertain::new(100.0, 10, 0);
        assert_eq!(deferred.present_value(&curve), certain.present_value(&curve));
    }
}
