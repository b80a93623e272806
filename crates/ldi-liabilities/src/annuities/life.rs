use ldi_curves::{Compounding, Priceable, ZeroCurve};
use serde::{Deserialize, Serialize};

use super::Liability;
use crate::basis::PricingBasis;
use crate::cashflow::{annual_schedule, CashFlow};
use crate::mortality::GompertzMakeham;

/// Annual payments at `1..=n_payments`, each contingent on survival from
/// `issue_age`.
///
/// [`cash_flows`](Liability::cash_flows) returns the scheduled, unweighted
/// payments; survival is applied at valuation. See
/// [`expected_cash_flows`](Self::expected_cash_flows) for the weighted view.
///
/// # Example
///
/// ```rust
/// use ldi_liabilities::{AnnuityCertain, GompertzMakeham, LifeAnnuityImmediate, Liability};
///
/// let life = LifeAnnuityImmediate::new(100.0, 20, 65.0, GompertzMakeham::default());
/// let certain = AnnuityCertain::new(100.0, 20);
/// assert!(life.pv_at_rate(0.03) < certain.pv_at_rate(0.03));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LifeAnnuityImmediate {
    payment: f64,
    n_payments: u32,
    issue_age: f64,
    #[serde(default)]
    mortality: GompertzMakeham,
    #[serde(default)]
    compounding: Compounding,
}

impl LifeAnnuityImmediate {
    /// Creates a life annuity with continuous flat-rate compounding.
    #[must_use]
    pub fn new(payment: f64, n_payments: u32, issue_age: f64, mortality: GompertzMakeham) -> Self {
        Self {
            payment,
            n_payments,
            issue_age,
            mortality,
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

    /// Number of scheduled payments.
    pub fn n_payments(&self) -> u32 {
        self.n_payments
    }

    /// Age of the annuitant at valuation.
    pub fn issue_age(&self) -> f64 {
        self.issue_age
    }

    /// Mortality law.
    pub fn mortality(&self) -> &GompertzMakeham {
        &self.mortality
    }

    /// Scheduled payments multiplied by their survival probabilities.
    pub fn expected_cash_flows(&self) -> Vec<CashFlow> {
        self.cash_flows()
            .into_iter()
            .map(|cf| CashFlow::new(cf.time, cf.amount * self.survival_weight(cf.time)))
            .collect()
    }
}

impl Liability for LifeAnnuityImmediate {
    fn cash_flows(&self) -> Vec<CashFlow> {
        annual_schedule(1, self.n_payments, self.payment)
    }

    fn compounding(&self) -> Compounding {
        self.compounding
    }

    fn survival_weight(&self, t: f64) -> f64 {
        self.mortality.survival(self.issue_age, t)
    }
}

impl Priceable for LifeAnnuityImmediate {
    fn present_value(&self, curve: &ZeroCurve) -> f64 {
        self.pv(PricingBasis::Curve(curve))
    }
}
