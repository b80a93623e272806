use ldi_curves::{Compounding, Priceable, ZeroCurve};
use serde::{Deserialize, Serialize};

use super::Liability;
use crate::basis::PricingBasis;
use crate::cashflow::{annual_schedule, CashFlow};

/// Level annual payments at the end of years `1..=n_payments`.
///
/// # Example
///
/// ```rust
/// use ldi_liabilities::{AnnuityCertain, Liability};
///
/// let annuity = AnnuityCertain::new(100.0, 3);
/// let pv = annuity.pv_at_rate(0.0);
/// assert!((pv - 300.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnnuityCertain {
    payment: f64,
    n_payments: u32,
    #[serde(default)]
    compounding: Compounding,
}

impl AnnuityCertain {
    /// Creates an annuity certain with continuous flat-rate compounding.
    #[must_use]
    pub fn new(payment: f64, n_payments: u32) -> Self {
        Self {
            payment,
            n_payments,
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
}

impl Liability for AnnuityCertain {
    fn cash_flows(&self) -> Vec<CashFlow> {
        annual_schedule(1, self.n_payments, self.payment)
    }

    fn compounding(&self) -> Compounding {
        self.compounding
    }
}

impl Priceable for AnnuityCertain {
    fn present_value(&self, curve: &ZeroCurve) -> f64 {
        self.pv(PricingBasis::Curve(curve))
    }
}
