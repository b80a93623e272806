//! Sized hedge swaps.

use std::fmt;

use ldi_curves::{Priceable, ZeroCurve};
use serde::{Deserialize, Serialize};

use crate::error::{SwapError, SwapResult};
use crate::pricing::{annuity_factor, par_rate_on, payer_fixed_pv_on};
use crate::schedule::{build_schedule, Schedule};

/// Which fixed leg the holder pays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SwapDirection {
    /// Pay fixed, receive floating. Gains when rates rise.
    #[default]
    PayerFixed,
    /// Receive fixed, pay floating. Gains when rates fall.
    ReceiverFixed,
}

impl SwapDirection {
    /// `+1` for payer-fixed, `-1` for receiver-fixed.
    pub fn sign(self) -> f64 {
        match self {
            SwapDirection::PayerFixed => 1.0,
            SwapDirection::ReceiverFixed => -1.0,
        }
    }
}

impl fmt::Display for SwapDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SwapDirection::PayerFixed => write!(f, "Payer"),
            SwapDirection::ReceiverFixed => write!(f, "Receiver"),
        }
    }
}

/// A spot-starting swap with a locked fixed rate.
///
/// The fixed rate is captured when the swap is created and never
/// re-solved. Rescaling goes through [`with_notional`](Self::with_notional),
/// which returns a new value and leaves `self` untouched.
///
/// # Example
///
/// ```rust
/// use ldi_curves::{Priceable, ZeroCurve};
/// use ldi_swaps::{SizedSwap, SwapDirection};
///
/// let curve = ZeroCurve::new(vec![1.0, 10.0], vec![0.03, 0.04]).unwrap();
/// let swap = SizedSwap::at_par(&curve, 10, 1, SwapDirection::PayerFixed, 1_000_000.0).unwrap();
/// assert!(swap.present_value(&curve).abs() < 1e-8);
///
/// let doubled = swap.with_notional(2_000_000.0);
/// assert_eq!(doubled.fixed_rate(), swap.fixed_rate());
/// assert_eq!(swap.notional(), 1_000_000.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SizedSwap {
    maturity_years: u32,
    payments_per_year: u32,
    direction: SwapDirection,
    notional: f64,
    fixed_rate: f64,
    #[serde(skip)]
    schedule: Schedule,
}

impl SizedSwap {
    /// Creates a swap with an explicit fixed rate.
    ///
    /// # Errors
    ///
    /// Returns [`SwapError::InvalidSchedule`] for a zero maturity or frequency
    /// and [`SwapError::InvalidTerm`] for a non-finite notional or rate.
    pub fn new(
        maturity_years: u32,
        payments_per_year: u32,
        direction: SwapDirection,
        notional: f64,
        fixed_rate: f64,
    ) -> SwapResult<Self> {
        if !notional.is_finite() {
            return Err(SwapError::InvalidTerm {
                field: "notional",
                value: notional,
            });
        }
        if !fixed_rate.is_finite() {
            return Err(SwapError::InvalidTerm {
                field: "fixed rate",
                value: fixed_rate,
            });
        }
        let schedule = build_schedule(maturity_years, payments_per_year)?;
        Ok(Self {
            maturity_years,
            payments_per_year,
            direction,
            notional,
            fixed_rate,
            schedule,
        })
    }

    /// Creates a swap struck at the par rate of `curve`.
    pub fn at_par(
        curve: &ZeroCurve,
        maturity_years: u32,
        payments_per_year: u32,
        direction: SwapDirection,
        notional: f64,
    ) -> SwapResult<Self> {
        let schedule = build_schedule(maturity_years, payments_per_year)?;
        let par = par_rate_on(curve, &schedule);
        Self::new(maturity_years, payments_per_year, direction, notional, par)
    }

    /// Returns a copy with a different notional; every other term is kept.
    #[must_use]
    pub fn with_notional(&self, notional: f64) -> Self {
        Self {
            notional,
            ..self.clone()
        }
    }

    /// Maturity in years.
    pub fn maturity_years(&self) -> u32 {
        self.maturity_years
    }

    /// Fixed-leg payments per year.
    pub fn payments_per_year(&self) -> u32 {
        self.payments_per_year
    }

    /// Pay or receive fixed.
    pub fn direction(&self) -> SwapDirection {
        self.direction
    }

    /// Notional.
    pub fn notional(&self) -> f64 {
        self.notional
    }

    /// Locked fixed rate.
    pub fn fixed_rate(&self) -> f64 {
        self.fixed_rate
    }

    /// Fixed-leg payment schedule.
    pub fn schedule(&self) -> &Schedule {
        &self.schedule
    }

    /// Fixed-leg annuity factor under `curve`.
    pub fn annuity(&self, curve: &ZeroCurve) -> f64 {
        annuity_factor(curve, &self.schedule)
    }

    /// Signed present value under `curve`.
    pub fn pv(&self, curve: &ZeroCurve) -> f64 {
        self.direction.sign() * payer_fixed_pv_on(curve, self.notional, &self.schedule, self.fixed_rate)
    }
}

impl Priceable for SizedSwap {
    fn present_value(&self, curve: &ZeroCurve) -> f64 {
        self.pv(curve)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pricing::payer_fixed_pv;
    use approx::assert_relative_eq;

    fn curve() -> ZeroCurve {
        ZeroCurve::new(
            vec![0.5, 1.0, 2.0, 5.0, 10.0, 30.0],
            vec![0.030, 0.031, 0.033, 0.036, 0.038, 0.039],
        )
        .unwrap()
    }

    #[test]
    fn test_receiver_is_negated_payer() {
        let curve = curve();
        let shocked = curve.bumped_parallel(0.005);
        let payer = SizedSwap::at_par(&curve, 10, 1, SwapDirection::PayerFixed, 1e6).unwrap();
        let receiver = SizedSwap::new(10, 1, SwapDirection::ReceiverFixed, 1e6, payer.fixed_rate()).unwrap();

        assert!(payer.pv(&shocked) > 0.0);
        assert_eq!(receiver.pv(&shocked), -payer.pv(&shocked));
    }

    #[test]
    fn test_pv_routes_through_payer_formula() {
        let curve = curve();
        let swap = SizedSwap::new(20, 2, SwapDirection::PayerFixed, 5e5, 0.041).unwrap();
        let expected = payer_fixed_pv(&curve, 5e5, 20, 2, 0.041).unwrap();
        assert_relative_eq!(swap.present_value(&curve), expected, epsilon = 1e-9);
    }

    #[test]
    fn test_fixed_rate_locked_after_curve_moves() {
        let curve = curve();
        let swap = SizedSwap::at_par(&curve, 10, 1, SwapDirection::PayerFixed, 1e6).unwrap();
        let moved = curve.bumped_parallel(0.01);
        let rescaled = swap.with_notional(3e6);
        assert_eq!(rescaled.fixed_rate(), swap.fixed_rate());
        assert_relative_eq!(rescaled.pv(&moved), 3.0 * swap.pv(&moved), max_relative = 1e-12);
    }

    #[test]
    fn test_invalid_terms() {
        assert!(matches!(
            SizedSwap::new(10, 1, SwapDirection::PayerFixed, f64::NAN, 0.03),
            Err(SwapError::InvalidTerm { field: "notional", .. })
        ));
        assert!(matches!(
            SizedSwap::new(0, 1, SwapDirection::PayerFixed, 1e6, 0.03),
            Err(SwapError::InvalidSchedule { .. })
        ));
    }

    #[test]
    fn test_serializes_terms() {
        let swap = SizedSwap::new(10, 1, SwapDirection::ReceiverFixed, 1e6, 0.035).unwrap();
        let json = serde_json::to_value(&swap).unwrap();
        assert_eq!(json["direction"], "receiver_fixed");
        assert_eq!(json["maturity_years"], 10);
        assert!(json.get("schedule").is_none());
    }
}
