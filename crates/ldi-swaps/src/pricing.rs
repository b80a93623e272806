//! Single-curve swap pricing.
//!
//! ```text
//! Annuity   A = sum_i accrual_i * DF(t_i)
//! Par rate  K = (1 - DF(T)) / A
//! Float leg   = N (1 - DF(T))
//! Fixed leg   = N K_fixed A
//! Payer PV    = float - fixed
//! ```
//!
//! The floating leg uses the spot-start single-curve identity with no
//! spread. All swap valuation, including [`SizedSwap`](crate::SizedSwap),
//! routes through [`payer_fixed_pv`].

use ldi_curves::ZeroCurve;
use tracing::trace;

use crate::error::SwapResult;
use crate::schedule::{build_schedule, Schedule};

/// Fixed-leg annuity factor: `sum accrual_i * DF(t_i)`.
pub fn annuity_factor(curve: &ZeroCurve, schedule: &Schedule) -> f64 {
    schedule
        .iter()
        .map(|(t, accrual)| accrual * curve.discount_factor(t))
        .sum()
}

/// Par swap rate for a spot-starting swap.
///
/// # Errors
///
/// Returns an error if the schedule cannot be built.
///
/// # Example
///
/// ```rust
/// use ldi_curves::ZeroCurve;
/// use ldi_swaps::{par_swap_rate, payer_fixed_pv};
///
/// let curve = ZeroCurve::new(vec![1.0, 10.0], vec![0.03, 0.04]).unwrap();
/// let par = par_swap_rate(&curve, 10, 1).unwrap();
/// let pv = payer_fixed_pv(&curve, 1_000_000.0, 10, 1, par).unwrap();
/// assert!(pv.abs() < 1e-8);
/// ```
pub fn par_swap_rate(curve: &ZeroCurve, maturity_years: u32, payments_per_year: u32) -> SwapResult<f64> {
    let schedule = build_schedule(maturity_years, payments_per_year)?;
    let rate = par_rate_on(curve, &schedule);
    trace!(maturity_years, payments_per_year, rate, "par swap rate");
    Ok(rate)
}

/// Present value of a payer-fixed swap (pay fixed, receive floating).
///
/// A receiver-fixed swap is worth the negation.
///
/// # Errors
///
/// Returns an error if the schedule cannot be built.
pub fn payer_fixed_pv(
    curve: &ZeroCurve,
    notional: f64,
    maturity_years: u32,
    payments_per_year: u32,
    fixed_rate: f64,
) -> SwapResult<f64> {
    let schedule = build_schedule(maturity_years, payments_per_year)?;
    Ok(payer_fixed_pv_on(curve, notional, &schedule, fixed_rate))
}

pub(crate) fn par_rate_on(curve: &ZeroCurve, schedule: &Schedule) -> f64 {
    let annuity = annuity_factor(curve, schedule);
    (1.0 - curve.discount_factor(schedule.final_time())) / annuity
}

pub(crate) fn payer_fixed_pv_on(
    curve: &ZeroCurve,
    notional: f64,
    schedule: &Schedule,
    fixed_rate: f64,
) -> f64 {
    let annuity = annuity_factor(curve, schedule);
    let pv_float = notional * (1.0 - curve.discount_factor(schedule.final_time()));
    let pv_fixed = notional * fixed_rate * annuity;
    pv_float - pv_fixed
}
