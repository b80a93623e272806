//! Single-swap DV01 hedge.

use ldi_curves::{Priceable, ZeroCurve};
use ldi_swaps::{annuity_factor, build_schedule, SizedSwap, SwapDirection};
use serde::Serialize;
use tracing::debug;

use crate::dv01::parallel_dv01;
use crate::error::{RiskError, RiskResult};

/// Sizes a payer-fixed swap whose DV01 offsets `target_dv01`.
///
/// Sensitivity per unit notional is taken as `annuity / 10_000`, the
/// fixed-leg PV01 of a par swap. The fixed rate is locked at the curve's
/// current par rate. A positive target (asset-like exposure) gives a
/// positive notional; a negative target gives a negative notional, i.e. an
/// economically receiver-fixed position.
///
/// # Errors
///
/// - [`RiskError::Swap`] for an invalid maturity or frequency
/// - [`RiskError::UndefinedRatio`] if the annuity factor is not positive
///
/// # Example
///
/// ```rust
/// use ldi_curves::ZeroCurve;
/// use ldi_risk::{parallel_dv01, size_swap_for_target_dv01};
///
/// let curve = ZeroCurve::flat(vec![1.0, 30.0], 0.03).unwrap();
/// let swap = size_swap_for_target_dv01(1_000.0, &curve, 10, 1).unwrap();
/// let dv01 = parallel_dv01(&swap, &curve, 1.0);
/// // annuity/10_000 is a first-order PV01, so the match is close but not exact
/// assert!(dv01 < 0.0 && (dv01 + 1_000.0).abs() < 50.0);
/// ```
pub fn size_swap_for_target_dv01(
    target_dv01: f64,
    curve: &ZeroCurve,
    maturity_years: u32,
    payments_per_year: u32,
) -> RiskResult<SizedSwap> {
    let schedule = build_schedule(maturity_years, payments_per_year)?;
    let annuity = annuity_factor(curve, &schedule);
    if !(annuity.is_finite() && annuity > 0.0) {
        return Err(RiskError::undefined_ratio(format!(
            "hedge sizing: annuity factor is {annuity}"
        )));
    }

    let dv01_per_notional = annuity / 10_000.0;
    let notional = target_dv01 / dv01_per_notional;
    let swap = SizedSwap::at_par(
        curve,
        maturity_years,
        payments_per_year,
        SwapDirection::PayerFixed,
        notional,
    )?;

    debug!(
        target_dv01,
        notional,
        fixed_rate = swap.fixed_rate(),
        maturity_years,
        "sized payer swap"
    );
    Ok(swap)
}

/// A liability hedged with one DV01-matched swap.
#[derive(Debug, Clone, Serialize)]
pub struct DV01Hedge {
    /// The sized swap.
    pub swap: SizedSwap,
    /// Liability parallel DV01 before hedging.
    pub liability_dv01: f64,
    /// Swap parallel DV01.
    pub hedge_dv01: f64,
    /// Net parallel DV01 after hedging.
    pub net_dv01: f64,
}

impl DV01Hedge {
    /// Measures the liability's DV01 and sizes a swap against it.
    ///
    /// # Errors
    ///
    /// Same conditions as [`size_swap_for_target_dv01`].
    pub fn build<P: Priceable + ?Sized>(
        liability: &P,
        curve: &ZeroCurve,
        maturity_years: u32,
        payments_per_year: u32,
        bp: f64,
    ) -> RiskResult<Self> {
        let liability_dv01 = parallel_dv01(liability, curve, bp);
        let swap = size_swap_for_target_dv01(liability_dv01, curve, maturity_years, payments_per_year)?;
        let hedge_dv01 = parallel_dv01(&swap, curve, bp);
        Ok(Self {
            swap,
            liability_dv01,
            hedge_dv01,
            net_dv01: liability_dv01 + hedge_dv01,
        })
    }
}
