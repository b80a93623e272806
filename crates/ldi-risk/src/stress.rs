//! Curve stress testing.
//!
//! A stress run reprices a liability and its hedge under each named shocked
//! curve and reports P&L against the base curve. Shocks are applied to zero
//! rates; the base curve itself is never modified.

use ldi_curves::bumping::bps_to_decimal;
use ldi_curves::{Priceable, ZeroCurve};
use ldi_swaps::Hedge;
use serde::Serialize;
use tracing::debug;

use crate::error::RiskResult;

/// Shifts every zero rate by `bp` basis points.
pub fn shock_parallel(curve: &ZeroCurve, bp: f64) -> ZeroCurve {
    curve.bumped_parallel(bps_to_decimal(bp))
}

/// Shifts the zero rate at pillar `index` by `bp` basis points.
///
/// # Errors
///
/// Returns [`RiskError::Curve`](crate::RiskError::Curve) if `index` is out of
/// range.
pub fn shock_key_rate(curve: &ZeroCurve, index: usize, bp: f64) -> RiskResult<ZeroCurve> {
    Ok(curve.try_bumped_at_index(index, bps_to_decimal(bp))?)
}

/// A labelled stressed curve.
#[derive(Debug, Clone, PartialEq)]
pub struct StressShock {
    /// Label reported in the output rows.
    pub label: String,
    /// The stressed curve.
    pub curve: ZeroCurve,
}

impl StressShock {
    /// Wraps an already-shocked curve.
    pub fn new(label: impl Into<String>, curve: ZeroCurve) -> Self {
        Self {
            label: label.into(),
            curve,
        }
    }

    /// Parallel shock of `bp` basis points.
    pub fn parallel(label: impl Into<String>, base: &ZeroCurve, bp: f64) -> Self {
        Self::new(label, shock_parallel(base, bp))
    }

    /// Single-pillar shock of `bp` basis points.
    pub fn key_rate(
        label: impl Into<String>,
        base: &ZeroCurve,
        index: usize,
        bp: f64,
    ) -> RiskResult<Self> {
        Ok(Self::new(label, shock_key_rate(base, index, bp)?))
    }
}

/// ±100bp parallel followed by +25bp at every pillar.
///
/// Key-rate labels use the pillar tenor, e.g. `KR +25bp @10y`.
pub fn standard_shocks(base: &ZeroCurve) -> Vec<StressShock> {
    let mut shocks = Vec::with_capacity(base.len() + 2);
    shocks.push(StressShock::parallel("Parallel +100bp", base, 100.0));
    shocks.push(StressShock::parallel("Parallel -100bp", base, -100.0));
    for (index, tenor) in base.pillars().iter().enumerate() {
        shocks.push(StressShock::new(
            format!("KR +25bp @{tenor}y"),
            base.bumped_at_index(index, bps_to_decimal(25.0)),
        ));
    }
    shocks
}

/// P&L of one stress scenario.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StressRow {
    /// Shock label.
    pub label: String,
    /// Liability PV change.
    pub liability_pnl: f64,
    /// Hedge PV change (zero without a hedge).
    pub hedge_pnl: f64,
    /// Liability plus hedge P&L.
    pub net_pnl: f64,
}

/// Reprices `liability` and `hedge` under every shock.
///
/// Rows come back in shock order. Hedge PVs are signed by swap direction, so
/// a book mixing payer and receiver swaps nets correctly.
///
/// # Example
///
/// ```rust
/// use ldi_curves::ZeroCurve;
/// use ldi_liabilities::AnnuityCertain;
/// use ldi_risk::stress::{run_stress, standard_shocks};
/// use ldi_swaps::Hedge;
///
/// let curve = ZeroCurve::flat(vec![1.0, 10.0, 30.0], 0.03).unwrap();
/// let rows = run_stress(&AnnuityCertain::new(100.0, 20), &curve, Hedge::None, &standard_shocks(&curve));
/// assert_eq!(rows.len(), 5);
/// assert!(rows[0].liability_pnl < 0.0);
/// ```
pub fn run_stress<P: Priceable + ?Sized>(
    liability: &P,
    base: &ZeroCurve,
    hedge: Hedge<'_>,
    shocks: &[StressShock],
) -> Vec<StressRow> {
    let liability_base = liability.present_value(base);
    let hedge_base = hedge.present_value(base);

    shocks
        .iter()
        .map(|shock| {
            let liability_pnl = liability.present_value(&shock.curve) - liability_base;
            let hedge_pnl = hedge.present_value(&shock.curve) - hedge_base;
            let net_pnl = liability_pnl + hedge_pnl;
            debug!(label = %shock.label, liability_pnl, hedge_pnl, net_pnl, "stress");
            StressRow {
                label: shock.label.clone(),
                liability_pnl,
                hedge_pnl,
                net_pnl,
            }
        })
        .collect()
}
