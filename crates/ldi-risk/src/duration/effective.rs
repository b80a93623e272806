//! Effective duration calculation.
//!
//! ## Formula
//!
//! ```text
//! D_eff = -(P+ - P-) / (2 × P0 × Δr)
//! ```
//!
//! where P+ and P- are values after a parallel move of +Δr and -Δr.

use ldi_curves::bumping::bps_to_decimal;
use ldi_curves::{Priceable, ZeroCurve};
use ldi_liabilities::Liability;
use tracing::debug;

use super::normalized_sensitivity;
use crate::config::validate_bump;
use crate::dv01::parallel_pvs;
use crate::error::RiskResult;

/// Effective duration from a parallel curve bump of `bp` basis points.
///
/// # Errors
///
/// - [`RiskError::UndefinedRatio`](crate::RiskError::UndefinedRatio) if the base PV is exactly zero
/// - [`RiskError::InvalidInput`](crate::RiskError::InvalidInput) for a zero or non-finite bump
pub fn effective_duration<P: Priceable + ?Sized>(
    obj: &P,
    curve: &ZeroCurve,
    bp: f64,
) -> RiskResult<f64> {
    validate_bump(bp)?;
    let pv_base = obj.present_value(curve);
    let (pv_up, pv_down) = parallel_pvs(obj, curve, bp);
    let duration =
        normalized_sensitivity(pv_up, pv_down, pv_base, bps_to_decimal(bp), "effective duration")?;
    debug!(pv_base, duration, "effective duration");
    Ok(duration)
}

/// Effective duration at a flat rate, bumping the rate by `bp` basis points.
///
/// # Errors
///
/// Same conditions as [`effective_duration`].
pub fn flat_rate_effective_duration<L: Liability + ?Sized>(
    obj: &L,
    rate: f64,
    bp: f64,
) -> RiskResult<f64> {
    validate_bump(bp)?;
    let dr = bps_to_decimal(bp);
    let pv_base = obj.pv_at_rate(rate);
    let pv_up = obj.pv_at_rate(rate + dr);
    let pv_down = obj.pv_at_rate(rate - dr);
    normalized_sensitivity(pv_up, pv_down, pv_base, dr, "flat-rate effective duration")
}
