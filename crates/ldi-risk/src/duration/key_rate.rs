//! Key rate durations and key rate DV01s.
//!
//! Each selected pillar is bumped by `±bp` on its own; the other pillars
//! stay put. Because rates are interpolated linearly, a pillar bump moves
//! the curve in a triangle between its neighbours.

use ldi_curves::bumping::{bps_to_decimal, KeyRateBump};
use ldi_curves::{CurveError, Priceable, ZeroCurve};
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::normalized_sensitivity;
use crate::config::validate_bump;
use crate::error::RiskResult;

/// Sensitivity to one pillar of the curve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct KeyRateExposure {
    /// Pillar index on the curve.
    pub index: usize,
    /// Pillar maturity in years.
    pub tenor: f64,
    /// Duration (dimensionless) or DV01 (currency per bp), depending on the producer.
    pub value: f64,
}

/// Key-rate exposures in the order the pillars were requested.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct KeyRateProfile {
    /// Individual exposures.
    pub exposures: Vec<KeyRateExposure>,
}

impl KeyRateProfile {
    /// Creates a profile from exposures.
    pub fn new(exposures: Vec<KeyRateExposure>) -> Self {
        Self { exposures }
    }

    /// Sum of all exposures.
    pub fn total(&self) -> f64 {
        self.exposures.iter().map(|e| e.value).sum()
    }

    /// Exposure at a pillar maturity.
    pub fn at_tenor(&self, tenor: f64) -> Option<f64> {
        self.exposures
            .iter()
            .find(|e| (e.tenor - tenor).abs() < 1e-9)
            .map(|e| e.value)
    }

    /// Exposure at a pillar index.
    pub fn at_index(&self, index: usize) -> Option<f64> {
        self.exposures
            .iter()
            .find(|e| e.index == index)
            .map(|e| e.value)
    }

    /// Exposure values in order.
    pub fn values(&self) -> Vec<f64> {
        self.exposures.iter().map(|e| e.value).collect()
    }

    /// Number of exposures.
    pub fn len(&self) -> usize {
        self.exposures.len()
    }

    /// True if no pillars were requested.
    pub fn is_empty(&self) -> bool {
        self.exposures.is_empty()
    }

    /// Element-wise sum with another profile over the same pillars.
    #[must_use]
    pub fn combined(&self, other: &Self) -> Self {
        let exposures = self
            .exposures
            .iter()
            .map(|e| KeyRateExposure {
                value: e.value + other.at_index(e.index).unwrap_or(0.0),
                ..*e
            })
            .collect();
        Self { exposures }
    }
}

/// Checks every index before any repricing happens.
fn check_indices(curve: &ZeroCurve, indices: &[usize]) -> RiskResult<()> {
    if let Some(&index) = indices.iter().find(|&&i| i >= curve.len()) {
        return Err(CurveError::PillarIndexOutOfRange {
            index,
            len: curve.len(),
        }
        .into());
    }
    Ok(())
}

/// PVs under `+bp` and `-bp` at a single pillar.
fn key_rate_pvs<P: Priceable + ?Sized>(obj: &P, curve: &ZeroCurve, index: usize, bp: f64) -> (f64, f64) {
    let (up, down) = KeyRateBump::symmetric(index, bp);
    (
        obj.present_value(&up.apply(curve)),
        obj.present_value(&down.apply(curve)),
    )
}

/// Key-rate DV01s: `(PV(-bp) - PV(+bp)) / 2` at each pillar index.
///
/// Unnormalized, so defined even when the base PV is zero; this is the
/// basis for hedge sizing against par swaps.
///
/// # Errors
///
/// Returns [`RiskError::Curve`](crate::RiskError::Curve) if an index is not a pillar.
pub fn key_rate_dv01s<P: Priceable + ?Sized>(
    obj: &P,
    curve: &ZeroCurve,
    indices: &[usize],
    bp: f64,
) -> RiskResult<KeyRateProfile> {
    check_indices(curve, indices)?;
    let exposures = indices
        .iter()
        .map(|&index| {
            let (pv_up, pv_down) = key_rate_pvs(obj, curve, index, bp);
            KeyRateExposure {
                index,
                tenor: curve.pillars()[index],
                value: (pv_down - pv_up) / 2.0,
            }
        })
        .collect();
    Ok(KeyRateProfile::new(exposures))
}

/// Key-rate durations: key-rate PV change normalized by `PV_base × Δr`.
///
/// # Errors
///
/// - [`RiskError::UndefinedRatio`](crate::RiskError::UndefinedRatio) if the base PV is exactly zero
/// - [`RiskError::InvalidInput`](crate::RiskError::InvalidInput) for a zero or non-finite bump
/// - [`RiskError::Curve`](crate::RiskError::Curve) if an index is not a pillar
pub fn key_rate_durations<P: Priceable + ?Sized>(
    obj: &P,
    curve: &ZeroCurve,
    indices: &[usize],
    bp: f64,
) -> RiskResult<KeyRateProfile> {
    validate_bump(bp)?;
    check_indices(curve, indices)?;
    let dr = bps_to_decimal(bp);
    let pv_base = obj.present_value(curve);

    let exposures = indices
        .iter()
        .map(|&index| {
            let tenor = curve.pillars()[index];
            let (pv_up, pv_down) = key_rate_pvs(obj, curve, index, bp);
            let value = normalized_sensitivity(
                pv_up,
                pv_down,
                pv_base,
                dr,
                &format!("key rate duration at {tenor}y"),
            )?;
            Ok(KeyRateExposure { index, tenor, value })
        })
        .collect::<RiskResult<Vec<_>>>()?;

    debug!(pv_base, pillars = indices.len(), "key rate durations");
    Ok(KeyRateProfile::new(exposures))
}
