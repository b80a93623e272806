//! Integrated risk report.
//!
//! [`RiskReport::compute`] gathers every curve sensitivity for one position
//! under a single [`RiskConfig`]. Ratio measures are optional so a position
//! with zero PV (an at-par swap, an empty annuity) still gets a report.

use ldi_curves::{Priceable, ZeroCurve};
use serde::Serialize;
use tracing::debug;

use crate::config::RiskConfig;
use crate::duration::{effective_duration, key_rate_durations, key_rate_dv01s, KeyRateProfile};
use crate::dv01::parallel_dv01;
use crate::error::{RiskError, RiskResult};

/// Complete curve risk of a position.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RiskReport {
    /// Present value under the base curve.
    pub pv: f64,
    /// Parallel DV01.
    pub dv01: f64,
    /// Effective duration; `None` when the PV is zero.
    pub effective_duration: Option<f64>,
    /// Key-rate DV01s at the configured pillars.
    pub key_rate_dv01s: KeyRateProfile,
    /// Key-rate durations; `None` when the PV is zero.
    pub key_rate_durations: Option<KeyRateProfile>,
}

impl RiskReport {
    /// Computes the report.
    ///
    /// # Errors
    ///
    /// Returns [`RiskError::InvalidInput`] for an invalid configuration or a
    /// key-rate tenor that is not a curve pillar.
    ///
    /// # Example
    ///
    /// ```rust
    /// use ldi_curves::ZeroCurve;
    /// use ldi_liabilities::AnnuityCertain;
    /// use ldi_risk::{RiskConfig, RiskReport};
    ///
    /// let curve = ZeroCurve::flat(vec![1.0, 10.0, 30.0], 0.03).unwrap();
    /// let report = RiskReport::compute(&AnnuityCertain::new(100.0, 20), &curve, &RiskConfig::default()).unwrap();
    /// assert_eq!(report.key_rate_dv01s.len(), 3);
    /// assert!(report.effective_duration.is_some());
    /// ```
    pub fn compute<P: Priceable + ?Sized>(
        obj: &P,
        curve: &ZeroCurve,
        config: &RiskConfig,
    ) -> RiskResult<Self> {
        config.validate()?;
        let bp = config.bump_bps;
        let indices = config.key_rate_indices(curve)?;

        let pv = obj.present_value(curve);
        let dv01 = parallel_dv01(obj, curve, bp);
        let effective_duration = undefined_as_none(effective_duration(obj, curve, bp))?;
        let key_rate_dv01s = key_rate_dv01s(obj, curve, &indices, bp)?;
        let key_rate_durations = undefined_as_none(key_rate_durations(obj, curve, &indices, bp))?;

        debug!(pv, dv01, ?effective_duration, "risk report");
        Ok(Self {
            pv,
            dv01,
            effective_duration,
            key_rate_dv01s,
            key_rate_durations,
        })
    }
}

fn undefined_as_none<T>(result: RiskResult<T>) -> RiskResult<Option<T>> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(RiskError::UndefinedRatio { .. }) => Ok(None),
        Err(e) => Err(e),
    }
}
