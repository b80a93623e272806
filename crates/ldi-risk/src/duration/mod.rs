//! Duration measures from curve and rate bumps.
//!
//! - **Effective Duration**: parallel curve (or flat rate) bump, normalized by base PV
//! - **Key Rate Duration / DV01**: single-pillar bumps
//!
//! Durations divide by the base present value. When that PV is exactly zero
//! (a freshly struck par swap, for instance) the ratio is undefined and
//! [`RiskError::UndefinedRatio`](crate::RiskError::UndefinedRatio) is
//! returned. Key-rate DV01s are unnormalized and always defined.

mod effective;
mod key_rate;

pub use effective::{effective_duration, flat_rate_effective_duration};
pub use key_rate::{key_rate_durations, key_rate_dv01s, KeyRateExposure, KeyRateProfile};

use crate::error::{RiskError, RiskResult};

/// `-(pv_up - pv_down) / (2 pv_base dr)`, guarding an exactly-zero base.
#[allow(clippy::float_cmp)]
pub(crate) fn normalized_sensitivity(
    pv_up: f64,
    pv_down: f64,
    pv_base: f64,
    dr: f64,
    context: &str,
) -> RiskResult<f64> {
    if pv_base == 0.0 {
        return Err(RiskError::undefined_ratio(format!(
            "{context}: base present value is zero"
        )));
    }
    Ok(-(pv_up - pv_down) / (2.0 * pv_base * dr))
}
