//! # LDI Risk
//!
//! Curve risk analytics, hedge sizing and stress testing for liability
//! portfolios.
//!
//! Every sensitivity is a symmetric finite difference: the base curve is
//! bumped up and down (in parallel or at a single pillar), the position is
//! repriced through [`Priceable`](ldi_curves::Priceable), and the PV change
//! is reported. Sign conventions:
//!
//! - **DV01** = `(PV(-bp) - PV(+bp)) / 2`, positive when the position loses
//!   value as rates rise
//! - **Duration** = DV01 normalized by `PV × Δr`
//!
//! ## Modules
//!
//! - [`dv01`]: parallel and flat-rate DV01
//! - [`duration`]: effective and key-rate durations, key-rate DV01s
//! - [`hedging`]: single-swap and N-swap key-rate hedges
//! - [`stress`]: named curve shocks and liability/hedge P&L
//! - [`calculator`]: all-in-one [`RiskReport`]
//! - [`config`]: bump sizes, key-rate tenors and hedge settings
//!
//! ## Example
//!
//! ```rust
//! use ldi_curves::ZeroCurve;
//! use ldi_liabilities::AnnuityCertain;
//! use ldi_risk::prelude::*;
//!
//! let curve = ZeroCurve::new(
//!     vec![0.5, 1.0, 2.0, 5.0, 10.0, 20.0],
//!     vec![0.030, 0.031, 0.033, 0.036, 0.038, 0.039],
//! )
//! .unwrap();
//! let liability = AnnuityCertain::new(100.0, 20);
//!
//! let dv01 = parallel_dv01(&liability, &curve, 1.0);
//! let swap = size_swap_for_target_dv01(dv01, &curve, 10, 1).unwrap();
//! let net = dv01 + parallel_dv01(&swap, &curve, 1.0);
//! assert!(net.abs() < 0.1 * dv01);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]

pub mod calculator;
pub mod config;
pub mod duration;
pub mod dv01;
pub mod error;
pub mod hedging;
pub mod stress;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::calculator::RiskReport;
    pub use crate::config::{HedgeConfig, RiskConfig};
    pub use crate::duration::{
        effective_duration, flat_rate_effective_duration, key_rate_durations, key_rate_dv01s,
        KeyRateExposure, KeyRateProfile,
    };
    pub use crate::dv01::{flat_rate_dv01, parallel_dv01, DEFAULT_BUMP_BPS};
    pub use crate::error::{RiskError, RiskResult};
    pub use crate::hedging::{
        key_rate_sensitivity_matrix, size_swap_for_target_dv01, DV01Hedge, KeyRateHedge,
    };
    pub use crate::stress::{
        run_stress, shock_key_rate, shock_parallel, standard_shocks, StressRow, StressShock,
    };
}

pub use calculator::RiskReport;
pub use config::{HedgeConfig, RiskConfig};
pub use duration::{
    effective_duration, flat_rate_effective_duration, key_rate_durations, key_rate_dv01s,
    KeyRateExposure, KeyRateProfile,
};
pub use dv01::{flat_rate_dv01, parallel_dv01, DEFAULT_BUMP_BPS};
pub use error::{RiskError, RiskResult};
pub use hedging::{key_rate_sensitivity_matrix, size_swap_for_target_dv01, DV01Hedge, KeyRateHedge};
pub use stress::{run_stress, shock_key_rate, shock_parallel, standard_shocks, StressRow, StressShock};
