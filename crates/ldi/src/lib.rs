//! # LDI
//!
//! Liability-driven investment analytics: value annuity liabilities on a zero
//! curve, measure their rate risk, hedge it with interest rate swaps, stress
//! the hedged book and run Vasicek rate scenarios.
//!
//! This crate re-exports the workspace crates:
//!
//! - [`math`]: interpolation and linear solves
//! - [`curves`]: zero curves, bumps and the [`Priceable`](curves::Priceable) capability
//! - [`liabilities`]: annuities and Gompertz-Makeham mortality
//! - [`swaps`]: swap schedules, par rates and sized hedge swaps
//! - [`risk`]: DV01, durations, hedge sizing and stress testing
//! - [`scenarios`]: Vasicek path simulation and scenario valuation
//!
//! ```rust
//! use ldi::prelude::*;
//!
//! let curve = ZeroCurve::new(
//!     vec![0.5, 1.0, 2.0, 5.0, 10.0, 20.0],
//!     vec![0.030, 0.031, 0.033, 0.036, 0.038, 0.039],
//! )
//! .unwrap();
//! let liability = AnnuityCertain::new(100.0, 20);
//! let hedge = KeyRateHedge::solve(&liability, &curve, &[4, 5], &[10, 20], 1, &RiskConfig::default()).unwrap();
//! let rows = run_stress(&liability, &curve, Hedge::from(&hedge.swaps), &standard_shocks(&curve));
//! assert!(rows[0].net_pnl.abs() < rows[0].liability_pnl.abs());
//! ```

#![warn(missing_docs)]

pub use ldi_curves as curves;
pub use ldi_liabilities as liabilities;
pub use ldi_math as math;
pub use ldi_risk as risk;
pub use ldi_scenarios as scenarios;
pub use ldi_swaps as swaps;

/// Everything needed for the common liability-hedging workflow.
pub mod prelude {
    pub use ldi_curves::prelude::*;
    pub use ldi_liabilities::prelude::*;
    pub use ldi_risk::prelude::*;
    pub use ldi_scenarios::prelude::*;
    pub use ldi_swaps::prelude::*;
}
