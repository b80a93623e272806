//! # LDI Scenarios
//!
//! Vasicek short-rate Monte Carlo for the LDI library.
//!
//! - [`vasicek_paths`]: seeded Euler paths, parallel over paths
//! - [`VasicekModel`] / [`vasicek_zero_curve`]: closed-form zero curves
//! - [`generate_vasicek_scenarios`]: paths plus a curve per `(path, step)`
//! - [`value_across_paths`] / [`PvDistribution`]: scenario valuation
//!
//! Results are reproducible: each path draws from its own generator seeded
//! from `(seed, path_index)`, so the output does not depend on thread count.
//!
//! ```rust
//! use ldi_scenarios::prelude::*;
//!
//! let config = VasicekConfig { n_paths: 16, ..VasicekConfig::default() };
//! let set = generate_vasicek_scenarios(&config, &[1.0, 5.0, 10.0, 20.0]).unwrap();
//! assert_eq!(set.short_rate_paths().dim(), (16, 13));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]

pub mod config;
pub mod error;
pub mod paths;
pub mod scenario;
pub mod valuation;
pub mod vasicek;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::config::VasicekConfig;
    pub use crate::error::{ScenarioError, ScenarioResult};
    pub use crate::paths::vasicek_paths;
    pub use crate::scenario::{generate_vasicek_scenarios, ScenarioSet};
    pub use crate::valuation::{value_across_paths, PvDistribution};
    pub use crate::vasicek::{vasicek_zero_curve, VasicekModel};
}

pub use config::VasicekConfig;
pub use error::{ScenarioError, ScenarioResult};
pub use paths::vasicek_paths;
pub use scenario::{generate_vasicek_scenarios, ScenarioSet};
pub use valuation::{value_across_paths, PvDistribution};
pub use vasicek::{vasicek_zero_curve, VasicekModel};
