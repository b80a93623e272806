//! Vasicek simulation configuration.

use serde::{Deserialize, Serialize};

use crate::error::{ScenarioError, ScenarioResult};
use crate::vasicek::VasicekModel;

/// Parameters of a Vasicek Monte Carlo run.
///
/// Every field has a default, so a partial TOML table is enough:
///
/// ```rust
/// use ldi_scenarios::VasicekConfig;
///
/// let config: VasicekConfig = serde_json::from_str(r#"{"n_paths": 500, "seed": 7}"#).unwrap();
/// assert_eq!(config.n_paths, 500);
/// assert_eq!(config.kappa, 0.5);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VasicekConfig {
    /// Initial short rate.
    #[serde(default = "default_r0")]
    pub r0: f64,

    /// Mean-reversion speed.
    #[serde(default = "default_kappa")]
    pub kappa: f64,

    /// Long-run mean short rate.
    #[serde(default = "default_theta")]
    pub theta: f64,

    /// Short-rate volatility.
    #[serde(default = "default_sigma")]
    pub sigma: f64,

    /// Time step in years.
    #[serde(default = "default_dt")]
    pub dt: f64,

    /// Number of Euler steps after t = 0.
    #[serde(default = "default_n_steps")]
    pub n_steps: usize,

    /// Number of simulated paths.
    #[serde(default = "default_n_paths")]
    pub n_paths: usize,

    /// Master seed. `None` draws a fresh one per run.
    #[serde(default = "default_seed")]
    pub seed: Option<u64>,
}

fn default_r0() -> f64 {
    0.03
}

fn default_kappa() -> f64 {
    0.5
}

fn default_theta() -> f64 {
    0.03
}

fn default_sigma() -> f64 {
    0.01
}

fn default_dt() -> f64 {
    1.0 / 12.0
}

fn default_n_steps() -> usize {
    12
}

fn default_n_paths() -> usize {
    100
}

#[allow(clippy::unnecessary_wraps)]
fn default_seed() -> Option<u64> {
    Some(42)
}

impl Default for VasicekConfig {
    fn default() -> Self {
        Self {
            r0: default_r0(),
            kappa: default_kappa(),
            theta: default_theta(),
            sigma: default_sigma(),
            dt: default_dt(),
            n_steps: default_n_steps(),
            n_paths: default_n_paths(),
            seed: default_seed(),
        }
    }
}

impl VasicekConfig {
    /// Checks model and simulation parameters.
    ///
    /// # Errors
    ///
    /// Returns [`ScenarioError::InvalidParameter`] unless `kappa > 0`,
    /// `sigma >= 0`, `dt > 0`, `n_paths >= 1` and every rate is finite.
    pub fn validate(&self) -> ScenarioResult<()> {
        self.model()?;
        if !self.r0.is_finite() {
            return Err(ScenarioError::invalid_parameter("r0", self.r0, "must be finite"));
        }
        if !(self.dt.is_finite() && self.dt > 0.0) {
            return Err(ScenarioError::invalid_parameter("dt", self.dt, "must be positive"));
        }
        if self.n_paths == 0 {
            return Err(ScenarioError::invalid_parameter("n_paths", 0.0, "must be at least 1"));
        }
        Ok(())
    }

    /// The validated short-rate model.
    pub fn model(&self) -> ScenarioResult<VasicekModel> {
        VasicekModel::new(self.kappa, self.theta, self.sigma)
    }

    /// Simulation horizon in years.
    #[allow(clippy::cast_precision_loss)]
    pub fn horizon(&self) -> f64 {
        self.n_steps as f64 * self.dt
    }
}
