//! Run configuration.
//!
//! A run file is TOML; every section is optional and falls back to the
//! built-in demo setup (a 20-year annuity of 100 on a mildly upward curve).
//!
//! ```toml
//! [curve]
//! pillars = [0.5, 1, 2, 5, 10, 20]
//! zero_rates = [0.030, 0.031, 0.033, 0.036, 0.038, 0.039]
//!
//! [liability]
//! type = "life_annuity_immediate"
//! payment = 100.0
//! n_payments = 25
//! issue_age = 65.0
//!
//! [risk]
//! key_rate_tenors = [10, 20]
//!
//! [hedge]
//! key_rate_maturities = [10, 20]
//!
//! [scenarios]
//! n_paths = 1000
//! seed = 7
//! ```

use std::path::Path;

use ldi_curves::{make_curve, CurveShape, ZeroCurve};
use ldi_liabilities::{AnnuityCertain, LiabilityInstrument};
use ldi_risk::{HedgeConfig, RiskConfig};
use ldi_scenarios::VasicekConfig;
use serde::{Deserialize, Serialize};

use crate::error::{CliError, CliResult};

/// Everything a command needs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunConfig {
    /// Base curve.
    #[serde(default)]
    pub curve: CurveConfig,

    /// Liability to value and hedge.
    #[serde(default = "default_liability")]
    pub liability: LiabilityInstrument,

    /// Sensitivity settings.
    #[serde(default)]
    pub risk: RiskConfig,

    /// Hedge settings.
    #[serde(default)]
    pub hedge: HedgeConfig,

    /// Vasicek settings.
    #[serde(default)]
    pub scenarios: VasicekConfig,
}

fn default_liability() -> LiabilityInstrument {
    AnnuityCertain::new(100.0, 20).into()
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            curve: CurveConfig::default(),
            liability: default_liability(),
            risk: RiskConfig::default(),
            hedge: HedgeConfig::default(),
            scenarios: VasicekConfig::default(),
        }
    }
}

impl RunConfig {
    /// Reads `path`, or returns the defaults when no file is given.
    pub fn load(path: Option<&Path>) -> CliResult<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let text = std::fs::read_to_string(path).map_err(|source| CliError::ReadConfig {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&text).map_err(|source| CliError::ParseConfig {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Parses a TOML document.
    pub fn from_toml(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }
}

/// Base curve: explicit zero rates, or a parametric shape on the pillars.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurveConfig {
    /// Pillar maturities in years.
    #[serde(default = "default_pillars")]
    pub pillars: Vec<f64>,

    /// Continuously-compounded zero rates, one per pillar.
    #[serde(default = "default_zero_rates")]
    pub zero_rates: Vec<f64>,

    /// Parametric shape; overrides `zero_rates` when present.
    #[serde(default)]
    pub shape: Option<CurveShapeConfig>,
}

fn default_pillars() -> Vec<f64> {
    vec![0.5, 1.0, 2.0, 5.0, 10.0, 20.0]
}

fn default_zero_rates() -> Vec<f64> {
    vec![0.030, 0.031, 0.033, 0.036, 0.038, 0.039]
}

impl Default for CurveConfig {
    fn default() -> Self {
        Self {
            pillars: default_pillars(),
            zero_rates: default_zero_rates(),
            shape: None,
        }
    }
}

impl CurveConfig {
    /// Builds the base curve.
    pub fn build(&self) -> anyhow::Result<ZeroCurve> {
        let curve = match &self.shape {
            Some(shape) => make_curve(shape.shape, self.pillars.clone(), shape.base, shape.slope)?,
            None => ZeroCurve::new(self.pillars.clone(), self.zero_rates.clone())?,
        };
        Ok(curve)
    }
}

/// `z(t) = base ± |slope| · t / max(pillar)`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurveShapeConfig {
    /// Flat, upward or inverted.
    #[serde(default)]
    pub shape: CurveShape,

    /// Short-end level.
    #[serde(default = "default_base")]
    pub base: f64,

    /// Rise (or fall) across the pillar range.
    #[serde(default = "default_slope")]
    pub slope: f64,
}

fn default_base() -> f64 {
    0.03
}

fn default_slope() -> f64 {
    0.01
}

#[cfg(test)]
mod tests {
    use super::*;
    use ldi_liabilities::Liability;

    #[test]
    fn test_empty_file_is_default() {
        let run = RunConfig::from_toml("").unwrap();
        assert_eq!(run.curve.pillars, default_pillars());
        assert_eq!(run.liability.cash_flows().len(), 20);
        assert_eq!(run.hedge.key_rate_maturities, vec![10, 20]);
        assert_eq!(run.scenarios.seed, Some(42));
    }

    #[test]
    fn test_module_example_parses() {
        let text = r#"
            [curve]
            pillars = [0.5, 1, 2, 5, 10, 20]
            zero_rates = [0.030, 0.031, 0.033, 0.036, 0.038, 0.039]

            [liability]
            type = "life_annuity_immediate"
            payment = 100.0
            n_payments = 25
            issue_age = 65.0

            [risk]
            key_rate_tenors = [10, 20]

            [scenarios]
            n_paths = 1000
            seed = 7
        "#;
        let run = RunConfig::from_toml(text).unwrap();
        assert!(matches!(run.liability, LiabilityInstrument::LifeAnnuityImmediate(_)));
        assert_eq!(run.risk.key_rate_tenors, vec![10.0, 20.0]);
        assert_eq!(run.scenarios.n_paths, 1000);
        assert!(run.curve.build().is_ok());
    }

    #[test]
    fn test_shape_overrides_rates() {
        let text = r#"
            [curve.shape]
            shape = "inverted"
            base = 0.05
            slope = 0.02
        "#;
        let curve = RunConfig::from_toml(text).unwrap().curve.build().unwrap();
        let rates = curve.rates();
        assert!(rates[0] > rates[rates.len() - 1]);
    }

    #[test]
    fn test_bad_curve_is_reported() {
        let run = RunConfig::from_toml("[curve]\nzero_rates = [0.03]").unwrap();
        assert!(run.curve.build().is_err());
    }
}
