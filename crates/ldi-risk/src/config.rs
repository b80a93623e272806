//! Risk and hedge configuration.
//!
//! Plain serde structs: every field has a default, so partial TOML or JSON
//! documents deserialize cleanly.
//!
//! ```rust
//! use ldi_risk::config::RiskConfig;
//!
//! let config: RiskConfig = serde_json::from_str(r#"{"bump_bps": 5.0}"#).unwrap();
//! assert_eq!(config.bump_bps, 5.0);
//! assert_eq!(config.degenerate_threshold, 1e-12);
//! assert!(config.validate().is_ok());
//! ```

use ldi_math::linear_algebra::DEFAULT_SINGULARITY_THRESHOLD;
use serde::{Deserialize, Serialize};

use crate::error::{RiskError, RiskResult};

// =============================================================================
// RISK CONFIGURATION
// =============================================================================

/// Settings for finite-difference sensitivities.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskConfig {
    /// Bump size in basis points for central differences.
    #[serde(default = "default_bump_bps")]
    pub bump_bps: f64,

    /// Pillar maturities (years) at which to report key-rate exposures.
    /// Empty means every pillar of the curve.
    #[serde(default)]
    pub key_rate_tenors: Vec<f64>,

    /// Determinant magnitude below which a hedge system is degenerate.
    ///
    /// Two-swap systems compare the raw determinant; larger systems compare
    /// the determinant after scaling the matrix by its largest entry.
    #[serde(default = "default_degenerate_threshold")]
    pub degenerate_threshold: f64,
}

fn default_bump_bps() -> f64 {
    1.0
}

fn default_degenerate_threshold() -> f64 {
    DEFAULT_SINGULARITY_THRESHOLD
}

impl Default for RiskConfig {
    fn default() -> Self {
        Self {
            bump_bps: default_bump_bps(),
            key_rate_tenors: Vec::new(),
            degenerate_threshold: default_degenerate_threshold(),
        }
    }
}

impl RiskConfig {
    /// Checks that the bump and threshold are usable.
    pub fn validate(&self) -> RiskResult<()> {
        validate_bump(self.bump_bps)?;
        if !(self.degenerate_threshold.is_finite() && self.degenerate_threshold > 0.0) {
            return Err(RiskError::invalid_input(format!(
                "degenerate_threshold must be positive, got {}",
                self.degenerate_threshold
            )));
        }
        if self.key_rate_tenors.iter().any(|t| !t.is_finite() || *t <= 0.0) {
            return Err(RiskError::invalid_input(
                "key_rate_tenors must be positive maturities",
            ));
        }
        Ok(())
    }

    /// Resolves the configured tenors to pillar indices of `curve`.
    ///
    /// Empty configuration selects every pillar.
    ///
    /// # Errors
    ///
    /// Returns [`RiskError::InvalidInput`] if a tenor is not a pillar.
    pub fn key_rate_indices(&self, curve: &ldi_curves::ZeroCurve) -> RiskResult<Vec<usize>> {
        if self.key_rate_tenors.is_empty() {
            return Ok((0..curve.len()).collect());
        }
        self.key_rate_tenors
            .iter()
            .map(|&tenor| {
                curve.pillar_index(tenor).ok_or_else(|| {
                    RiskError::invalid_input(format!("{tenor}y is not a curve pillar"))
                })
            })
            .collect()
    }
}

// =============================================================================
// HEDGE CONFIGURATION
// =============================================================================

/// Settings for hedge sizing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HedgeConfig {
    /// Maturity of the single-swap DV01 hedge.
    #[serde(default = "default_maturity_years")]
    pub maturity_years: u32,

    /// Fixed-leg payments per year for every hedge swap.
    #[serde(default = "default_payments_per_year")]
    pub payments_per_year: u32,

    /// Swap maturities for the key-rate hedge. Each must also be a curve
    /// pillar; the swaps are solved against the key rates at those pillars.
    #[serde(default = "default_key_rate_maturities")]
    pub key_rate_maturities: Vec<u32>,
}

fn default_maturity_years() -> u32 {
    10
}

fn default_payments_per_year() -> u32 {
    1
}

fn default_key_rate_maturities() -> Vec<u32> {
    vec![10, 20]
}

impl Default for HedgeConfig {
    fn default() -> Self {
        Self {
            maturity_years: default_maturity_years(),
            payments_per_year: default_payments_per_year(),
            key_rate_maturities: default_key_rate_maturities(),
        }
    }
}

impl HedgeConfig {
    /// Checks maturities and frequency.
    pub fn validate(&self) -> RiskResult<()> {
        if self.maturity_years == 0 {
            return Err(RiskError::invalid_input("maturity_years must be positive"));
        }
        if self.payments_per_year == 0 {
            return Err(RiskError::invalid_input("payments_per_year must be positive"));
        }
        if self.key_rate_maturities.iter().any(|&m| m == 0) {
            return Err(RiskError::invalid_input(
                "key_rate_maturities must be positive",
            ));
        }
        Ok(())
    }
}

/// Rejects zero or non-finite bumps.
pub(crate) fn validate_bump(bump_bps: f64) -> RiskResult<()> {
    if !bump_bps.is_finite() || bump_bps == 0.0 {
        return Err(RiskError::invalid_input(format!(
            "bump must be a non-zero number of basis points, got {bump_bps}"
        )));
    }
    Ok(())
}
