//! Compounding conventions for flat-rate discounting.
//!
//! Zero curves in this library always quote continuously-compounded rates.
//! Flat-rate valuation of liabilities may instead use a periodic convention.
//!
//! # Example
//!
//! ```rust
//! use ldi_curves::Compounding;
//!
//! let rate = 0.05; // 5% rate
//! let t = 2.0;     // 2 years
//!
//! let df_continuous = Compounding::Continuous.discount_factor(rate, t);
//! let df_annual = Compounding::Annual.discount_factor(rate, t);
//!
//! // Continuous compounding gives slightly lower DF
//! assert!(df_continuous < df_annual);
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

/// Interest compounding convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Compounding {
    /// Continuous compounding: `DF = exp(-r t)`.
    #[default]
    Continuous,
    /// Annual compounding: `DF = (1 + r)^(-t)`.
    Annual,
    /// Semi-annual compounding (2x per year).
    SemiAnnual,
    /// Quarterly compounding (4x per year).
    Quarterly,
    /// Monthly compounding (12x per year).
    Monthly,
}

impl Compounding {
    /// Returns the number of compounding periods per year, `None` for continuous.
    #[must_use]
    pub fn periods_per_year(&self) -> Option<u32> {
        match self {
            Compounding::Continuous => None,
            Compounding::Annual => Some(1),
            Compounding::SemiAnnual => Some(2),
            Compounding::Quarterly => Some(4),
            Compounding::Monthly => Some(12),
        }
    }

    /// Discount factor for a flat `rate` over `t` years.
    ///
    /// Returns 1.0 for `t <= 0`.
    #[must_use]
    pub fn discount_factor(&self, rate: f64, t: f64) -> f64 {
        if t <= 0.0 {
            return 1.0;
        }
        match self.periods_per_year() {
            None => (-rate * t).exp(),
            Some(m) => {
                let m = f64::from(m);
                (1.0 + rate / m).powf(-m * t)
            }
        }
    }

    /// Zero rate implied by a discount factor `df` at `t` years.
    ///
    /// Returns 0.0 for `t <= 0` or a non-positive discount factor.
    #[must_use]
    pub fn zero_rate(&self, df: f64, t: f64) -> f64 {
        if t <= 0.0 || df <= 0.0 {
            return 0.0;
        }
        match self.periods_per_year() {
            None => -df.ln() / t,
            Some(m) => {
                let m = f64::from(m);
                m * (df.powf(-1.0 / (m * t)) - 1.0)
            }
        }
    }
}

impl fmt::Display for Compounding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Compounding::Continuous => "Continuous",
            Compounding::Annual => "Annual",
            Compounding::SemiAnnual => "Semi-Annual",
            Compounding::Quarterly => "Quarterly",
            Compounding::Monthly => "Monthly",
        };
        write!(f, "{name}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_discount_factor_continuous() {
        let df = Compounding::Continuous.discount_factor(0.05, 1.0);
        // DF = e^(-0.05) ≈ 0.9512
        assert_relative_eq!(df, (-0.05_f64).exp(), epsilon = 1e-12);
    }

    #[test]
    fn test_discount_factor_annual() {
        let df = Compounding::Annual.discount_factor(0.05, 3.0);
        assert_relative_eq!(df, 1.05_f64.powf(-3.0), epsilon = 1e-12);
    }

    #[test]
    fn test_discount_factor_semi_annual() {
        let df = Compounding::SemiAnnual.discount_factor(0.05, 1.0);
        // DF = (1 + 0.025)^(-2) ≈ 0.9518
        assert_relative_eq!(df, 1.025_f64.powf(-2.0), epsilon = 1e-12);
    }

    #[test]
    fn test_zero_time_returns_one() {
        for compounding in [
            Compounding::Continuous,
            Compounding::Annual,
            Compounding::SemiAnnual,
            Compounding::Quarterly,
            Compounding::Monthly,
        ] {
            assert_eq!(compounding.discount_factor(0.05, 0.0), 1.0);
            assert_eq!(compounding.discount_factor(0.05, -2.0), 1.0);
        }
    }

    #[test]
    fn test_roundtrip_rate() {
        for compounding in [
            Compounding::Continuous,
            Compounding::Annual,
            Compounding::Quarterly,
        ] {
            let df = compounding.discount_factor(0.04, 7.0);
            assert_relative_eq!(compounding.zero_rate(df, 7.0), 0.04, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_default_is_continuous() {
        assert_eq!(Compounding::default(), Compounding::Continuous);
    }

    #[test]
    fn test_serde_names() {
        let json = serde_json::to_string(&Compounding::SemiAnnual).unwrap();
        assert_eq!(json, "\"semi_annual\"");
        let parsed: Compounding = serde_json::from_str("\"annual\"").unwrap();
        assert_eq!(parsed, Compounding::Annual);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Compounding::Continuous), "Continuous");
        assert_eq!(format!("{}", Compounding::SemiAnnual), "Semi-Annual");
    }
}
