//! Gompertz-Makeham mortality.
//!
//! Force of mortality at age `x`:
//!
//! ```text
//! mu(x) = A + B c^x
//! ```
//!
//! which integrates to the survival probability from age `x` over `t` years:
//!
//! ```text
//! t_p_x = exp(-A t - (B / ln c) (c^(x+t) - c^x))
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{LiabilityError, LiabilityResult};

/// Gompertz-Makeham mortality law.
///
/// Parameters are validated on construction (`c > 0`, `c != 1`), so
/// [`survival`](Self::survival) is total.
///
/// # Example
///
/// ```rust
/// use ldi_liabilities::GompertzMakeham;
///
/// let law = GompertzMakeham::default();
/// let p = law.survival(65.0, 10.0);
/// assert!(p > 0.0 && p < 1.0);
/// assert_eq!(law.survival(65.0, 0.0), 1.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "GompertzMakehamParams", into = "GompertzMakehamParams")]
pub struct GompertzMakeham {
    a: f64,
    b: f64,
    c: f64,
    /// Cached `B / ln c`.
    b_over_ln_c: f64,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
struct GompertzMakehamParams {
    a: f64,
    b: f64,
    c: f64,
}

impl TryFrom<GompertzMakehamParams> for GompertzMakeham {
    type Error = LiabilityError;

    fn try_from(p: GompertzMakehamParams) -> LiabilityResult<Self> {
        Self::new(p.a, p.b, p.c)
    }
}

impl From<GompertzMakeham> for GompertzMakehamParams {
    fn from(law: GompertzMakeham) -> Self {
        Self {
            a: law.a,
            b: law.b,
            c: law.c,
        }
    }
}

impl GompertzMakeham {
    /// Default age-independent hazard `A`.
    pub const DEFAULT_A: f64 = 0.0005;
    /// Default Gompertz scale `B`.
    pub const DEFAULT_B: f64 = 0.00003;
    /// Default Gompertz growth `c`.
    pub const DEFAULT_C: f64 = 1.08;

    /// Creates a new mortality law.
    ///
    /// # Errors
    ///
    /// Returns [`LiabilityError::InvalidMortality`] if any parameter is not
    /// finite, or if `c <= 0` or `c == 1` (where `ln c` is undefined or zero).
    #[allow(clippy::float_cmp)]
    pub fn new(a: f64, b: f64, c: f64) -> LiabilityResult<Self> {
        for (name, value) in [("A", a), ("B", b), ("c", c)] {
            if !value.is_finite() {
                return Err(LiabilityError::invalid_mortality(name, value, "must be finite"));
            }
        }
        if c <= 0.0 {
            return Err(LiabilityError::invalid_mortality("c", c, "must be positive"));
        }
        if c == 1.0 {
            return Err(LiabilityError::invalid_mortality("c", c, "must differ from 1"));
        }

        Ok(Self {
            a,
            b,
            c,
            b_over_ln_c: b / c.ln(),
        })
    }

    /// Age-independent hazard.
    pub fn a(&self) -> f64 {
        self.a
    }

    /// Gompertz scale.
    pub fn b(&self) -> f64 {
        self.b
    }

    /// Gompertz growth factor.
    pub fn c(&self) -> f64 {
        self.c
    }

    /// Instantaneous force of mortality at `age`.
    pub fn hazard(&self, age: f64) -> f64 {
        self.a + self.b * self.c.powf(age)
    }

    /// Probability that a life aged `x` survives `t` more years.
    ///
    /// Returns 1.0 for `t <= 0`.
    pub fn survival(&self, x: f64, t: f64) -> f64 {
        if t <= 0.0 {
            return 1.0;
        }
        let growth = self.c.powf(x + t) - self.c.powf(x);
        (-self.a * t - self.b_over_ln_c * growth).exp()
    }
}

impl Default for GompertzMakeham {
    fn default() -> Self {
        let c = Self::DEFAULT_C;
        Self {
            a: Self::DEFAULT_A,
            b: Self::DEFAULT_B,
            c,
            b_over_ln_c: Self::DEFAULT_B / c.ln(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_closed_form() {
        let law = GompertzMakeham::default();
        let (x, t) = (65.0_f64, 10.0_f64);
        let expected = (-0.0005 * t
            - (0.00003 / 1.08_f64.ln()) * (1.08_f64.powf(x + t) - 1.08_f64.powf(x)))
        .exp();
        assert_relative_eq!(law.survival(x, t), expected, epsilon = 1e-14);
    }

    #[test]
    fn test_certain_survival_at_or_before_valuation() {
        let law = GompertzMakeham::default();
        assert_eq!(law.survival(65.0, 0.0), 1.0);
        assert_eq!(law.survival(65.0, -3.0), 1.0);
    }

    #[test]
    fn test_survival_decreasing_in_horizon_and_age() {
        let law = GompertzMakeham::default();
        let mut prev = 1.0;
        for t in 1..=40 {
            let p = law.survival(65.0, f64::from(t));
            assert!(p < prev);
            prev = p;
        }
        assert!(law.survival(80.0, 5.0) < law.survival(60.0, 5.0));
    }

    #[test]
    fn test_invalid_c() {
        assert!(matches!(
            GompertzMakeham::new(0.0005, 0.00003, 1.0),
            Err(LiabilityError::InvalidMortality { parameter: "c", .. })
        ));
        assert!(GompertzMakeham::new(0.0005, 0.00003, 0.0).is_err());
        assert!(GompertzMakeham::new(0.0005, 0.00003, -1.1).is_err());
        assert!(GompertzMakeham::new(f64::NAN, 0.00003, 1.08).is_err());
        // c below one is a valid (if unusual) law
        assert!(GompertzMakeham::new(0.0005, 0.00003, 0.9).is_ok());
    }

    #[test]
    fn test_default_matches_new() {
        let built = GompertzMakeham::new(
            GompertzMakeham::DEFAULT_A,
            GompertzMakeham::DEFAULT_B,
            GompertzMakeham::DEFAULT_C,
        )
        .unwrap();
        assert_eq!(built, GompertzMakeham::default());
        assert_relative_eq!(built.hazard(0.0), 0.0005 + 0.00003, epsilon = 1e-15);
    }

    #[test]
    fn test_serde_validates() {
        let law: GompertzMakeham = serde_json::from_str(r#"{"a":0.001,"b":0.0001,"c":1.1}"#).unwrap();
        assert_eq!(law.c(), 1.1);
        assert!(serde_json::from_str::<GompertzMakeham>(r#"{"a":0.001,"b":0.0001,"c":1.0}"#).is_err());
    }
}
