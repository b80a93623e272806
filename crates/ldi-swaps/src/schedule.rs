//! Fixed-leg payment schedules.

use serde::Serialize;

use crate::error::{SwapError, SwapResult};

/// Equally spaced payment times and their accrual fractions.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Schedule {
    times: Vec<f64>,
    accruals: Vec<f64>,
}

impl Schedule {
    /// Payment times in years.
    pub fn times(&self) -> &[f64] {
        &self.times
    }

    /// Accrual fraction for each payment.
    pub fn accruals(&self) -> &[f64] {
        &self.accruals
    }

    /// Number of payments.
    pub fn len(&self) -> usize {
        self.times.len()
    }

    /// Always false: a schedule has at least one payment.
    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }

    /// Time of the last payment.
    pub fn final_time(&self) -> f64 {
        self.times.last().copied().unwrap_or(0.0)
    }

    /// `(time, accrual)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.times.iter().copied().zip(self.accruals.iter().copied())
    }
}

/// Builds `maturity_years * payments_per_year` payments at
/// `t_i = (i + 1) / payments_per_year`, each accruing `1 / payments_per_year`.
///
/// # Errors
///
/// Returns [`SwapError::InvalidSchedule`] if either argument is zero.
///
/// # Example
///
/// ```rust
/// use ldi_swaps::build_schedule;
///
/// let schedule = build_schedule(2, 2).unwrap();
/// assert_eq!(schedule.times(), &[0.5, 1.0, 1.5, 2.0]);
/// assert_eq!(schedule.accruals(), &[0.5; 4]);
/// ```
pub fn build_schedule(maturity_years: u32, payments_per_year: u32) -> SwapResult<Schedule> {
    if maturity_years == 0 {
        return Err(SwapError::invalid_schedule(
            maturity_years,
            payments_per_year,
            "maturity must be at least one year",
        ));
    }
    if payments_per_year == 0 {
        return Err(SwapError::invalid_schedule(
            maturity_years,
            payments_per_year,
            "payment frequency must be positive",
        ));
    }

    let n = maturity_years
        .checked_mul(payments_per_year)
        .ok_or_else(|| {
            SwapError::invalid_schedule(maturity_years, payments_per_year, "too many payments")
        })?;
    let accrual = 1.0 / f64::from(payments_per_year);
    let times = (0..n).map(|i| accrual * f64::from(i + 1)).collect();
    let accruals = vec![accrual; n as usize];

    Ok(Schedule { times, accruals })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_annual_schedule() {
        let schedule = build_schedule(10, 1).unwrap();
        assert_eq!(schedule.len(), 10);
        assert_eq!(schedule.times()[0], 1.0);
        assert_eq!(schedule.final_time(), 10.0);
        assert!(schedule.accruals().iter().all(|&a| a == 1.0));
    }

    #[test]
    fn test_quarterly_schedule() {
        let schedule = build_schedule(5, 4).unwrap();
        assert_eq!(schedule.len(), 20);
        assert_eq!(schedule.times()[0], 0.25);
        assert_eq!(schedule.final_time(), 5.0);
        let total: f64 = schedule.accruals().iter().sum();
        assert!((total - 5.0).abs() < 1e-12);
    }

    #[test]
    fn test_invalid_arguments() {
        assert!(matches!(
            build_schedule(0, 1),
            Err(SwapError::InvalidSchedule { .. })
        ));
        assert!(matches!(
            build_schedule(10, 0),
            Err(SwapError::InvalidSchedule { .. })
        ));
    }
}
