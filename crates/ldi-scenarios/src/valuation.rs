//! Pricing a position across scenario paths.

use ldi_curves::Priceable;
use rayon::prelude::*;
use serde::Serialize;
use tracing::debug;

use crate::error::{ScenarioError, ScenarioResult};
use crate::scenario::ScenarioSet;

/// PV of `obj` under every path's curve at `step`, in path order.
///
/// # Errors
///
/// Returns [`ScenarioError::StepOutOfRange`] past the horizon.
pub fn value_across_paths<P: Priceable + Sync + ?Sized>(
    obj: &P,
    scenarios: &ScenarioSet,
    step: usize,
) -> ScenarioResult<Vec<f64>> {
    scenarios.check_step(step)?;
    let pvs: Vec<f64> = scenarios
        .curves()
        .par_iter()
        .map(|row| obj.present_value(&row[step]))
        .collect();
    debug!(step, n_paths = pvs.len(), "valued across paths");
    Ok(pvs)
}

/// Summary statistics of a PV sample.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PvDistribution {
    /// Sample size.
    pub count: usize,
    /// Arithmetic mean.
    pub mean: f64,
    /// Sample standard deviation (zero for a single value).
    pub std_dev: f64,
    /// Smallest value.
    pub min: f64,
    /// Largest value.
    pub max: f64,
    #[serde(skip)]
    sorted: Vec<f64>,
}

impl PvDistribution {
    /// Summarizes `values`.
    ///
    /// # Errors
    ///
    /// Returns [`ScenarioError::EmptySample`] for no values.
    ///
    /// # Example
    ///
    /// ```rust
    /// use ldi_scenarios::PvDistribution;
    ///
    /// let dist = PvDistribution::from_values(&[3.0, 1.0, 2.0, 4.0]).unwrap();
    /// assert_eq!(dist.mean, 2.5);
    /// assert_eq!(dist.percentile(0.5), 2.5);
    /// assert_eq!(dist.min, 1.0);
    /// ```
    #[allow(clippy::cast_precision_loss)]
    pub fn from_values(values: &[f64]) -> ScenarioResult<Self> {
        if values.is_empty() {
            return Err(ScenarioError::EmptySample);
        }
        let mut sorted = values.to_vec();
        sorted.sort_by(f64::total_cmp);

        let n = sorted.len() as f64;
        let mean = sorted.iter().sum::<f64>() / n;
        let std_dev = if sorted.len() > 1 {
            let ss: f64 = sorted.iter().map(|v| (v - mean).powi(2)).sum();
            (ss / (n - 1.0)).sqrt()
        } else {
            0.0
        };

        Ok(Self {
            count: sorted.len(),
            mean,
            std_dev,
            min: sorted[0],
            max: sorted[sorted.len() - 1],
            sorted,
        })
    }

    /// Values the position at `step` on every path and summarizes.
    pub fn at_step<P: Priceable + Sync + ?Sized>(
        obj: &P,
        scenarios: &ScenarioSet,
        step: usize,
    ) -> ScenarioResult<Self> {
        Self::from_values(&value_across_paths(obj, scenarios, step)?)
    }

    /// Quantile `q` in `[0, 1]`, linearly interpolated between order
    /// statistics. `q` is clamped to the unit interval.
    #[allow(
        clippy::cast_precision_loss,
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss
    )]
    pub fn percentile(&self, q: f64) -> f64 {
        let q = if q.is_nan() { 0.5 } else { q.clamp(0.0, 1.0) };
        let pos = q * (self.sorted.len() - 1) as f64;
        let lo = pos.floor() as usize;
        let hi = pos.ceil() as usize;
        let w = pos - lo as f64;
        self.sorted[lo] * (1.0 - w) + self.sorted[hi] * w
    }
}
