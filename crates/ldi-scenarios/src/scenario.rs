//! Vasicek scenario sets: short-rate paths plus a zero curve per node.

use ldi_curves::ZeroCurve;
use ndarray::{Array2, ArrayView1};
use rayon::prelude::*;
use tracing::debug;

use crate::config::VasicekConfig;
use crate::error::{ScenarioError, ScenarioResult};
use crate::paths::vasicek_paths;

/// Simulated short-rate paths and the zero curve implied at every
/// `(path, step)` node. Immutable once generated.
///
/// The stored configuration always carries the seed that was actually
/// used, so `generate_vasicek_scenarios(set.config(), pillars)` rebuilds
/// the same set even when the original request asked for a random seed.
#[derive(Debug, Clone)]
pub struct ScenarioSet {
    config: VasicekConfig,
    seed: u64,
    short_rate_paths: Array2<f64>,
    curves: Vec<Vec<ZeroCurve>>,
}

impl ScenarioSet {
    /// The configuration the set was generated from.
    pub fn config(&self) -> &VasicekConfig {
        &self.config
    }

    /// Seed the paths were drawn from.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Short rates, shape `(n_paths, n_steps + 1)`.
    pub fn short_rate_paths(&self) -> &Array2<f64> {
        &self.short_rate_paths
    }

    /// Curves indexed `[path][step]`.
    pub fn curves(&self) -> &[Vec<ZeroCurve>] {
        &self.curves
    }

    /// Number of paths.
    pub fn n_paths(&self) -> usize {
        self.short_rate_paths.nrows()
    }

    /// Number of steps after t = 0.
    pub fn n_steps(&self) -> usize {
        self.short_rate_paths.ncols().saturating_sub(1)
    }

    /// Simulation times in years, one per column.
    #[allow(clippy::cast_precision_loss)]
    pub fn times(&self) -> Vec<f64> {
        (0..=self.n_steps())
            .map(|step| step as f64 * self.config.dt)
            .collect()
    }

    /// The curve at `(path, step)`, if both are in range.
    pub fn curve(&self, path: usize, step: usize) -> Option<&ZeroCurve> {
        self.curves.get(path).and_then(|row| row.get(step))
    }

    /// Every path's curve at `step`.
    ///
    /// # Errors
    ///
    /// Returns [`ScenarioError::StepOutOfRange`] past the horizon.
    pub fn curves_at_step(&self, step: usize) -> ScenarioResult<Vec<&ZeroCurve>> {
        self.check_step(step)?;
        Ok(self.curves.iter().map(|row| &row[step]).collect())
    }

    /// Short rates of every path at the final step.
    pub fn terminal_rates(&self) -> ArrayView1<'_, f64> {
        self.short_rate_paths.column(self.n_steps())
    }

    /// Cross-path average of the terminal short rate.
    #[allow(clippy::cast_precision_loss)]
    pub fn mean_terminal_rate(&self) -> f64 {
        let terminal = self.terminal_rates();
        terminal.sum() / terminal.len() as f64
    }

    pub(crate) fn check_step(&self, step: usize) -> ScenarioResult<()> {
        if step > self.n_steps() {
            return Err(ScenarioError::StepOutOfRange {
                step,
                n_steps: self.n_steps(),
            });
        }
        Ok(())
    }
}

/// Simulates short-rate paths and builds the Vasicek zero curve on
/// `pillars` at every node.
///
/// # Errors
///
/// - [`ScenarioError::InvalidParameter`] for an invalid configuration
/// - [`ScenarioError::Curve`] for empty or unsorted pillars
///
/// # Example
///
/// ```rust
/// use ldi_scenarios::{generate_vasicek_scenarios, VasicekConfig};
///
/// let config = VasicekConfig { n_paths: 8, n_steps: 3, ..VasicekConfig::default() };
/// let set = generate_vasicek_scenarios(&config, &[1.0, 5.0, 10.0]).unwrap();
/// assert_eq!(set.n_paths(), 8);
/// assert_eq!(set.curves()[0].len(), 4);
/// assert!(set.curve(7, 3).is_some());
/// ```
pub fn generate_vasicek_scenarios(
    config: &VasicekConfig,
    pillars: &[f64],
) -> ScenarioResult<ScenarioSet> {
    let model = config.model()?;
    // Fail on bad pillars before simulating anything.
    model.zero_curve(config.r0, pillars)?;

    let seed = config.seed.unwrap_or_else(rand::random);
    let config = VasicekConfig {
        seed: Some(seed),
        ..config.clone()
    };
    let short_rate_paths = vasicek_paths(&config)?;
    let curves = short_rate_paths
        .outer_iter()
        .collect::<Vec<_>>()
        .into_par_iter()
        .map(|row| {
            row.iter()
                .map(|&rt| model.zero_curve(rt, pillars))
                .collect::<ScenarioResult<Vec<_>>>()
        })
        .collect::<ScenarioResult<Vec<_>>>()?;

    debug!(
        n_paths = config.n_paths,
        n_steps = config.n_steps,
        pillars = pillars.len(),
        seed,
        "generated vasicek scenarios"
    );
    Ok(ScenarioSet {
        config,
        seed,
        short_rate_paths,
        curves,
    })
}
