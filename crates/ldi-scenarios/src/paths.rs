//! Seeded, parallel Vasicek path simulation.
//!
//! Each path owns an independent [`StdRng`] whose seed is mixed from the
//! master seed and the path index, so path `p` is identical no matter how
//! many threads run or in what order paths are scheduled.

use ndarray::parallel::prelude::*;
use ndarray::{Array2, Axis};
use rand::rngs::StdRng;
use rand::SeedableRng;
use rand_distr::{Distribution, StandardNormal};
use tracing::debug;

use crate::config::VasicekConfig;
use crate::error::ScenarioResult;

/// SplitMix64 finalizer over `seed` offset by `stream`.
#[inline]
fn path_seed(seed: u64, stream: u64) -> u64 {
    let mut z = seed.wrapping_add(stream.wrapping_add(1).wrapping_mul(0x9E37_79B9_7F4A_7C15));
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

/// Simulates Euler-discretized Vasicek short-rate paths.
///
/// The result has shape `(n_paths, n_steps + 1)`; column 0 holds `r0`.
///
/// # Errors
///
/// Returns [`ScenarioError::InvalidParameter`](crate::ScenarioError::InvalidParameter)
/// if the configuration fails validation.
///
/// # Example
///
/// ```rust
/// use ldi_scenarios::{vasicek_paths, VasicekConfig};
///
/// let config = VasicekConfig { n_paths: 4, n_steps: 6, ..VasicekConfig::default() };
/// let paths = vasicek_paths(&config).unwrap();
/// assert_eq!(paths.dim(), (4, 7));
/// assert_eq!(paths[[2, 0]], config.r0);
/// assert_eq!(paths, vasicek_paths(&config).unwrap());
/// ```
pub fn vasicek_paths(config: &VasicekConfig) -> ScenarioResult<Array2<f64>> {
    config.validate()?;
    let model = config.model()?;
    let seed = config.seed.unwrap_or_else(rand::random);
    let dt = config.dt;

    let mut paths = Array2::zeros((config.n_paths, config.n_steps + 1));
    paths
        .axis_iter_mut(Axis(0))
        .into_par_iter()
        .enumerate()
        .for_each(|(p, mut row)| {
            let mut rng = StdRng::seed_from_u64(path_seed(seed, p as u64));
            let mut r = config.r0;
            row[0] = r;
            for slot in row.iter_mut().skip(1) {
                let z: f64 = StandardNormal.sample(&mut rng);
                r = model.euler_step(r, dt, z);
                *slot = r;
            }
        });

    debug!(
        n_paths = config.n_paths,
        n_steps = config.n_steps,
        seed,
        "simulated vasicek paths"
    );
    Ok(paths)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_same_seed_identical_paths() {
        let config = VasicekConfig {
            n_paths: 64,
            n_steps: 24,
            seed: Some(123),
            ..VasicekConfig::default()
        };
        assert_eq!(vasicek_paths(&config).unwrap(), vasicek_paths(&config).unwrap());
    }

    #[test]
    fn test_different_seeds_differ() {
        let a = VasicekConfig { seed: Some(1), ..VasicekConfig::default() };
        let b = VasicekConfig { seed: Some(2), ..VasicekConfig::default() };
        assert_ne!(vasicek_paths(&a).unwrap(), vasicek_paths(&b).unwrap());
    }

    #[test]
    fn test_paths_independent_of_path_count() {
        // Path p depends only on (seed, p), not on how many paths run.
        let small = VasicekConfig { n_paths: 3, ..VasicekConfig::default() };
        let large = VasicekConfig { n_paths: 50, ..VasicekConfig::default() };
        let a = vasicek_paths(&small).unwrap();
        let b = vasicek_paths(&large).unwrap();
        for p in 0..3 {
            assert_eq!(a.row(p), b.row(p));
        }
    }

    #[test]
    fn test_zero_volatility_is_deterministic_decay() {
        let config = VasicekConfig {
            r0: 0.06,
            kappa: 1.0,
            theta: 0.03,
            sigma: 0.0,
            dt: 0.5,
            n_steps: 2,
            n_paths: 2,
            seed: Some(9),
        };
        let paths = vasicek_paths(&config).unwrap();
        assert_relative_eq!(paths[[0, 1]], 0.045, epsilon = 1e-15);
        assert_relative_eq!(paths[[1, 2]], 0.0375, epsilon = 1e-15);
    }

    #[test]
    fn test_mean_reversion() {
        let config = VasicekConfig {
            r0: 0.06,
            kappa: 1.0,
            theta: 0.03,
            sigma: 0.005,
            dt: 1.0 / 12.0,
            n_steps: 60,
            n_paths: 500,
            seed: Some(42),
        };
        let paths = vasicek_paths(&config).unwrap();
        let terminal = paths.column(config.n_steps);
        let mean = terminal.sum() / terminal.len() as f64;
        assert!((mean - config.theta).abs() < 0.01, "terminal mean {mean}");
    }

    #[test]
    fn test_zero_steps() {
        let config = VasicekConfig { n_steps: 0, ..VasicekConfig::default() };
        let paths = vasicek_paths(&config).unwrap();
        assert_eq!(paths.dim(), (config.n_paths, 1));
    }

    #[test]
    fn test_invalid_config() {
        let config = VasicekConfig { kappa: -1.0, ..VasicekConfig::default() };
        assert!(vasicek_paths(&config).is_err());
    }

    #[test]
    fn test_path_seeds_distinct() {
        let seeds: std::collections::HashSet<u64> = (0..1_000).map(|p| path_seed(42, p)).collect();
        assert_eq!(seeds.len(), 1_000);
    }
}
