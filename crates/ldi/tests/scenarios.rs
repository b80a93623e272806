//! Integration test: Vasicek scenarios feeding liability valuation.

use approx::assert_relative_eq;
use ldi::prelude::*;

const PILLARS: [f64; 6] = [0.5, 1.0, 2.0, 5.0, 10.0, 30.0];

#[test]
fn test_scenario_shapes() {
    let config = VasicekConfig {
        n_steps: 6,
        n_paths: 7,
        seed: Some(1),
        ..VasicekConfig::default()
    };
    let set = generate_vasicek_scenarios(&config, &PILLARS[..5]).unwrap();

    assert_eq!(set.short_rate_paths().dim(), (7, 7));
    assert_eq!(set.curves().len(), 7);
    assert!(set.curves().iter().all(|row| row.len() == 7));
    assert_eq!(set.curve(0, 0).unwrap().pillars(), &PILLARS[..5]);
}

#[test]
fn test_reproducible_with_seed() {
    let config = VasicekConfig {
        n_paths: 10,
        seed: Some(123),
        ..VasicekConfig::default()
    };
    assert_eq!(vasicek_paths(&config).unwrap(), vasicek_paths(&config).unwrap());
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
        seed: Some(7),
    };
    let set = generate_vasicek_scenarios(&config, &PILLARS).unwrap();
    assert!((set.mean_terminal_rate() - config.theta).abs() < 0.01);
}

#[test]
fn test_flat_vasicek_curve_prices_like_flat_rate() {
    let theta = 0.03;
    let curve = vasicek_zero_curve(theta, 0.5, theta, 0.0, &PILLARS).unwrap();
    for &z in curve.rates() {
        assert_relative_eq!(z, theta, epsilon = 1e-12);
    }

    let annuity = AnnuityCertain::new(100.0, 20);
    assert_relative_eq!(
        annuity.present_value(&curve),
        annuity.pv_at_rate(theta),
        max_relative = 1e-6
    );
}

#[test]
fn test_liability_pv_distribution() {
    let config = VasicekConfig {
        n_paths: 200,
        n_steps: 12,
        ..VasicekConfig::default()
    };
    let set = generate_vasicek_scenarios(&config, &PILLARS).unwrap();
    let annuity = AnnuityCertain::new(100.0, 20);

    let base = PvDistribution::at_step(&annuity, &set, 0).unwrap();
    let terminal = PvDistribution::at_step(&annuity, &set, set.n_steps()).unwrap();

    assert_eq!(terminal.count, 200);
    assert!(terminal.std_dev > base.std_dev);
    assert!(terminal.percentile(0.05) < terminal.percentile(0.95));
    assert!(terminal.min <= terminal.mean && terminal.mean <= terminal.max);
}
