//! Scenarios command implementation.
//!
//! Simulates Vasicek short-rate paths, rebuilds the zero curve at every node
//! and summarizes the liability's PV across paths at the final step.

use anyhow::Result;
use clap::Args;
use serde::Serialize;

use ldi_curves::Priceable;
use ldi_scenarios::{generate_vasicek_scenarios, PvDistribution, VasicekConfig};

use crate::cli::OutputFormat;
use crate::config::RunConfig;
use crate::output::{print_header, print_json, print_output, KeyValue};

/// Arguments for the scenarios command.
#[derive(Args, Debug)]
pub struct ScenarioArgs {
    /// Number of paths (overrides the run file)
    #[arg(long)]
    pub paths: Option<usize>,

    /// Number of monthly steps (overrides the run file)
    #[arg(long)]
    pub steps: Option<usize>,

    /// Master seed (overrides the run file)
    #[arg(long)]
    pub seed: Option<u64>,
}

#[derive(Serialize)]
struct ScenarioOutput<'a> {
    config: &'a VasicekConfig,
    mean_terminal_rate: f64,
    base_pv: f64,
    terminal_pv: &'a PvDistribution,
    terminal_pv_p05: f64,
    terminal_pv_p95: f64,
}

/// Execute the scenarios command.
pub fn execute(args: &ScenarioArgs, run: &RunConfig, format: OutputFormat) -> Result<()> {
    let curve = run.curve.build()?;
    let config = VasicekConfig {
        n_paths: args.paths.unwrap_or(run.scenarios.n_paths),
        n_steps: args.steps.unwrap_or(run.scenarios.n_steps),
        seed: args.seed.or(run.scenarios.seed),
        ..run.scenarios.clone()
    };
    config.validate()?;

    let set = generate_vasicek_scenarios(&config, curve.pillars())?;
    let terminal = PvDistribution::at_step(&run.liability, &set, set.n_steps())?;
    let base_pv = run.liability.present_value(&curve);
    tracing::info!(
        n_paths = set.n_paths(),
        n_steps = set.n_steps(),
        seed = set.seed(),
        "scenarios generated"
    );

    let output = ScenarioOutput {
        config: set.config(),
        mean_terminal_rate: set.mean_terminal_rate(),
        base_pv,
        terminal_pv: &terminal,
        terminal_pv_p05: terminal.percentile(0.05),
        terminal_pv_p95: terminal.percentile(0.95),
    };

    match format {
        OutputFormat::Json => print_json(&output)?,
        OutputFormat::Table => {
            let model = vec![
                KeyValue::percent("r0", config.r0),
                KeyValue::number("kappa", config.kappa, 4),
                KeyValue::percent("theta", config.theta),
                KeyValue::percent("sigma", config.sigma),
                KeyValue::new("Paths x Steps", format!("{} x {}", set.n_paths(), set.n_steps())),
                KeyValue::number("Horizon (years)", config.horizon(), 4),
                KeyValue::new("Seed", set.seed().to_string()),
                KeyValue::percent("Mean Terminal Short Rate", output.mean_terminal_rate),
            ];
            print_header("Vasicek Scenarios");
            print_output(&model, format)?;

            let pv = vec![
                KeyValue::number("Base-Curve PV", base_pv, 2),
                KeyValue::number("Mean", terminal.mean, 2),
                KeyValue::number("Std Dev", terminal.std_dev, 2),
                KeyValue::number("5th Percentile", output.terminal_pv_p05, 2),
                KeyValue::number("95th Percentile", output.terminal_pv_p95, 2),
                KeyValue::number("Min", terminal.min, 2),
                KeyValue::number("Max", terminal.max, 2),
            ];
            print_header("Liability PV at Horizon");
            print_output(&pv, format)?;
        }
    }
    Ok(())
}
