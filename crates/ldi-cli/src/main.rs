//! LDI CLI - liability valuation, hedging and stress testing.
//!
//! # Usage
//!
//! ```bash
//! # PV, DV01, duration and key-rate exposures of the liability
//! ldi risk
//!
//! # Single-swap DV01 hedge, or a two-node key-rate hedge
//! ldi hedge
//! ldi hedge --key-rate
//!
//! # Liability and hedge P&L under standard curve shocks
//! ldi stress --hedge key-rate
//!
//! # Vasicek scenarios and the liability's terminal PV distribution
//! ldi scenarios --paths 1000 --seed 7
//!
//! # Any command from a TOML run file, as JSON
//! ldi --config run.toml --format json risk
//! ```

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod cli;
mod commands;
mod config;
mod error;
mod output;

use cli::{Cli, Commands};
use config::RunConfig;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let run = RunConfig::load(cli.config.as_deref())?;
    tracing::info!(config = ?cli.config, "loaded run configuration");

    match cli.command {
        Commands::Risk(args) => commands::risk::execute(&args, &run, cli.format)?,
        Commands::Hedge(args) => commands::hedge::execute(&args, &run, cli.format)?,
        Commands::Stress(args) => commands::stress::execute(&args, &run, cli.format)?,
        Commands::Scenarios(args) => commands::scenarios::execute(&args, &run, cli.format)?,
    }

    Ok(())
}

/// Logs go to stderr so tables and JSON on stdout stay clean.
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
