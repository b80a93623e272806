//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::commands::{HedgeArgs, RiskArgs, ScenarioArgs, StressArgs};

/// LDI - liability valuation, swap hedging and rate stress testing
#[derive(Parser)]
#[command(name = "ldi")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, default_value = "table", global = true)]
    pub format: OutputFormat,

    /// Enable debug logging on stderr (otherwise RUST_LOG, default warn)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// TOML run file with curve, liability, risk, hedge and scenario settings
    #[arg(short, long, global = true, env = "LDI_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Liability PV, DV01, effective duration and key-rate exposures
    Risk(RiskArgs),

    /// Size a swap hedge against the liability
    Hedge(HedgeArgs),

    /// Liability and hedge P&L under standard curve shocks
    Stress(StressArgs),

    /// Vasicek short-rate scenarios and liability PV distribution
    Scenarios(ScenarioArgs),
}

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table format
    #[default]
    Table,
    /// JSON format
    Json,
}
