//! Stress command implementation.
//!
//! Runs the standard shock set (±100bp parallel, +25bp at every pillar)
//! against the liability and, optionally, a sized hedge.

use anyhow::Result;
use clap::{Args, ValueEnum};
use tabled::Tabled;

use ldi_risk::{run_stress, standard_shocks, StressRow};
use ldi_swaps::Hedge;

use crate::cli::OutputFormat;
use crate::commands::hedge::{size_hedge, SwapRow};
use crate::config::RunConfig;
use crate::output::{print_header, print_json, print_table, signed};

/// Which hedge to stress alongside the liability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum HedgeChoice {
    /// Liability only
    None,
    /// One swap matching parallel DV01
    #[default]
    Single,
    /// One swap per key rate
    KeyRate,
}

/// Arguments for the stress command.
#[derive(Args, Debug)]
pub struct StressArgs {
    /// Hedge to include
    #[arg(long, value_enum, default_value = "single")]
    pub hedge: HedgeChoice,
}

#[derive(Tabled)]
struct PnlRow {
    #[tabled(rename = "Shock")]
    label: String,
    #[tabled(rename = "Liability")]
    liability: String,
    #[tabled(rename = "Hedge")]
    hedge: String,
    #[tabled(rename = "Net")]
    net: String,
}

impl From<&StressRow> for PnlRow {
    fn from(row: &StressRow) -> Self {
        Self {
            label: row.label.clone(),
            liability: signed(row.liability_pnl),
            hedge: signed(row.hedge_pnl),
            net: signed(row.net_pnl),
        }
    }
}

/// Execute the stress command.
pub fn execute(args: &StressArgs, run: &RunConfig, format: OutputFormat) -> Result<()> {
    let curve = run.curve.build()?;
    let sized = match args.hedge {
        HedgeChoice::None => None,
        HedgeChoice::Single => Some(size_hedge(false, &run.hedge, run, &curve)?),
        HedgeChoice::KeyRate => Some(size_hedge(true, &run.hedge, run, &curve)?),
    };
    let hedge = sized.as_ref().map_or(Hedge::None, |s| Hedge::Book(s.swaps()));

    let rows = run_stress(&run.liability, &curve, hedge, &standard_shocks(&curve));

    match format {
        OutputFormat::Json => print_json(&rows)?,
        OutputFormat::Table => {
            if !hedge.is_empty() {
                let swaps: Vec<SwapRow> = hedge.swaps().iter().map(SwapRow::from).collect();
                print_header("Hedge");
                print_table(&swaps)?;
            }
            let table: Vec<PnlRow> = rows.iter().map(PnlRow::from).collect();
            print_header("Stress P&L");
            print_table(&table)?;
        }
    }
    Ok(())
}
