//! Risk command implementation.
//!
//! Values the configured liability on the base curve and reports its
//! parallel and key-rate sensitivities.

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use ldi_liabilities::LiabilityInstrument;
use ldi_risk::{RiskConfig, RiskReport};

use crate::cli::OutputFormat;
use crate::config::RunConfig;
use crate::output::{print_header, print_json, print_output, print_table, KeyValue};

/// Arguments for the risk command.
#[derive(Args, Debug)]
pub struct RiskArgs {
    /// Bump size in basis points (overrides the run file)
    #[arg(long)]
    pub bump_bps: Option<f64>,

    /// Key-rate tenors to report, e.g. `--tenor 10 --tenor 20` (default: every pillar)
    #[arg(long = "tenor")]
    pub tenors: Vec<f64>,
}

#[derive(Serialize)]
struct RiskOutput<'a> {
    liability: &'a LiabilityInstrument,
    report: &'a RiskReport,
}

#[derive(Tabled)]
struct KeyRateRow {
    #[tabled(rename = "Pillar")]
    tenor: String,
    #[tabled(rename = "KR01")]
    kr01: String,
    #[tabled(rename = "KRD")]
    krd: String,
}

/// Execute the risk command.
pub fn execute(args: &RiskArgs, run: &RunConfig, format: OutputFormat) -> Result<()> {
    let curve = run.curve.build()?;
    let config = RiskConfig {
        bump_bps: args.bump_bps.unwrap_or(run.risk.bump_bps),
        key_rate_tenors: if args.tenors.is_empty() {
            run.risk.key_rate_tenors.clone()
        } else {
            args.tenors.clone()
        },
        ..run.risk.clone()
    };

    let report = RiskReport::compute(&run.liability, &curve, &config)?;

    match format {
        OutputFormat::Json => print_json(&RiskOutput {
            liability: &run.liability,
            report: &report,
        })?,
        OutputFormat::Table => {
            let duration = report
                .effective_duration
                .map_or_else(|| "n/a".to_string(), |d| format!("{d:.4}"));
            let summary = vec![
                KeyValue::new("Liability", run.liability.describe()),
                KeyValue::number("Present Value", report.pv, 2),
                KeyValue::number(format!("DV01 ({}bp)", config.bump_bps), report.dv01, 4),
                KeyValue::new("Effective Duration", duration),
            ];
            print_header("Liability Risk");
            print_output(&summary, format)?;

            let rows: Vec<KeyRateRow> = report
                .key_rate_dv01s
                .exposures
                .iter()
                .map(|e| KeyRateRow {
                    tenor: format!("{}y", e.tenor),
                    kr01: format!("{:.4}", e.value),
                    krd: report
                        .key_rate_durations
                        .as_ref()
                        .and_then(|krd| krd.at_index(e.index))
                        .map_or_else(|| "n/a".to_string(), |d| format!("{d:.4}")),
                })
                .collect();
            print_header("Key-Rate Exposures");
            print_table(&rows)?;
        }
    }
    Ok(())
}
