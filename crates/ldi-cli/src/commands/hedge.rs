//! Hedge command implementation.
//!
//! Sizes payer-fixed swaps at par against the configured liability, either
//! one swap matching parallel DV01 or one swap per key rate.

use anyhow::Result;
use clap::Args;
use tabled::Tabled;

use ldi_curves::ZeroCurve;
use ldi_risk::{DV01Hedge, HedgeConfig, KeyRateHedge};
use ldi_swaps::SizedSwap;

use crate::cli::OutputFormat;
use crate::config::RunConfig;
use crate::output::{print_header, print_json, print_note, print_output, print_table, KeyValue};

/// Arguments for the hedge command.
#[derive(Args, Debug)]
pub struct HedgeArgs {
    /// Neutralize key-rate DV01s with one swap per key maturity
    #[arg(long)]
    pub key_rate: bool,

    /// Single-swap maturity in years (overrides the run file)
    #[arg(long)]
    pub maturity: Option<u32>,

    /// Key-rate hedge maturities, e.g. `--key-maturity 10 --key-maturity 20`
    #[arg(long = "key-maturity")]
    pub key_maturities: Vec<u32>,
}

#[derive(Tabled)]
pub(crate) struct SwapRow {
    #[tabled(rename = "Swap")]
    name: String,
    #[tabled(rename = "Direction")]
    direction: String,
    #[tabled(rename = "Notional")]
    notional: String,
    #[tabled(rename = "Fixed Rate")]
    fixed_rate: String,
}

impl From<&SizedSwap> for SwapRow {
    fn from(swap: &SizedSwap) -> Self {
        Self {
            name: format!("{}y x{}/yr", swap.maturity_years(), swap.payments_per_year()),
            direction: swap.direction().to_string(),
            notional: format!("{:.2}", swap.notional()),
            fixed_rate: format!("{:.4}%", swap.fixed_rate() * 100.0),
        }
    }
}

/// The hedge a command should run with.
pub(crate) enum SizedHedge {
    Single(DV01Hedge),
    KeyRate(KeyRateHedge),
}

impl SizedHedge {
    pub(crate) fn swaps(&self) -> &[SizedSwap] {
        match self {
            SizedHedge::Single(h) => std::slice::from_ref(&h.swap),
            SizedHedge::KeyRate(h) => &h.swaps,
        }
    }
}

pub(crate) fn hedge_config(args: &HedgeArgs, run: &RunConfig) -> HedgeConfig {
    HedgeConfig {
        maturity_years: args.maturity.unwrap_or(run.hedge.maturity_years),
        key_rate_maturities: if args.key_maturities.is_empty() {
            run.hedge.key_rate_maturities.clone()
        } else {
            args.key_maturities.clone()
        },
        ..run.hedge.clone()
    }
}

pub(crate) fn size_hedge(
    key_rate: bool,
    hedge: &HedgeConfig,
    run: &RunConfig,
    curve: &ZeroCurve,
) -> Result<SizedHedge> {
    hedge.validate()?;
    let sized = if key_rate {
        SizedHedge::KeyRate(KeyRateHedge::from_config(&run.liability, curve, hedge, &run.risk)?)
    } else {
        SizedHedge::Single(DV01Hedge::build(
            &run.liability,
            curve,
            hedge.maturity_years,
            hedge.payments_per_year,
            run.risk.bump_bps,
        )?)
    };
    Ok(sized)
}

/// Execute the hedge command.
pub fn execute(args: &HedgeArgs, run: &RunConfig, format: OutputFormat) -> Result<()> {
    let curve = run.curve.build()?;
    let hedge = hedge_config(args, run);
    let sized = size_hedge(args.key_rate, &hedge, run, &curve)?;

    if format == OutputFormat::Json {
        match &sized {
            SizedHedge::Single(h) => print_json(h)?,
            SizedHedge::KeyRate(h) => print_json(h)?,
        }
        return Ok(());
    }

    let rows: Vec<SwapRow> = sized.swaps().iter().map(SwapRow::from).collect();
    match &sized {
        SizedHedge::Single(h) => {
            print_header("DV01 Hedge");
            print_table(&rows)?;
            let summary = vec![
                KeyValue::number("Liability DV01", h.liability_dv01, 4),
                KeyValue::number("Hedge DV01", h.hedge_dv01, 4),
                KeyValue::number("Net DV01", h.net_dv01, 4),
            ];
            print_output(&summary, format)?;
        }
        SizedHedge::KeyRate(h) => {
            print_header("Key-Rate Hedge");
            print_table(&rows)?;
            let mut summary = Vec::new();
            for (liab, residual) in h.liability_kr01.exposures.iter().zip(&h.residual_kr01.exposures) {
                summary.push(KeyValue::number(format!("Liability KR01 @{}y", liab.tenor), liab.value, 4));
                summary.push(KeyValue::number(format!("Net KR01 @{}y", residual.tenor), residual.value, 6));
            }
            summary.push(KeyValue::number("Liability DV01", h.liability_dv01, 4));
            summary.push(KeyValue::number("Net DV01", h.net_dv01, 4));
            print_output(&summary, format)?;
            print_note("Parallel DV01 is not targeted; the net figure is the residual from untargeted pillars.");
        }
    }
    Ok(())
}
