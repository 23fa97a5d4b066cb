// crates/nxq-cli/src/commands/simulate.rs
//
// `nxq simulate`: advance the simulated chain day by day, running every
// epoch boundary through the inflation module, and report what each
// boundary did.

use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use nxq_core::amount::{as_string, format_nxq, Amount};
use nxq_core::epoch::DAY_EPOCH_ID;
use nxq_inflation::EpochOutcome;

use super::CommandContext;
use crate::node::TickRecord;
use crate::output::{format_json, format_table, yes_no, OutputFormat};

/// Arguments for the simulate command.
#[derive(Debug, Args)]
pub struct SimulateCmd {
    /// Number of days to advance.
    #[arg(long, default_value_t = 1)]
    epochs: u64,

    /// Set the halving interval before ticking, as a governance change would.
    #[arg(long)]
    halving_interval: Option<u64>,

    /// Also list weekly ticks.
    #[arg(long)]
    all: bool,
}

#[derive(Tabled)]
struct TickRow {
    #[tabled(rename = "Epoch")]
    identifier: String,
    #[tabled(rename = "Ended")]
    ended_epoch: u64,
    #[tabled(rename = "Height")]
    height: u64,
    #[tabled(rename = "Outcome")]
    outcome: String,
    #[tabled(rename = "Period")]
    period: String,
    #[tabled(rename = "Minted")]
    minted: String,
    #[tabled(rename = "Destination")]
    destination: String,
    #[tabled(rename = "Halving")]
    halving: String,
    #[tabled(rename = "Reconciled")]
    reconciled: String,
}

#[derive(Serialize)]
struct SimulationView {
    ticks: Vec<TickRecord>,
    #[serde(with = "as_string")]
    total_minted: Amount,
    #[serde(with = "as_string")]
    supply: Amount,
}

pub fn outcome_label(outcome: &EpochOutcome) -> &'static str {
    match outcome {
        EpochOutcome::InflationDisabled { .. } => "inflation disabled",
        EpochOutcome::NonDailyEpoch => "not a daily epoch",
        EpochOutcome::ZeroEmission { .. } => "zero emission",
        EpochOutcome::SupplyCapReached { .. } => "supply cap reached",
        EpochOutcome::Minted(_) => "minted",
    }
}

fn tick_row(record: &TickRecord) -> TickRow {
    let blank = || "-".to_string();
    let mut row = TickRow {
        identifier: record.identifier.clone(),
        ended_epoch: record.epoch_number.saturating_sub(1),
        height: record.height,
        outcome: outcome_label(&record.outcome).to_string(),
        period: blank(),
        minted: blank(),
        destination: blank(),
        halving: blank(),
        reconciled: blank(),
    };

    match &record.outcome {
        EpochOutcome::Minted(report) => {
            row.period = report.period.to_string();
            row.minted = format_nxq(report.minted.amount);
            row.destination = report.destination.source.to_string();
            row.halving = yes_no(report.natural_halving);
            row.reconciled = yes_no(report.period_mismatch && !report.natural_halving);
        }
        EpochOutcome::ZeroEmission { period } => row.period = period.to_string(),
        EpochOutcome::InflationDisabled { skipped_epochs } => {
            row.outcome = format!("{} ({} skipped)", row.outcome, skipped_epochs);
        }
        _ => {}
    }
    row
}

/// Run the simulate command.
pub fn run(ctx: &CommandContext, cmd: &SimulateCmd) -> Result<(), Box<dyn std::error::Error>> {
    let mut node = ctx.open_node()?;

    if let Some(interval) = cmd.halving_interval {
        let mut params = node.keeper.get_params()?;
        let previous = params.halving_interval_epochs;
        params.halving_interval_epochs = interval;
        node.keeper.set_params(&params)?;
        tracing::info!(previous, interval, "Halving interval updated");
    }

    let supply_before = node.supply()?;
    let mut ticks = node.advance_days(cmd.epochs)?;

    let supply = node.supply()?;
    tracing::info!(
        days = cmd.epochs,
        current_day = node.ticker.current_day(),
        "Simulation advanced"
    );

    if !cmd.all {
        ticks.retain(|t| t.identifier == DAY_EPOCH_ID);
    }

    let view = SimulationView {
        ticks,
        total_minted: supply.saturating_sub(supply_before),
        supply,
    };

    match ctx.output {
        OutputFormat::Json => println!("{}", format_json(&view)),
        OutputFormat::Table => {
            let rows: Vec<TickRow> = view.ticks.iter().map(tick_row).collect();
            println!("{}", format_table(&rows));
            println!();
            println!(
                "Minted: {}  |  Total supply: {}",
                format_nxq(view.total_minted),
                format_nxq(view.supply)
            );
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use nxq_core::amount::{Coin, ANXQ_PER_NXQ};
    use nxq_inflation::{DestinationSource, MintDestination, MintReport};

    fn minted(natural_halving: bool, period_mismatch: bool) -> TickRecord {
        TickRecord {
            identifier: DAY_EPOCH_ID.to_string(),
            epoch_number: 1463,
            height: 100,
            outcome: EpochOutcome::Minted(MintReport {
                ended_epoch: 1462,
                period: 1,
                previous_period: 0,
                minted: Coin::new("anxq", 3600 * ANXQ_PER_NXQ),
                destination: MintDestination {
                    source: DestinationSource::InflationParams,
                    address: "nxq1qgpqyqszqgpqyqszqgpqyqszqgpqyqsz5ekpet".to_string(),
                },
                natural_halving,
                period_mismatch,
            }),
        }
    }

    #[test]
    fn test_halving_row() {
        let row = tick_row(&minted(true, true));
        assert_eq!(row.ended_epoch, 1462);
        assert_eq!(row.minted, "3600 NXQ");
        assert_eq!(row.destination, "inflation-params");
        assert_eq!(row.halving, "yes");
        // A natural halving also changes the period; it is not a reconciliation.
        assert_eq!(row.reconciled, "no");
    }

    #[test]
    fn test_reconciliation_row() {
        let row = tick_row(&minted(false, true));
        assert_eq!(row.halving, "no");
        assert_eq!(row.reconciled, "yes");
    }

    #[test]
    fn test_skip_rows() {
        let record = TickRecord {
            identifier: DAY_EPOCH_ID.to_string(),
            epoch_number: 5,
            height: 10,
            outcome: EpochOutcome::InflationDisabled { skipped_epochs: 4 },
        };
        let row = tick_row(&record);
        assert_eq!(row.outcome, "inflation disabled (4 skipped)");
        assert_eq!(row.minted, "-");
    }
}
