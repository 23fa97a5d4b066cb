// crates/nxq-cli/src/commands/schedule.rs
//
// `nxq schedule`: where an epoch sits in the halving schedule, and a
// projection of the periods ahead under the stored params.

use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use nxq_core::amount::{as_string, format_nxq, Amount};
use nxq_inflation::{
    calculate_daily_emission, estimate_remaining_supply, HalvingScheduleInfo, InflationParams,
};

use super::CommandContext;
use crate::output::{format_json, format_table, OutputFormat};

/// Arguments for the schedule command.
#[derive(Debug, Args)]
pub struct ScheduleCmd {
    /// Epoch to report on. Defaults to the running day epoch.
    #[arg(long)]
    epoch: Option<u64>,

    /// Number of halving periods to project, starting with the current one.
    #[arg(long, default_value_t = 5)]
    periods: u64,
}

/// One projected halving period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PeriodProjection {
    pub period: u64,
    pub first_epoch: u64,
    pub last_epoch: u64,
    #[serde(with = "as_string")]
    pub daily_emission: Amount,
    /// Mintable in this period given the supply cap.
    #[serde(with = "as_string")]
    pub period_total: Amount,
    #[serde(with = "as_string")]
    pub supply_after: Amount,
}

#[derive(Tabled)]
struct ProjectionRow {
    #[tabled(rename = "Period")]
    period: u64,
    #[tabled(rename = "Epochs")]
    epochs: String,
    #[tabled(rename = "Daily Emission")]
    daily_emission: String,
    #[tabled(rename = "Period Total")]
    period_total: String,
    #[tabled(rename = "Supply After")]
    supply_after: String,
}

#[derive(Serialize)]
struct ScheduleView {
    epoch: u64,
    start_epoch: u64,
    schedule: HalvingScheduleInfo,
    #[serde(with = "as_string")]
    remaining_supply: Amount,
    projection: Vec<PeriodProjection>,
}

/// Project `count` periods starting at `from_period`. Days that would breach
/// the cap mint nothing, so each period mints whole days only.
pub fn project_periods(
    params: &InflationParams,
    start_epoch: u64,
    from_period: u64,
    count: u64,
    current_supply: Amount,
) -> Vec<PeriodProjection> {
    let interval = params.halving_interval_epochs;
    let mut supply = current_supply;

    (from_period..from_period.saturating_add(count))
        .map(|period| {
            let first_epoch = start_epoch.saturating_add(period.saturating_mul(interval));
            let daily_emission = calculate_daily_emission(params.daily_emission, period);
            let remaining = estimate_remaining_supply(supply, params.max_supply);
            let mintable_days = if daily_emission == 0 {
                0
            } else {
                (remaining / daily_emission).min(Amount::from(interval))
            };
            let period_total = mintable_days * daily_emission;
            supply += period_total;

            PeriodProjection {
                period,
                first_epoch,
                last_epoch: first_epoch.saturating_add(interval.saturating_sub(1)),
                daily_emission,
                period_total,
                supply_after: supply,
            }
        })
        .collect()
}

/// Run the schedule command.
pub fn run(ctx: &CommandContext, cmd: &ScheduleCmd) -> Result<(), Box<dyn std::error::Error>> {
    let node = ctx.open_node()?;
    let epoch = cmd.epoch.unwrap_or_else(|| node.ticker.current_day());
    let params = node.keeper.get_params()?;
    let start_epoch = node.keeper.get_halving_data()?.start_epoch;
    let schedule = node.keeper.halving_schedule(epoch)?;
    let supply = node.supply()?;

    let view = ScheduleView {
        epoch,
        start_epoch,
        remaining_supply: estimate_remaining_supply(supply, params.max_supply),
        projection: project_periods(
            &params,
            start_epoch,
            schedule.current_period,
            cmd.periods,
            supply,
        ),
        schedule,
    };

    match ctx.output {
        OutputFormat::Json => println!("{}", format_json(&view)),
        OutputFormat::Table => {
            println!("Halving schedule at epoch {}", view.epoch);
            println!(
                "Period: {}  |  Daily emission: {}  |  Next halving: epoch {} ({} epochs away)",
                view.schedule.current_period,
                format_nxq(view.schedule.current_emission),
                view.schedule.next_halving_epoch,
                view.schedule.epochs_until_halving
            );
            println!("Remaining before cap: {}", format_nxq(view.remaining_supply));
            println!();

            let rows: Vec<ProjectionRow> = view
                .projection
                .iter()
                .map(|p| ProjectionRow {
                    period: p.period,
                    epochs: format!("{}-{}", p.first_epoch, p.last_epoch),
                    daily_emission: format_nxq(p.daily_emission),
                    period_total: format_nxq(p.period_total),
                    supply_after: format_nxq(p.supply_after),
                })
                .collect();
            println!("{}", format_table(&rows));
        }
    }

    Ok(())
}
