// crates/nxq-cli/src/commands/state.rs
//
// `nxq state`: display persisted inflation module state.

use serde::Serialize;
use tabled::Tabled;

use nxq_core::amount::{as_string, format_nxq, Amount};
use nxq_inflation::{HalvingState, InflationParams};

use super::CommandContext;
use crate::output::{format_json, format_table, yes_no, OutputFormat};

#[derive(Serialize)]
struct StateView {
    params: InflationParams,
    halving_data: HalvingState,
    skipped_epochs: u64,
    period: u64,
    #[serde(with = "as_string")]
    epoch_mint_provision: Amount,
    #[serde(with = "as_string")]
    supply: Amount,
    current_day_epoch: u64,
    current_week_epoch: u64,
    height: u64,
}

#[derive(Tabled)]
struct FieldRow {
    #[tabled(rename = "Field")]
    field: &'static str,
    #[tabled(rename = "Value")]
    value: String,
}

fn row(field: &'static str, value: impl ToString) -> FieldRow {
    FieldRow {
        field,
        value: value.to_string(),
    }
}

/// Run the state command.
pub fn run(ctx: &CommandContext) -> Result<(), Box<dyn std::error::Error>> {
    let node = ctx.open_node()?;
    let keeper = &node.keeper;

    let view = StateView {
        params: keeper.get_params()?,
        halving_data: keeper.get_halving_data()?,
        skipped_epochs: keeper.get_skipped_epochs()?,
        period: keeper.get_period()?,
        epoch_mint_provision: keeper.get_epoch_mint_provision()?,
        supply: node.supply()?,
        current_day_epoch: node.ticker.current_day(),
        current_week_epoch: node.ticker.current_week(),
        height: node.ticker.height(),
    };

    match ctx.output {
        OutputFormat::Json => println!("{}", format_json(&view)),
        OutputFormat::Table => {
            let rows = vec![
                row("Inflation enabled", yes_no(view.params.enable_inflation)),
                row("Mint denom", &view.params.mint_denom),
                row("Daily emission", format_nxq(view.params.daily_emission)),
                row("Halving interval", view.params.halving_interval_epochs),
                row("Max supply", format_nxq(view.params.max_supply)),
                row("Multi-sig address", &view.params.multi_sig_address),
                row("Start epoch", view.halving_data.start_epoch),
                row("Current period", view.halving_data.current_period),
                row("Last halving epoch", view.halving_data.last_halving_epoch),
                row("Skipped epochs", view.skipped_epochs),
                row("Last daily mint", format_nxq(view.epoch_mint_provision)),
                row("Total supply", format_nxq(view.supply)),
                row("Current day epoch", view.current_day_epoch),
                row("Current week epoch", view.current_week_epoch),
                row("Block height", view.height),
            ];
            println!("{}", format_table(&rows));
        }
    }

    Ok(())
}
