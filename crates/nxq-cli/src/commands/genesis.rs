// crates/nxq-cli/src/commands/genesis.rs
//
// `nxq genesis {default, validate}`: genesis document helpers.

use clap::Subcommand;
use std::fs;

use nxq_inflation::GenesisState;

use crate::output::format_json;

/// Genesis subcommands.
#[derive(Debug, Subcommand)]
pub enum GenesisCmd {
    /// Print the default genesis state as JSON.
    Default,
    /// Validate a JSON genesis file.
    Validate {
        /// Path to the genesis JSON file.
        file: String,
    },
}

/// Run the genesis subcommand.
pub fn run(cmd: &GenesisCmd) -> Result<(), Box<dyn std::error::Error>> {
    match cmd {
        GenesisCmd::Default => {
            println!("{}", format_json(&GenesisState::default()));
            Ok(())
        }
        GenesisCmd::Validate { file } => validate_file(file),
    }
}

fn validate_file(path: &str) -> Result<(), Box<dyn std::error::Error>> {
    let contents = fs::read_to_string(path)?;
    let genesis = GenesisState::from_json(&contents)?;
    genesis.validate()?;

    println!("Genesis file is valid: {}", path);
    println!(
        "  start epoch {}, halving every {} epochs, multi-sig {}",
        genesis.halving_data.start_epoch,
        genesis.params.halving_interval_epochs,
        if genesis.params.multi_sig_address.is_empty() {
            "(default)"
        } else {
            genesis.params.multi_sig_address.as_str()
        }
    );
    Ok(())
}
