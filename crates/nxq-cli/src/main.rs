// crates/nxq-cli/src/main.rs
//
// CLI entrypoint for the NXQ inflation tools.
//
// Inspects the halving schedule, simulates daily epochs against a local
// store, and works with genesis documents.

mod commands;
mod config;
mod node;
mod output;
mod ticker;

use clap::{Parser, Subcommand};
use commands::genesis::GenesisCmd;
use commands::schedule::ScheduleCmd;
use commands::simulate::SimulateCmd;
use commands::CommandContext;
use config::NodeConfig;
use output::OutputFormat;

/// NXQ inflation CLI.
#[derive(Parser, Debug)]
#[command(
    name = "nxq",
    version = "0.1.0",
    about = "NXQ halving emission tools: schedule, simulation, genesis"
)]
struct Cli {
    /// Path to the TOML configuration file.
    #[arg(long, global = true, default_value = "~/.nxq/config.toml")]
    config: String,

    /// Output format.
    #[arg(long, global = true, value_enum, default_value = "table")]
    output: OutputFormat,

    /// Use a throwaway in-memory store seeded from genesis.
    #[arg(long, global = true)]
    memory: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Top-level subcommands.
#[derive(Debug, Subcommand)]
enum Commands {
    /// Show where an epoch sits in the halving schedule.
    Schedule(ScheduleCmd),

    /// Advance daily epochs and mint through the inflation module.
    Simulate(SimulateCmd),

    /// Genesis helpers: default, validate.
    #[command(subcommand)]
    Genesis(GenesisCmd),

    /// Display persisted inflation state.
    State,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Config is read before the subscriber exists, so a load failure is
    // reported once logging is up.
    let loaded = NodeConfig::load(&cli.config);
    let config = loaded.as_ref().cloned().unwrap_or_default();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.log_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    match &loaded {
        Ok(_) => tracing::debug!("Loaded configuration from {}", cli.config),
        Err(e) => tracing::warn!(
            "Could not load config from {}: {}. Using defaults.",
            cli.config,
            e
        ),
    }

    let ctx = CommandContext {
        config,
        output: cli.output,
        memory: cli.memory,
    };

    match &cli.command {
        Commands::Schedule(cmd) => commands::schedule::run(&ctx, cmd)?,
        Commands::Simulate(cmd) => commands::simulate::run(&ctx, cmd)?,
        Commands::Genesis(cmd) => commands::genesis::run(cmd)?,
        Commands::State => commands::state::run(&ctx)?,
    }

    Ok(())
}
