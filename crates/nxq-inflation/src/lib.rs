// crates/nxq-inflation/src/lib.rs
//
// nxq-inflation: Halving emission schedule for the NXQ chain.
//
// Replaces exponential inflation with a Bitcoin-style schedule: a fixed
// daily emission, halved every `halving_interval_epochs` daily epochs,
// minted in full to a multi-sig address and capped by `max_supply`.
//
// All monetary values are tracked in anxq (10^-18 NXQ).

pub mod bank;
pub mod destination;
pub mod events;
pub mod genesis;
pub mod halving;
pub mod hooks;
pub mod keeper;
pub mod params;
pub mod state;

// Re-export key types for ergonomic access from downstream crates.
pub use bank::InMemoryBank;
pub use destination::{DestinationSource, MintDestination};
pub use genesis::GenesisState;
pub use halving::{
    calculate_daily_emission, calculate_halving_period, estimate_remaining_supply,
    halving_schedule_info, next_halving_epoch, should_halve, validate_supply_cap,
    HalvingScheduleInfo,
};
pub use hooks::{EpochOutcome, Hooks, MintReport};
pub use keeper::InflationKeeper;
pub use params::{InflationParams, DEFAULT_MULTI_SIG_ADDRESS, MODULE_NAME};
pub use state::HalvingState;
