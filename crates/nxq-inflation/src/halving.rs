// crates/nxq-inflation/src/halving.rs
//
// Bitcoin-style halving emission schedule over daily epochs.
//
// - Base emission: `daily_emission` per day (default 7200 NXQ)
// - Halving interval: `halving_interval_epochs` days (default 1461, ~4 years)
// - Period p mints daily_emission / 2^p per day
//
// All functions here are pure and deterministic. Callers always pass the
// epoch that has *completed*, never the one that is starting.

use serde::{Deserialize, Serialize};

use nxq_core::amount::{as_string, Amount};
use nxq_core::epoch::DAY_EPOCH_ID;
use nxq_core::error::NxqError;

use crate::params::InflationParams;

/// Halving period that `current_epoch` belongs to.
///
/// With `start_epoch = 1` and `halving_interval = 1461`:
///   - Period 0: epochs 1..=1461
///   - Period 1: epochs 1462..=2922
///   - Period 2: epochs 2923..=4383
///
/// Epochs before `start_epoch` are reported as period 0.
///
/// # Panics
/// Panics if `halving_interval` is zero. Param validation rejects that value
/// before it can be stored.
pub fn calculate_halving_period(
    current_epoch: u64,
    start_epoch: u64,
    halving_interval: u64,
) -> u64 {
    if current_epoch < start_epoch {
        return 0;
    }

    let epochs_since_start = current_epoch - start_epoch + 1;
    (epochs_since_start - 1) / halving_interval
}

/// Daily mint amount for a halving period: `daily_emission / 2^period`,
/// truncating.
///
/// Returns 0 once the shift exhausts the amount (period >= 128 at the
/// latest). Zero is a valid terminal state; callers skip the mint.
pub fn calculate_daily_emission(daily_emission: Amount, period: u64) -> Amount {
    u32::try_from(period)
        .ok()
        .and_then(|shift| daily_emission.checked_shr(shift))
        .unwrap_or(0)
}

/// Check that minting `mint_amount` keeps total supply within `max_supply`.
///
/// Reaching the cap exactly is allowed.
///
/// # Errors
/// Returns `NxqError::SupplyCap` if `current_supply + mint_amount` exceeds
/// `max_supply` or overflows.
pub fn validate_supply_cap(
    current_supply: Amount,
    mint_amount: Amount,
    max_supply: Amount,
) -> Result<(), NxqError> {
    match current_supply.checked_add(mint_amount) {
        Some(new_supply) if new_supply <= max_supply => Ok(()),
        Some(new_supply) => Err(NxqError::SupplyCap(format!(
            "minting {} would exceed max supply: current={}, max={}, would_be={}",
            mint_amount, current_supply, max_supply, new_supply
        ))),
        None => Err(NxqError::SupplyCap(format!(
            "minting {} overflows supply: current={}, max={}",
            mint_amount, current_supply, max_supply
        ))),
    }
}

/// Whether `current_epoch` sits in a later halving period than
/// `last_halving_epoch` under the same parameters.
///
/// This only detects time-driven halvings. A governance change to the
/// interval can leave the stored period stale while this returns false;
/// the epoch-end handler compares periods separately for that case.
pub fn should_halve(
    current_epoch: u64,
    start_epoch: u64,
    last_halving_epoch: u64,
    halving_interval: u64,
) -> bool {
    let current_period = calculate_halving_period(current_epoch, start_epoch, halving_interval);
    let last_period = calculate_halving_period(last_halving_epoch, start_epoch, halving_interval);

    current_period > last_period
}

/// First epoch of the period after the one `current_epoch` is in.
pub fn next_halving_epoch(current_epoch: u64, start_epoch: u64, halving_interval: u64) -> u64 {
    let current_period = calculate_halving_period(current_epoch, start_epoch, halving_interval);
    start_epoch.saturating_add((current_period + 1).saturating_mul(halving_interval))
}

/// Tokens still mintable before the cap, floored at zero.
pub fn estimate_remaining_supply(current_supply: Amount, max_supply: Amount) -> Amount {
    max_supply.saturating_sub(current_supply)
}

/// Emission only advances on daily epochs.
pub fn is_valid_epoch_for_halving(epoch_identifier: &str) -> bool {
    epoch_identifier == DAY_EPOCH_ID
}

/// Snapshot of where an epoch sits in the halving schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HalvingScheduleInfo {
    pub current_period: u64,
    #[serde(with = "as_string")]
    pub current_emission: Amount,
    pub next_halving_epoch: u64,
    pub epochs_until_halving: u64,
}

pub fn halving_schedule_info(
    current_epoch: u64,
    start_epoch: u64,
    params: &InflationParams,
) -> HalvingScheduleInfo {
    let interval = params.halving_interval_epochs;
    let current_period = calculate_halving_period(current_epoch, start_epoch, interval);
    let next = next_halving_epoch(current_epoch, start_epoch, interval);

    HalvingScheduleInfo {
        current_period,
        current_emission: calculate_daily_emission(params.daily_emission, current_period),
        next_halving_epoch: next,
        epochs_until_halving: next.saturating_sub(current_epoch),
    }
}
