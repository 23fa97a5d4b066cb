// crates/nxq-inflation/src/events.rs
//
// Events and telemetry emitted by the epoch-end handler.

use nxq_core::amount::Amount;
use nxq_core::context::Event;

use crate::params::MODULE_NAME;

pub const EVENT_TYPE_MINT: &str = "mint";

pub const ATTRIBUTE_EPOCH_NUMBER: &str = "epoch_number";
pub const ATTRIBUTE_EPOCH_PROVISIONS: &str = "epoch_provisions";
pub const ATTRIBUTE_AMOUNT: &str = "amount";
pub const ATTRIBUTE_HALVING_PERIOD: &str = "halving_period";
pub const ATTRIBUTE_MULTI_SIG_ADDRESS: &str = "multi_sig_address";

/// The per-day mint event. `ended_epoch` is the epoch whose emission this is.
pub fn mint_event(ended_epoch: u64, emission: Amount, minted: Amount, period: u64) -> Event {
    Event::new(EVENT_TYPE_MINT)
        .with_attribute(ATTRIBUTE_EPOCH_NUMBER, ended_epoch)
        .with_attribute(ATTRIBUTE_EPOCH_PROVISIONS, emission)
        .with_attribute(ATTRIBUTE_AMOUNT, minted)
        .with_attribute(ATTRIBUTE_HALVING_PERIOD, period)
}

/// Companion event naming a destination that came from EVM params.
pub fn multi_sig_event(address: &str) -> Event {
    Event::new(EVENT_TYPE_MINT).with_attribute(ATTRIBUTE_MULTI_SIG_ADDRESS, address)
}

/// Record a completed mint: one count, and the amount as a gauge
/// (amounts routinely exceed u64).
pub fn record_mint(denom: &str, period: u64, amount: Amount) {
    let period = period.to_string();
    metrics::counter!(
        format!("{}.halving.mint.count", MODULE_NAME),
        "denom" => denom.to_string(),
        "period" => period.clone()
    )
    .increment(1);
    metrics::gauge!(
        format!("{}.halving.mint.amount", MODULE_NAME),
        "denom" => denom.to_string(),
        "period" => period
    )
    .set(amount as f64);
}

pub fn record_skipped_epoch() {
    metrics::counter!(format!("{}.skipped.epochs", MODULE_NAME)).increment(1);
}
