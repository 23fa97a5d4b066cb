// crates/nxq-core/src/traits.rs
//
// Interfaces to modules the inflation engine consumes but does not own.

use crate::amount::{Amount, Coin};
use crate::context::BlockContext;
use crate::error::NxqError;

/// Supply queries and mint-and-send for the bank module.
///
/// Implemented by the chain's bank keeper; `nxq-inflation` ships an
/// in-memory implementation for simulation and tests.
pub trait BankKeeper {
    /// Total supply of `denom` currently in existence.
    fn get_supply(&self, denom: &str) -> Amount;

    /// Mint `coin` into the module account and transfer all of it to
    /// `recipient`. Either both steps apply or neither does.
    fn mint_and_send(&mut self, coin: &Coin, recipient: &str) -> Result<(), NxqError>;
}

/// Read access to the EVM module's governance params.
pub trait EvmParamsReader: Send + Sync {
    /// Multi-sig mint destination configured in EVM params; empty if unset.
    fn multi_sig_address(&self) -> String;
}

/// Callbacks the epoch ticker fires at every epoch boundary.
///
/// `epoch_number` is the number of the epoch that is *starting*.
pub trait EpochHooks {
    fn before_epoch_start(
        &mut self,
        ctx: &mut BlockContext,
        epoch_identifier: &str,
        epoch_number: u64,
    );

    fn after_epoch_end(
        &mut self,
        ctx: &mut BlockContext,
        epoch_identifier: &str,
        epoch_number: u64,
    );
}
