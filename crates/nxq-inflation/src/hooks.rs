// crates/nxq-inflation/src/hooks.rs
//
// Epoch-end handler: the daily mint and halving state machine.
//
// The epoch ticker calls AfterEpochEnd with the number of the epoch that is
// *starting*. All halving math runs against the epoch that just ended
// (`epoch_number - 1`).
//
// Per invocation the handler ends in exactly one state:
//   InflationDisabled -> daily tick counted as skipped, nothing minted
//   NonDailyEpoch     -> no-op
//   ZeroEmission      -> schedule has decayed to zero, nothing minted
//   SupplyCapReached  -> mint would breach max supply, nothing minted
//   Minted            -> coins minted, halving state reconciled, events out
//
// Every state except Minted leaves the halving state untouched. Only a
// failed mint (or a store failure) is an error; the `Hooks` adapter turns
// that into a panic, aborting the block.

use serde::{Deserialize, Serialize};

use nxq_core::amount::{as_string, Amount, Coin};
use nxq_core::context::BlockContext;
use nxq_core::error::NxqError;
use nxq_core::traits::{BankKeeper, EpochHooks};
use nxq_store::KvStore;

use crate::destination::{
    resolve_mint_destination, AddressLookup, DestinationSource, MintDestination,
};
use crate::events::{mint_event, multi_sig_event, record_mint, record_skipped_epoch};
use crate::halving::{
    calculate_daily_emission, calculate_halving_period, is_valid_epoch_for_halving, should_halve,
    validate_supply_cap,
};
use crate::keeper::InflationKeeper;
use crate::params::DEFAULT_MULTI_SIG_ADDRESS;

/// Details of a completed daily mint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MintReport {
    /// The epoch whose emission was minted.
    pub ended_epoch: u64,
    /// Halving period computed for `ended_epoch` under current params.
    pub period: u64,
    /// Period stored before this tick.
    pub previous_period: u64,
    pub minted: Coin,
    pub destination: MintDestination,
    /// The period advanced because enough epochs elapsed.
    pub natural_halving: bool,
    /// The stored period disagreed with the computed one.
    pub period_mismatch: bool,
}

/// Terminal state of one AfterEpochEnd invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum EpochOutcome {
    InflationDisabled { skipped_epochs: u64 },
    NonDailyEpoch,
    ZeroEmission { period: u64 },
    SupplyCapReached {
        #[serde(with = "as_string")]
        current_supply: Amount,
        #[serde(with = "as_string")]
        emission: Amount,
    },
    Minted(MintReport),
}

impl EpochOutcome {
    pub fn minted_amount(&self) -> Amount {
        match self {
            EpochOutcome::Minted(report) => report.minted.amount,
            _ => 0,
        }
    }
}

impl<S: KvStore, B: BankKeeper> InflationKeeper<S, B> {
    /// Nothing happens at epoch start.
    pub fn before_epoch_start(
        &mut self,
        _ctx: &mut BlockContext,
        _epoch_identifier: &str,
        _epoch_number: u64,
    ) {
    }

    /// Run the daily mint for the epoch preceding `epoch_number`.
    ///
    /// # Errors
    /// Returns an error only if the bank fails to mint-and-send or the store
    /// fails. Skip conditions are reported through `EpochOutcome`.
    pub fn after_epoch_end(
        &mut self,
        ctx: &mut BlockContext,
        epoch_identifier: &str,
        epoch_number: u64,
    ) -> Result<EpochOutcome, NxqError> {
        let params = self.get_params()?;

        if !params.enable_inflation {
            if !is_valid_epoch_for_halving(epoch_identifier) {
                return Ok(EpochOutcome::NonDailyEpoch);
            }
            let skipped_epochs = self.get_skipped_epochs()? + 1;
            self.set_skipped_epochs(skipped_epochs)?;
            record_skipped_epoch();

            tracing::debug!(
                height = ctx.height,
                epoch_id = epoch_identifier,
                epoch_number,
                skipped_epochs,
                "skipping inflation mint and allocation"
            );
            return Ok(EpochOutcome::InflationDisabled { skipped_epochs });
        }

        if !is_valid_epoch_for_halving(epoch_identifier) {
            tracing::debug!(
                epoch_id = epoch_identifier,
                "skipping non-daily epoch for halving"
            );
            return Ok(EpochOutcome::NonDailyEpoch);
        }

        let ended_epoch = epoch_number.saturating_sub(1);
        let mut state = self.get_halving_data()?;
        let period = calculate_halving_period(
            ended_epoch,
            state.start_epoch,
            params.halving_interval_epochs,
        );
        let emission = calculate_daily_emission(params.daily_emission, period);

        if emission == 0 {
            tracing::error!(period, ended_epoch, "skipping halving mint: zero daily emission");
            return Ok(EpochOutcome::ZeroEmission { period });
        }

        let current_supply = self.bank().get_supply(&params.mint_denom);
        if let Err(e) = validate_supply_cap(current_supply, emission, params.max_supply) {
            tracing::error!(
                current_supply = %current_supply,
                max_supply = %params.max_supply,
                "supply cap reached, halving mint skipped: {}",
                e
            );
            return Ok(EpochOutcome::SupplyCapReached {
                current_supply,
                emission,
            });
        }

        let destination = {
            let chain = [
                AddressLookup::new(DestinationSource::EvmParams, || {
                    self.evm_multi_sig_address()
                }),
                AddressLookup::new(DestinationSource::InflationParams, || {
                    params.multi_sig_address.clone()
                }),
                AddressLookup::new(DestinationSource::Default, || {
                    DEFAULT_MULTI_SIG_ADDRESS.to_string()
                }),
            ];
            resolve_mint_destination(&chain)
        }
        .ok_or_else(|| NxqError::InvalidParams("no mint destination configured".to_string()))?;

        let minted = Coin::new(params.mint_denom.clone(), emission);
        self.bank_mut().mint_and_send(&minted, &destination.address)?;

        // Two independent checks. A governance change to the interval can
        // shift the computed period without any natural halving, and the
        // stored period must follow it either way.
        let previous_period = state.current_period;
        let natural_halving = should_halve(
            ended_epoch,
            state.start_epoch,
            state.last_halving_epoch,
            params.halving_interval_epochs,
        );
        let period_mismatch = period != state.current_period;

        if natural_halving {
            state.last_halving_epoch = ended_epoch;
        }

        if natural_halving || period_mismatch {
            state.current_period = period;
            self.set_halving_data(&state)?;

            if natural_halving {
                tracing::info!(
                    previous_period,
                    new_period = period,
                    epoch_ended = ended_epoch,
                    new_daily_emission = %emission,
                    "halving event: entered new period"
                );
            } else {
                tracing::info!(
                    old_stored_period = previous_period,
                    new_calculated_period = period,
                    epoch = ended_epoch,
                    new_daily_emission = %emission,
                    "period reconciliation: state updated due to parameter change"
                );
            }
        }

        // Legacy mirrors are written on every mint, not only on change.
        self.set_period(period)?;
        self.set_epoch_mint_provision(emission)?;

        record_mint(&minted.denom, period, minted.amount);
        ctx.events
            .emit(mint_event(ended_epoch, emission, minted.amount, period));
        if destination.source == DestinationSource::EvmParams {
            ctx.events.emit(multi_sig_event(&destination.address));
        }

        Ok(EpochOutcome::Minted(MintReport {
            ended_epoch,
            period,
            previous_period,
            minted,
            destination,
            natural_halving,
            period_mismatch,
        }))
    }

    /// Adapter implementing the epoch ticker's hook interface.
    pub fn hooks(&mut self) -> Hooks<'_, S, B> {
        Hooks { keeper: self }
    }
}

/// `EpochHooks` view of an `InflationKeeper`.
pub struct Hooks<'a, S, B> {
    keeper: &'a mut InflationKeeper<S, B>,
}

impl<S: KvStore, B: BankKeeper> EpochHooks for Hooks<'_, S, B> {
    fn before_epoch_start(
        &mut self,
        ctx: &mut BlockContext,
        epoch_identifier: &str,
        epoch_number: u64,
    ) {
        self.keeper
            .before_epoch_start(ctx, epoch_identifier, epoch_number);
    }

    /// # Panics
    /// Panics if the mint fails. A half-applied mint would corrupt supply
    /// accounting, so the block must abort.
    fn after_epoch_end(
        &mut self,
        ctx: &mut BlockContext,
        epoch_identifier: &str,
        epoch_number: u64,
    ) {
        if let Err(e) = self
            .keeper
            .after_epoch_end(ctx, epoch_identifier, epoch_number)
        {
            panic!("failed to mint and send to multi-sig: {}", e);
        }
    }
}
