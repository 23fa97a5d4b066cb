// crates/nxq-inflation/src/keeper.rs
//
// InflationKeeper: owns the module's store and its handles to the bank and
// EVM params modules.
//
// Key layout (JSON values):
//   - `Params`             -> InflationParams
//   - `HalvingData`        -> HalvingState
//   - `SkippedEpochs`      -> u64
//   - `Period`             -> u64 (legacy mirror of the halving period)
//   - `EpochMintProvision` -> amount string (last daily mint)
//   - `EpochIdentifier`    -> string
//   - `EpochsPerPeriod`    -> u64

use std::sync::Arc;

use nxq_core::amount::{as_string, Amount};
use nxq_core::epoch::DAY_EPOCH_ID;
use nxq_core::error::NxqError;
use nxq_core::traits::{BankKeeper, EvmParamsReader};
use nxq_store::KvStore;
use serde::{Deserialize, Serialize};

use crate::genesis::{GenesisState, DEFAULT_EPOCHS_PER_PERIOD};
use crate::halving::{halving_schedule_info, HalvingScheduleInfo};
use crate::params::InflationParams;
use crate::state::HalvingState;

pub const KEY_PARAMS: &[u8] = b"Params";
pub const KEY_HALVING_DATA: &[u8] = b"HalvingData";
pub const KEY_SKIPPED_EPOCHS: &[u8] = b"SkippedEpochs";
pub const KEY_PERIOD: &[u8] = b"Period";
pub const KEY_EPOCH_MINT_PROVISION: &[u8] = b"EpochMintProvision";
pub const KEY_EPOCH_IDENTIFIER: &[u8] = b"EpochIdentifier";
pub const KEY_EPOCHS_PER_PERIOD: &[u8] = b"EpochsPerPeriod";

#[derive(Serialize, Deserialize)]
struct StoredAmount(#[serde(with = "as_string")] Amount);

/// Keeper of the inflation module.
pub struct InflationKeeper<S, B> {
    store: S,
    bank: B,
    evm_params: Option<Arc<dyn EvmParamsReader>>,
}

impl<S: KvStore, B: BankKeeper> InflationKeeper<S, B> {
    pub fn new(store: S, bank: B) -> Self {
        Self {
            store,
            bank,
            evm_params: None,
        }
    }

    /// Attach the EVM params reader, the highest-priority source of the mint
    /// destination.
    pub fn with_evm_params(mut self, reader: Arc<dyn EvmParamsReader>) -> Self {
        self.evm_params = Some(reader);
        self
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn bank(&self) -> &B {
        &self.bank
    }

    pub fn bank_mut(&mut self) -> &mut B {
        &mut self.bank
    }

    /// Multi-sig address from EVM params; empty when no reader is attached
    /// or the EVM side has none configured.
    pub fn evm_multi_sig_address(&self) -> String {
        self.evm_params
            .as_ref()
            .map(|reader| reader.multi_sig_address())
            .unwrap_or_default()
    }

    // ---------------------------------------------------------------
    // Params
    // ---------------------------------------------------------------

    /// Current params; defaults if none have been stored yet.
    pub fn get_params(&self) -> Result<InflationParams, NxqError> {
        Ok(self.store.get_json(KEY_PARAMS)?.unwrap_or_default())
    }

    /// Validate and store params.
    ///
    /// # Errors
    /// Returns `NxqError::InvalidParams` and leaves the stored params
    /// untouched if validation fails.
    pub fn set_params(&mut self, params: &InflationParams) -> Result<(), NxqError> {
        params.validate()?;
        self.store.set_json(KEY_PARAMS, params)
    }

    // ---------------------------------------------------------------
    // Halving state
    // ---------------------------------------------------------------

    /// Stored halving state, or a fresh state from epoch 1 if none exists.
    pub fn get_halving_data(&self) -> Result<HalvingState, NxqError> {
        Ok(self.store.get_json(KEY_HALVING_DATA)?.unwrap_or_default())
    }

    pub fn set_halving_data(&mut self, state: &HalvingState) -> Result<(), NxqError> {
        self.store.set_json(KEY_HALVING_DATA, state)
    }

    /// Write a fresh halving state counting from `start_epoch`.
    pub fn initialize_halving_data(&mut self, start_epoch: u64) -> Result<(), NxqError> {
        let state = HalvingState::new(start_epoch);
        state.validate()?;
        self.set_halving_data(&state)
    }

    // ---------------------------------------------------------------
    // Counters and legacy mirrors
    // ---------------------------------------------------------------

    pub fn get_skipped_epochs(&self) -> Result<u64, NxqError> {
        Ok(self.store.get_json(KEY_SKIPPED_EPOCHS)?.unwrap_or(0))
    }

    pub fn set_skipped_epochs(&mut self, skipped: u64) -> Result<(), NxqError> {
        self.store.set_json(KEY_SKIPPED_EPOCHS, &skipped)
    }

    pub fn get_period(&self) -> Result<u64, NxqError> {
        Ok(self.store.get_json(KEY_PERIOD)?.unwrap_or(0))
    }

    pub fn set_period(&mut self, period: u64) -> Result<(), NxqError> {
        self.store.set_json(KEY_PERIOD, &period)
    }

    /// Amount minted by the most recent daily tick; 0 before the first mint.
    pub fn get_epoch_mint_provision(&self) -> Result<Amount, NxqError> {
        let stored: Option<StoredAmount> = self.store.get_json(KEY_EPOCH_MINT_PROVISION)?;
        Ok(stored.map_or(0, |s| s.0))
    }

    pub fn set_epoch_mint_provision(&mut self, provision: Amount) -> Result<(), NxqError> {
        self.store.set_json(KEY_EPOCH_MINT_PROVISION, &StoredAmount(provision))
    }

    pub fn get_epoch_identifier(&self) -> Result<String, NxqError> {
        Ok(self
            .store
            .get_json(KEY_EPOCH_IDENTIFIER)?
            .unwrap_or_else(|| DAY_EPOCH_ID.to_string()))
    }

    pub fn get_epochs_per_period(&self) -> Result<u64, NxqError> {
        Ok(self
            .store
            .get_json(KEY_EPOCHS_PER_PERIOD)?
            .unwrap_or(DEFAULT_EPOCHS_PER_PERIOD))
    }

    // ---------------------------------------------------------------
    // Genesis and queries
    // ---------------------------------------------------------------

    /// Validate `genesis` and write every part of it to the store.
    pub fn init_genesis(&mut self, genesis: &GenesisState) -> Result<(), NxqError> {
        genesis.validate()?;

        self.set_params(&genesis.params)?;
        self.set_period(genesis.period)?;
        self.store
            .set_json(KEY_EPOCH_IDENTIFIER, &genesis.epoch_identifier)?;
        self.store
            .set_json(KEY_EPOCHS_PER_PERIOD, &genesis.epochs_per_period)?;
        self.set_skipped_epochs(genesis.skipped_epochs)?;
        self.set_halving_data(&genesis.halving_data)?;

        tracing::info!(
            start_epoch = genesis.halving_data.start_epoch,
            current_period = genesis.halving_data.current_period,
            "Inflation genesis initialized"
        );
        Ok(())
    }

    pub fn export_genesis(&self) -> Result<GenesisState, NxqError> {
        Ok(GenesisState {
            params: self.get_params()?,
            period: self.get_period()?,
            epoch_identifier: self.get_epoch_identifier()?,
            epochs_per_period: self.get_epochs_per_period()?,
            skipped_epochs: self.get_skipped_epochs()?,
            halving_data: self.get_halving_data()?,
        })
    }

    /// Where `current_epoch` sits in the schedule under the stored params
    /// and start epoch.
    pub fn halving_schedule(&self, current_epoch: u64) -> Result<HalvingScheduleInfo, NxqError> {
        let params = self.get_params()?;
        let state = self.get_halving_data()?;
        Ok(halving_schedule_info(current_epoch, state.start_epoch, &params))
    }
}
