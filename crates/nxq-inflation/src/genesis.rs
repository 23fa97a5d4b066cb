// crates/nxq-inflation/src/genesis.rs
//
// Genesis state of the inflation module.

use serde::{Deserialize, Serialize};

use nxq_core::epoch::{validate_epoch_identifier, DAY_EPOCH_ID};
use nxq_core::error::NxqError;

use crate::params::InflationParams;
use crate::state::HalvingState;

/// Legacy period length carried for queries that predate halving.
pub const DEFAULT_EPOCHS_PER_PERIOD: u64 = 365;

/// Initial (or exported) state of the inflation module.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenesisState {
    pub params: InflationParams,
    /// Mirror of the halving period, kept for legacy period queries.
    pub period: u64,
    /// Epoch kind the module mints on.
    pub epoch_identifier: String,
    pub epochs_per_period: u64,
    /// Daily epochs that passed while inflation was disabled.
    pub skipped_epochs: u64,
    pub halving_data: HalvingState,
}

impl Default for GenesisState {
    fn default() -> Self {
        Self {
            params: InflationParams::default(),
            period: 0,
            epoch_identifier: DAY_EPOCH_ID.to_string(),
            epochs_per_period: DEFAULT_EPOCHS_PER_PERIOD,
            skipped_epochs: 0,
            halving_data: HalvingState::default(),
        }
    }
}

impl GenesisState {
    /// Basic genesis validation; returns the first failure.
    pub fn validate(&self) -> Result<(), NxqError> {
        validate_epoch_identifier(&self.epoch_identifier)?;

        if self.epochs_per_period == 0 {
            return Err(NxqError::InvalidGenesis(format!(
                "epochs per period must be positive: {}",
                self.epochs_per_period
            )));
        }

        self.halving_data.validate()?;
        self.params.validate()
    }

    /// Parse a JSON genesis document.
    pub fn from_json(json: &str) -> Result<Self, NxqError> {
        Ok(serde_json::from_str(json)?)
    }
}
