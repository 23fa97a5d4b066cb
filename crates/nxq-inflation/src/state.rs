// crates/nxq-inflation/src/state.rs
//
// Persisted halving state. One instance per chain, stored under a fixed key
// and rewritten only by the epoch-end handler.

use serde::{Deserialize, Serialize};

use nxq_core::error::NxqError;

/// Epoch from which period counting starts on a fresh chain.
pub const DEFAULT_START_EPOCH: u64 = 1;

/// Halving progress as last recorded by the epoch-end handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HalvingState {
    /// Halving period last recorded as active.
    pub current_period: u64,
    /// Ended epoch at which the period last advanced naturally; 0 if never.
    pub last_halving_epoch: u64,
    /// First epoch counted towards period 0. Always >= 1.
    pub start_epoch: u64,
}

impl HalvingState {
    /// Fresh state counting from `start_epoch`.
    pub fn new(start_epoch: u64) -> Self {
        Self {
            current_period: 0,
            last_halving_epoch: 0,
            start_epoch,
        }
    }

    pub fn validate(&self) -> Result<(), NxqError> {
        if self.start_epoch == 0 {
            return Err(NxqError::InvalidGenesis(format!(
                "halving start epoch must be positive, got: {}",
                self.start_epoch
            )));
        }
        Ok(())
    }
}

impl Default for HalvingState {
    fn default() -> Self {
        Self::new(DEFAULT_START_EPOCH)
    }
}
