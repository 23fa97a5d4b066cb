// crates/nxq-core/src/epoch.rs
//
// Epoch identifiers used by the epoch ticker.
//
// The ticker runs several independent epoch kinds; each fires its own
// BeforeEpochStart/AfterEpochEnd pair at its boundary.

use crate::error::NxqError;

/// Identifier of the daily epoch. Emission only advances on this kind.
pub const DAY_EPOCH_ID: &str = "day";

/// Identifier of the weekly epoch.
pub const WEEK_EPOCH_ID: &str = "week";

/// Check that an epoch identifier is usable (non-blank).
pub fn validate_epoch_identifier(identifier: &str) -> Result<(), NxqError> {
    if identifier.trim().is_empty() {
        return Err(NxqError::InvalidGenesis("epoch identifier cannot be blank".to_string()));
    }
    Ok(())
}
