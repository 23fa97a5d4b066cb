// crates/nxq-core/src/address.rs
//
// Bech32 account address validation.
//
// Account addresses are Bech32 (not Bech32m) strings with the `nxq`
// human-readable prefix and a 1..=255 byte payload (20 bytes for
// secp256k1-derived accounts, 32 for module and multisig accounts).

use bech32::{FromBase32, Variant};

use crate::error::NxqError;

/// Human-readable prefix for account addresses.
pub const ACCOUNT_ADDRESS_PREFIX: &str = "nxq";

/// Longest address payload accepted, in bytes.
const MAX_ADDRESS_LEN: usize = 255;

/// Validate a bech32 account address and return its decoded payload.
///
/// # Errors
/// Returns `NxqError::InvalidAddress` if the string is empty, is not valid
/// Bech32, carries the wrong prefix, or decodes to an out-of-range payload.
pub fn validate_account_address(address: &str) -> Result<Vec<u8>, NxqError> {
    if address.trim().is_empty() {
        return Err(NxqError::InvalidAddress("empty address string is not allowed".to_string()));
    }

    let (hrp, data, variant) = bech32::decode(address)
        .map_err(|e| NxqError::InvalidAddress(format!("decoding bech32 failed: {}", e)))?;

    if variant != Variant::Bech32 {
        return Err(NxqError::InvalidAddress(format!(
            "address {} uses bech32m, expected bech32",
            address
        )));
    }

    if hrp != ACCOUNT_ADDRESS_PREFIX {
        return Err(NxqError::InvalidAddress(format!(
            "invalid bech32 prefix; expected {}, got {}",
            ACCOUNT_ADDRESS_PREFIX, hrp
        )));
    }

    let bytes = Vec::<u8>::from_base32(&data)
        .map_err(|e| NxqError::InvalidAddress(format!("invalid base32 payload: {}", e)))?;

    if bytes.is_empty() || bytes.len() > MAX_ADDRESS_LEN {
        return Err(NxqError::InvalidAddress(format!(
            "address length must be between 1 and {} bytes, got {}",
            MAX_ADDRESS_LEN,
            bytes.len()
        )));
    }

    Ok(bytes)
}
