// crates/nxq-inflation/src/params.rs
//
// Governance-settable parameters of the inflation module and their
// write-time validation.
//
// Validation runs whenever params are stored. It is the only guard between
// a governance proposal and the epoch-end handler, so anything that could
// divide by zero or fail inside mint-and-send is rejected here.

use serde::{Deserialize, Serialize};

use nxq_core::address::validate_account_address;
use nxq_core::amount::{as_string, Amount, ANXQ_PER_NXQ};
use nxq_core::error::NxqError;

/// Module name, used for store namespacing and telemetry keys.
pub const MODULE_NAME: &str = "inflation";

/// Default mint denomination.
pub const DEFAULT_MINT_DENOM: &str = "anxq";

/// Default base emission: 7,200 NXQ per day.
pub const DEFAULT_DAILY_EMISSION: Amount = 7_200 * ANXQ_PER_NXQ;

/// Default halving interval: 1,461 daily epochs (~4 years).
pub const DEFAULT_HALVING_INTERVAL_EPOCHS: u64 = 1_461;

/// Default hard cap: 21,000,000 NXQ.
pub const DEFAULT_MAX_SUPPLY: Amount = 21_000_000 * ANXQ_PER_NXQ;

/// Last-resort mint destination when neither EVM params nor inflation
/// params name one.
pub const DEFAULT_MULTI_SIG_ADDRESS: &str = "nxq12zprcmal9hv52jqf2x4m59ztng0gnh7r96muj5";

/// Parameters of the inflation module.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InflationParams {
    /// Denomination minted each day.
    #[serde(default = "default_mint_denom")]
    pub mint_denom: String,
    /// When false, daily ticks mint nothing and only count skipped epochs.
    #[serde(default = "default_enable_inflation")]
    pub enable_inflation: bool,
    /// Base daily emission in the smallest unit, before halving.
    #[serde(with = "as_string", default = "default_daily_emission")]
    pub daily_emission: Amount,
    /// Number of daily epochs per halving period.
    #[serde(default = "default_halving_interval_epochs")]
    pub halving_interval_epochs: u64,
    /// Hard cap on total supply of `mint_denom`.
    #[serde(with = "as_string", default = "default_max_supply")]
    pub max_supply: Amount,
    /// Mint destination; empty defers to the fallback chain.
    #[serde(default = "default_multi_sig_address")]
    pub multi_sig_address: String,
}

fn default_mint_denom() -> String {
    DEFAULT_MINT_DENOM.to_string()
}

fn default_enable_inflation() -> bool {
    true
}

fn default_daily_emission() -> Amount {
    DEFAULT_DAILY_EMISSION
}

fn default_halving_interval_epochs() -> u64 {
    DEFAULT_HALVING_INTERVAL_EPOCHS
}

fn default_max_supply() -> Amount {
    DEFAULT_MAX_SUPPLY
}

fn default_multi_sig_address() -> String {
    DEFAULT_MULTI_SIG_ADDRESS.to_string()
}

impl Default for InflationParams {
    fn default() -> Self {
        Self {
            mint_denom: default_mint_denom(),
            enable_inflation: default_enable_inflation(),
            daily_emission: DEFAULT_DAILY_EMISSION,
            halving_interval_epochs: DEFAULT_HALVING_INTERVAL_EPOCHS,
            max_supply: DEFAULT_MAX_SUPPLY,
            multi_sig_address: default_multi_sig_address(),
        }
    }
}

impl InflationParams {
    /// Full validation, run before params are stored.
    pub fn validate(&self) -> Result<(), NxqError> {
        validate_mint_denom(&self.mint_denom)?;
        validate_halving_params(self)
    }
}

/// Checks on the halving fields alone.
///
/// # Errors
/// Returns `NxqError::InvalidParams` naming the first failed constraint.
pub fn validate_halving_params(params: &InflationParams) -> Result<(), NxqError> {
    if params.daily_emission == 0 {
        return Err(NxqError::InvalidParams(format!(
            "daily emission must be positive, got: {}",
            params.daily_emission
        )));
    }

    if params.halving_interval_epochs == 0 {
        return Err(NxqError::InvalidParams(format!(
            "halving interval epochs must be positive, got: {}",
            params.halving_interval_epochs
        )));
    }

    if params.max_supply == 0 {
        return Err(NxqError::InvalidParams(format!(
            "max supply must be positive, got: {}",
            params.max_supply
        )));
    }

    if params.daily_emission > params.max_supply {
        return Err(NxqError::InvalidParams(format!(
            "daily emission ({}) cannot exceed max supply ({})",
            params.daily_emission, params.max_supply
        )));
    }

    validate_multi_sig_address(&params.multi_sig_address).map_err(|e| {
        NxqError::InvalidParams(format!("invalid multi-sig address in halving params: {}", e))
    })
}

/// Empty is allowed (defer to EVM params or the default); anything else
/// must be a valid account address.
pub fn validate_multi_sig_address(address: &str) -> Result<(), NxqError> {
    if address.is_empty() {
        return Ok(());
    }
    validate_account_address(address).map(|_| ())
}

/// Denoms are 3-128 chars: a leading ASCII letter, then alphanumerics or
/// one of `/ : . _ -`.
pub fn validate_mint_denom(denom: &str) -> Result<(), NxqError> {
    if denom.trim().is_empty() {
        return Err(NxqError::InvalidParams("mint denom cannot be blank".to_string()));
    }

    let len_ok = (3..=128).contains(&denom.len());
    let mut chars = denom.chars();
    let first_ok = chars.next().map_or(false, |c| c.is_ascii_alphabetic());
    let rest_ok =
        chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '/' | ':' | '.' | '_' | '-'));

    if !(len_ok && first_ok && rest_ok) {
        return Err(NxqError::InvalidParams(format!("invalid denom: {}", denom)));
    }
    Ok(())
}
