// crates/nxq-inflation/src/bank.rs
//
// In-memory bank used for dry-run simulation and tests.
//
// Tracks total supply per denom and balances per (address, denom). Minting
// and sending happen as one step: the coin is validated up front so a
// failed call leaves supply and balances untouched.

use std::collections::BTreeMap;

use nxq_core::address::validate_account_address;
use nxq_core::amount::{Amount, Coin};
use nxq_core::error::NxqError;
use nxq_core::traits::BankKeeper;

#[derive(Debug, Clone, Default)]
pub struct InMemoryBank {
    supply: BTreeMap<String, Amount>,
    balances: BTreeMap<(String, String), Amount>,
    fail_mints: bool,
}

impl InMemoryBank {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-existing supply of `denom` not attributed to any tracked account.
    pub fn with_supply(mut self, denom: &str, amount: Amount) -> Self {
        self.supply.insert(denom.to_string(), amount);
        self
    }

    /// Make every subsequent mint fail, to exercise the fatal path.
    pub fn set_fail_mints(&mut self, fail: bool) {
        self.fail_mints = fail;
    }

    pub fn balance(&self, address: &str, denom: &str) -> Amount {
        self.balances
            .get(&(address.to_string(), denom.to_string()))
            .copied()
            .unwrap_or(0)
    }
}

impl BankKeeper for InMemoryBank {
    fn get_supply(&self, denom: &str) -> Amount {
        self.supply.get(denom).copied().unwrap_or(0)
    }

    fn mint_and_send(&mut self, coin: &Coin, recipient: &str) -> Result<(), NxqError> {
        if self.fail_mints {
            return Err(NxqError::Bank("minting disabled for this bank".to_string()));
        }
        if coin.denom.is_empty() {
            return Err(NxqError::Bank("cannot mint an empty denom".to_string()));
        }
        if coin.is_zero() {
            return Err(NxqError::Bank(format!("cannot mint zero {}", coin.denom)));
        }
        validate_account_address(recipient)?;

        let supply = self.get_supply(&coin.denom);
        let new_supply = supply
            .checked_add(coin.amount)
            .ok_or_else(|| NxqError::Bank(format!("supply overflow minting {}", coin)))?;
        let balance = self.balance(recipient, &coin.denom);
        let new_balance = balance
            .checked_add(coin.amount)
            .ok_or_else(|| NxqError::Bank(format!("balance overflow sending {}", coin)))?;

        self.supply.insert(coin.denom.clone(), new_supply);
        self.balances
            .insert((recipient.to_string(), coin.denom.clone()), new_balance);
        Ok(())
    }
}
