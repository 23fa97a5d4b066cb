// crates/nxq-inflation/src/destination.rs
//
// Resolution of the address that receives each day's emission.
//
// Sources are consulted in priority order and the first non-blank answer
// wins:
//   1. EVM module params (set by governance on the EVM side)
//   2. inflation params `multi_sig_address`
//   3. DEFAULT_MULTI_SIG_ADDRESS

use serde::{Deserialize, Serialize};
use std::fmt;

/// Where a resolved mint destination came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DestinationSource {
    EvmParams,
    InflationParams,
    Default,
}

impl fmt::Display for DestinationSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DestinationSource::EvmParams => write!(f, "evm-params"),
            DestinationSource::InflationParams => write!(f, "inflation-params"),
            DestinationSource::Default => write!(f, "default"),
        }
    }
}

/// One step of the fallback chain: a source tag plus a lookup that returns
/// an empty string when the source has nothing configured.
pub struct AddressLookup<'a> {
    source: DestinationSource,
    lookup: Box<dyn Fn() -> String + 'a>,
}

impl<'a> AddressLookup<'a> {
    pub fn new(source: DestinationSource, lookup: impl Fn() -> String + 'a) -> Self {
        Self {
            source,
            lookup: Box::new(lookup),
        }
    }

    pub fn source(&self) -> DestinationSource {
        self.source
    }
}

/// A resolved destination.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MintDestination {
    pub source: DestinationSource,
    pub address: String,
}

/// Evaluate `chain` in order, stopping at the first non-blank address.
///
/// Later lookups are never called once an earlier one answers.
pub fn resolve_mint_destination(chain: &[AddressLookup<'_>]) -> Option<MintDestination> {
    chain.iter().find_map(|step| {
        let address = (step.lookup)();
        let trimmed = address.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(MintDestination {
                source: step.source,
                address: trimmed.to_string(),
            })
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::DEFAULT_MULTI_SIG_ADDRESS;
    use std::cell::Cell;

    const EVM_ADDR: &str = "nxq1qyqszqgpqyqszqgpqyqszqgpqyqszqgp9asyja";
    const PARAMS_ADDR: &str = "nxq1qgpqyqszqgpqyqszqgpqyqszqgpqyqsz5ekpet";

    fn chain<'a>(evm: &'a str, params: &'a str) -> Vec<AddressLookup<'a>> {
        vec![
            AddressLookup::new(DestinationSource::EvmParams, move || evm.to_string()),
            AddressLookup::new(DestinationSource::InflationParams, move || params.to_string()),
            AddressLookup::new(DestinationSource::Default, || {
                DEFAULT_MULTI_SIG_ADDRESS.to_string()
            }),
        ]
    }

    #[test]
    fn test_evm_params_take_priority() {
        let resolved = resolve_mint_destination(&chain(EVM_ADDR, PARAMS_ADDR)).unwrap();
        assert_eq!(resolved.source, DestinationSource::EvmParams);
        assert_eq!(resolved.address, EVM_ADDR);
    }

    #[test]
    fn test_falls_back_to_inflation_params() {
        let resolved = resolve_mint_destination(&chain("", PARAMS_ADDR)).unwrap();
        assert_eq!(resolved.source, DestinationSource::InflationParams);
        assert_eq!(resolved.address, PARAMS_ADDR);
    }

    #[test]
    fn test_falls_back_to_default() {
        let resolved = resolve_mint_destination(&chain("  ", "")).unwrap();
        assert_eq!(resolved.source, DestinationSource::Default);
        assert_eq!(resolved.address, DEFAULT_MULTI_SIG_ADDRESS);
    }

    #[test]
    fn test_empty_chain_resolves_nothing() {
        assert!(resolve_mint_destination(&[]).is_none());
    }

    #[test]
    fn test_stops_at_first_answer() {
        let calls = Cell::new(0);
        let steps = vec![
            AddressLookup::new(DestinationSource::EvmParams, || EVM_ADDR.to_string()),
            AddressLookup::new(DestinationSource::InflationParams, || {
                calls.set(calls.get() + 1);
                PARAMS_ADDR.to_string()
            }),
        ];
        resolve_mint_destination(&steps).unwrap();
        assert_eq!(calls.get(), 0);
    }
}
