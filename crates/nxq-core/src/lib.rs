// crates/nxq-core/src/lib.rs
//
// nxq-core: Core types, errors, and collaborator traits for the NXQ chain.
//
// This is the leaf crate that all other crates in the workspace depend on.
// It defines token amounts, account address validation, epoch identifiers,
// the block context (with its event manager), the protocol error type, and
// the trait interfaces through which the inflation module reaches the bank,
// the EVM params module, and the epoch ticker.

pub mod address;
pub mod amount;
pub mod context;
pub mod epoch;
pub mod error;
pub mod traits;

// Re-export key types for ergonomic access from downstream crates.
// Usage: `use nxq_core::NxqError;`

pub use address::{validate_account_address, ACCOUNT_ADDRESS_PREFIX};
pub use amount::{Amount, Coin, ANXQ_PER_NXQ};
pub use context::{BlockContext, Event, EventManager};
pub use epoch::{DAY_EPOCH_ID, WEEK_EPOCH_ID};
pub use error::NxqError;
pub use traits::{BankKeeper, EpochHooks, EvmParamsReader};
