use thiserror::Error;

/// Protocol-wide error types for the NXQ chain.
#[derive(Debug, Error)]
pub enum NxqError {
    /// Storage layer error (RocksDB, in-memory store).
    #[error("Storage error: {0}")]
    Storage(String),

    /// Serialization/deserialization error.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Parameter validation failed. Raised when params are written.
    #[error("Invalid params: {0}")]
    InvalidParams(String),

    /// Genesis state validation failed.
    #[error("Invalid genesis: {0}")]
    InvalidGenesis(String),

    /// Malformed bech32 account address.
    #[error("Invalid address: {0}")]
    InvalidAddress(String),

    /// Minting would push total supply past the configured maximum.
    #[error("Supply cap exceeded: {0}")]
    SupplyCap(String),

    /// Bank collaborator failed to mint or transfer.
    #[error("Bank error: {0}")]
    Bank(String),
}

impl From<serde_json::Error> for NxqError {
    fn from(e: serde_json::Error) -> Self {
        NxqError::Serialization(e.to_string())
    }
}
