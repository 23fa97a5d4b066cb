// crates/nxq-store/src/rocks.rs
//
// RocksDB-backed persistent key-value store.
//
// Module keepers share one database and separate their keys by prefix
// (see `RocksStore::prefixed`). Values are opaque bytes at this layer.

use rocksdb::{DBWithThreadMode, MultiThreaded, Options};
use std::sync::Arc;

use nxq_core::error::NxqError;

use crate::kv::KvStore;

/// RocksDB wrapper implementing the `KvStore` trait.
#[derive(Clone)]
pub struct RocksStore {
    db: Arc<DBWithThreadMode<MultiThreaded>>,
    prefix: Vec<u8>,
}

impl RocksStore {
    /// Open a RocksDB database at the given filesystem path.
    ///
    /// Creates the database directory if it does not exist.
    pub fn open(path: &str) -> Result<Self, NxqError> {
        let mut opts = Options::default();
        opts.create_if_missing(true);

        let db = DBWithThreadMode::<MultiThreaded>::open(&opts, path)
            .map_err(|e| NxqError::Storage(format!("Failed to open RocksDB at {}: {}", path, e)))?;

        Ok(Self {
            db: Arc::new(db),
            prefix: Vec::new(),
        })
    }

    /// A view of the same database whose keys are namespaced under
    /// `{module}/`.
    pub fn prefixed(&self, module: &str) -> Self {
        let mut prefix = self.prefix.clone();
        prefix.extend_from_slice(module.as_bytes());
        prefix.push(b'/');
        Self {
            db: self.db.clone(),
            prefix,
        }
    }

    fn full_key(&self, key: &[u8]) -> Vec<u8> {
        let mut full = Vec::with_capacity(self.prefix.len() + key.len());
        full.extend_from_slice(&self.prefix);
        full.extend_from_slice(key);
        full
    }
}

impl std::fmt::Debug for RocksStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RocksStore")
            .field("path", &self.db.path())
            .field("prefix", &String::from_utf8_lossy(&self.prefix))
            .finish()
    }
}

impl KvStore for RocksStore {
    fn get(&self, key: &[u8]) -> Result<Option<Vec<u8>>, NxqError> {
        self.db
            .get(self.full_key(key))
            .map_err(|e| NxqError::Storage(format!("RocksDB get failed: {}", e)))
    }

    fn set(&mut self, key: &[u8], value: &[u8]) -> Result<(), NxqError> {
        self.db
            .put(self.full_key(key), value)
            .map_err(|e| NxqError::Storage(format!("RocksDB put failed: {}", e)))
    }

    fn delete(&mut self, key: &[u8]) -> Result<(), NxqError> {
        self.db
            .delete(self.full_key(key))
            .map_err(|e| NxqError::Storage(format!("RocksDB delete failed: {}", e)))
    }
}
