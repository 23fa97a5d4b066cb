// crates/nxq-store/src/kv.rs
//
// Byte-oriented key-value store trait and the in-memory backend.
//
// Keepers own a store and address values by fixed keys. Typed helpers
// encode values as JSON.

use std::collections::BTreeMap;

use serde::de::DeserializeOwned;
use serde::Serialize;

use nxq_core::error::NxqError;

/// Minimal key-value interface a module keeper persists through.
pub trait KvStore {
    /// Read the raw value under `key`, if any.
    fn get(&self, key: &[u8]) -> Result<Option<Vec<u8>>, NxqError>;

    /// Write `value` under `key`, replacing any previous value.
    fn set(&mut self, key: &[u8], value: &[u8]) -> Result<(), NxqError>;

    /// Remove `key`. Removing a missing key is not an error.
    fn delete(&mut self, key: &[u8]) -> Result<(), NxqError>;

    /// Read and JSON-decode the value under `key`.
    fn get_json<T: DeserializeOwned>(&self, key: &[u8]) -> Result<Option<T>, NxqError>
    where
        Self: Sized,
    {
        match self.get(key)? {
            Some(bytes) if !bytes.is_empty() => Ok(Some(serde_json::from_slice(&bytes)?)),
            _ => Ok(None),
        }
    }

    /// JSON-encode `value` and write it under `key`.
    fn set_json<T: Serialize>(&mut self, key: &[u8], value: &T) -> Result<(), NxqError>
    where
        Self: Sized,
    {
        let bytes = serde_json::to_vec(value)?;
        self.set(key, &bytes)
    }
}

/// Ordered in-memory store. Contents are lost on drop.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: BTreeMap<Vec<u8>, Vec<u8>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of keys currently stored.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl KvStore for MemoryStore {
    fn get(&self, key: &[u8]) -> Result<Option<Vec<u8>>, NxqError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &[u8], value: &[u8]) -> Result<(), NxqError> {
        self.entries.insert(key.to_vec(), value.to_vec());
        Ok(())
    }

    fn delete(&mut self, key: &[u8]) -> Result<(), NxqError> {
        self.entries.remove(key);
        Ok(())
    }
}

/// Lets a backend be chosen at runtime behind `Box<dyn KvStore>`.
impl<K: KvStore + ?Sized> KvStore for Box<K> {
    fn get(&self, key: &[u8]) -> Result<Option<Vec<u8>>, NxqError> {
        (**self).get(key)
    }

    fn set(&mut self, key: &[u8], value: &[u8]) -> Result<(), NxqError> {
        (**self).set(key, value)
    }

    fn delete(&mut self, key: &[u8]) -> Result<(), NxqError> {
        (**self).delete(key)
    }
}
