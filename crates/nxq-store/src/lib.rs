// crates/nxq-store/src/lib.rs
//
// nxq-store: Storage layer for NXQ chain modules.
//
// Provides the `KvStore` trait that module keepers persist through, an
// in-memory backend for tests and dry-run simulation, and a RocksDB backend
// for a node's data directory.

pub mod kv;
pub mod rocks;

// Re-export key types for ergonomic access from downstream crates.
pub use kv::{KvStore, MemoryStore};
pub use rocks::RocksStore;
