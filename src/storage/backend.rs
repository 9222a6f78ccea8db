//! Persistence Adapter Contract
//!
//! `TigerStyle`: Abstract interface for the key-value blob store backing
//! the catalog. The store holds the complete serialized collection under a
//! fixed key per collection; every mutation overwrites the full blob.
//!
//! # Simulation-First
//!
//! Tests are written against `SimKeyValueStore` before any production
//! adapter. All implementations must satisfy the same trait contract.

use async_trait::async_trait;

use super::error::StorageResult;

/// Abstract asynchronous key-to-string store.
///
/// Two keys are in use (`clothingItems`, `outfits`); values are whole
/// serialized collections. There is no incremental or delta encoding.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Get the value stored under a key.
    ///
    /// Returns `None` if the key has never been written.
    async fn get(&self, key: &str) -> StorageResult<Option<String>>;

    /// Store a value under a key, replacing any previous value.
    async fn set(&self, key: &str, value: &str) -> StorageResult<()>;
}
