//! `SimKeyValueStore` - In-Memory Persistence for Testing
//!
//! `TigerStyle`: Deterministic testing with fault injection.
//!
//! # Simulation-First
//!
//! This is the adapter the catalog store is developed and tested against.
//! Faults are injected per operation so the store's swallow-and-continue
//! failure semantics are exercised, not assumed.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, RwLock};

use async_trait::async_trait;

use crate::dst::{DeterministicRng, FaultConfig, FaultInjector, FaultType};

use super::backend::KeyValueStore;
use super::error::{StorageError, StorageResult};

/// Marker returned in place of a value when a corruption fault fires.
const CORRUPT_BLOB: &str = "<corrupt>";

/// In-memory key-value store for testing.
///
/// `TigerStyle`:
/// - Deterministic via seeded `FaultInjector`
/// - Thread-safe with `RwLock`
/// - Inspection helpers for asserting on persisted state
#[derive(Debug, Clone)]
pub struct SimKeyValueStore {
    /// Stored blobs indexed by key
    data: Arc<RwLock<HashMap<String, String>>>,
    /// Fault injector for simulating failures
    faults: Arc<FaultInjector>,
    /// Completed writes (for asserting write-through behavior)
    writes_count: Arc<AtomicU64>,
}

impl SimKeyValueStore {
    /// Create a new store with the given seed.
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        let mut rng = DeterministicRng::new(seed);
        let fault_rng = rng.fork();

        Self {
            data: Arc::new(RwLock::new(HashMap::new())),
            faults: Arc::new(FaultInjector::new(fault_rng)),
            writes_count: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Add a fault configuration.
    ///
    /// `FaultInjector` registration needs `&mut`, which is only possible
    /// before the `Arc` is shared, so faults are configured upfront.
    ///
    /// # Panics
    /// Panics if the store has already been cloned or shared.
    #[must_use]
    pub fn with_faults(mut self, config: FaultConfig) -> Self {
        Arc::get_mut(&mut self.faults)
            .expect("cannot add faults after store is shared")
            .register(config);
        self
    }

    /// Get the fault injector for inspection.
    #[must_use]
    pub fn fault_injector(&self) -> &Arc<FaultInjector> {
        &self.faults
    }

    /// Number of completed (non-faulted) writes.
    #[must_use]
    pub fn writes_count(&self) -> u64 {
        self.writes_count.load(Ordering::Relaxed)
    }

    /// Read a stored blob directly, bypassing fault injection.
    #[must_use]
    pub fn contents(&self, key: &str) -> Option<String> {
        self.data.read().unwrap().get(key).cloned()
    }

    /// Preload a raw blob, bypassing fault injection.
    ///
    /// Lets tests seed malformed data to exercise the load path.
    pub fn inject_raw(&self, key: &str, value: &str) {
        self.data
            .write()
            .unwrap()
            .insert(key.to_string(), value.to_string());
    }

    fn maybe_inject_fault(&self, operation: &str) -> StorageResult<Option<FaultType>> {
        match self.faults.should_inject(operation) {
            Some(FaultType::StorageCorruption) => Ok(Some(FaultType::StorageCorruption)),
            Some(fault_type) => Err(StorageError::simulated_fault(fault_type.as_str())),
            None => Ok(None),
        }
    }
}

#[async_trait]
impl KeyValueStore for SimKeyValueStore {
    #[tracing::instrument(skip(self))]
    async fn get(&self, key: &str) -> StorageResult<Option<String>> {
        // Precondition
        assert!(!key.is_empty(), "key must not be empty");

        let corrupted = self.maybe_inject_fault("get")?.is_some();

        let data = self.data.read().unwrap();
        let value = data.get(key).cloned();

        if corrupted && value.is_some() {
            return Ok(Some(CORRUPT_BLOB.to_string()));
        }
        Ok(value)
    }

    #[tracing::instrument(skip(self, value), fields(value_len = value.len()))]
    async fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        // Preconditions
        assert!(!key.is_empty(), "key must not be empty");
        assert!(
            value.len() <= crate::constants::STORAGE_VALUE_BYTES_MAX,
            "value too large"
        );

        self.maybe_inject_fault("set")?;

        let mut data = self.data.write().unwrap();
        data.insert(key.to_string(), value.to_string());
        self.writes_count.fetch_add(1, Ordering::Relaxed);

        // Postcondition
        assert!(data.contains_key(key), "key must exist after write");

        Ok(())
    }
}

// =============================================================================
// Tests
// =============================================================================
