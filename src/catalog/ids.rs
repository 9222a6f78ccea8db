//! Id Providers
//!
//! `TigerStyle`: Identity is injected, never ambient. The contract is
//! uniqueness within a store instance; nothing orders or interprets ids.

use std::sync::atomic::{AtomicU64, Ordering};

use chrono::Utc;

/// Source of unique entity ids.
pub trait IdProvider: Send + Sync {
    /// Produce the next id. Must be unique per provider instance.
    fn next_id(&self) -> String;
}

/// Production ids: unix-millis plus a process-local counter.
///
/// The counter disambiguates same-millisecond inserts, which a bare
/// timestamp cannot.
#[derive(Debug, Default)]
pub struct TimeBasedIds {
    counter: AtomicU64,
}

impl TimeBasedIds {
    /// Create a new provider.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl IdProvider for TimeBasedIds {
    fn next_id(&self) -> String {
        let millis = Utc::now().timestamp_millis();
        let n = self.counter.fetch_add(1, Ordering::Relaxed);
        format!("{millis}-{n}")
    }
}

/// Test ids: `id-1`, `id-2`, ... so assertions can name exact values.
#[derive(Debug, Default)]
pub struct SequentialIds {
    counter: AtomicU64,
}

impl SequentialIds {
    /// Create a new provider starting at `id-1`.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl IdProvider for SequentialIds {
    fn next_id(&self) -> String {
        let n = self.counter.fetch_add(1, Ordering::Relaxed) + 1;
        format!("id-{n}")
    }
}
