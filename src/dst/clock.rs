//! Clock Providers - Real and Simulated Time
//!
//! `TigerStyle`: Time is injected, never ambient. The store stamps
//! `date_added`/`date_created` and the engine derives the season from a
//! `Clock`, so tests can assert exact timestamps and season boundaries.

use chrono::{DateTime, Duration, Utc};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use crate::constants::{DST_TIME_ADVANCE_MS_MAX, TIME_MS_PER_SEC};

/// Source of current time.
pub trait Clock: Send + Sync {
    /// Get the current time.
    fn now(&self) -> DateTime<Utc>;
}

/// Production clock backed by the system time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// A simulated clock for deterministic testing.
///
/// `TigerStyle`:
/// - Time only moves forward
/// - All advances are explicit
/// - No reliance on system time
///
/// Thread-safe via `Arc<AtomicU64>`; clones share the same time.
#[derive(Debug, Clone)]
pub struct SimClock {
    /// Current time in milliseconds since epoch
    current_ms: Arc<AtomicU64>,
}

impl SimClock {
    /// Create a new clock starting at the Unix epoch.
    #[must_use]
    pub fn new() -> Self {
        Self {
            current_ms: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Create a clock starting at the given millisecond timestamp.
    #[must_use]
    pub fn at_ms(start_ms: u64) -> Self {
        Self {
            current_ms: Arc::new(AtomicU64::new(start_ms)),
        }
    }

    /// Create a clock starting at the given `DateTime`.
    #[must_use]
    pub fn at_datetime(dt: DateTime<Utc>) -> Self {
        Self::at_ms(dt.timestamp_millis().max(0) as u64)
    }

    /// Get current time in milliseconds.
    #[must_use]
    pub fn now_ms(&self) -> u64 {
        self.current_ms.load(Ordering::SeqCst)
    }

    /// Get current time in seconds (truncated).
    #[must_use]
    pub fn now_secs(&self) -> u64 {
        self.now_ms() / TIME_MS_PER_SEC
    }

    /// Advance time by the given milliseconds.
    ///
    /// # Panics
    /// Panics if ms exceeds `DST_TIME_ADVANCE_MS_MAX`.
    ///
    /// # Returns
    /// The new current time.
    pub fn advance_ms(&self, ms: u64) -> u64 {
        // Precondition
        assert!(
            ms <= DST_TIME_ADVANCE_MS_MAX,
            "advance_ms({ms}) exceeds max ({DST_TIME_ADVANCE_MS_MAX})"
        );

        let old_time = self.current_ms.fetch_add(ms, Ordering::SeqCst);
        let new_time = old_time.saturating_add(ms);

        // Postcondition
        assert!(new_time >= old_time, "time must not go backwards");

        new_time
    }

    /// Advance time by a chrono `Duration`.
    pub fn advance(&self, duration: Duration) {
        debug_assert!(duration >= Duration::zero(), "cannot go back in time");

        self.advance_ms(duration.num_milliseconds() as u64);
    }

    /// Set time to an absolute value.
    ///
    /// # Panics
    /// Panics if the new time is earlier than the current time.
    pub fn set_ms(&self, ms: u64) {
        let current = self.now_ms();
        // Precondition
        assert!(ms >= current, "cannot set time backwards: {ms} < {current}");

        self.current_ms.store(ms, Ordering::SeqCst);
    }

    /// Set time to a `DateTime`.
    pub fn set(&self, time: DateTime<Utc>) {
        self.set_ms(time.timestamp_millis().max(0) as u64);
    }
}

impl Clock for SimClock {
    fn now(&self) -> DateTime<Utc> {
        DateTime::from_timestamp_millis(self.now_ms() as i64).unwrap_or(DateTime::UNIX_EPOCH)
    }
}

impl Default for SimClock {
    fn default() -> Self {
        Self::new()
    }
}
