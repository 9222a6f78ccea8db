//! Deterministic Simulation Testing (DST)
//!
//! `TigerStyle`: every source of non-determinism the catalog touches has
//! an injectable, seed-reproducible stand-in: time ([`SimClock`]),
//! randomness ([`DeterministicRng`]), and persistence failures
//! ([`FaultInjector`]). A test that found a bad seed can replay it.

mod clock;
mod fault;
mod rng;

pub use clock::{Clock, SimClock, SystemClock};
pub use fault::{FaultConfig, FaultInjector, FaultType};
pub use rng::DeterministicRng;
