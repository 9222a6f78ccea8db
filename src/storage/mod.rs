//! Persistence Adapter
//!
//! The catalog store consumes an asynchronous key-to-string contract
//! ([`KeyValueStore`]); it does not own an implementation. The crate ships
//! [`SimKeyValueStore`] for deterministic testing; production embedders
//! bring their own adapter (device storage, a file, a remote blob store).

mod backend;
mod error;
mod sim;

pub use backend::KeyValueStore;
pub use error::{StorageError, StorageResult};
pub use sim::SimKeyValueStore;
