//! # Ensemble
//!
//! A wardrobe catalog store with deterministic outfit suggestion generation.
//!
//! Ensemble keeps a wardrobe (clothing items and saved outfits) in memory,
//! persists it write-through to a pluggable key-value store, and assembles
//! outfit suggestions from the current items with a combinatorial engine.
//!
//! ## Design
//!
//! Simulation-first: every source of nondeterminism is injected. Storage is a
//! trait, time is a [`dst::Clock`], ids come from a [`catalog::IdProvider`],
//! and all randomness flows through a seeded [`dst::DeterministicRng`]. The
//! simulated backend supports probabilistic fault injection, so storage
//! failure handling is tested the same way the happy path is.
//!
//! ## Example
//!
//! ```
//! use ensemble::catalog::{CatalogStore, Category, ClothingItemDraft};
//! use ensemble::suggest::SuggestionRequest;
//!
//! # tokio_test::block_on(async {
//! let mut store = CatalogStore::sim(42);
//! store.load().await;
//!
//! store
//!     .add_clothing_item(
//!         ClothingItemDraft::new("White Tee", Category::Top)
//!             .with_occasions(vec!["casual".to_string()])
//!             .with_weather(vec!["warm".to_string()]),
//!     )
//!     .await;
//! store
//!     .add_clothing_item(
//!         ClothingItemDraft::new("Blue Jeans", Category::Bottom)
//!             .with_occasions(vec!["casual".to_string()])
//!             .with_weather(vec!["warm".to_string()]),
//!     )
//!     .await;
//!
//! let request = SuggestionRequest::new("casual", "warm", 25, "female");
//! let suggestions = store.generate_suggestions(&request);
//! assert_eq!(suggestions.len(), 1);
//! # });
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod catalog;
pub mod constants;
pub mod dst;
pub mod shopping;
pub mod storage;
pub mod suggest;

pub use catalog::{CatalogStore, Category, ClothingItem, ClothingItemDraft, Outfit, OutfitDraft};
pub use storage::{KeyValueStore, StorageError, StorageResult};
pub use suggest::{OutfitSuggestion, SuggestionEngine, SuggestionRequest};
