//! Catalog Module
//!
//! The wardrobe data model (clothing items and outfits), id assignment,
//! and the write-through [`CatalogStore`] that ties them to storage.

mod ids;
mod item;
mod outfit;
mod store;

pub use ids::{IdProvider, SequentialIds, TimeBasedIds};
pub use item::{Category, ClothingItem, ClothingItemDraft, ClothingItemPatch};
pub use outfit::{Outfit, OutfitDraft, OutfitPatch};
pub use store::CatalogStore;
