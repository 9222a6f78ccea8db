//! Catalog Store
//!
//! In-memory wardrobe catalog with write-through persistence. The in-memory
//! collections are authoritative: every mutation applies to memory first and
//! then overwrites the corresponding storage blob. Persistence failures are
//! logged and swallowed, never surfaced to callers, and never retried.

use chrono::Utc;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::catalog::ids::{IdProvider, SequentialIds, TimeBasedIds};
use crate::catalog::item::{ClothingItem, ClothingItemDraft, ClothingItemPatch};
use crate::catalog::outfit::{Outfit, OutfitDraft, OutfitPatch};
use crate::constants::{STORAGE_KEY_CLOTHING_ITEMS, STORAGE_KEY_OUTFITS};
use crate::dst::{Clock, SimClock, SystemClock};
use crate::storage::{KeyValueStore, SimKeyValueStore};
use crate::suggest::{OutfitSuggestion, SuggestionEngine, SuggestionRequest};

// =============================================================================
// CatalogStore
// =============================================================================

/// Wardrobe catalog backed by an injected key-value store.
///
/// The store owns both collections (clothing items and outfits), assigns ids
/// and timestamps through injected providers, and persists each collection as
/// a single JSON array blob under a fixed key.
///
/// # Example
///
/// ```
/// use ensemble::catalog::{CatalogStore, Category, ClothingItemDraft};
///
/// # tokio_test::block_on(async {
/// let mut store = CatalogStore::sim(42);
/// store.load().await;
///
/// let draft = ClothingItemDraft::new("Blue Oxford", Category::Top)
///     .with_color("blue")
///     .with_occasions(vec!["work".to_string()])
///     .with_weather(vec!["mild".to_string()]);
/// let item = store.add_clothing_item(draft).await;
/// assert_eq!(item.wear_count, 0);
/// # });
/// ```
pub struct CatalogStore<S: KeyValueStore> {
    storage: S,
    clock: Box<dyn Clock>,
    ids: Box<dyn IdProvider>,
    engine: SuggestionEngine,
    items: Vec<ClothingItem>,
    outfits: Vec<Outfit>,
    loading: bool,
}

impl CatalogStore<SimKeyValueStore> {
    /// Create a fully simulated store for deterministic testing.
    ///
    /// Simulated storage, a clock frozen at the epoch, sequential ids, and a
    /// seeded suggestion engine. Same seed, same behavior.
    #[must_use]
    pub fn sim(seed: u64) -> Self {
        Self::new(
            SimKeyValueStore::with_seed(seed),
            Box::new(SimClock::new()),
            Box::new(SequentialIds::new()),
            SuggestionEngine::with_seed(seed),
        )
    }
}

impl<S: KeyValueStore> CatalogStore<S> {
    /// Create a store with explicit collaborators.
    #[must_use]
    pub fn new(
        storage: S,
        clock: Box<dyn Clock>,
        ids: Box<dyn IdProvider>,
        engine: SuggestionEngine,
    ) -> Self {
        Self {
            storage,
            clock,
            ids,
            engine,
            items: Vec::new(),
            outfits: Vec::new(),
            loading: true,
        }
    }

    /// Create a store with production defaults: system clock, time-based ids,
    /// engine seeded from the current time.
    #[must_use]
    pub fn with_storage(storage: S) -> Self {
        let seed = u64::try_from(Utc::now().timestamp_millis()).unwrap_or(0);
        Self::new(
            storage,
            Box::new(SystemClock),
            Box::new(TimeBasedIds::new()),
            SuggestionEngine::with_seed(seed),
        )
    }

    // =========================================================================
    // Loading
    // =========================================================================

    /// Hydrate both collections from storage.
    ///
    /// A missing key or an unparsable blob yields an empty collection for
    /// that key; the failure is logged, never propagated. `is_loading`
    /// reports `false` once both keys have been attempted.
    #[tracing::instrument(skip(self))]
    pub async fn load(&mut self) {
        self.items = self.read_collection(STORAGE_KEY_CLOTHING_ITEMS).await;
        self.outfits = self.read_collection(STORAGE_KEY_OUTFITS).await;
        self.loading = false;
        tracing::debug!(
            items = self.items.len(),
            outfits = self.outfits.len(),
            "catalog loaded"
        );
    }

    async fn read_collection<T: DeserializeOwned>(&self, key: &str) -> Vec<T> {
        let blob = match self.storage.get(key).await {
            Ok(blob) => blob,
            Err(error) => {
                tracing::warn!(key, %error, "failed to read collection, starting empty");
                return Vec::new();
            }
        };
        let Some(blob) = blob else {
            return Vec::new();
        };
        match serde_json::from_str(&blob) {
            Ok(collection) => collection,
            Err(error) => {
                tracing::warn!(key, %error, "malformed collection blob, starting empty");
                Vec::new()
            }
        }
    }

    /// Whether the initial load has not yet completed.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Current clothing items, in insertion order.
    #[must_use]
    pub fn items(&self) -> &[ClothingItem] {
        &self.items
    }

    /// Current outfits, in insertion order.
    #[must_use]
    pub fn outfits(&self) -> &[Outfit] {
        &self.outfits
    }

    // =========================================================================
    // Clothing Item Operations
    // =========================================================================

    /// Add a clothing item, assigning its id and creation timestamp.
    ///
    /// Returns the stored item. The collection is persisted after the
    /// append; a persistence failure leaves the in-memory append intact.
    #[tracing::instrument(skip(self, draft))]
    pub async fn add_clothing_item(&mut self, draft: ClothingItemDraft) -> ClothingItem {
        let item = draft.into_item(self.ids.next_id(), self.clock.now());
        self.items.push(item.clone());
        self.persist_items().await;
        item
    }

    /// Apply a patch to the item with the given id.
    ///
    /// Returns `true` when the item existed. An unknown id is a complete
    /// no-op: no mutation, no persistence write.
    #[tracing::instrument(skip(self, patch))]
    pub async fn update_clothing_item(&mut self, id: &str, patch: ClothingItemPatch) -> bool {
        let Some(item) = self.items.iter_mut().find(|item| item.id == id) else {
            tracing::debug!(id, "update ignored, no such clothing item");
            return false;
        };
        patch.apply(item);
        self.persist_items().await;
        true
    }

    /// Remove the item with the given id.
    ///
    /// Returns `true` when the item existed. An unknown id writes nothing.
    #[tracing::instrument(skip(self))]
    pub async fn delete_clothing_item(&mut self, id: &str) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.id != id);
        if self.items.len() == before {
            tracing::debug!(id, "delete ignored, no such clothing item");
            return false;
        }
        self.persist_items().await;
        true
    }

    // =========================================================================
    // Outfit Operations
    // =========================================================================

    /// Add an outfit, assigning its id and creation timestamp.
    #[tracing::instrument(skip(self, draft))]
    pub async fn add_outfit(&mut self, draft: OutfitDraft) -> Outfit {
        let outfit = draft.into_outfit(self.ids.next_id(), self.clock.now());
        self.outfits.push(outfit.clone());
        self.persist_outfits().await;
        outfit
    }

    /// Apply a patch to the outfit with the given id.
    ///
    /// Returns `true` when the outfit existed; an unknown id is a no-op.
    #[tracing::instrument(skip(self, patch))]
    pub async fn update_outfit(&mut self, id: &str, patch: OutfitPatch) -> bool {
        let Some(outfit) = self.outfits.iter_mut().find(|outfit| outfit.id == id) else {
            tracing::debug!(id, "update ignored, no such outfit");
            return false;
        };
        patch.apply(outfit);
        self.persist_outfits().await;
        true
    }

    /// Remove the outfit with the given id.
    #[tracing::instrument(skip(self))]
    pub async fn delete_outfit(&mut self, id: &str) -> bool {
        let before = self.outfits.len();
        self.outfits.retain(|outfit| outfit.id != id);
        if self.outfits.len() == before {
            tracing::debug!(id, "delete ignored, no such outfit");
            return false;
        }
        self.persist_outfits().await;
        true
    }

    // =========================================================================
    // Suggestions
    // =========================================================================

    /// Generate outfit suggestions from the current item collection.
    ///
    /// Pure with respect to state: nothing is persisted and the collections
    /// are not modified.
    #[tracing::instrument(skip(self))]
    pub fn generate_suggestions(&mut self, request: &SuggestionRequest) -> Vec<OutfitSuggestion> {
        let now = self.clock.now();
        self.engine.generate(&self.items, request, now)
    }

    // =========================================================================
    // Persistence
    // =========================================================================

    async fn persist_items(&self) {
        self.persist(STORAGE_KEY_CLOTHING_ITEMS, &self.items).await;
    }

    async fn persist_outfits(&self) {
        self.persist(STORAGE_KEY_OUTFITS, &self.outfits).await;
    }

    /// Overwrite the blob for `key` with the serialized collection.
    ///
    /// Failures are logged and swallowed; in-memory state stays
    /// authoritative and no retry is attempted.
    async fn persist<T: Serialize>(&self, key: &str, collection: &[T]) {
        let blob = match serde_json::to_string(collection) {
            Ok(blob) => blob,
            Err(error) => {
                tracing::warn!(key, %error, "failed to serialize collection");
                return;
            }
        };
        if let Err(error) = self.storage.set(key, &blob).await {
            tracing::warn!(key, %error, "failed to persist collection");
        }
    }

    /// Direct access to the storage backend.
    pub fn storage(&self) -> &S {
        &self.storage
    }
}

// =============================================================================
// Tests
// =============================================================================
