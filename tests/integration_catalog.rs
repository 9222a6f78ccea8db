//! Catalog Store Integration Tests
//!
//! End-to-end coverage of the write-through catalog: CRUD round trips,
//! persistence blobs, degraded-storage behavior, and reload semantics.

use ensemble::catalog::{
    CatalogStore, Category, ClothingItemDraft, ClothingItemPatch, OutfitDraft, OutfitPatch,
    SequentialIds,
};
use ensemble::constants::{STORAGE_KEY_CLOTHING_ITEMS, STORAGE_KEY_OUTFITS};
use ensemble::dst::{FaultConfig, FaultType, SimClock};
use ensemble::storage::SimKeyValueStore;
use ensemble::suggest::SuggestionEngine;
use ensemble::ClothingItem;

use chrono::{TimeZone, Utc};
use tracing_subscriber::EnvFilter;

/// Install a per-test subscriber so swallowed persistence failures show up
/// in captured test output (RUST_LOG=ensemble=debug to see them).
fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn casual_draft(name: &str, category: Category) -> ClothingItemDraft {
    ClothingItemDraft::new(name, category)
        .with_color("blue")
        .with_size("M")
        .with_occasions(vec!["casual".to_string()])
        .with_weather(vec!["warm".to_string()])
}

// =============================================================================
// CRUD Round Trips
// =============================================================================

#[tokio::test]
async fn test_clothing_item_lifecycle() {
    let mut store = CatalogStore::sim(42);
    store.load().await;

    // Add
    let item = store
        .add_clothing_item(casual_draft("Linen Shirt", Category::Top))
        .await;
    assert_eq!(item.name, "Linen Shirt");
    assert_eq!(item.category, Category::Top);
    assert_eq!(item.wear_count, 0);
    assert!(!item.is_favorite);
    assert!(item.last_worn.is_none());

    // Update
    let worn = Utc.with_ymd_and_hms(2026, 6, 1, 9, 0, 0).unwrap();
    let updated = store
        .update_clothing_item(&item.id, ClothingItemPatch::new().worn_at(worn, 1))
        .await;
    assert!(updated);
    assert_eq!(store.items()[0].wear_count, 1);
    assert_eq!(store.items()[0].last_worn, Some(worn));

    // Delete
    assert!(store.delete_clothing_item(&item.id).await);
    assert!(store.items().is_empty());
}

#[tokio::test]
async fn test_outfit_lifecycle() {
    let mut store = CatalogStore::sim(42);
    store.load().await;
    let shirt = store
        .add_clothing_item(casual_draft("Linen Shirt", Category::Top))
        .await;
    let jeans = store
        .add_clothing_item(casual_draft("Jeans", Category::Bottom))
        .await;

    let outfit = store
        .add_outfit(
            OutfitDraft::new("Weekend", vec![shirt, jeans])
                .with_occasion("casual")
                .with_weather("warm")
                .with_season("summer"),
        )
        .await;
    assert_eq!(outfit.items.len(), 2);
    assert!((outfit.rating - 0.0).abs() < f32::EPSILON);

    assert!(
        store
            .update_outfit(&outfit.id, OutfitPatch::new().with_rating(5.0).favorite(true))
            .await
    );
    assert!(store.outfits()[0].is_favorite);

    assert!(store.delete_outfit(&outfit.id).await);
    assert!(store.outfits().is_empty());
}

#[tokio::test]
async fn test_wear_count_never_decreases() {
    let mut store = CatalogStore::sim(42);
    store.load().await;
    let item = store
        .add_clothing_item(casual_draft("Linen Shirt", Category::Top))
        .await;
    let worn = Utc.with_ymd_and_hms(2026, 6, 1, 9, 0, 0).unwrap();

    store
        .update_clothing_item(&item.id, ClothingItemPatch::new().worn_at(worn, 5))
        .await;
    store
        .update_clothing_item(&item.id, ClothingItemPatch::new().worn_at(worn, 2))
        .await;

    assert_eq!(store.items()[0].wear_count, 5);
}

// =============================================================================
// Persistence Behavior
// =============================================================================

#[tokio::test]
async fn test_every_mutation_overwrites_full_blob() {
    let mut store = CatalogStore::sim(42);
    store.load().await;

    let a = store
        .add_clothing_item(casual_draft("Shirt A", Category::Top))
        .await;
    store
        .add_clothing_item(casual_draft("Shirt B", Category::Top))
        .await;

    let blob = store
        .storage()
        .contents(STORAGE_KEY_CLOTHING_ITEMS)
        .unwrap();
    let parsed: Vec<ClothingItem> = serde_json::from_str(&blob).unwrap();
    assert_eq!(parsed.len(), 2);

    store.delete_clothing_item(&a.id).await;
    let blob = store
        .storage()
        .contents(STORAGE_KEY_CLOTHING_ITEMS)
        .unwrap();
    let parsed: Vec<ClothingItem> = serde_json::from_str(&blob).unwrap();
    assert_eq!(parsed.len(), 1);
    assert_eq!(parsed[0].name, "Shirt B");
}

#[tokio::test]
async fn test_persisted_blob_uses_camel_case_fields() {
    let mut store = CatalogStore::sim(42);
    store.load().await;
    store
        .add_clothing_item(casual_draft("Linen Shirt", Category::Top))
        .await;

    let blob = store
        .storage()
        .contents(STORAGE_KEY_CLOTHING_ITEMS)
        .unwrap();

    assert!(blob.contains("\"wearCount\""));
    assert!(blob.contains("\"isFavorite\""));
    assert!(blob.contains("\"dateAdded\""));
    assert!(blob.contains("\"imageUri\""));
}

#[tokio::test]
async fn test_unknown_id_mutations_write_nothing() {
    let mut store = CatalogStore::sim(42);
    store.load().await;
    let shirt = store
        .add_clothing_item(casual_draft("Linen Shirt", Category::Top))
        .await;
    store
        .add_outfit(OutfitDraft::new("Everyday", vec![shirt]))
        .await;
    let blob_before = store
        .storage()
        .contents(STORAGE_KEY_CLOTHING_ITEMS)
        .unwrap();
    let outfits_before = store.storage().contents(STORAGE_KEY_OUTFITS).unwrap();
    let writes_before = store.storage().writes_count();

    assert!(
        !store
            .update_clothing_item("ghost", ClothingItemPatch::new().favorite(true))
            .await
    );
    assert!(!store.delete_clothing_item("ghost").await);
    assert!(!store.update_outfit("ghost", OutfitPatch::new().favorite(true)).await);
    assert!(!store.delete_outfit("ghost").await);

    assert_eq!(store.storage().writes_count(), writes_before);
    let blob_after = store
        .storage()
        .contents(STORAGE_KEY_CLOTHING_ITEMS)
        .unwrap();
    assert_eq!(blob_before, blob_after);
    let outfits_after = store.storage().contents(STORAGE_KEY_OUTFITS).unwrap();
    assert_eq!(outfits_before, outfits_after);
}

// =============================================================================
// Degraded Storage
// =============================================================================

#[tokio::test]
async fn test_write_failure_keeps_memory_authoritative() {
    init_tracing();
    let storage = SimKeyValueStore::with_seed(7)
        .with_faults(FaultConfig::new(FaultType::StorageWriteFail, 1.0).with_filter("set"));
    let mut store = CatalogStore::new(
        storage,
        Box::new(SimClock::new()),
        Box::new(SequentialIds::new()),
        SuggestionEngine::with_seed(7),
    );
    store.load().await;

    let item = store
        .add_clothing_item(casual_draft("Linen Shirt", Category::Top))
        .await;

    // The caller still gets the item and the collection holds it.
    assert_eq!(item.id, "id-1");
    assert_eq!(store.items().len(), 1);
    // Nothing reached storage.
    assert_eq!(store.storage().writes_count(), 0);
    assert_eq!(store.storage().contents(STORAGE_KEY_CLOTHING_ITEMS), None);
}

#[tokio::test]
async fn test_read_failure_loads_empty() {
    init_tracing();
    let storage = SimKeyValueStore::with_seed(7)
        .with_faults(FaultConfig::new(FaultType::StorageReadFail, 1.0).with_filter("get"));
    storage.inject_raw(STORAGE_KEY_CLOTHING_ITEMS, "[{\"bogus\": true}]");
    let mut store = CatalogStore::new(
        storage,
        Box::new(SimClock::new()),
        Box::new(SequentialIds::new()),
        SuggestionEngine::with_seed(7),
    );

    store.load().await;

    assert!(!store.is_loading());
    assert!(store.items().is_empty());
    assert!(store.outfits().is_empty());
}

#[tokio::test]
async fn test_corrupted_blob_loads_empty() {
    init_tracing();
    let storage = SimKeyValueStore::with_seed(7)
        .with_faults(FaultConfig::new(FaultType::StorageCorruption, 1.0).with_filter("get"));
    storage.inject_raw(STORAGE_KEY_CLOTHING_ITEMS, "[]");
    let mut store = CatalogStore::new(
        storage,
        Box::new(SimClock::new()),
        Box::new(SequentialIds::new()),
        SuggestionEngine::with_seed(7),
    );

    store.load().await;

    assert!(store.items().is_empty());
}

// =============================================================================
// Reload
// =============================================================================

#[tokio::test]
async fn test_state_survives_reload_through_storage() {
    let storage = SimKeyValueStore::with_seed(42);
    let mut store = CatalogStore::new(
        storage.clone(),
        Box::new(SimClock::new()),
        Box::new(SequentialIds::new()),
        SuggestionEngine::with_seed(42),
    );
    store.load().await;
    let shirt = store
        .add_clothing_item(casual_draft("Linen Shirt", Category::Top))
        .await;
    store
        .add_outfit(OutfitDraft::new("Weekend", vec![shirt]))
        .await;
    drop(store);

    // A fresh store over the same backend sees the persisted state.
    let mut reloaded = CatalogStore::new(
        storage,
        Box::new(SimClock::new()),
        Box::new(SequentialIds::new()),
        SuggestionEngine::with_seed(42),
    );
    reloaded.load().await;

    assert_eq!(reloaded.items().len(), 1);
    assert_eq!(reloaded.outfits().len(), 1);
    assert_eq!(reloaded.items()[0].name, "Linen Shirt");
    assert_eq!(reloaded.outfits()[0].name, "Weekend");
    assert!(reloaded
        .storage()
        .contents(STORAGE_KEY_OUTFITS)
        .is_some());
}
