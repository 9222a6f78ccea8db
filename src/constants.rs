//! `TigerStyle` Constants
//!
//! All limits use big-endian naming: `CATEGORY_SPECIFICS_UNIT_LIMIT`
//! Example: `SUGGESTIONS_COUNT_MAX` (not `MAX_SUGGESTIONS`)
//!
//! Every constant includes units in the name where applicable:
//! - _`BYTES_MAX` for size limits
//! - _`COUNT_MAX` for quantity limits

// =============================================================================
// Suggestion Engine Limits
// =============================================================================

/// Maximum number of outfit suggestions returned per request
pub const SUGGESTIONS_COUNT_MAX: usize = 5;

/// Lower bound of suggestion confidence (inclusive)
pub const SUGGESTION_CONFIDENCE_MIN: f64 = 0.6;

/// Upper bound of suggestion confidence (exclusive)
pub const SUGGESTION_CONFIDENCE_MAX: f64 = 1.0;

/// Number of fixed reason templates
pub const SUGGESTION_REASON_TEMPLATES_COUNT: usize = 5;

/// Age below which the adult-only tag excludes a combination
pub const SUGGESTION_ADULT_AGE_MIN: u32 = 18;

// =============================================================================
// Appropriateness Tags and Values
// =============================================================================

/// Tag marking an item as adult-only
pub const TAG_ADULT_ONLY: &str = "adult-only";

/// Tag marking an item as mens-only
pub const TAG_MENS_ONLY: &str = "mens-only";

/// Tag marking an item as womens-only
pub const TAG_WOMENS_ONLY: &str = "womens-only";

/// Gender value that bypasses all tag-based gender exclusion
pub const GENDER_NON_BINARY: &str = "non-binary";

/// Gender value excluding womens-only items
pub const GENDER_MALE: &str = "male";

/// Gender value excluding mens-only items
pub const GENDER_FEMALE: &str = "female";

/// Weather value that triggers outerwear augmentation
pub const WEATHER_COLD: &str = "cold";

// =============================================================================
// Catalog Limits
// =============================================================================

/// Maximum length of a synthesized entity id
pub const CATALOG_ID_BYTES_MAX: usize = 64;

/// Maximum length of an entity name
pub const CATALOG_NAME_BYTES_MAX: usize = 256;

/// Maximum number of tags per entity
pub const CATALOG_TAGS_COUNT_MAX: usize = 100;

/// Maximum number of items referenced by one outfit
pub const OUTFIT_ITEMS_COUNT_MAX: usize = 20;

// =============================================================================
// Storage Keys and Limits
// =============================================================================

/// Persistence key for the clothing item collection
pub const STORAGE_KEY_CLOTHING_ITEMS: &str = "clothingItems";

/// Persistence key for the outfit collection
pub const STORAGE_KEY_OUTFITS: &str = "outfits";

/// Maximum size of a serialized collection blob
pub const STORAGE_VALUE_BYTES_MAX: usize = 10_000_000; // 10MB

/// Maximum length of a storage key
pub const STORAGE_KEY_BYTES_MAX: usize = 256;

// =============================================================================
// DST (Deterministic Simulation Testing) Limits
// =============================================================================

/// Maximum probability for fault injection (1.0 = 100%)
pub const DST_FAULT_PROBABILITY_MAX: f64 = 1.0;

/// Maximum time advance per step in milliseconds
pub const DST_TIME_ADVANCE_MS_MAX: u64 = 366 * TIME_MS_PER_DAY; // one year

// =============================================================================
// Time Constants
// =============================================================================

/// Milliseconds per second
pub const TIME_MS_PER_SEC: u64 = 1000;

/// Milliseconds per day
pub const TIME_MS_PER_DAY: u64 = 86_400_000;

// =============================================================================
// Tests
// =============================================================================
