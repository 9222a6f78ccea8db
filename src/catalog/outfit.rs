//! `Outfit` - Ordered collections of clothing items
//!
//! Same draft/patch pattern as [`super::item`]; serialized camelCase for
//! blob compatibility.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::item::ClothingItem;
use crate::constants::{CATALOG_ID_BYTES_MAX, CATALOG_NAME_BYTES_MAX, OUTFIT_ITEMS_COUNT_MAX};

// =============================================================================
// Outfit
// =============================================================================

/// A saved outfit: an ordered sequence of clothing items plus context.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Outfit {
    /// Unique identifier
    pub id: String,
    /// Display name
    pub name: String,
    /// Ordered item sequence; never persisted empty
    pub items: Vec<ClothingItem>,
    /// Occasion this outfit was assembled for
    pub occasion: String,
    /// Weather this outfit was assembled for
    pub weather: String,
    /// Season label ("spring", "summer", "fall", "winter")
    pub season: String,
    /// User rating, 0 by default
    pub rating: f32,
    /// Creation timestamp, assigned by the store
    pub date_created: DateTime<Utc>,
    /// When the outfit was last worn
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_worn: Option<DateTime<Utc>>,
    /// Times worn; never decreases
    pub wear_count: u32,
    /// Favorite flag
    pub is_favorite: bool,
    /// Optional composite image reference
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_uri: Option<String>,
    /// Free-form tags
    pub tags: Vec<String>,
}

impl Outfit {
    /// Check whether any item in the outfit carries a given tag.
    #[must_use]
    pub fn any_item_tagged(&self, tag: &str) -> bool {
        self.items.iter().any(|item| item.has_tag(tag))
    }

    /// Number of items in the given category.
    #[must_use]
    pub fn count_in_category(&self, category: super::item::Category) -> usize {
        self.items.iter().filter(|i| i.category == category).count()
    }
}

// =============================================================================
// OutfitDraft
// =============================================================================

/// Caller-suppliable fields of an outfit.
#[derive(Debug, Clone, Default)]
pub struct OutfitDraft {
    /// Display name
    pub name: String,
    /// Ordered item sequence; must be non-empty at add time
    pub items: Vec<ClothingItem>,
    /// Occasion
    pub occasion: String,
    /// Weather
    pub weather: String,
    /// Season label
    pub season: String,
    /// User rating
    pub rating: f32,
    /// Optional composite image reference
    pub image_uri: Option<String>,
    /// Free-form tags
    pub tags: Vec<String>,
    /// When the outfit was last worn, if importing an already-worn one
    pub last_worn: Option<DateTime<Utc>>,
}

impl OutfitDraft {
    /// Create a draft with a name and its items.
    #[must_use]
    pub fn new(name: impl Into<String>, items: Vec<ClothingItem>) -> Self {
        Self {
            name: name.into(),
            items,
            ..Self::default()
        }
    }

    /// Set the occasion.
    #[must_use]
    pub fn with_occasion(mut self, occasion: impl Into<String>) -> Self {
        self.occasion = occasion.into();
        self
    }

    /// Set the weather.
    #[must_use]
    pub fn with_weather(mut self, weather: impl Into<String>) -> Self {
        self.weather = weather.into();
        self
    }

    /// Set the season label.
    #[must_use]
    pub fn with_season(mut self, season: impl Into<String>) -> Self {
        self.season = season.into();
        self
    }

    /// Set the tags.
    #[must_use]
    pub fn with_tags(mut self, tags: Vec<String>) -> Self {
        self.tags = tags;
        self
    }

    /// Set the last-worn timestamp.
    #[must_use]
    pub fn with_last_worn(mut self, last_worn: DateTime<Utc>) -> Self {
        self.last_worn = Some(last_worn);
        self
    }

    /// Materialize the draft into an outfit.
    ///
    /// [`CatalogStore::add_outfit`](crate::catalog::CatalogStore::add_outfit)
    /// calls this with its id provider and clock; the suggestion engine calls
    /// it for its ephemeral candidates.
    ///
    /// # Panics
    /// Panics if the draft carries no items or exceeds limits.
    #[must_use]
    pub fn into_outfit(self, id: String, date_created: DateTime<Utc>) -> Outfit {
        // Preconditions
        assert!(!id.is_empty(), "outfit must have id");
        assert!(id.len() <= CATALOG_ID_BYTES_MAX, "id exceeds max length");
        assert!(!self.items.is_empty(), "outfit must not be persisted empty");
        assert!(
            self.items.len() <= OUTFIT_ITEMS_COUNT_MAX,
            "too many items: {}",
            self.items.len()
        );
        assert!(
            self.name.len() <= CATALOG_NAME_BYTES_MAX,
            "name {} bytes exceeds max {}",
            self.name.len(),
            CATALOG_NAME_BYTES_MAX
        );

        Outfit {
            id,
            name: self.name,
            items: self.items,
            occasion: self.occasion,
            weather: self.weather,
            season: self.season,
            rating: self.rating,
            date_created,
            last_worn: self.last_worn,
            wear_count: 0,
            is_favorite: false,
            image_uri: self.image_uri,
            tags: self.tags,
        }
    }
}

// =============================================================================
// OutfitPatch
// =============================================================================

/// Partial update for an outfit. `None` fields are left untouched.
#[derive(Debug, Clone, Default)]
pub struct OutfitPatch {
    /// New display name
    pub name: Option<String>,
    /// Replacement item sequence (must be non-empty)
    pub items: Option<Vec<ClothingItem>>,
    /// New occasion
    pub occasion: Option<String>,
    /// New weather
    pub weather: Option<String>,
    /// New season label
    pub season: Option<String>,
    /// New rating
    pub rating: Option<f32>,
    /// New last-worn timestamp
    pub last_worn: Option<DateTime<Utc>>,
    /// New wear count (may not decrease; lower values are ignored)
    pub wear_count: Option<u32>,
    /// New favorite flag
    pub is_favorite: Option<bool>,
    /// New composite image reference
    pub image_uri: Option<String>,
    /// Replacement tag set
    pub tags: Option<Vec<String>>,
}

impl OutfitPatch {
    /// Create an empty patch.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the favorite flag.
    #[must_use]
    pub fn favorite(mut self, is_favorite: bool) -> Self {
        self.is_favorite = Some(is_favorite);
        self
    }

    /// Set the rating.
    #[must_use]
    pub fn with_rating(mut self, rating: f32) -> Self {
        self.rating = Some(rating);
        self
    }

    /// Merge this patch into an outfit.
    pub(crate) fn apply(self, outfit: &mut Outfit) {
        if let Some(name) = self.name {
            outfit.name = name;
        }
        if let Some(items) = self.items {
            debug_assert!(!items.is_empty(), "outfit must not become empty");
            outfit.items = items;
        }
        if let Some(occasion) = self.occasion {
            outfit.occasion = occasion;
        }
        if let Some(weather) = self.weather {
            outfit.weather = weather;
        }
        if let Some(season) = self.season {
            outfit.season = season;
        }
        if let Some(rating) = self.rating {
            outfit.rating = rating;
        }
        if let Some(last_worn) = self.last_worn {
            outfit.last_worn = Some(last_worn);
        }
        if let Some(wear_count) = self.wear_count {
            // Invariant: wear_count never decreases
            outfit.wear_count = outfit.wear_count.max(wear_count);
        }
        if let Some(is_favorite) = self.is_favorite {
            outfit.is_favorite = is_favorite;
        }
        if let Some(image_uri) = self.image_uri {
            outfit.image_uri = Some(image_uri);
        }
        if let Some(tags) = self.tags {
            outfit.tags = tags;
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
