//! `ClothingItem` - Structured data for the clothing catalog
//!
//! `TigerStyle`: Explicit types, validation, draft/patch pattern.
//! Serialized field names are camelCase so persisted blobs stay compatible
//! with the JSON the companion app already stores.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::constants::{CATALOG_ID_BYTES_MAX, CATALOG_NAME_BYTES_MAX, CATALOG_TAGS_COUNT_MAX};

// =============================================================================
// Category
// =============================================================================

/// Fixed clothing categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Shirts, blouses, t-shirts
    Top,
    /// Trousers, skirts, shorts
    Bottom,
    /// One-piece garments (replace a top+bottom pair)
    Dress,
    /// Coats and jackets
    Outerwear,
    /// Footwear
    Shoes,
    /// Jewelry, bags, belts
    Accessories,
}

impl Category {
    /// Get string representation.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::Bottom => "bottom",
            Self::Dress => "dress",
            Self::Outerwear => "outerwear",
            Self::Shoes => "shoes",
            Self::Accessories => "accessories",
        }
    }

    /// Parse from string.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "top" => Some(Self::Top),
            "bottom" => Some(Self::Bottom),
            "dress" => Some(Self::Dress),
            "outerwear" => Some(Self::Outerwear),
            "shoes" => Some(Self::Shoes),
            "accessories" => Some(Self::Accessories),
            _ => None,
        }
    }

    /// Get all categories in order.
    #[must_use]
    pub fn all() -> &'static [Category] {
        &[
            Self::Top,
            Self::Bottom,
            Self::Dress,
            Self::Outerwear,
            Self::Shoes,
            Self::Accessories,
        ]
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// =============================================================================
// ClothingItem
// =============================================================================

/// A clothing item in the catalog.
///
/// Identity and derived counters (`id`, `date_added`, `wear_count`,
/// `is_favorite`) are owned by the catalog store; callers supply the rest
/// through [`ClothingItemDraft`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClothingItem {
    /// Unique identifier, immutable once created
    pub id: String,
    /// Display name
    pub name: String,
    /// Fixed category
    pub category: Category,
    /// Free-form subcategory ("t-shirt", "jeans", ...)
    pub subcategory: String,
    /// Dominant color
    pub color: String,
    /// Pattern ("solid", "striped", ...)
    pub pattern: String,
    /// Material ("cotton", "wool", ...)
    pub material: String,
    /// Brand, if known
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,
    /// Size label
    pub size: String,
    /// Opaque image reference, not interpreted by the core
    pub image_uri: String,
    /// Free-form tags (drives appropriateness rules)
    pub tags: Vec<String>,
    /// Occasions this item suits (membership set)
    pub occasions: Vec<String>,
    /// Weather conditions this item suits (membership set)
    pub weather: Vec<String>,
    /// Creation timestamp, assigned by the store
    pub date_added: DateTime<Utc>,
    /// When the item was last worn
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_worn: Option<DateTime<Utc>>,
    /// Times worn; never decreases
    pub wear_count: u32,
    /// Favorite flag
    pub is_favorite: bool,
}

impl ClothingItem {
    /// Check whether the item carries a given tag.
    #[must_use]
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    /// Check whether the item suits an occasion.
    #[must_use]
    pub fn suits_occasion(&self, occasion: &str) -> bool {
        self.occasions.iter().any(|o| o == occasion)
    }

    /// Check whether the item suits a weather condition.
    #[must_use]
    pub fn suits_weather(&self, weather: &str) -> bool {
        self.weather.iter().any(|w| w == weather)
    }
}

// =============================================================================
// ClothingItemDraft
// =============================================================================

/// Caller-suppliable fields of a clothing item.
///
/// Everything except identity, creation timestamp, wear counter, and
/// favorite flag, which the store synthesizes on add.
#[derive(Debug, Clone, Default)]
pub struct ClothingItemDraft {
    /// Display name
    pub name: String,
    /// Fixed category
    pub category: Option<Category>,
    /// Free-form subcategory
    pub subcategory: String,
    /// Dominant color
    pub color: String,
    /// Pattern
    pub pattern: String,
    /// Material
    pub material: String,
    /// Brand, if known
    pub brand: Option<String>,
    /// Size label
    pub size: String,
    /// Opaque image reference
    pub image_uri: String,
    /// Free-form tags
    pub tags: Vec<String>,
    /// Occasions this item suits
    pub occasions: Vec<String>,
    /// Weather conditions this item suits
    pub weather: Vec<String>,
    /// When the item was last worn, if importing an already-worn piece
    pub last_worn: Option<DateTime<Utc>>,
}

impl ClothingItemDraft {
    /// Create a draft with the fields every item needs.
    #[must_use]
    pub fn new(name: impl Into<String>, category: Category) -> Self {
        Self {
            name: name.into(),
            category: Some(category),
            ..Self::default()
        }
    }

    /// Set the subcategory.
    #[must_use]
    pub fn with_subcategory(mut self, subcategory: impl Into<String>) -> Self {
        self.subcategory = subcategory.into();
        self
    }

    /// Set the color.
    #[must_use]
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }

    /// Set the pattern.
    #[must_use]
    pub fn with_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.pattern = pattern.into();
        self
    }

    /// Set the material.
    #[must_use]
    pub fn with_material(mut self, material: impl Into<String>) -> Self {
        self.material = material.into();
        self
    }

    /// Set the brand.
    #[must_use]
    pub fn with_brand(mut self, brand: impl Into<String>) -> Self {
        self.brand = Some(brand.into());
        self
    }

    /// Set the size label.
    #[must_use]
    pub fn with_size(mut self, size: impl Into<String>) -> Self {
        self.size = size.into();
        self
    }

    /// Set the image reference.
    #[must_use]
    pub fn with_image_uri(mut self, image_uri: impl Into<String>) -> Self {
        self.image_uri = image_uri.into();
        self
    }

    /// Set the tags.
    #[must_use]
    pub fn with_tags(mut self, tags: Vec<String>) -> Self {
        self.tags = tags;
        self
    }

    /// Set the occasions.
    #[must_use]
    pub fn with_occasions(mut self, occasions: Vec<String>) -> Self {
        self.occasions = occasions;
        self
    }

    /// Set the weather conditions.
    #[must_use]
    pub fn with_weather(mut self, weather: Vec<String>) -> Self {
        self.weather = weather;
        self
    }

    /// Set the last-worn timestamp.
    #[must_use]
    pub fn with_last_worn(mut self, last_worn: DateTime<Utc>) -> Self {
        self.last_worn = Some(last_worn);
        self
    }

    /// Materialize the draft into an item.
    ///
    /// [`CatalogStore::add_clothing_item`](crate::catalog::CatalogStore::add_clothing_item)
    /// calls this with its id provider and clock; call it directly only when
    /// assembling items outside a store (fixtures, migrations).
    ///
    /// # Panics
    /// Panics if no category was set, or if id/name/tags exceed limits.
    #[must_use]
    pub fn into_item(self, id: String, date_added: DateTime<Utc>) -> ClothingItem {
        // Preconditions
        assert!(!id.is_empty(), "item must have id");
        assert!(id.len() <= CATALOG_ID_BYTES_MAX, "id exceeds max length");
        assert!(
            self.name.len() <= CATALOG_NAME_BYTES_MAX,
            "name {} bytes exceeds max {}",
            self.name.len(),
            CATALOG_NAME_BYTES_MAX
        );
        assert!(
            self.tags.len() <= CATALOG_TAGS_COUNT_MAX,
            "too many tags: {}",
            self.tags.len()
        );
        let category = self.category.expect("draft must have a category");

        ClothingItem {
            id,
            name: self.name,
            category,
            subcategory: self.subcategory,
            color: self.color,
            pattern: self.pattern,
            material: self.material,
            brand: self.brand,
            size: self.size,
            image_uri: self.image_uri,
            tags: self.tags,
            occasions: self.occasions,
            weather: self.weather,
            date_added,
            last_worn: self.last_worn,
            wear_count: 0,
            is_favorite: false,
        }
    }
}

// =============================================================================
// ClothingItemPatch
// =============================================================================

/// Partial update for a clothing item.
///
/// `None` fields are left untouched. `id` and `date_added` are immutable
/// and therefore absent.
#[derive(Debug, Clone, Default)]
pub struct ClothingItemPatch {
    /// New display name
    pub name: Option<String>,
    /// New category
    pub category: Option<Category>,
    /// New subcategory
    pub subcategory: Option<String>,
    /// New color
    pub color: Option<String>,
    /// New pattern
    pub pattern: Option<String>,
    /// New material
    pub material: Option<String>,
    /// New brand
    pub brand: Option<String>,
    /// New size label
    pub size: Option<String>,
    /// New image reference
    pub image_uri: Option<String>,
    /// Replacement tag set
    pub tags: Option<Vec<String>>,
    /// Replacement occasion set
    pub occasions: Option<Vec<String>>,
    /// Replacement weather set
    pub weather: Option<Vec<String>>,
    /// New last-worn timestamp
    pub last_worn: Option<DateTime<Utc>>,
    /// New wear count (may not decrease; lower values are ignored)
    pub wear_count: Option<u32>,
    /// New favorite flag
    pub is_favorite: Option<bool>,
}

impl ClothingItemPatch {
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

    /// Record a wear: bump the count and stamp last-worn.
    #[must_use]
    pub fn worn_at(mut self, when: DateTime<Utc>, new_count: u32) -> Self {
        self.last_worn = Some(when);
        self.wear_count = Some(new_count);
        self
    }

    /// Merge this patch into an item.
    pub(crate) fn apply(self, item: &mut ClothingItem) {
        if let Some(name) = self.name {
            item.name = name;
        }
        if let Some(category) = self.category {
            item.category = category;
        }
        if let Some(subcategory) = self.subcategory {
            item.subcategory = subcategory;
        }
        if let Some(color) = self.color {
            item.color = color;
        }
        if let Some(pattern) = self.pattern {
            item.pattern = pattern;
        }
        if let Some(material) = self.material {
            item.material = material;
        }
        if let Some(brand) = self.brand {
            item.brand = Some(brand);
        }
        if let Some(size) = self.size {
            item.size = size;
        }
        if let Some(image_uri) = self.image_uri {
            item.image_uri = image_uri;
        }
        if let Some(tags) = self.tags {
            item.tags = tags;
        }
        if let Some(occasions) = self.occasions {
            item.occasions = occasions;
        }
        if let Some(weather) = self.weather {
            item.weather = weather;
        }
        if let Some(last_worn) = self.last_worn {
            item.last_worn = Some(last_worn);
        }
        if let Some(wear_count) = self.wear_count {
            // Invariant: wear_count never decreases
            item.wear_count = item.wear_count.max(wear_count);
        }
        if let Some(is_favorite) = self.is_favorite {
            item.is_favorite = is_favorite;
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
