//! Suggestion Engine
//!
//! `TigerStyle`: Pure computation over an item snapshot plus an injected
//! RNG. Same items, same request, same seed: same suggestions. The engine
//! never touches storage and never suspends.
//!
//! # Algorithm
//!
//! Items are hard-filtered by occasion and weather membership, partitioned
//! by category, and combined: one combination per eligible dress when any
//! dress is eligible, otherwise the full tops x bottoms cross product. Each
//! combination picks up a random shoe and accessory when available, and a
//! random outerwear piece only in cold weather. The first five combinations
//! in generation order become scored [`OutfitSuggestion`]s.

use chrono::{DateTime, Datelike, Utc};

use crate::catalog::{Category, ClothingItem, Outfit, OutfitDraft};
use crate::constants::{
    GENDER_FEMALE, GENDER_MALE, GENDER_NON_BINARY, SUGGESTIONS_COUNT_MAX,
    SUGGESTION_ADULT_AGE_MIN, SUGGESTION_CONFIDENCE_MAX, SUGGESTION_CONFIDENCE_MIN,
    SUGGESTION_REASON_TEMPLATES_COUNT, TAG_ADULT_ONLY, TAG_MENS_ONLY, TAG_WOMENS_ONLY,
    WEATHER_COLD,
};
use crate::dst::DeterministicRng;

// =============================================================================
// Request / Result Types
// =============================================================================

/// Parameters of a suggestion request.
#[derive(Debug, Clone)]
pub struct SuggestionRequest {
    /// Requested occasion; items must list it to be eligible
    pub occasion: String,
    /// Requested weather; items must list it to be eligible
    pub weather: String,
    /// Wearer age in years
    pub age: u32,
    /// Wearer gender ("male", "female", "non-binary", or free-form)
    pub gender: String,
}

impl SuggestionRequest {
    /// Create a new request.
    #[must_use]
    pub fn new(
        occasion: impl Into<String>,
        weather: impl Into<String>,
        age: u32,
        gender: impl Into<String>,
    ) -> Self {
        Self {
            occasion: occasion.into(),
            weather: weather.into(),
            age,
            gender: gender.into(),
        }
    }
}

/// An ephemeral, scored outfit candidate.
///
/// Never persisted; callers either save the wrapped outfit through the
/// catalog store or drop the suggestion.
#[derive(Debug, Clone)]
pub struct OutfitSuggestion {
    /// Candidate id (`suggestion-<index>`); distinct from store ids
    pub id: String,
    /// The assembled outfit candidate
    pub outfit: Outfit,
    /// Heuristic confidence in [0.6, 1.0)
    pub confidence: f64,
    /// Human-readable justification
    pub reason: String,
    /// Originating occasion
    pub occasion: String,
    /// Originating weather
    pub weather: String,
    /// False only for minors when an item is tagged adult-only
    pub age_appropriate: bool,
    /// Per-item gender tag exclusion result
    pub gender_appropriate: bool,
}

// =============================================================================
// SuggestionEngine
// =============================================================================

/// Combinatorial outfit suggestion generator.
///
/// All randomness (augmentation picks, confidence, reason selection) flows
/// through the injected [`DeterministicRng`], so tests replay exact runs by
/// seed.
#[derive(Debug, Clone)]
pub struct SuggestionEngine {
    rng: DeterministicRng,
}

impl SuggestionEngine {
    /// Create an engine with an injected RNG.
    #[must_use]
    pub fn new(rng: DeterministicRng) -> Self {
        Self { rng }
    }

    /// Create an engine seeded directly.
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self::new(DeterministicRng::new(seed))
    }

    /// Generate up to five scored suggestions for the request.
    ///
    /// `now` stamps candidate outfits and selects the season label; it is
    /// passed in so the engine stays a pure function of its inputs.
    pub fn generate(
        &mut self,
        items: &[ClothingItem],
        request: &SuggestionRequest,
        now: DateTime<Utc>,
    ) -> Vec<OutfitSuggestion> {
        let eligible: Vec<&ClothingItem> = items
            .iter()
            .filter(|item| {
                item.suits_occasion(&request.occasion) && item.suits_weather(&request.weather)
            })
            .collect();

        let in_category = |category: Category| -> Vec<&ClothingItem> {
            eligible
                .iter()
                .copied()
                .filter(|item| item.category == category)
                .collect()
        };

        let tops = in_category(Category::Top);
        let bottoms = in_category(Category::Bottom);
        let dresses = in_category(Category::Dress);
        let outerwear = in_category(Category::Outerwear);
        let shoes = in_category(Category::Shoes);
        let accessories = in_category(Category::Accessories);

        // The two branches are mutually exclusive: any eligible dress
        // suppresses top+bottom pairing entirely.
        let mut combinations: Vec<Vec<ClothingItem>> = Vec::new();
        if dresses.is_empty() {
            for top in &tops {
                for bottom in &bottoms {
                    let mut combo = vec![(*top).clone(), (*bottom).clone()];
                    self.augment(&mut combo, &shoes, &accessories, &outerwear, &request.weather);
                    combinations.push(combo);
                }
            }
        } else {
            for dress in &dresses {
                let mut combo = vec![(*dress).clone()];
                self.augment(&mut combo, &shoes, &accessories, &outerwear, &request.weather);
                combinations.push(combo);
            }
        }

        combinations.truncate(SUGGESTIONS_COUNT_MAX);

        let season = season_label(now);
        let suggestions: Vec<OutfitSuggestion> = combinations
            .into_iter()
            .enumerate()
            .map(|(index, combo)| {
                let outfit = OutfitDraft::new(
                    format!("{} Outfit {}", request.occasion, index + 1),
                    combo,
                )
                .with_occasion(request.occasion.clone())
                .with_weather(request.weather.clone())
                .with_season(season)
                .into_outfit(format!("suggestion-{index}"), now);

                let confidence = SUGGESTION_CONFIDENCE_MIN
                    + self.rng.next_float()
                        * (SUGGESTION_CONFIDENCE_MAX - SUGGESTION_CONFIDENCE_MIN);
                // Postcondition
                debug_assert!(
                    (SUGGESTION_CONFIDENCE_MIN..SUGGESTION_CONFIDENCE_MAX).contains(&confidence),
                    "confidence out of range: {confidence}"
                );

                let reason = self.pick_reason(request);
                let age_appropriate = is_age_appropriate(&outfit, request.age);
                let gender_appropriate = is_gender_appropriate(&outfit, &request.gender);

                OutfitSuggestion {
                    id: outfit.id.clone(),
                    outfit,
                    confidence,
                    reason,
                    occasion: request.occasion.clone(),
                    weather: request.weather.clone(),
                    age_appropriate,
                    gender_appropriate,
                }
            })
            .collect();

        // Postcondition
        debug_assert!(
            suggestions.len() <= SUGGESTIONS_COUNT_MAX,
            "too many suggestions: {}",
            suggestions.len()
        );

        suggestions
    }

    /// Append a random shoe, accessory, and (cold only) outerwear piece.
    fn augment(
        &mut self,
        combo: &mut Vec<ClothingItem>,
        shoes: &[&ClothingItem],
        accessories: &[&ClothingItem],
        outerwear: &[&ClothingItem],
        weather: &str,
    ) {
        if !shoes.is_empty() {
            combo.push((*self.rng.choose(shoes)).clone());
        }
        if !accessories.is_empty() {
            combo.push((*self.rng.choose(accessories)).clone());
        }
        if !outerwear.is_empty() && weather == WEATHER_COLD {
            combo.push((*self.rng.choose(outerwear)).clone());
        }
    }

    /// Choose one of the fixed reason templates uniformly.
    fn pick_reason(&mut self, request: &SuggestionRequest) -> String {
        let reasons = [
            format!(
                "Perfect for {} in {} weather",
                request.occasion, request.weather
            ),
            format!("Age-appropriate for {} year old", request.age),
            format!("Great for {} style preferences", request.gender),
            "Matches your color preferences".to_string(),
            "Suitable for the occasion and weather".to_string(),
        ];
        debug_assert_eq!(reasons.len(), SUGGESTION_REASON_TEMPLATES_COUNT);

        self.rng.choose(&reasons).clone()
    }
}

// =============================================================================
// Scoring Rules
// =============================================================================

/// Season label for a timestamp.
///
/// Months are 0-indexed: 2-4 spring, 5-7 summer, 8-10 fall, else winter.
fn season_label(now: DateTime<Utc>) -> &'static str {
    match now.month0() {
        2..=4 => "spring",
        5..=7 => "summer",
        8..=10 => "fall",
        _ => "winter",
    }
}

/// Minors are excluded from combinations carrying adult-only items.
/// Adults always pass regardless of tags.
fn is_age_appropriate(outfit: &Outfit, age: u32) -> bool {
    if age < SUGGESTION_ADULT_AGE_MIN {
        return !outfit.any_item_tagged(TAG_ADULT_ONLY);
    }
    true
}

/// Gender tag exclusion, checked per item.
///
/// Combinations without any gender-specific tag pass for every gender;
/// only explicit mens-only/womens-only tags constrain. Intent beyond the
/// literal rule is unspecified, so it is preserved as-is.
fn is_gender_appropriate(outfit: &Outfit, gender: &str) -> bool {
    if gender == GENDER_NON_BINARY {
        return true;
    }

    let has_gender_specific = outfit.any_item_tagged(TAG_MENS_ONLY)
        || outfit.any_item_tagged(TAG_WOMENS_ONLY);
    if !has_gender_specific {
        return true;
    }

    outfit.items.iter().all(|item| {
        if gender == GENDER_MALE {
            return !item.has_tag(TAG_WOMENS_ONLY);
        }
        if gender == GENDER_FEMALE {
            return !item.has_tag(TAG_MENS_ONLY);
        }
        true
    })
}

// =============================================================================
// Tests
// =============================================================================
