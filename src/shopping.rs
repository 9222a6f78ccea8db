//! Shopping Suggestions
//!
//! Fixed wardrobe-staple recommendations with a budget flag. A placeholder
//! catalog until a real product feed exists.

/// A recommended purchase.
#[derive(Debug, Clone, PartialEq)]
pub struct ShoppingItem {
    /// Catalog entry id
    pub id: String,
    /// Product name
    pub name: String,
    /// Brand name
    pub brand: String,
    /// Price in the caller's currency
    pub price: f64,
    /// Product image reference
    pub image: String,
    /// Product category label
    pub category: String,
    /// Dominant color
    pub color: String,
    /// Average review rating out of 5
    pub rating: f32,
    /// Whether the price fits within the requested budget
    pub in_budget: bool,
}

/// Staple recommendations, flagged against the given budget.
///
/// `preferences` is part of the call surface for future filtering; the
/// static catalog does not consult it yet.
#[must_use]
pub fn suggestions(budget: f64, _preferences: &[String]) -> Vec<ShoppingItem> {
    let staples = [
        (
            "1",
            "Classic White T-Shirt",
            "Uniqlo",
            19.99,
            "top",
            "white",
            4.5,
        ),
        ("2", "Black Jeans", "Levi's", 89.99, "bottom", "black", 4.2),
    ];

    staples
        .into_iter()
        .map(
            |(id, name, brand, price, category, color, rating)| ShoppingItem {
                id: id.to_string(),
                name: name.to_string(),
                brand: brand.to_string(),
                price,
                image: "https://via.placeholder.com/300x300".to_string(),
                category: category.to_string(),
                color: color.to_string(),
                rating,
                in_budget: price <= budget,
            },
        )
        .collect()
}
