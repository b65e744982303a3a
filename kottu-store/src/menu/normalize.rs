//! Raw menu payload normalization
//!
//! Flattens the category-keyed webshop response into the `MenuItem` /
//! `Category` lists the UI consumes, substituting the fallback catalog
//! when the upstream returns nothing usable.

use rust_decimal::Decimal;
use rust_decimal::prelude::FromPrimitive;
use shared::client::{MenuResponse, RawMenuItem, RawPrice};
use shared::models::{Category, MenuItem};
use shared::util::format_price;
use tracing::{debug, warn};

use super::mock;

/// Placeholder image used when an item carries no usable image reference
pub const FALLBACK_IMAGE: &str = "assets/images/placeholder-food.png";

/// Description shown when the upstream record has none
const DEFAULT_DESCRIPTION: &str = "No description available";

/// Size label selected from the upstream media list
const PREFERRED_IMAGE_SIZE: &str = "medium";

/// Normalized menu payload: flat item and category lists
#[derive(Debug, Clone)]
pub struct NormalizedMenu {
    pub items: Vec<MenuItem>,
    pub categories: Vec<Category>,
    /// True when the built-in fallback catalog was substituted
    pub used_fallback: bool,
}

/// Flatten a raw main-menu response, applying the fallback policy.
///
/// An empty result is a soft condition, not an error: the mock catalog
/// stands in so the storefront stays browsable. Note this also covers a
/// legitimately empty catalog, matching upstream behavior.
pub fn normalize(response: &MenuResponse) -> NormalizedMenu {
    let mut categories = Vec::new();
    let mut items = Vec::new();

    for (category_name, value) in &response.data {
        // Non-array values in `data` are upstream noise, skip them
        let Ok(raw_items) = serde_json::from_value::<Vec<RawMenuItem>>(value.clone()) else {
            continue;
        };

        categories.push(Category::from_name(category_name.as_str()));
        for raw in &raw_items {
            items.push(normalize_item(raw, category_name));
        }
    }

    debug!(
        items = items.len(),
        categories = categories.len(),
        "normalized menu payload"
    );

    let mut used_fallback = false;
    if items.is_empty() {
        warn!("no menu items in upstream payload, using fallback catalog");
        items = mock::mock_items();
        used_fallback = true;
    }
    if categories.is_empty() {
        warn!("no categories in upstream payload, using fallback category");
        categories = mock::mock_categories();
        used_fallback = true;
    }

    NormalizedMenu {
        items,
        categories,
        used_fallback,
    }
}

fn normalize_item(raw: &RawMenuItem, category: &str) -> MenuItem {
    MenuItem {
        id: raw.id.as_ref().map(|id| id.as_string()).unwrap_or_default(),
        name: raw.title.clone(),
        description: raw
            .description
            .clone()
            .unwrap_or_else(|| DEFAULT_DESCRIPTION.to_string()),
        price: price_string(raw.price.as_ref()),
        image: Some(pick_image(raw)),
        category: category.to_string(),
        allergies: raw.allergies.clone(),
        availability: raw.availability == Some(1),
    }
}

/// Coerce the raw price to a canonical two-decimal string, "0.00" when
/// absent or unparsable
fn price_string(price: Option<&RawPrice>) -> String {
    let amount = match price {
        Some(RawPrice::Number(n)) => Decimal::from_f64(*n),
        Some(RawPrice::Text(s)) => s.trim().parse::<Decimal>().ok(),
        None => None,
    };
    format_price(amount.unwrap_or(Decimal::ZERO))
}

/// First of: explicit image URL, first "medium" sized image, placeholder
fn pick_image(raw: &RawMenuItem) -> String {
    if let Some(url) = raw.image_url.as_ref().filter(|u| !u.is_empty()) {
        return url.clone();
    }
    raw.images
        .iter()
        .find(|img| img.size == PREFERRED_IMAGE_SIZE)
        .map(|img| img.path.clone())
        .unwrap_or_else(|| FALLBACK_IMAGE.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn response(value: serde_json::Value) -> MenuResponse {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_two_categories_flattened_in_order() {
        let menu = normalize(&response(json!({
            "data": {
                "Curries": [
                    { "id": 10, "title": "Chicken Curry", "price": "9.50", "availability": 1 }
                ],
                "Drinks": [
                    { "id": "d-1", "title": "King Coconut", "price": 2.5, "availability": 0 }
                ],
            }
        })));

        assert!(!menu.used_fallback);
        assert_eq!(menu.categories.len(), 2);
        assert_eq!(menu.categories[0], Category::from_name("Curries"));
        assert_eq!(menu.categories[1], Category::from_name("Drinks"));

        assert_eq!(menu.items.len(), 2);
        assert_eq!(menu.items[0].id, "10");
        assert_eq!(menu.items[0].category, "Curries");
        assert_eq!(menu.items[0].price, "9.50");
        assert!(menu.items[0].availability);
        assert_eq!(menu.items[1].id, "d-1");
        assert_eq!(menu.items[1].category, "Drinks");
        assert_eq!(menu.items[1].price, "2.50");
        assert!(!menu.items[1].availability);
    }

    #[test]
    fn test_price_defaults_to_zero_when_absent_or_invalid() {
        let menu = normalize(&response(json!({
            "data": {
                "Snacks": [
                    { "id": 1, "title": "No Price" },
                    { "id": 2, "title": "Bad Price", "price": "free!" },
                ]
            }
        })));

        assert_eq!(menu.items[0].price, "0.00");
        assert_eq!(menu.items[1].price, "0.00");
    }

    #[test]
    fn test_image_preference_order() {
        let menu = normalize(&response(json!({
            "data": {
                "Snacks": [
                    { "id": 1, "title": "Explicit", "image_url": "https://cdn/x.png",
                      "images": [{ "size": "medium", "path": "https://cdn/m.png" }] },
                    { "id": 2, "title": "Medium",
                      "images": [
                          { "size": "small", "path": "https://cdn/s.png" },
                          { "size": "medium", "path": "https://cdn/m.png" }
                      ] },
                    { "id": 3, "title": "None" },
                ]
            }
        })));

        assert_eq!(menu.items[0].image.as_deref(), Some("https://cdn/x.png"));
        assert_eq!(menu.items[1].image.as_deref(), Some("https://cdn/m.png"));
        assert_eq!(menu.items[2].image.as_deref(), Some(FALLBACK_IMAGE));
    }

    #[test]
    fn test_description_and_allergies_defaults() {
        let menu = normalize(&response(json!({
            "data": {
                "Snacks": [
                    { "id": 1, "title": "Plain" },
                    { "id": 2, "title": "Tagged", "description": "Spicy",
                      "allergies": ["Peanut"] },
                ]
            }
        })));

        assert_eq!(menu.items[0].description, DEFAULT_DESCRIPTION);
        assert!(menu.items[0].allergies.is_empty());
        assert_eq!(menu.items[1].description, "Spicy");
        assert_eq!(menu.items[1].allergies, ["Peanut"]);
    }

    #[test]
    fn test_empty_payload_substitutes_mock_catalog() {
        let menu = normalize(&response(json!({ "data": {} })));

        assert!(menu.used_fallback);
        assert_eq!(menu.items, mock::mock_items());
        assert_eq!(menu.categories, mock::mock_categories());
    }

    #[test]
    fn test_empty_categories_keep_names_but_items_fall_back() {
        // Categories exist but hold no items: items fall back, the real
        // category names are kept
        let menu = normalize(&response(json!({ "data": { "Desserts": [] } })));

        assert!(menu.used_fallback);
        assert_eq!(menu.items, mock::mock_items());
        assert_eq!(menu.categories, vec![Category::from_name("Desserts")]);
    }

    #[test]
    fn test_non_array_category_values_skipped() {
        let menu = normalize(&response(json!({
            "data": {
                "meta": { "version": 3 },
                "Mains": [{ "id": 1, "title": "Kottu", "price": "8.00", "availability": 1 }],
            }
        })));

        assert!(!menu.used_fallback);
        assert_eq!(menu.categories, vec![Category::from_name("Mains")]);
        assert_eq!(menu.items.len(), 1);
    }
}
