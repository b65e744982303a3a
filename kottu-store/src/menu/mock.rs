//! Built-in fallback catalog
//!
//! Substituted when the live menu comes back with no usable items so the
//! storefront always has something to render. The UI shows a
//! "using fallback data" banner while this catalog is active.

use super::normalize::FALLBACK_IMAGE;
use shared::models::{Category, MenuItem};

/// Category name used by the fallback catalog
pub const MOCK_CATEGORY_NAME: &str = "Sri Lankan";

/// The fixed 3-item fallback catalog
pub fn mock_items() -> Vec<MenuItem> {
    vec![
        MenuItem {
            id: "1".to_string(),
            name: "Rice and Curry".to_string(),
            description: "Traditional Sri Lankan meal with rice and curries".to_string(),
            price: "6.00".to_string(),
            image: Some(FALLBACK_IMAGE.to_string()),
            category: MOCK_CATEGORY_NAME.to_string(),
            allergies: vec!["Celery".to_string()],
            availability: true,
        },
        MenuItem {
            id: "2".to_string(),
            name: "Mixed Vegetables Fried Rice".to_string(),
            description: "Delicious fried rice with vegetables".to_string(),
            price: "5.00".to_string(),
            image: Some(FALLBACK_IMAGE.to_string()),
            category: MOCK_CATEGORY_NAME.to_string(),
            allergies: vec!["Gluten".to_string()],
            availability: true,
        },
        MenuItem {
            id: "3".to_string(),
            name: "Lump Rice".to_string(),
            description: "Traditional lump rice dish".to_string(),
            price: "7.00".to_string(),
            image: Some(FALLBACK_IMAGE.to_string()),
            category: MOCK_CATEGORY_NAME.to_string(),
            allergies: vec![],
            availability: true,
        },
    ]
}

/// Fallback category list matching `mock_items`
pub fn mock_categories() -> Vec<Category> {
    vec![Category::from_name(MOCK_CATEGORY_NAME)]
}
