//! Menu Item Model

use serde::{Deserialize, Serialize};

/// A single orderable item in the storefront catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: String,
    pub name: String,
    pub description: String,
    /// Canonical two-decimal price string (e.g. "6.00"). Arithmetic goes
    /// through `rust_decimal`; this field is the wire/storage form.
    pub price: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// Category reference (matches `Category::name`)
    pub category: String,
    #[serde(default)]
    pub allergies: Vec<String>,
    pub availability: bool,
}
