//! Webshop API wire types
//!
//! Raw schema of the upstream main-menu endpoint, shared between the
//! HTTP client and the normalization pipeline. Keys of `data` are
//! category display names; their order is upstream-controlled and
//! preserved (serde_json `preserve_order`), which is what makes "first
//! category" well defined.

use serde::Deserialize;
use serde_json::Value;

/// Main-menu response body: category name -> raw item records.
///
/// Values are kept as raw JSON because the upstream occasionally mixes
/// non-array values into `data`; consumers skip anything that does not
/// deserialize as an item array.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MenuResponse {
    #[serde(default)]
    pub data: serde_json::Map<String, Value>,
}

/// Raw item record as returned by the webshop API.
#[derive(Debug, Clone, Deserialize)]
pub struct RawMenuItem {
    #[serde(default)]
    pub id: Option<RawId>,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub price: Option<RawPrice>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub images: Vec<RawImage>,
    #[serde(default)]
    pub allergies: Vec<String>,
    /// Availability sentinel: 1 = available
    #[serde(default)]
    pub availability: Option<i64>,
}

/// Upstream ids appear both as numbers and as strings.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RawId {
    Number(i64),
    Text(String),
}

impl RawId {
    /// Render the id as a string, stringifying numeric ids.
    pub fn as_string(&self) -> String {
        match self {
            Self::Number(n) => n.to_string(),
            Self::Text(s) => s.clone(),
        }
    }
}

/// Upstream prices appear both as numbers and as decimal strings.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RawPrice {
    Number(f64),
    Text(String),
}

/// Sized image reference from the upstream media list.
#[derive(Debug, Clone, Deserialize)]
pub struct RawImage {
    #[serde(default)]
    pub size: String,
    #[serde(default)]
    pub path: String,
}

/// Error body shape used by the webshop API for non-success statuses.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiMessage {
    #[serde(default)]
    pub message: Option<String>,
}
