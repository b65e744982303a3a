//! Cart Line Item Model

use serde::{Deserialize, Serialize};

/// One cart entry, uniquely identified by product id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    pub id: String,
    pub name: String,
    /// Per-unit price as a decimal string
    pub price: String,
    /// Always >= 1; a zero quantity means the line is removed, never stored
    pub quantity: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}
