//! Data models
//!
//! Shared between the storefront client and the store crates.
//! All IDs are strings (upstream numeric ids are stringified at
//! normalization time).

pub mod cart_item;
pub mod category;
pub mod menu_item;

// Re-exports
pub use cart_item::*;
pub use category::*;
pub use menu_item::*;
