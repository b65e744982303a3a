//! Shared types for the Kottu storefront
//!
//! Domain models, the webshop API wire schema, and price utilities
//! used by both the HTTP client and the store crates.

pub mod client;
pub mod models;
pub mod util;

// Re-exports
pub use serde::{Deserialize, Serialize};
