//! Kottu Client - HTTP client for the webshop API
//!
//! Issues authenticated REST calls to the upstream webshop menu service,
//! attaching the bearer token and tenant brand header.

pub mod config;
pub mod error;
pub mod http;

pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use http::HttpClient;

// Re-export wire types for convenience
pub use shared::client::{MenuResponse, RawImage, RawMenuItem};
