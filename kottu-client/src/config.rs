//! Client configuration

/// Configuration for connecting to the webshop API
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// API base URL (e.g., "https://pos.example.com/api")
    pub base_url: String,

    /// Bearer token for authentication
    pub token: Option<String>,

    /// Tenant brand id, sent as the `account_brand` header on every request
    pub brand_id: String,

    /// Main menu id path segment
    pub menu_id: i64,

    /// Webshop brand id path segment
    pub webshop_brand: i64,

    /// Shop id path segment
    pub shop: i64,

    /// Request timeout in seconds
    pub timeout: u64,
}

impl ClientConfig {
    /// Create a new client configuration with default menu coordinates
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            token: None,
            brand_id: "1".to_string(),
            menu_id: 65,
            webshop_brand: 1,
            shop: 2,
            timeout: 30,
        }
    }

    /// Set the authentication token
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Set the tenant brand header value
    pub fn with_brand_id(mut self, brand_id: impl Into<String>) -> Self {
        self.brand_id = brand_id.into();
        self
    }

    /// Set the menu endpoint coordinates (menu, webshop brand, shop)
    pub fn with_menu(mut self, menu_id: i64, webshop_brand: i64, shop: i64) -> Self {
        self.menu_id = menu_id;
        self.webshop_brand = webshop_brand;
        self.shop = shop;
        self
    }

    /// Set the request timeout in seconds
    pub fn with_timeout(mut self, timeout: u64) -> Self {
        self.timeout = timeout;
        self
    }
}
