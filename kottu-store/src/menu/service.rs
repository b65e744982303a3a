//! Menu fetch pipeline
//!
//! Drives the load lifecycle: flag loading, call the webshop API,
//! normalize, apply the fallback policy, and record the outcome in the
//! menu store. Failures become state, never propagated errors.

use std::sync::Arc;

use async_trait::async_trait;
use kottu_client::{ClientResult, HttpClient};
use shared::client::MenuResponse;
use tracing::{debug, error};

use super::normalize::{self, NormalizedMenu};
use super::state::MenuAction;
use crate::store::Store;

/// Transport seam for the menu endpoint
#[async_trait]
pub trait MenuApi: Send + Sync {
    async fn main_menu(&self) -> ClientResult<MenuResponse>;
}

#[async_trait]
impl MenuApi for HttpClient {
    async fn main_menu(&self) -> ClientResult<MenuResponse> {
        HttpClient::main_menu(self).await
    }
}

/// Menu fetch pipeline bound to one store instance
pub struct MenuService<A: MenuApi> {
    api: A,
    store: Arc<Store>,
}

impl<A: MenuApi> MenuService<A> {
    pub fn new(api: A, store: Arc<Store>) -> Self {
        Self { api, store }
    }

    /// Refresh the catalog from the webshop API.
    ///
    /// Re-entrant: each successful call wholesale-replaces items and
    /// categories (concurrent calls are last-writer-wins). A failure
    /// leaves the previous catalog in place and records a human-readable
    /// error. `loading` is cleared on every outcome. Returns the
    /// normalized payload on success, `None` on failure.
    pub async fn fetch_menu(&self) -> Option<NormalizedMenu> {
        self.store.dispatch_menu(MenuAction::SetLoading(true));
        self.store.dispatch_menu(MenuAction::SetError(None));

        let outcome = match self.api.main_menu().await {
            Ok(response) => {
                let menu = normalize::normalize(&response);
                self.store
                    .dispatch_menu(MenuAction::SetItems(menu.items.clone()));
                self.store
                    .dispatch_menu(MenuAction::SetCategories(menu.categories.clone()));

                if self.store.menu().active_category.is_empty() {
                    if let Some(first) = menu.categories.first() {
                        self.store
                            .dispatch_menu(MenuAction::SetActiveCategory(first.name.clone()));
                    }
                }

                debug!(
                    items = menu.items.len(),
                    categories = menu.categories.len(),
                    used_fallback = menu.used_fallback,
                    "menu refreshed"
                );
                Some(menu)
            }
            Err(err) => {
                error!(error = %err, "menu fetch failed");
                self.store
                    .dispatch_menu(MenuAction::SetError(Some(err.user_message())));
                None
            }
        };

        self.store.dispatch_menu(MenuAction::SetLoading(false));
        outcome
    }
}
