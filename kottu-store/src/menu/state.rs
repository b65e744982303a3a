//! Menu store state and reducer

use serde::Serialize;
use shared::models::{Category, MenuItem};

/// Catalog state consumed by the UI
#[derive(Debug, Clone, Default, Serialize)]
pub struct MenuState {
    pub items: Vec<MenuItem>,
    pub categories: Vec<Category>,
    /// Name of the currently selected category tab; empty until set
    pub active_category: String,
    pub loading: bool,
    pub error: Option<String>,
}

/// Menu store actions
#[derive(Debug, Clone)]
pub enum MenuAction {
    SetItems(Vec<MenuItem>),
    SetCategories(Vec<Category>),
    SetActiveCategory(String),
    SetLoading(bool),
    SetError(Option<String>),
}

/// Apply one action to the menu state
pub fn reduce(state: &mut MenuState, action: MenuAction) {
    match action {
        MenuAction::SetItems(items) => state.items = items,
        MenuAction::SetCategories(categories) => state.categories = categories,
        MenuAction::SetActiveCategory(name) => state.active_category = name,
        MenuAction::SetLoading(loading) => state.loading = loading,
        MenuAction::SetError(error) => state.error = error,
    }
}
