//! Process-wide store container
//!
//! One `Store` instance owns both sub-states behind interior locks and
//! exposes a command/query surface for the UI layer. Mutations are
//! synchronous; locks are never held across await points.

use std::sync::RwLock;

use shared::models::CartItem;

use crate::cart::{self, CartAction, CartState};
use crate::menu::{self, MenuAction, MenuState};

/// Single-writer state container for the storefront
#[derive(Debug, Default)]
pub struct Store {
    menu: RwLock<MenuState>,
    cart: RwLock<CartState>,
}

impl Store {
    /// Create a store with empty menu and cart state
    pub fn new() -> Self {
        Self::default()
    }

    // ========== Commands ==========

    /// Apply a menu action
    pub fn dispatch_menu(&self, action: MenuAction) {
        let mut state = self.menu.write().unwrap_or_else(|e| e.into_inner());
        menu::reduce(&mut state, action);
    }

    /// Apply a cart action
    pub fn dispatch_cart(&self, action: CartAction) {
        let mut state = self.cart.write().unwrap_or_else(|e| e.into_inner());
        cart::reduce(&mut state, action);
    }

    /// Add an item to the cart, merging by id
    pub fn add_to_cart(&self, item: CartItem) {
        self.dispatch_cart(CartAction::Add(item));
    }

    /// Set an item's quantity; zero or negative removes the line
    pub fn update_quantity(&self, id: impl Into<String>, quantity: i64) {
        self.dispatch_cart(CartAction::UpdateQuantity {
            id: id.into(),
            quantity,
        });
    }

    /// Remove a cart line by id
    pub fn remove_item(&self, id: impl Into<String>) {
        self.dispatch_cart(CartAction::Remove(id.into()));
    }

    /// Empty the cart
    pub fn clear_cart(&self) {
        self.dispatch_cart(CartAction::Clear);
    }

    // ========== Queries ==========

    /// Current menu state snapshot
    pub fn menu(&self) -> MenuState {
        self.menu.read().unwrap_or_else(|e| e.into_inner()).clone()
    }

    /// Current cart state snapshot
    pub fn cart(&self) -> CartState {
        self.cart.read().unwrap_or_else(|e| e.into_inner()).clone()
    }

    /// Total unit count across the cart
    pub fn total_items(&self) -> u64 {
        cart::total_items(&self.cart())
    }

    /// Cart total as a two-decimal string
    pub fn total_amount(&self) -> String {
        cart::total_amount(&self.cart())
    }
}
