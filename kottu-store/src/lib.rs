//! Kottu Store - storefront state management
//!
//! Menu and cart stores with pure reducers, the menu fetch/normalize
//! pipeline, and derived cart totals. One process-wide [`Store`] holds
//! both sub-states; the UI dispatches actions and reads state snapshots.

pub mod cart;
pub mod menu;
pub mod store;

pub use cart::{CartAction, CartState};
pub use menu::{MenuAction, MenuApi, MenuService, MenuState, NormalizedMenu};
pub use store::Store;
