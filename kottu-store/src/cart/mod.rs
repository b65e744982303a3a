//! Cart state, reducer, and derived totals

pub mod state;
pub mod totals;

pub use state::{CartAction, CartState, reduce};
pub use totals::{total_amount, total_items};
