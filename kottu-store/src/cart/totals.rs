//! Derived cart totals
//!
//! Pure functions over the cart state; the UI recomputes these after
//! every cart mutation.

use rust_decimal::Decimal;
use shared::util::{format_price, parse_price};

use super::state::CartState;

/// Total number of units across all line items
pub fn total_items(cart: &CartState) -> u64 {
    cart.items.iter().map(|line| u64::from(line.quantity)).sum()
}

/// Total monetary amount as a two-decimal string.
///
/// Lines with unparsable prices contribute zero rather than failing.
pub fn total_amount(cart: &CartState) -> String {
    let total: Decimal = cart
        .items
        .iter()
        .map(|line| parse_price(&line.price) * Decimal::from(line.quantity))
        .sum();
    format_price(total)
}
