//! Cart store state and reducer

use serde::Serialize;
use shared::models::CartItem;

/// Cart state: at most one line item per product id
#[derive(Debug, Clone, Default, Serialize)]
pub struct CartState {
    pub items: Vec<CartItem>,
}

/// Cart store actions
#[derive(Debug, Clone)]
pub enum CartAction {
    /// Merge-by-id add: an existing line's quantity grows by the incoming
    /// quantity, metadata keeps the first write; otherwise append
    Add(CartItem),
    /// Absolute quantity set; zero or negative removes the line.
    /// Carried as i64 so callers can express non-positive values
    UpdateQuantity { id: String, quantity: i64 },
    Remove(String),
    Clear,
}

/// Apply one action to the cart state.
///
/// Never fails: unknown ids are no-ops and non-positive quantities
/// resolve to removal.
pub fn reduce(state: &mut CartState, action: CartAction) {
    match action {
        CartAction::Add(item) => add_item(state, item),
        CartAction::UpdateQuantity { id, quantity } => {
            if quantity <= 0 {
                state.items.retain(|line| line.id != id);
            } else if let Some(line) = state.items.iter_mut().find(|line| line.id == id) {
                line.quantity = u32::try_from(quantity).unwrap_or(u32::MAX);
            }
        }
        CartAction::Remove(id) => state.items.retain(|line| line.id != id),
        CartAction::Clear => state.items.clear(),
    }
}

fn add_item(state: &mut CartState, item: CartItem) {
    match state.items.iter_mut().find(|line| line.id == item.id) {
        Some(line) => line.quantity += item.quantity,
        None => {
            // A zero-quantity line is never stored
            if item.quantity > 0 {
                state.items.push(item);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(id: &str, price: &str, quantity: u32) -> CartItem {
        CartItem {
            id: id.to_string(),
            name: format!("Item {}", id),
            price: price.to_string(),
            quantity,
            image: None,
        }
    }

    #[test]
    fn test_add_merges_by_id() {
        let mut cart = CartState::default();
        reduce(&mut cart, CartAction::Add(line("1", "6.00", 1)));
        reduce(&mut cart, CartAction::Add(line("1", "6.00", 2)));
        reduce(&mut cart, CartAction::Add(line("1", "6.00", 3)));

        assert_eq!(cart.items.len(), 1);
        assert_eq!(cart.items[0].quantity, 6);
    }

    #[test]
    fn test_add_keeps_first_metadata() {
        let mut cart = CartState::default();
        reduce(&mut cart, CartAction::Add(line("1", "6.00", 1)));

        let mut renamed = line("1", "9.99", 1);
        renamed.name = "Renamed".to_string();
        reduce(&mut cart, CartAction::Add(renamed));

        assert_eq!(cart.items[0].name, "Item 1");
        assert_eq!(cart.items[0].price, "6.00");
        assert_eq!(cart.items[0].quantity, 2);
    }

    #[test]
    fn test_add_appends_distinct_ids() {
        let mut cart = CartState::default();
        reduce(&mut cart, CartAction::Add(line("1", "6.00", 1)));
        reduce(&mut cart, CartAction::Add(line("2", "5.00", 1)));
        assert_eq!(cart.items.len(), 2);
    }

    #[test]
    fn test_update_quantity_sets_absolute_value() {
        let mut cart = CartState::default();
        reduce(&mut cart, CartAction::Add(line("1", "6.00", 2)));
        reduce(
            &mut cart,
            CartAction::UpdateQuantity {
                id: "1".to_string(),
                quantity: 5,
            },
        );
        assert_eq!(cart.items[0].quantity, 5);
    }

    #[test]
    fn test_update_quantity_zero_or_negative_removes() {
        for quantity in [0, -3] {
            let mut cart = CartState::default();
            reduce(&mut cart, CartAction::Add(line("1", "6.00", 2)));
            reduce(
                &mut cart,
                CartAction::UpdateQuantity {
                    id: "1".to_string(),
                    quantity,
                },
            );
            assert!(cart.items.is_empty());
        }
    }

    #[test]
    fn test_update_quantity_unknown_id_is_noop() {
        let mut cart = CartState::default();
        reduce(&mut cart, CartAction::Add(line("1", "6.00", 2)));
        reduce(
            &mut cart,
            CartAction::UpdateQuantity {
                id: "ghost".to_string(),
                quantity: 4,
            },
        );
        assert_eq!(cart.items.len(), 1);
        assert_eq!(cart.items[0].quantity, 2);
    }

    #[test]
    fn test_remove_and_clear() {
        let mut cart = CartState::default();
        reduce(&mut cart, CartAction::Add(line("1", "6.00", 1)));
        reduce(&mut cart, CartAction::Add(line("2", "5.00", 1)));

        reduce(&mut cart, CartAction::Remove("1".to_string()));
        assert_eq!(cart.items.len(), 1);

        // Unknown id is a no-op
        reduce(&mut cart, CartAction::Remove("ghost".to_string()));
        assert_eq!(cart.items.len(), 1);

        reduce(&mut cart, CartAction::Clear);
        assert!(cart.items.is_empty());
    }
}
