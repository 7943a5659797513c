//! # Shopping Cart
//!
//! One user's reservations: units taken out of the inventory and held until
//! checkout or quit. The cart knows product ids only; names and prices are
//! resolved through the inventory's catalog.

use std::collections::HashMap;

use crate::stock::StockContainer;
use crate::types::{Product, ProductId};

/// Reserved units per product id.
///
/// ## Invariants
/// - Every present entry holds more than zero units
/// - Removing exactly the reserved amount deletes the line
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShoppingCart {
    lines: HashMap<ProductId, i64>,
}

impl ShoppingCart {
    /// Creates an empty cart.
    pub fn new() -> Self {
        ShoppingCart::default()
    }

    /// `(product id, units)` for every line. Order is unspecified.
    pub fn items(&self) -> Vec<(ProductId, i64)> {
        self.lines.iter().map(|(id, qty)| (*id, *qty)).collect()
    }

    /// Units reserved for a product id, `None` when the cart has no line.
    pub fn quantity_of_id(&self, id: ProductId) -> Option<i64> {
        self.lines.get(&id).copied()
    }

    /// Total units across every line, clamped at `i64::MAX`.
    pub fn total_quantity(&self) -> i64 {
        self.lines.values().fold(0, |acc, qty| acc.saturating_add(*qty))
    }
}

impl StockContainer for ShoppingCart {
    fn quantity_of(&self, product: &Product) -> Option<i64> {
        self.quantity_of_id(product.id)
    }

    fn count(&self) -> usize {
        self.lines.len()
    }

    /// Zero and negative quantities are refused so no zero line is stored.
    fn add(&mut self, product: &Product, quantity: i64) -> bool {
        if quantity <= 0 {
            return false;
        }

        let line = self.lines.entry(product.id).or_insert(0);
        match line.checked_add(quantity) {
            Some(updated) => {
                *line = updated;
                true
            }
            None => false,
        }
    }

    fn remove(&mut self, product: &Product, quantity: i64) -> bool {
        if quantity < 0 {
            return false;
        }

        let Some(reserved) = self.lines.get(&product.id).copied() else {
            return false;
        };

        match reserved - quantity {
            remaining if remaining < 0 => false,
            0 => {
                self.lines.remove(&product.id);
                true
            }
            remaining => {
                self.lines.insert(product.id, remaining);
                true
            }
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
