//! # Inventory
//!
//! The store's authoritative catalog and available stock.
//!
//! ## Structure
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  order    [ 0, 1, 2, 3, 4 ]          registration order                 │
//! │  catalog  { id ──► Product }         first registration wins            │
//! │  stock    { id ──► units  }          never negative, never deleted      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every id in `stock` is in `catalog`, and every id in `catalog` is in
//! `order`; the three are only mutated together by `register`.

use std::collections::HashMap;

use crate::stock::StockContainer;
use crate::types::{Product, ProductId};

/// Catalog plus available stock.
#[derive(Debug, Clone, Default)]
pub struct Inventory {
    order: Vec<ProductId>,
    catalog: HashMap<ProductId, Product>,
    stock: HashMap<ProductId, i64>,
}

impl Inventory {
    /// Creates an inventory from initial (product, stock) pairs.
    ///
    /// Pairs with a negative stock are skipped. A repeated id keeps its
    /// first catalog entry and has the later stock added on top.
    ///
    /// ```rust
    /// use courtside_core::{Inventory, Money, Product, ProductId, StockContainer};
    ///
    /// let ball = Product::new(0, "Ball", Money::from_cents(99), "");
    /// let bag = Product::new(1, "Bag", Money::from_cents(4999), "");
    /// let inventory = Inventory::new(vec![(ball.clone(), 5), (bag.clone(), -1)]);
    ///
    /// assert_eq!(inventory.quantity_of(&ball), Some(5));
    /// assert_eq!(inventory.quantity_of(&bag), None);
    /// assert!(inventory.product_info(ProductId::new(1)).is_none());
    /// ```
    pub fn new<I>(initial: I) -> Self
    where
        I: IntoIterator<Item = (Product, i64)>,
    {
        let mut inventory = Inventory::default();
        for (product, quantity) in initial {
            if quantity < 0 {
                continue;
            }
            inventory.add(&product, quantity);
        }
        inventory
    }

    /// Looks up a product in the catalog.
    pub fn product_info(&self, id: ProductId) -> Option<&Product> {
        self.catalog.get(&id)
    }

    /// Stock for a product id, `None` when the id is not cataloged.
    pub fn quantity_of_id(&self, id: ProductId) -> Option<i64> {
        self.stock.get(&id).copied()
    }

    /// Every cataloged product with its current stock, in registration order.
    pub fn all_stock(&self) -> Vec<(Product, i64)> {
        self.order
            .iter()
            .filter_map(|id| {
                let product = self.catalog.get(id)?;
                let quantity = self.stock.get(id).copied().unwrap_or(0);
                Some((product.clone(), quantity))
            })
            .collect()
    }

    fn register(&mut self, product: &Product, quantity: i64) {
        self.order.push(product.id);
        self.catalog.insert(product.id, product.clone());
        self.stock.insert(product.id, quantity);
    }
}

impl StockContainer for Inventory {
    fn quantity_of(&self, product: &Product) -> Option<i64> {
        self.quantity_of_id(product.id)
    }

    fn count(&self) -> usize {
        self.stock.len()
    }

    /// Unknown id: registers the product with `quantity` units (zero allowed).
    /// Known id: increments stock; the catalog entry is left untouched.
    fn add(&mut self, product: &Product, quantity: i64) -> bool {
        if quantity < 0 {
            return false;
        }

        match self.stock.get_mut(&product.id) {
            Some(current) => match current.checked_add(quantity) {
                Some(updated) => {
                    *current = updated;
                    true
                }
                None => false,
            },
            None => {
                self.register(product, quantity);
                true
            }
        }
    }

    /// Decrements stock, keeping the entry at zero.
    fn remove(&mut self, product: &Product, quantity: i64) -> bool {
        if quantity < 0 {
            return false;
        }

        match self.stock.get_mut(&product.id) {
            Some(current) if *current >= quantity => {
                *current -= quantity;
                true
            }
            _ => false,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Money;

    fn product(id: u32, cents: i64) -> Product {
        Product::new(id, format!("Product {}", id), Money::from_cents(cents), "")
    }

    #[test]
    fn test_new_skips_negative_stock() {
        let inventory = Inventory::new(vec![(product(0, 99), 5), (product(1, 199), -3)]);

        assert_eq!(inventory.count(), 1);
        assert_eq!(inventory.quantity_of(&product(0, 99)), Some(5));
        assert_eq!(inventory.quantity_of(&product(1, 199)), None);
        assert!(inventory.product_info(ProductId::new(1)).is_none());
    }

    #[test]
    fn test_new_accepts_zero_stock() {
        let inventory = Inventory::new(vec![(product(0, 99), 0)]);
        assert_eq!(inventory.quantity_of(&product(0, 99)), Some(0));
        assert_eq!(inventory.all_stock(), vec![(product(0, 99), 0)]);
    }

    #[test]
    fn test_add_unknown_registers_product() {
        let mut inventory = Inventory::default();
        assert!(inventory.add(&product(7, 500), 4));

        assert_eq!(inventory.product_info(ProductId::new(7)), Some(&product(7, 500)));
        assert_eq!(inventory.quantity_of_id(ProductId::new(7)), Some(4));
    }

    #[test]
    fn test_add_known_keeps_first_registration() {
        let mut inventory = Inventory::new(vec![(product(0, 99), 5)]);
        let repriced = Product::new(0, "Renamed", Money::from_cents(1), "");

        assert!(inventory.add(&repriced, 2));

        assert_eq!(inventory.quantity_of_id(ProductId::new(0)), Some(7));
        let info = inventory.product_info(ProductId::new(0)).unwrap();
        assert_eq!(info.name, "Product 0");
        assert_eq!(info.price, Money::from_cents(99));
    }

    #[test]
    fn test_add_refuses_negative() {
        let mut inventory = Inventory::new(vec![(product(0, 99), 5)]);
        assert!(!inventory.add(&product(0, 99), -1));
        assert!(!inventory.add(&product(1, 99), -1));
        assert_eq!(inventory.quantity_of_id(ProductId::new(0)), Some(5));
        assert_eq!(inventory.count(), 1);
    }

    #[test]
    fn test_remove_keeps_zero_entry() {
        let mut inventory = Inventory::new(vec![(product(0, 99), 3)]);

        assert!(inventory.remove(&product(0, 99), 3));
        assert_eq!(inventory.quantity_of(&product(0, 99)), Some(0));
        assert_eq!(inventory.count(), 1);
    }

    #[test]
    fn test_remove_insufficient_changes_nothing() {
        let mut inventory = Inventory::new(vec![(product(0, 99), 2)]);

        assert!(!inventory.remove(&product(0, 99), 3));
        assert!(!inventory.remove(&product(9, 99), 1));
        assert_eq!(inventory.quantity_of(&product(0, 99)), Some(2));
    }

    #[test]
    fn test_all_stock_in_registration_order() {
        let mut inventory = Inventory::default();
        for id in [3, 0, 2, 1] {
            inventory.add(&product(id, 100), i64::from(id) * 10);
        }

        let ids: Vec<u32> = inventory.all_stock().iter().map(|(p, _)| p.id.get()).collect();
        assert_eq!(ids, vec![3, 0, 2, 1]);

        let quantities: Vec<i64> = inventory.all_stock().iter().map(|(_, q)| *q).collect();
        assert_eq!(quantities, vec![30, 0, 20, 10]);
    }
}
