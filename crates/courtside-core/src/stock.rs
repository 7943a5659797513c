//! # Stock Containers
//!
//! The capability shared by [`Inventory`](crate::Inventory) and
//! [`ShoppingCart`](crate::ShoppingCart): a mapping from product id to a
//! non-negative unit count.
//!
//! ## One Contract, Two Storage Rules
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                 remove() that reaches exactly zero                      │
//! │                                                                         │
//! │  Inventory     { 0: 3 } ──remove(0, 3)──► { 0: 0 }   entry kept         │
//! │  ShoppingCart  { 0: 3 } ──remove(0, 3)──► { }        entry deleted      │
//! │                                                                         │
//! │  A zero in Inventory means "cataloged, sold out".                       │
//! │  A cart never holds a zero line.                                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::types::Product;

/// A container tracking units per product id.
///
/// ## Contract
/// - `quantity_of` returns `None` when the id has no entry. `Some(0)` is a
///   real, present entry.
/// - `add` never enforces an upper bound. Negative quantities are refused.
/// - `remove` either removes all requested units or changes nothing.
pub trait StockContainer {
    /// Units held for `product`, or `None` when the id has no entry.
    fn quantity_of(&self, product: &Product) -> Option<i64>;

    /// Number of distinct product ids with an entry.
    fn count(&self) -> usize;

    /// Adds `quantity` units of `product`, creating the entry if absent.
    ///
    /// Returns `false` (and changes nothing) when the container refuses the
    /// quantity.
    fn add(&mut self, product: &Product, quantity: i64) -> bool;

    /// Removes `quantity` units of `product`.
    ///
    /// Succeeds only when the entry exists and holds at least `quantity`
    /// units. On failure nothing changes.
    fn remove(&mut self, product: &Product, quantity: i64) -> bool;

    /// True when no product id has an entry.
    fn is_empty(&self) -> bool {
        self.count() == 0
    }
}
