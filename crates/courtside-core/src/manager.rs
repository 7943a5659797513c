//! # Store Manager
//!
//! Owns the inventory and every open cart, and moves stock between them.
//!
//! ## Stock Transfer
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │   Inventory ──── add_to_cart(qty) ─────► ShoppingCart                   │
//! │             ◄─── remove_from_cart(qty) ─                                │
//! │             ◄─── quit (every line) ─────                                │
//! │                                                                         │
//! │   checkout: cart lines ──► Receipt, cart replaced by an empty one       │
//! │                                                                         │
//! │   For every product, at all times:                                      │
//! │     inventory stock + Σ cart reservations == stock ever added           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Concurrency
//! `StoreManager` does no locking. Callers that share it across threads must
//! hold one lock around each call (see the app's `StoreState`).

use std::collections::HashMap;

use crate::cart::ShoppingCart;
use crate::error::{CoreError, CoreResult};
use crate::inventory::Inventory;
use crate::money::Money;
use crate::receipt::{Receipt, ReceiptLine};
use crate::stock::StockContainer;
use crate::types::{CartId, Product, ProductId};
use crate::validation::validate_quantity;

/// The inventory, the open carts and the cart-id counter.
#[derive(Debug, Clone, Default)]
pub struct StoreManager {
    inventory: Inventory,
    carts: HashMap<CartId, ShoppingCart>,
    next_cart_id: u64,
}

impl StoreManager {
    /// Creates a store whose inventory is seeded with `initial` pairs.
    ///
    /// Pairs with negative stock are skipped, as in [`Inventory::new`].
    pub fn new<I>(initial: I) -> Self
    where
        I: IntoIterator<Item = (Product, i64)>,
    {
        StoreManager {
            inventory: Inventory::new(initial),
            carts: HashMap::new(),
            next_cart_id: 0,
        }
    }

    // =========================================================================
    // Cart Lifecycle
    // =========================================================================

    /// Opens a new empty cart and returns its id.
    ///
    /// Ids start at 0 and are never reused.
    pub fn generate_cart_id(&mut self) -> CartId {
        let id = CartId::new(self.next_cart_id);
        self.next_cart_id += 1;
        self.carts.insert(id, ShoppingCart::new());
        id
    }

    /// Returns every reserved unit to the inventory and closes the cart.
    ///
    /// Any later call with this id fails with [`CoreError::CartNotFound`].
    pub fn quit(&mut self, cart_id: CartId) -> CoreResult<()> {
        let cart = self
            .carts
            .remove(&cart_id)
            .ok_or(CoreError::CartNotFound(cart_id))?;

        for (product_id, quantity) in cart.items() {
            if let Some(product) = self.inventory.product_info(product_id).cloned() {
                self.inventory.add(&product, quantity);
            }
        }

        Ok(())
    }

    /// Number of open carts.
    pub fn active_carts(&self) -> usize {
        self.carts.len()
    }

    // =========================================================================
    // Stock Transfer
    // =========================================================================

    /// Moves `quantity` units from the inventory into a cart.
    ///
    /// ## Failures (nothing changes)
    /// - unknown product → `ProductNotFound`
    /// - `quantity <= 0` → `Validation(MustBePositive)`
    /// - unknown cart → `CartNotFound`
    /// - not enough stock → `InsufficientStock`
    /// - cart total would not fit in `Money` → `TotalOverflow`
    ///
    /// ```rust
    /// use courtside_core::{CoreError, Money, Product, ProductId, StoreManager};
    ///
    /// let ball = Product::new(0, "Ball", Money::from_cents(99), "");
    /// let mut store = StoreManager::new(vec![(ball, 5)]);
    /// let cart = store.generate_cart_id();
    ///
    /// store.add_to_cart(cart, ProductId::new(0), 3).unwrap();
    /// assert_eq!(store.stock_of_id(ProductId::new(0)), Some(2));
    ///
    /// let err = store.add_to_cart(cart, ProductId::new(0), 10).unwrap_err();
    /// assert!(matches!(err, CoreError::InsufficientStock { available: 2, .. }));
    /// ```
    pub fn add_to_cart(
        &mut self,
        cart_id: CartId,
        product_id: ProductId,
        quantity: i64,
    ) -> CoreResult<()> {
        let product = self.resolve(product_id)?;
        validate_quantity(quantity)?;
        let current_total = self.cart_total(cart_id)?;

        let available = self.inventory.quantity_of(&product).unwrap_or(0);
        if available < quantity {
            return Err(CoreError::InsufficientStock {
                product_id,
                available,
                requested: quantity,
            });
        }

        // Every later total is a sum of these line totals, so checking here
        // keeps cart_total and checkout overflow-free.
        product
            .line_total(quantity)
            .and_then(|added| current_total.checked_add(added))
            .ok_or(CoreError::TotalOverflow(cart_id))?;

        let cart = self
            .carts
            .get_mut(&cart_id)
            .ok_or(CoreError::CartNotFound(cart_id))?;

        if !self.inventory.remove(&product, quantity) {
            return Err(CoreError::InsufficientStock {
                product_id,
                available,
                requested: quantity,
            });
        }

        if !cart.add(&product, quantity) {
            self.inventory.add(&product, quantity);
            return Err(CoreError::QuantityOverflow { product_id });
        }

        Ok(())
    }

    /// Moves `quantity` units from a cart back into the inventory.
    ///
    /// ## Failures (nothing changes)
    /// - unknown cart → `CartNotFound`
    /// - unknown product → `ProductNotFound`
    /// - `quantity <= 0` → `Validation(MustBePositive)`
    /// - cart holds fewer units → `InsufficientReservation`
    pub fn remove_from_cart(
        &mut self,
        cart_id: CartId,
        product_id: ProductId,
        quantity: i64,
    ) -> CoreResult<()> {
        let product = self.resolve(product_id)?;
        validate_quantity(quantity)?;
        let cart = self
            .carts
            .get_mut(&cart_id)
            .ok_or(CoreError::CartNotFound(cart_id))?;

        if !cart.remove(&product, quantity) {
            return Err(CoreError::InsufficientReservation {
                product_id,
                reserved: cart.quantity_of(&product).unwrap_or(0),
                requested: quantity,
            });
        }

        self.inventory.add(&product, quantity);
        Ok(())
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// Available stock for a product, `None` when it is not cataloged.
    pub fn stock_of(&self, product: &Product) -> Option<i64> {
        self.inventory.quantity_of(product)
    }

    /// Available stock for a product id, `None` when it is not cataloged.
    pub fn stock_of_id(&self, product_id: ProductId) -> Option<i64> {
        self.inventory.quantity_of_id(product_id)
    }

    /// Catalog lookup.
    pub fn product_info(&self, product_id: ProductId) -> Option<&Product> {
        self.inventory.product_info(product_id)
    }

    /// Sum of quantity × unit price over the cart. Zero for an empty cart.
    pub fn cart_total(&self, cart_id: CartId) -> CoreResult<Money> {
        Money::checked_sum(self.cart_lines(cart_id)?.iter().map(|line| line.line_total))
            .ok_or(CoreError::TotalOverflow(cart_id))
    }

    /// Cart lines priced from the catalog, ordered by product id.
    pub fn cart_lines(&self, cart_id: CartId) -> CoreResult<Vec<ReceiptLine>> {
        let mut lines = self
            .cart(cart_id)?
            .items()
            .into_iter()
            .filter_map(|(id, qty)| Some((self.inventory.product_info(id)?, qty)))
            .map(|(product, qty)| {
                ReceiptLine::from_product(product, qty).ok_or(CoreError::TotalOverflow(cart_id))
            })
            .collect::<CoreResult<Vec<_>>>()?;
        lines.sort_by_key(|line| line.product_id);
        Ok(lines)
    }

    /// `(product id, units)` for every line of a cart.
    pub fn cart_items(&self, cart_id: CartId) -> CoreResult<Vec<(ProductId, i64)>> {
        Ok(self.cart(cart_id)?.items())
    }

    /// Cart lines resolved to catalog products.
    pub fn cart_snapshot(&self, cart_id: CartId) -> CoreResult<HashMap<Product, i64>> {
        Ok(self
            .cart(cart_id)?
            .items()
            .into_iter()
            .filter_map(|(id, qty)| Some((self.inventory.product_info(id)?.clone(), qty)))
            .collect())
    }

    /// Every cataloged product and its stock, in registration order.
    pub fn inventory_snapshot(&self) -> Vec<(Product, i64)> {
        self.inventory.all_stock()
    }

    // =========================================================================
    // Checkout
    // =========================================================================

    /// Charges the cart and starts a fresh empty one under the same id.
    ///
    /// Reserved units are sold: they are not returned to the inventory.
    ///
    /// ## Failures (nothing changes)
    /// - unknown cart → `CartNotFound`
    /// - empty cart → `EmptyCart`
    pub fn checkout(&mut self, cart_id: CartId) -> CoreResult<Receipt> {
        let lines = self.cart_lines(cart_id)?;
        if lines.is_empty() {
            return Err(CoreError::EmptyCart(cart_id));
        }

        let receipt = Receipt::new(cart_id, lines)?;
        self.carts.insert(cart_id, ShoppingCart::new());
        Ok(receipt)
    }

    // =========================================================================
    // Helpers
    // =========================================================================

    fn cart(&self, cart_id: CartId) -> CoreResult<&ShoppingCart> {
        self.carts.get(&cart_id).ok_or(CoreError::CartNotFound(cart_id))
    }

    fn resolve(&self, product_id: ProductId) -> CoreResult<Product> {
        self.inventory
            .product_info(product_id)
            .cloned()
            .ok_or(CoreError::ProductNotFound(product_id))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidationError;
    use proptest::prelude::*;

    fn racquet() -> Product {
        Product::new(0, "Rafael Nadal", Money::from_cents(99), "")
    }

    fn strings() -> Product {
        Product::new(1, "Novak Djokovic", Money::from_cents(15099), "")
    }

    fn store() -> StoreManager {
        StoreManager::new(vec![(racquet(), 5), (strings(), 10)])
    }

    #[test]
    fn test_cart_ids_are_sequential_from_zero() {
        let mut store = store();
        assert_eq!(store.generate_cart_id(), CartId::new(0));
        assert_eq!(store.generate_cart_id(), CartId::new(1));
        store.quit(CartId::new(1)).unwrap();
        assert_eq!(store.generate_cart_id(), CartId::new(2));
        assert_eq!(store.active_carts(), 2);
    }

    #[test]
    fn test_scenario_add_total_checkout() {
        let mut store = StoreManager::new(vec![(racquet(), 5)]);
        let cart = store.generate_cart_id();
        assert_eq!(cart, CartId::new(0));

        store.add_to_cart(cart, ProductId::new(0), 3).unwrap();
        assert_eq!(store.stock_of_id(ProductId::new(0)), Some(2));
        assert_eq!(store.cart_total(cart).unwrap(), Money::from_cents(297));

        let err = store.add_to_cart(cart, ProductId::new(0), 10).unwrap_err();
        assert_eq!(
            err,
            CoreError::InsufficientStock {
                product_id: ProductId::new(0),
                available: 2,
                requested: 10,
            }
        );
        assert_eq!(store.stock_of_id(ProductId::new(0)), Some(2));
        assert_eq!(store.cart_items(cart).unwrap(), vec![(ProductId::new(0), 3)]);

        let receipt = store.checkout(cart).unwrap();
        assert_eq!(receipt.total(), Money::from_cents(297));
        assert_eq!(store.cart_total(cart).unwrap(), Money::zero());
        assert!(store.cart_snapshot(cart).unwrap().is_empty());
        // Sold units stay out of the inventory.
        assert_eq!(store.stock_of_id(ProductId::new(0)), Some(2));
    }

    #[test]
    fn test_add_rejections_leave_state_unchanged() {
        let mut store = store();
        let cart = store.generate_cart_id();
        store.add_to_cart(cart, ProductId::new(1), 2).unwrap();

        let before_inventory = store.inventory_snapshot();
        let before_cart = store.cart_snapshot(cart).unwrap();

        assert_eq!(
            store.add_to_cart(cart, ProductId::new(42), 1),
            Err(CoreError::ProductNotFound(ProductId::new(42)))
        );
        assert_eq!(
            store.add_to_cart(cart, ProductId::new(0), 0),
            Err(CoreError::Validation(ValidationError::MustBePositive {
                field: "quantity".to_string()
            }))
        );
        assert!(store.add_to_cart(cart, ProductId::new(0), -3).is_err());
        assert!(store.add_to_cart(cart, ProductId::new(0), 6).is_err());

        assert_eq!(store.inventory_snapshot(), before_inventory);
        assert_eq!(store.cart_snapshot(cart).unwrap(), before_cart);
    }

    #[test]
    fn test_remove_rejections_leave_state_unchanged() {
        let mut store = store();
        let cart = store.generate_cart_id();
        store.add_to_cart(cart, ProductId::new(0), 2).unwrap();

        let before_inventory = store.inventory_snapshot();
        let before_cart = store.cart_snapshot(cart).unwrap();

        assert_eq!(
            store.remove_from_cart(cart, ProductId::new(0), 3),
            Err(CoreError::InsufficientReservation {
                product_id: ProductId::new(0),
                reserved: 2,
                requested: 3,
            })
        );
        assert_eq!(
            store.remove_from_cart(cart, ProductId::new(1), 1),
            Err(CoreError::InsufficientReservation {
                product_id: ProductId::new(1),
                reserved: 0,
                requested: 1,
            })
        );
        assert!(store.remove_from_cart(cart, ProductId::new(9), 1).is_err());
        assert!(store.remove_from_cart(cart, ProductId::new(0), 0).is_err());

        assert_eq!(store.inventory_snapshot(), before_inventory);
        assert_eq!(store.cart_snapshot(cart).unwrap(), before_cart);
    }

    #[test]
    fn test_exact_remove_drops_line_from_snapshot() {
        let mut store = store();
        let cart = store.generate_cart_id();
        store.add_to_cart(cart, ProductId::new(0), 2).unwrap();
        store.add_to_cart(cart, ProductId::new(1), 1).unwrap();

        store.remove_from_cart(cart, ProductId::new(0), 2).unwrap();

        let snapshot = store.cart_snapshot(cart).unwrap();
        assert!(!snapshot.contains_key(&racquet()));
        assert_eq!(snapshot.get(&strings()), Some(&1));
        assert_eq!(store.stock_of(&racquet()), Some(5));
    }

    #[test]
    fn test_checkout_empty_cart() {
        let mut store = store();
        let cart = store.generate_cart_id();
        assert_eq!(store.checkout(cart).unwrap_err(), CoreError::EmptyCart(cart));
        assert_eq!(store.cart_total(cart).unwrap(), Money::zero());
    }

    #[test]
    fn test_checkout_receipt_matches_cart() {
        let mut store = store();
        let cart = store.generate_cart_id();
        store.add_to_cart(cart, ProductId::new(0), 3).unwrap();
        store.add_to_cart(cart, ProductId::new(1), 2).unwrap();

        let total = store.cart_total(cart).unwrap();
        let snapshot = store.cart_snapshot(cart).unwrap();
        let receipt = store.checkout(cart).unwrap();

        assert_eq!(receipt.total(), total);
        assert_eq!(receipt.cart_id, cart);
        assert_eq!(receipt.lines().len(), snapshot.len());
        for line in receipt.lines() {
            let product = store.product_info(line.product_id).unwrap();
            assert_eq!(snapshot.get(product), Some(&line.quantity));
        }
    }

    #[test]
    fn test_quit_restores_stock_and_closes_cart() {
        let mut store = store();
        let cart = store.generate_cart_id();
        store.add_to_cart(cart, ProductId::new(0), 3).unwrap();
        store.add_to_cart(cart, ProductId::new(1), 2).unwrap();
        assert_eq!(store.stock_of_id(ProductId::new(0)), Some(2));
        assert_eq!(store.stock_of_id(ProductId::new(1)), Some(8));

        store.quit(cart).unwrap();

        assert_eq!(store.stock_of_id(ProductId::new(0)), Some(5));
        assert_eq!(store.stock_of_id(ProductId::new(1)), Some(10));
        assert_eq!(store.cart_total(cart), Err(CoreError::CartNotFound(cart)));
        assert_eq!(
            store.add_to_cart(cart, ProductId::new(0), 1),
            Err(CoreError::CartNotFound(cart))
        );
        assert_eq!(store.quit(cart), Err(CoreError::CartNotFound(cart)));
        assert_eq!(store.active_carts(), 0);
    }

    #[test]
    fn test_unknown_cart_id() {
        let mut store = store();
        let ghost = CartId::new(99);
        assert_eq!(store.checkout(ghost).unwrap_err(), CoreError::CartNotFound(ghost));
        assert!(store.cart_snapshot(ghost).is_err());
        assert_eq!(store.stock_of_id(ProductId::new(0)), Some(5));
    }

    #[test]
    fn test_stock_of_unknown_product() {
        let store = store();
        let stranger = Product::new(77, "Nobody", Money::zero(), "");
        assert_eq!(store.stock_of(&stranger), None);
        assert_eq!(store.stock_of_id(ProductId::new(77)), None);
    }

    #[test]
    fn test_add_rejects_unrepresentable_total() {
        let pricey = Product::new(0, "Gold Racquet", Money::from_cents(i64::MAX / 2), "");
        let mut store = StoreManager::new(vec![(pricey, 3)]);
        let cart = store.generate_cart_id();

        assert_eq!(
            store.add_to_cart(cart, ProductId::new(0), 3),
            Err(CoreError::TotalOverflow(cart))
        );
        assert_eq!(store.stock_of_id(ProductId::new(0)), Some(3));
        assert_eq!(store.cart_total(cart), Ok(Money::zero()));

        store.add_to_cart(cart, ProductId::new(0), 2).unwrap();
        assert_eq!(store.cart_total(cart), Ok(Money::from_cents(i64::MAX - 1)));

        assert_eq!(
            store.add_to_cart(cart, ProductId::new(0), 1),
            Err(CoreError::TotalOverflow(cart))
        );
        assert_eq!(store.stock_of_id(ProductId::new(0)), Some(1));
        assert_eq!(store.checkout(cart).unwrap().total(), Money::from_cents(i64::MAX - 1));
    }

    #[test]
    fn test_add_rejects_total_across_lines() {
        let mut store = StoreManager::new(vec![
            (Product::new(0, "Gold Racquet", Money::from_cents(i64::MAX / 2), ""), 2),
            (Product::new(1, "Gold Strings", Money::from_cents(2), ""), 1),
        ]);
        let cart = store.generate_cart_id();
        store.add_to_cart(cart, ProductId::new(0), 2).unwrap();

        assert_eq!(
            store.add_to_cart(cart, ProductId::new(1), 1),
            Err(CoreError::TotalOverflow(cart))
        );
        assert_eq!(store.stock_of_id(ProductId::new(1)), Some(1));
        assert_eq!(store.cart_items(cart).unwrap(), vec![(ProductId::new(0), 2)]);
    }

    #[test]
    fn test_huge_free_lines_stay_representable() {
        let mut store = StoreManager::new(vec![
            (Product::new(0, "Free Grip", Money::zero(), ""), i64::MAX),
            (Product::new(1, "Free Sticker", Money::zero(), ""), i64::MAX),
        ]);
        let cart = store.generate_cart_id();
        store.add_to_cart(cart, ProductId::new(0), i64::MAX).unwrap();
        store.add_to_cart(cart, ProductId::new(1), i64::MAX).unwrap();

        assert_eq!(store.cart_total(cart), Ok(Money::zero()));
        let receipt = store.checkout(cart).unwrap();
        assert_eq!(receipt.item_count(), i64::MAX);
        assert_eq!(receipt.total(), Money::zero());
    }

    #[test]
    fn test_cart_lines_sorted_by_product() {
        let mut store = store();
        let cart = store.generate_cart_id();
        store.add_to_cart(cart, ProductId::new(1), 1).unwrap();
        store.add_to_cart(cart, ProductId::new(0), 3).unwrap();

        let lines = store.cart_lines(cart).unwrap();
        assert_eq!(lines[0].product_id, ProductId::new(0));
        assert_eq!(lines[0].line_total, Money::from_cents(297));
        assert_eq!(lines[1].name, "Novak Djokovic");
    }

    #[test]
    fn test_inventory_snapshot_order() {
        let store = store();
        let snapshot = store.inventory_snapshot();
        assert_eq!(snapshot, vec![(racquet(), 5), (strings(), 10)]);
    }

    #[derive(Debug, Clone)]
    enum Op {
        Add { cart: usize, product: u32, qty: i64 },
        Remove { cart: usize, product: u32, qty: i64 },
    }

    fn op() -> impl Strategy<Value = Op> {
        prop_oneof![
            (0usize..3, 0u32..3, -2i64..8).prop_map(|(cart, product, qty)| Op::Add {
                cart,
                product,
                qty
            }),
            (0usize..3, 0u32..3, -2i64..8).prop_map(|(cart, product, qty)| Op::Remove {
                cart,
                product,
                qty
            }),
        ]
    }

    proptest! {
        /// Stock is neither created nor destroyed by add/remove.
        #[test]
        fn stock_is_conserved(ops in prop::collection::vec(op(), 0..60)) {
            let initial = [(0u32, 5i64), (1, 10), (2, 0)];
            let mut store = StoreManager::new(initial.iter().map(|(id, qty)| {
                (Product::new(*id, format!("P{}", id), Money::from_cents(100), ""), *qty)
            }));
            let carts: Vec<CartId> = (0..3).map(|_| store.generate_cart_id()).collect();

            for op in ops {
                let _ = match op {
                    Op::Add { cart, product, qty } => {
                        store.add_to_cart(carts[cart], ProductId::new(product), qty)
                    }
                    Op::Remove { cart, product, qty } => {
                        store.remove_from_cart(carts[cart], ProductId::new(product), qty)
                    }
                };
            }

            for (id, start) in initial {
                let id = ProductId::new(id);
                let reserved: i64 = carts
                    .iter()
                    .map(|cart| {
                        store
                            .cart_items(*cart)
                            .unwrap()
                            .into_iter()
                            .filter(|(pid, _)| *pid == id)
                            .map(|(_, qty)| qty)
                            .sum::<i64>()
                    })
                    .sum();
                prop_assert_eq!(store.stock_of_id(id).unwrap() + reserved, start);
                prop_assert!(store.stock_of_id(id).unwrap() >= 0);
            }

            for cart in &carts {
                for (_, qty) in store.cart_items(*cart).unwrap() {
                    prop_assert!(qty > 0);
                }
            }
        }
    }
}
