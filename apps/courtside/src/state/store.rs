//! # Store State
//!
//! Shares one `StoreManager` between everything that drives the store.
//!
//! ## Thread Safety
//! `StoreManager` itself does no locking. Every command runs inside a single
//! lock acquisition, so the inventory debit and the cart credit of an
//! `add_to_cart` (or the reverse for `remove_from_cart`) are never observed
//! half-done.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  session A ──► with_store_mut ─┐                                        │
//! │                                ├──► Mutex ──► StoreManager              │
//! │  session B ──► with_store_mut ─┘    (one transfer at a time)           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::{Arc, Mutex};

use courtside_core::StoreManager;

/// Shared, lock-protected store.
///
/// Cloning is cheap and every clone refers to the same store.
#[derive(Debug, Clone, Default)]
pub struct StoreState {
    store: Arc<Mutex<StoreManager>>,
}

impl StoreState {
    /// Wraps a store manager.
    pub fn new(store: StoreManager) -> Self {
        StoreState {
            store: Arc::new(Mutex::new(store)),
        }
    }

    /// Executes a function with read access to the store.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// let stock = store_state.with_store(|s| s.stock_of_id(id));
    /// ```
    pub fn with_store<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&StoreManager) -> R,
    {
        let store = self.store.lock().expect("Store mutex poisoned");
        f(&store)
    }

    /// Executes a function with write access to the store.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// store_state.with_store_mut(|s| s.add_to_cart(cart, id, 2))?;
    /// ```
    pub fn with_store_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut StoreManager) -> R,
    {
        let mut store = self.store.lock().expect("Store mutex poisoned");
        f(&mut store)
    }
}
