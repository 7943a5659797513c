//! # courtside-core: Pure Storefront Logic for Courtside
//!
//! This crate holds the store's bookkeeping: the product catalog, available
//! stock, per-session carts and checkout. It has no I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Courtside Architecture                           │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                  Terminal Session (apps/courtside)              │   │
//! │  │      list ──► add / remove ──► cart ──► checkout ──► quit       │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ commands (one store lock each)         │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │             ★ courtside-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │ inventory │  │   cart    │  │  manager  │  │   │
//! │  │   │  Product  │  │ catalog + │  │ reserved  │  │  carts +  │  │   │
//! │  │   │  Money    │  │ stock     │  │ units     │  │  checkout │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO LOCKS • ALL STATE IN MEMORY                       │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - `Product`, `ProductId`, `CartId`
//! - [`money`] - Money type with integer cents
//! - [`stock`] - The `StockContainer` trait
//! - [`inventory`] - Catalog and available stock
//! - [`cart`] - One session's reservations
//! - [`manager`] - `StoreManager`: cart lifecycle, transfers, checkout
//! - [`receipt`] - Checkout result and its text layout
//! - [`validation`] - Input rules
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use courtside_core::{Money, Product, ProductId, StoreManager};
//!
//! let nadal = Product::new(0, "Rafael Nadal", Money::from_cents(99), "nadal.jpg");
//! let mut store = StoreManager::new(vec![(nadal, 5)]);
//!
//! let cart = store.generate_cart_id();
//! store.add_to_cart(cart, ProductId::new(0), 3)?;
//! assert_eq!(store.cart_total(cart)?, Money::from_cents(297));
//!
//! let receipt = store.checkout(cart)?;
//! assert_eq!(receipt.total().to_string(), "$2.97");
//! assert!(store.cart_total(cart)?.is_zero());
//! # Ok::<(), courtside_core::CoreError>(())
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod error;
pub mod inventory;
pub mod manager;
pub mod money;
pub mod receipt;
pub mod stock;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use cart::ShoppingCart;
pub use error::{CoreError, CoreResult, ValidationError};
pub use inventory::Inventory;
pub use manager::StoreManager;
pub use money::Money;
pub use receipt::{Receipt, ReceiptLine};
pub use stock::StockContainer;
pub use types::*;
