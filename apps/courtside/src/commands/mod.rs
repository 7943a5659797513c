//! # Commands Module
//!
//! Every operation a session can perform on the store.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs        ◄─── You are here (exports)
//! ├── inventory.rs  ◄─── Stock listing and lookup
//! ├── cart.rs       ◄─── Cart lifecycle, add/remove, totals
//! └── checkout.rs   ◄─── Checkout and quit
//! ```
//!
//! ## How Commands Work
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  session line "add 0 3"                                                 │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  commands::add_to_cart(&store, cart, ProductId(0), 3)                   │
//! │         │                                                               │
//! │         │  store.with_store_mut(|s| ...)   one lock per command         │
//! │         ▼                                                               │
//! │  Result<CartResponse, ApiError>                                         │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  rendered as a table, or as one JSON object with --json                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Commands take the shared `StoreState` and return serializable DTOs, so the
//! same functions serve both output formats.

pub mod cart;
pub mod checkout;
pub mod inventory;

pub use cart::{
    add_to_cart, cart_total, get_cart, open_cart, remove_from_cart, CartLineDto, CartResponse,
    TotalResponse,
};
pub use checkout::{checkout, quit, QuitResponse};
pub use inventory::{get_stock, list_inventory, InventoryResponse, ProductDto, StockResponse};
