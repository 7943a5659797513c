//! # Cart Commands
//!
//! Commands for opening carts and moving stock in and out of them.
//!
//! ## Cart Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  ┌──────────┐  add_to_cart   ┌──────────┐   checkout   ┌──────────┐    │
//! │  │  Empty   │──────────────►│ Reserved │─────────────►│  Empty   │    │
//! │  │  Cart    │◄──────────────│  Stock   │  (receipt)   │  Cart    │    │
//! │  └──────────┘ remove (all)   └──────────┘              └──────────┘    │
//! │       ▲                          │                                      │
//! │   open_cart                    quit ──► stock returned, cart closed     │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use tracing::debug;

use courtside_core::{CartId, Money, ProductId, ReceiptLine, StoreManager};

use crate::error::ApiError;
use crate::state::StoreState;

/// One cart line for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLineDto {
    pub product_id: ProductId,
    pub name: String,
    pub quantity: i64,
    pub unit_price: Money,
    pub line_total: Money,
}

/// Cart contents with totals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartResponse {
    pub cart_id: CartId,
    /// Lines ordered by product id
    pub lines: Vec<CartLineDto>,
    /// Units across all lines
    pub total_quantity: i64,
    pub total: Money,
}

impl From<ReceiptLine> for CartLineDto {
    fn from(line: ReceiptLine) -> Self {
        CartLineDto {
            product_id: line.product_id,
            name: line.name,
            quantity: line.quantity,
            unit_price: line.unit_price,
            line_total: line.line_total,
        }
    }
}

impl CartResponse {
    fn load(store: &StoreManager, cart_id: CartId) -> Result<Self, ApiError> {
        let lines: Vec<CartLineDto> = store
            .cart_lines(cart_id)?
            .into_iter()
            .map(CartLineDto::from)
            .collect();

        Ok(CartResponse {
            cart_id,
            total_quantity: lines
                .iter()
                .fold(0, |acc, line| acc.saturating_add(line.quantity)),
            total: store.cart_total(cart_id)?,
            lines,
        })
    }
}

/// Cart total only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TotalResponse {
    pub cart_id: CartId,
    pub total: Money,
}

/// Opens a new empty cart.
pub fn open_cart(store: &StoreState) -> CartId {
    let cart_id = store.with_store_mut(|s| s.generate_cart_id());
    debug!(cart_id = %cart_id, "open_cart command");
    cart_id
}

/// Gets the current cart contents.
pub fn get_cart(store: &StoreState, cart_id: CartId) -> Result<CartResponse, ApiError> {
    debug!(cart_id = %cart_id, "get_cart command");
    store.with_store(|s| CartResponse::load(s, cart_id))
}

/// Moves units from the inventory into the cart.
///
/// ## Behavior
/// - Product already in cart: quantity increases
/// - Not enough stock: nothing moves, `INSUFFICIENT_STOCK`
///
/// ## Returns
/// Updated cart
pub fn add_to_cart(
    store: &StoreState,
    cart_id: CartId,
    product_id: ProductId,
    quantity: i64,
) -> Result<CartResponse, ApiError> {
    debug!(cart_id = %cart_id, product_id = %product_id, quantity = %quantity, "add_to_cart command");

    store.with_store_mut(|s| {
        s.add_to_cart(cart_id, product_id, quantity)?;
        CartResponse::load(s, cart_id)
    })
}

/// Moves units from the cart back into the inventory.
///
/// ## Behavior
/// - Removing every unit of a product drops its line
/// - Cart holds fewer units: nothing moves, `CART_ERROR`
///
/// ## Returns
/// Updated cart
pub fn remove_from_cart(
    store: &StoreState,
    cart_id: CartId,
    product_id: ProductId,
    quantity: i64,
) -> Result<CartResponse, ApiError> {
    debug!(cart_id = %cart_id, product_id = %product_id, quantity = %quantity, "remove_from_cart command");

    store.with_store_mut(|s| {
        s.remove_from_cart(cart_id, product_id, quantity)?;
        CartResponse::load(s, cart_id)
    })
}

/// Gets the cart total.
pub fn cart_total(store: &StoreState, cart_id: CartId) -> Result<TotalResponse, ApiError> {
    debug!(cart_id = %cart_id, "cart_total command");

    let total = store.with_store(|s| s.cart_total(cart_id))?;
    Ok(TotalResponse { cart_id, total })
}
