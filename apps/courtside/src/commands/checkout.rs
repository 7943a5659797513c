//! # Checkout Commands
//!
//! Ending a shopping session, either by paying or by walking away.
//!
//! ```text
//! checkout ──► Receipt, cart emptied, sold units gone from the store
//! quit     ──► every reserved unit back on the shelf, cart id retired
//! ```

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use courtside_core::{CartId, Receipt};

use crate::error::ApiError;
use crate::state::StoreState;

/// Result of abandoning a cart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuitResponse {
    pub cart_id: CartId,
    /// Units returned to the inventory
    pub returned_units: i64,
}

/// Checks out the cart.
///
/// ## Returns
/// The receipt; the cart stays open and empty under the same id.
pub fn checkout(store: &StoreState, cart_id: CartId) -> Result<Receipt, ApiError> {
    debug!(cart_id = %cart_id, "checkout command");

    let receipt = store.with_store_mut(|s| s.checkout(cart_id))?;

    info!(
        cart_id = %cart_id,
        receipt_id = %receipt.id,
        items = receipt.item_count(),
        total = %receipt.total(),
        "Checkout completed"
    );
    Ok(receipt)
}

/// Abandons the cart, returning its stock to the inventory.
pub fn quit(store: &StoreState, cart_id: CartId) -> Result<QuitResponse, ApiError> {
    debug!(cart_id = %cart_id, "quit command");

    let returned_units = store.with_store_mut(|s| {
        let units = s
            .cart_items(cart_id)?
            .iter()
            .fold(0i64, |acc, (_, qty)| acc.saturating_add(*qty));
        s.quit(cart_id)?;
        Ok::<i64, ApiError>(units)
    })?;

    info!(cart_id = %cart_id, returned_units, "Cart closed");
    Ok(QuitResponse {
        cart_id,
        returned_units,
    })
}
