//! # Inventory Commands
//!
//! Read-only views of the store's stock.

use serde::{Deserialize, Serialize};
use tracing::debug;

use courtside_core::{Money, Product, ProductId};

use crate::error::ApiError;
use crate::state::StoreState;

/// Product data for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDto {
    pub id: ProductId,
    pub name: String,
    /// Unit price in cents
    pub price: Money,
    pub image_ref: String,
    /// Units available in the inventory
    pub stock: i64,
}

impl ProductDto {
    fn new(product: &Product, stock: i64) -> Self {
        ProductDto {
            id: product.id,
            name: product.name.clone(),
            price: product.price,
            image_ref: product.image_ref.clone(),
            stock,
        }
    }
}

/// Whole-inventory listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryResponse {
    /// Products in catalog order
    pub products: Vec<ProductDto>,
}

/// Stock of a single product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockResponse {
    pub product_id: ProductId,
    pub name: String,
    pub stock: i64,
}

/// Lists every cataloged product with its available stock.
///
/// Products that are sold out are still listed, with stock 0.
pub fn list_inventory(store: &StoreState) -> InventoryResponse {
    debug!("list_inventory command");

    let products = store.with_store(|s| {
        s.inventory_snapshot()
            .iter()
            .map(|(product, stock)| ProductDto::new(product, *stock))
            .collect()
    });

    InventoryResponse { products }
}

/// Gets the available stock of one product.
pub fn get_stock(store: &StoreState, product_id: ProductId) -> Result<StockResponse, ApiError> {
    debug!(product_id = %product_id, "get_stock command");

    store.with_store(|s| {
        let product = s
            .product_info(product_id)
            .ok_or_else(|| ApiError::not_found("Product", product_id))?;
        Ok(StockResponse {
            product_id,
            name: product.name.clone(),
            stock: s.stock_of(product).unwrap_or(0),
        })
    })
}
