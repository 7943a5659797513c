//! # Domain Types
//!
//! Identifiers and the `Product` value used throughout Courtside.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    ProductId    │   │     CartId      │   │     Product     │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  u32, assigned  │   │  u64, issued by │   │  id             │       │
//! │  │  by the catalog │   │  StoreManager   │   │  name           │       │
//! │  │                 │   │  from 0 upward  │   │  price (Money)  │       │
//! │  └─────────────────┘   └─────────────────┘   │  image_ref      │       │
//! │                                              └─────────────────┘       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};

use crate::money::Money;

// =============================================================================
// Identifiers
// =============================================================================

/// Catalog identifier of a product. Unique, assigned outside the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(u32);

impl ProductId {
    #[inline]
    pub const fn new(id: u32) -> Self {
        ProductId(id)
    }

    #[inline]
    pub const fn get(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl From<u32> for ProductId {
    fn from(id: u32) -> Self {
        ProductId(id)
    }
}

/// Identifier of one shopping session's cart.
///
/// Issued sequentially by [`crate::StoreManager::generate_cart_id`]; never
/// reused, even after the cart is quit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CartId(u64);

impl CartId {
    #[inline]
    pub const fn new(id: u64) -> Self {
        CartId(id)
    }

    #[inline]
    pub const fn get(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for CartId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

// =============================================================================
// Product
// =============================================================================

/// A product available for sale.
///
/// ## Identity
/// Two products are equal when id, price and name all match. The image
/// reference is presentation data and does not take part in equality.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    /// Unique catalog identifier.
    pub id: ProductId,

    /// Display name shown in listings and on the receipt.
    pub name: String,

    /// Unit price.
    pub price: Money,

    /// Opaque image reference (usually a URL). Never read by the core.
    #[serde(default)]
    pub image_ref: String,
}

impl Product {
    /// Creates a product.
    pub fn new(
        id: impl Into<ProductId>,
        name: impl Into<String>,
        price: Money,
        image_ref: impl Into<String>,
    ) -> Self {
        Product {
            id: id.into(),
            name: name.into(),
            price,
            image_ref: image_ref.into(),
        }
    }

    /// Price for `quantity` units of this product, `None` on overflow.
    #[inline]
    pub fn line_total(&self, quantity: i64) -> Option<Money> {
        self.price.checked_mul_quantity(quantity)
    }
}

impl PartialEq for Product {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id && self.price == other.price && self.name == other.name
    }
}

impl Eq for Product {}

impl Hash for Product {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
        self.price.hash(state);
        self.name.hash(state);
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
