//! # Error Types
//!
//! Domain-specific error types for courtside-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  courtside-core errors (this file)                                      │
//! │  ├── CoreError        - Store operation failures                        │
//! │  └── ValidationError  - Input validation failures                       │
//! │                                                                         │
//! │  app errors (apps/courtside)                                            │
//! │  ├── ConfigError      - Config / catalog file problems                  │
//! │  └── ApiError         - What the session prints (serializable)          │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → ApiError → terminal               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## All-or-Nothing
//! Every operation that returns one of these errors has left the inventory
//! and every cart exactly as they were before the call.

use thiserror::Error;

use crate::types::{CartId, ProductId};

// =============================================================================
// Core Error
// =============================================================================

/// Store operation errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// The product id is not in the catalog.
    #[error("Product not found: {0}")]
    ProductNotFound(ProductId),

    /// The cart id was never issued, or the cart has been quit.
    ///
    /// ## Cart Lifecycle
    /// ```text
    /// generate_cart_id ──► Active ──checkout──► Active (empty, same id)
    ///                        │
    ///                       quit
    ///                        │
    ///                        ▼
    ///                   Terminated ──any call──► CartNotFound
    /// ```
    #[error("Cart not found: {0}")]
    CartNotFound(CartId),

    /// Inventory holds fewer units than requested.
    ///
    /// ## User Workflow
    /// ```text
    /// add 0 10
    ///      │
    ///      ▼
    /// stock for product 0: 2
    ///      │
    ///      ▼
    /// InsufficientStock { product_id: 0, available: 2, requested: 10 }
    /// ```
    #[error("Insufficient stock for product {product_id}: available {available}, requested {requested}")]
    InsufficientStock {
        product_id: ProductId,
        available: i64,
        requested: i64,
    },

    /// The cart reserves fewer units than the caller tried to remove.
    #[error("Cart holds {reserved} of product {product_id}, cannot remove {requested}")]
    InsufficientReservation {
        product_id: ProductId,
        reserved: i64,
        requested: i64,
    },

    /// Checkout was called on a cart with no lines.
    #[error("Cart {0} is empty, nothing to check out")]
    EmptyCart(CartId),

    /// The cart total would not fit in `Money`.
    #[error("Cart {0} total is too large to represent")]
    TotalOverflow(CartId),

    /// The cart's unit count for a product would not fit in an `i64`.
    #[error("Cart quantity of product {product_id} is too large to represent")]
    QuantityOverflow { product_id: ProductId },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
