//! # App Error Types
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  startup:  ConfigError ──► main() returns Err, process exits            │
//! │                                                                         │
//! │  session:  CoreError ──► ApiError ──► "error: ..." line, keep going     │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! `ApiError` is serializable so `--json` sessions get a machine-readable
//! `code` next to the human-readable `message`.

use serde::Serialize;
use std::path::PathBuf;
use thiserror::Error;

use courtside_core::CoreError;

// =============================================================================
// Config Error
// =============================================================================

/// Failures while loading configuration or a catalog file.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// An explicitly requested file does not exist.
    #[error("File not found: {0}")]
    NotFound(PathBuf),

    /// The file exists but could not be read.
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file is not valid TOML for the expected shape.
    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    /// A value parsed but is not acceptable.
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Result type alias for config and catalog loading.
pub type ConfigResult<T> = Result<T, ConfigError>;

// =============================================================================
// API Error
// =============================================================================

/// Error returned from a command.
///
/// ## Serialization
/// ```json
/// {
///   "code": "INSUFFICIENT_STOCK",
///   "message": "Insufficient stock for product 0: available 2, requested 10"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    /// Machine-readable error code
    pub code: ErrorCode,

    /// Human-readable error message
    pub message: String,
}

/// Error codes for command responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Product or cart does not exist
    NotFound,

    /// Input validation failed
    ValidationError,

    /// Not enough inventory stock
    InsufficientStock,

    /// Cart cannot perform the operation (empty, not enough reserved, too large)
    CartError,

    /// Session input could not be parsed
    InvalidCommand,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
        }
    }

    /// Creates a not found error.
    pub fn not_found(resource: &str, id: impl std::fmt::Display) -> Self {
        ApiError::new(ErrorCode::NotFound, format!("{} not found: {}", resource, id))
    }

    /// Creates an invalid command error.
    pub fn invalid_command(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::InvalidCommand, message)
    }
}

/// Converts core errors to API errors.
impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::ProductNotFound(id) => ApiError::not_found("Product", id),
            CoreError::CartNotFound(id) => ApiError::not_found("Cart", id),
            e @ CoreError::InsufficientStock { .. } => {
                ApiError::new(ErrorCode::InsufficientStock, e.to_string())
            }
            e @ (CoreError::InsufficientReservation { .. }
            | CoreError::EmptyCart(_)
            | CoreError::TotalOverflow(_)
            | CoreError::QuantityOverflow { .. }) => {
                ApiError::new(ErrorCode::CartError, e.to_string())
            }
            CoreError::Validation(e) => ApiError::new(ErrorCode::ValidationError, e.to_string()),
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}

#[cfg(test)]
mod tests {
    use super::*;
    use courtside_core::{CartId, ProductId, ValidationError};

    #[test]
    fn test_core_error_mapping() {
        let err: ApiError = CoreError::ProductNotFound(ProductId::new(9)).into();
        assert_eq!(err.code, ErrorCode::NotFound);
        assert_eq!(err.message, "Product not found: 9");

        let err: ApiError = CoreError::CartNotFound(CartId::new(3)).into();
        assert_eq!(err.message, "Cart not found: 3");

        let err: ApiError = CoreError::EmptyCart(CartId::new(0)).into();
        assert_eq!(err.code, ErrorCode::CartError);

        let err: ApiError = CoreError::QuantityOverflow {
            product_id: ProductId::new(2),
        }
        .into();
        assert_eq!(err.code, ErrorCode::CartError);
        assert_eq!(err.message, "Cart quantity of product 2 is too large to represent");

        let err: ApiError = CoreError::Validation(ValidationError::MustBePositive {
            field: "quantity".into(),
        })
        .into();
        assert_eq!(err.code, ErrorCode::ValidationError);
        assert_eq!(err.message, "quantity must be positive");
    }

    #[test]
    fn test_serialization() {
        let err = ApiError::from(CoreError::InsufficientStock {
            product_id: ProductId::new(0),
            available: 2,
            requested: 10,
        });
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json["code"], "INSUFFICIENT_STOCK");
        assert_eq!(
            json["message"],
            "Insufficient stock for product 0: available 2, requested 10"
        );
    }
}
