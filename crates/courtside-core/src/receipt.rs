//! # Receipt
//!
//! The record produced by a successful checkout.
//!
//! ## Text Layout
//! ```text
//!   Amount |    Product Name | Unit Price
//!        3 |    Rafael Nadal | $  0.99
//!        1 |  Novak Djokovic | $ 150.99
//! Total: $ 153.96
//! ```
//!
//! Columns are right-aligned to widths 8 / 15 / 5. Lines are ordered by
//! product id so the same cart always prints the same receipt.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::types::{CartId, Product, ProductId};

/// One line of a receipt, with the product data frozen at checkout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReceiptLine {
    pub product_id: ProductId,
    pub name: String,
    pub quantity: i64,
    pub unit_price: Money,
    pub line_total: Money,
}

impl ReceiptLine {
    /// Builds a line from a catalog product and the units bought.
    ///
    /// `None` when the line total does not fit in `Money`.
    pub fn from_product(product: &Product, quantity: i64) -> Option<Self> {
        Some(ReceiptLine {
            product_id: product.id,
            name: product.name.clone(),
            quantity,
            unit_price: product.price,
            line_total: product.line_total(quantity)?,
        })
    }
}

/// A completed checkout.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Receipt {
    pub id: Uuid,
    pub cart_id: CartId,
    lines: Vec<ReceiptLine>,
    total: Money,
    pub issued_at: DateTime<Utc>,
}

impl Receipt {
    /// Creates a receipt; lines are sorted by product id and totalled.
    ///
    /// Fails with [`CoreError::TotalOverflow`] when the lines do not sum to a
    /// representable amount.
    pub fn new(cart_id: CartId, mut lines: Vec<ReceiptLine>) -> CoreResult<Self> {
        lines.sort_by_key(|line| line.product_id);
        let total = Money::checked_sum(lines.iter().map(|line| line.line_total))
            .ok_or(CoreError::TotalOverflow(cart_id))?;

        Ok(Receipt {
            id: Uuid::new_v4(),
            cart_id,
            lines,
            total,
            issued_at: Utc::now(),
        })
    }

    pub fn lines(&self) -> &[ReceiptLine] {
        &self.lines
    }

    /// The amount charged at checkout.
    pub fn total(&self) -> Money {
        self.total
    }

    /// Total units across every line, clamped at `i64::MAX`.
    pub fn item_count(&self) -> i64 {
        self.lines
            .iter()
            .fold(0, |acc, line| acc.saturating_add(line.quantity))
    }
}

impl fmt::Display for Receipt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{:>8} | {:>15} | {:>5}", "Amount", "Product Name", "Unit Price")?;
        for line in &self.lines {
            writeln!(
                f,
                "{:>8} | {:>15} | $ {:>5}",
                line.quantity,
                line.name,
                line.unit_price.as_decimal()
            )?;
        }
        write!(f, "Total: $ {}", self.total.as_decimal())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn nadal() -> Product {
        Product::new(0, "Rafael Nadal", Money::from_cents(99), "")
    }

    fn djokovic() -> Product {
        Product::new(1, "Novak Djokovic", Money::from_cents(15099), "")
    }

    #[test]
    fn test_totals() {
        let receipt = Receipt::new(
            CartId::new(0),
            vec![
                ReceiptLine::from_product(&djokovic(), 1).unwrap(),
                ReceiptLine::from_product(&nadal(), 3).unwrap(),
            ],
        )
        .unwrap();

        assert_eq!(receipt.total(), Money::from_cents(15396));
        assert_eq!(receipt.item_count(), 4);
        assert_eq!(receipt.lines()[0].product_id, ProductId::new(0));
        assert_eq!(receipt.lines()[0].line_total, Money::from_cents(297));
    }

    #[test]
    fn test_render() {
        let receipt = Receipt::new(
            CartId::new(0),
            vec![
                ReceiptLine::from_product(&djokovic(), 1).unwrap(),
                ReceiptLine::from_product(&nadal(), 3).unwrap(),
            ],
        )
        .unwrap();

        let expected = "\
  Amount |    Product Name | Unit Price
       3 |    Rafael Nadal | $  0.99
       1 |  Novak Djokovic | $ 150.99
Total: $ 153.96";
        assert_eq!(receipt.to_string(), expected);
    }

    #[test]
    fn test_total_overflow() {
        let half = Product::new(5, "Gold Racquet", Money::from_cents(i64::MAX / 2), "");
        let other = Product::new(6, "Gold Strings", Money::from_cents(i64::MAX / 2), "");
        assert!(ReceiptLine::from_product(&half, 3).is_none());

        let lines = vec![
            ReceiptLine::from_product(&half, 2).unwrap(),
            ReceiptLine::from_product(&other, 1).unwrap(),
        ];
        assert_eq!(
            Receipt::new(CartId::new(4), lines).unwrap_err(),
            CoreError::TotalOverflow(CartId::new(4))
        );
    }

    #[test]
    fn test_serializes_camel_case() {
        let line = ReceiptLine::from_product(&nadal(), 1).unwrap();
        let receipt = Receipt::new(CartId::new(2), vec![line]).unwrap();
        let json = serde_json::to_value(&receipt).unwrap();

        assert_eq!(json["cartId"], 2);
        assert_eq!(json["total"], 99);
        assert_eq!(json["lines"][0]["unitPrice"], 99);
    }
}
