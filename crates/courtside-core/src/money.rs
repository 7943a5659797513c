//! # Money Module
//!
//! Provides the `Money` type used for every price and total in the store.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  PRICES AS FLOATS                                                       │
//! │                                                                         │
//! │    3 × 0.99 = 2.9699999999999998   (f64)                                │
//! │                                                                         │
//! │  PRICES AS CENTS                                                        │
//! │    3 × 99  = 297  →  "$2.97"                                            │
//! │                                                                         │
//! │  Cart totals are sums of (quantity × unit price); with cents the sum    │
//! │  is exact no matter how many lines the cart holds.                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use courtside_core::money::Money;
//!
//! let racquet = Money::from_cents(15099); // $150.99
//! let line = racquet.checked_mul_quantity(2).unwrap();
//! assert_eq!(line.to_string(), "$301.98");
//! assert_eq!(line.as_decimal(), "301.98");
//!
//! // Arithmetic is checked: an unrepresentable amount is `None`, never a panic.
//! assert!(Money::from_cents(i64::MAX).checked_mul_quantity(2).is_none());
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in cents.
///
/// ## Design Decisions
/// - **i64 (signed)**: differences between totals may go negative
/// - **Single field tuple struct**: zero-cost wrapper over i64
/// - **serde transparent**: serializes as a plain integer of cents
/// - **Checked arithmetic only**: prices and quantities come from outside
///   (catalog files, session input), so every operation reports overflow
///
/// ## Where Money Flows
/// ```text
/// Product.price ──► cart line (qty × price) ──► cart total ──► Receipt.total
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents.
    ///
    /// ```rust
    /// use courtside_core::money::Money;
    ///
    /// assert_eq!(Money::from_cents(99).cents(), 99);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Creates a Money value from dollars and cents.
    ///
    /// For negative amounts only the major unit carries the sign:
    /// `from_major_minor(-5, 50)` is -$5.50.
    ///
    /// ```rust
    /// use courtside_core::money::Money;
    ///
    /// assert_eq!(Money::from_major_minor(150, 99).cents(), 15099);
    /// assert_eq!(Money::from_major_minor(-5, 50).cents(), -550);
    /// ```
    #[inline]
    pub const fn from_major_minor(major: i64, minor: i64) -> Self {
        if major < 0 {
            Money(major * 100 - minor)
        } else {
            Money(major * 100 + minor)
        }
    }

    /// Returns the value in cents.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the whole-dollar portion (sign preserved).
    #[inline]
    pub const fn dollars(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the cents portion, always 0-99.
    #[inline]
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Zero.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Returns the absolute value.
    #[inline]
    pub const fn abs(&self) -> Self {
        Money(self.0.abs())
    }

    /// Multiplies a unit price by a quantity, `None` on overflow.
    ///
    /// ```rust
    /// use courtside_core::money::Money;
    ///
    /// let unit = Money::from_cents(99);
    /// assert_eq!(unit.checked_mul_quantity(3), Some(Money::from_cents(297)));
    /// ```
    #[inline]
    pub const fn checked_mul_quantity(&self, qty: i64) -> Option<Self> {
        match self.0.checked_mul(qty) {
            Some(cents) => Some(Money(cents)),
            None => None,
        }
    }

    /// Adds two amounts, `None` on overflow.
    #[inline]
    pub const fn checked_add(&self, other: Money) -> Option<Self> {
        match self.0.checked_add(other.0) {
            Some(cents) => Some(Money(cents)),
            None => None,
        }
    }

    /// Adds two amounts, clamping at the representable range.
    #[inline]
    pub const fn saturating_add(&self, other: Money) -> Self {
        Money(self.0.saturating_add(other.0))
    }

    /// Sums amounts, `None` if any partial sum overflows.
    ///
    /// ```rust
    /// use courtside_core::money::Money;
    ///
    /// let lines = [Money::from_cents(297), Money::from_cents(15099)];
    /// assert_eq!(Money::checked_sum(lines), Some(Money::from_cents(15396)));
    /// assert_eq!(Money::checked_sum(Vec::new()), Some(Money::zero()));
    /// ```
    pub fn checked_sum<I>(amounts: I) -> Option<Self>
    where
        I: IntoIterator<Item = Money>,
    {
        amounts
            .into_iter()
            .try_fold(Money::zero(), |acc, amount| acc.checked_add(amount))
    }

    /// Renders the amount as a plain decimal with two places and no symbol.
    ///
    /// This is the form printed on receipts (`$ 2.97`), where the currency
    /// symbol is a separate column.
    ///
    /// ```rust
    /// use courtside_core::money::Money;
    ///
    /// assert_eq!(Money::from_cents(297).as_decimal(), "2.97");
    /// assert_eq!(Money::from_cents(5).as_decimal(), "0.05");
    /// assert_eq!(Money::from_cents(-550).as_decimal(), "-5.50");
    /// ```
    pub fn as_decimal(&self) -> String {
        let sign = if self.0 < 0 { "-" } else { "" };
        format!("{}{}.{:02}", sign, self.dollars().abs(), self.cents_part())
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Shows money as `$10.99` / `-$5.50`.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{}${}.{:02}", sign, self.dollars().abs(), self.cents_part())
    }
}

impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parts() {
        let money = Money::from_cents(15099);
        assert_eq!(money.dollars(), 150);
        assert_eq!(money.cents_part(), 99);
    }

    #[test]
    fn test_display() {
        assert_eq!(Money::from_cents(99).to_string(), "$0.99");
        assert_eq!(Money::from_cents(60099).to_string(), "$600.99");
        assert_eq!(Money::from_cents(-550).to_string(), "-$5.50");
        assert_eq!(Money::zero().to_string(), "$0.00");
    }

    #[test]
    fn test_as_decimal() {
        assert_eq!(Money::from_cents(297).as_decimal(), "2.97");
        assert_eq!(Money::from_cents(100).as_decimal(), "1.00");
        assert_eq!(Money::zero().as_decimal(), "0.00");
    }

    #[test]
    fn test_checked_arithmetic() {
        let a = Money::from_cents(1000);
        let b = Money::from_cents(99);

        assert_eq!(a.checked_add(b), Some(Money::from_cents(1099)));
        assert_eq!(b.checked_mul_quantity(3), Some(Money::from_cents(297)));
        assert_eq!(b.checked_mul_quantity(0), Some(Money::zero()));
    }

    #[test]
    fn test_overflow_is_reported() {
        let half = Money::from_cents(i64::MAX / 2);

        assert_eq!(half.checked_mul_quantity(2), Some(Money::from_cents(i64::MAX - 1)));
        assert_eq!(half.checked_mul_quantity(3), None);
        assert_eq!(Money::from_cents(i64::MAX).checked_add(Money::from_cents(1)), None);
        assert_eq!(
            Money::from_cents(i64::MAX).saturating_add(Money::from_cents(1)),
            Money::from_cents(i64::MAX)
        );
    }

    #[test]
    fn test_checked_sum() {
        let lines = vec![Money::from_cents(297), Money::from_cents(15099)];
        assert_eq!(Money::checked_sum(lines), Some(Money::from_cents(15396)));
        assert_eq!(Money::checked_sum(Vec::new()), Some(Money::zero()));

        let huge = vec![Money::from_cents(i64::MAX), Money::from_cents(1)];
        assert_eq!(Money::checked_sum(huge), None);
    }

    #[test]
    fn test_serializes_as_cents() {
        let json = serde_json::to_string(&Money::from_cents(99)).unwrap();
        assert_eq!(json, "99");
    }
}
