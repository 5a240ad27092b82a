//! # Money Module
//!
//! Provides the `Money` type for prices and cart totals.
//!
//! ## Integer Cents, Decimal Wire Format
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  The catalog and the stored cart carry prices as JSON numbers:         │
//! │    { "price": 179.9 }                                                   │
//! │                                                                         │
//! │  Summing floats drifts:                                                 │
//! │    0.1 + 0.2 = 0.30000000000000004                                      │
//! │                                                                         │
//! │  So prices are parsed once into integer cents (17990) and all cart     │
//! │  math runs on i64. They are written back as 179.9, so the stored       │
//! │  blob keeps the shape the storefront UI expects.                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use rocketshoes_core::money::Money;
//!
//! let price = Money::from_cents(17990); // 179.90
//! let line_total = price * 2;
//! assert_eq!(line_total.cents(), 35980);
//! ```

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::ops::{Add, AddAssign, Mul};

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in the smallest currency unit (cents).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents.
    ///
    /// ## Example
    /// ```rust
    /// use rocketshoes_core::money::Money;
    ///
    /// let price = Money::from_cents(1099);
    /// assert_eq!(price.cents(), 1099);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Creates a Money value from a decimal amount in major units.
    ///
    /// Rounds to the nearest cent. Returns `None` for NaN or infinity.
    ///
    /// ## Example
    /// ```rust
    /// use rocketshoes_core::money::Money;
    ///
    /// assert_eq!(Money::from_decimal(179.9), Some(Money::from_cents(17990)));
    /// assert_eq!(Money::from_decimal(f64::NAN), None);
    /// ```
    pub fn from_decimal(value: f64) -> Option<Self> {
        if !value.is_finite() {
            return None;
        }
        Some(Money((value * 100.0).round() as i64))
    }

    /// Returns the value in cents.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the major unit portion.
    #[inline]
    pub const fn major(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the minor unit portion (always 0-99).
    #[inline]
    pub const fn minor(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Returns the value as a decimal in major units (for the wire format).
    #[inline]
    pub fn to_decimal(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Multiplies money by an amount of units.
    ///
    /// Saturates at the `i64` bounds instead of overflowing.
    ///
    /// ## Example
    /// ```rust
    /// use rocketshoes_core::money::Money;
    ///
    /// let unit_price = Money::from_cents(13990);
    /// assert_eq!(unit_price.multiply_amount(3).cents(), 41970);
    /// ```
    #[inline]
    pub const fn multiply_amount(&self, amount: i64) -> Self {
        Money(self.0.saturating_mul(amount))
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Debug-oriented rendering. Locale-aware formatting lives in
/// [`crate::notice::Locale::format_money`].
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{}{}.{:02}", sign, self.major().abs(), self.minor())
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0.saturating_add(other.0))
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        *self = *self + other;
    }
}

impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, amount: i64) -> Self {
        self.multiply_amount(amount)
    }
}

impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

// Wire format: a JSON number in major units (179.9), never a cents integer.
impl Serialize for Money {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.to_decimal())
    }
}

impl<'de> Deserialize<'de> for Money {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = f64::deserialize(deserializer)?;
        Money::from_decimal(value)
            .ok_or_else(|| serde::de::Error::custom("price must be a finite number"))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
