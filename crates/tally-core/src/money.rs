//! # Money Module
//!
//! Provides the `Money` type for receipt totals and item prices.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  As binary floats:                                                      │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │    "is 35.35 a multiple of 0.25?" depends on representation error      │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Cents                                            │
//! │    "35.35" → 3535 cents                                                 │
//! │    3535 % 25 == 10  → exact, every time                                 │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use tally_core::money::Money;
//!
//! let total: Money = "35.35".parse().unwrap();
//! assert_eq!(total.cents(), 3535);
//! assert!(!total.is_whole_dollars());
//!
//! // Only the receipt wire format is accepted
//! assert!("35.3".parse::<Money>().is_err());
//! ```

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

// =============================================================================
// Rate
// =============================================================================

/// A multiplier in basis points (1 bps = 0.01%).
///
/// 2000 bps = 20% = the `× 0.2` used by the description rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rate(u32);

impl Rate {
    #[inline]
    pub const fn from_bps(bps: u32) -> Self {
        Rate(bps)
    }

    #[inline]
    pub const fn bps(&self) -> u32 {
        self.0
    }
}

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in cents.
///
/// ## Design Decisions
/// - **i64**: Same width the rest of the pipeline uses, overflow-checked on parse
/// - **Single field tuple struct**: Zero-cost abstraction over i64
/// - **String serde**: Serialized as `"35.35"`, the receipt wire format
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents.
    ///
    /// ## Example
    /// ```rust
    /// use tally_core::money::Money;
    ///
    /// let price = Money::from_cents(1099); // Represents $10.99
    /// assert_eq!(price.cents(), 1099);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Returns the value in cents.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the dollar portion.
    #[inline]
    pub const fn dollars(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the cents portion (always 0-99).
    #[inline]
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// True when there are no cents (`9.00`, `100.00`).
    #[inline]
    pub const fn is_whole_dollars(&self) -> bool {
        self.0 % 100 == 0
    }

    /// True when the value is an exact multiple of `step`.
    ///
    /// ## Example
    /// ```rust
    /// use tally_core::money::Money;
    ///
    /// let quarter = Money::from_cents(25);
    /// assert!(Money::from_cents(900).is_multiple_of(quarter));
    /// assert!(!Money::from_cents(3535).is_multiple_of(quarter));
    /// ```
    #[inline]
    pub const fn is_multiple_of(&self, step: Money) -> bool {
        step.0 != 0 && self.0 % step.0 == 0
    }

    /// Applies `rate` and rounds the resulting dollar figure toward +∞.
    ///
    /// ## Implementation
    /// `ceil(cents × bps / 10000 / 100)` done in i128 integer math, so
    /// $12.25 × 20% = $2.45 → 3, and $10.00 × 20% = $2.00 → 2 exactly.
    ///
    /// ## Example
    /// ```rust
    /// use tally_core::money::{Money, Rate};
    ///
    /// let price = Money::from_cents(1225);
    /// assert_eq!(price.ceil_dollars_at(Rate::from_bps(2000)), 3);
    /// ```
    pub fn ceil_dollars_at(&self, rate: Rate) -> i64 {
        let scaled = self.0 as i128 * rate.bps() as i128;
        let divisor: i128 = 10_000 * 100;
        // ceil(a / b) == -floor(-a / b)
        (-((-scaled).div_euclid(divisor))) as i64
    }

    /// Renders the wire form without a currency sign (`35.35`).
    pub fn amount(&self) -> String {
        let sign = if self.0 < 0 { "-" } else { "" };
        format!("{}{}.{:02}", sign, self.dollars().abs(), self.cents_part())
    }
}

// =============================================================================
// Parsing
// =============================================================================

/// Failure to read an amount string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseMoneyError {
    #[error("amount must be digits, a dot, and exactly two digits")]
    InvalidFormat,

    #[error("amount is too large")]
    Overflow,
}

/// Parses `^[0-9]+\.[0-9]{2}$` into cents.
///
/// Signs, whitespace, exponents and non-ASCII digits are all rejected.
impl FromStr for Money {
    type Err = ParseMoneyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (whole, frac) = s.split_once('.').ok_or(ParseMoneyError::InvalidFormat)?;

        if whole.is_empty()
            || frac.len() != 2
            || !whole.bytes().all(|b| b.is_ascii_digit())
            || !frac.bytes().all(|b| b.is_ascii_digit())
        {
            return Err(ParseMoneyError::InvalidFormat);
        }

        let cents = whole
            .bytes()
            .chain(frac.bytes())
            .try_fold(0i64, |acc, b| {
                acc.checked_mul(10)?.checked_add(i64::from(b - b'0'))
            })
            .ok_or(ParseMoneyError::Overflow)?;

        Ok(Money(cents))
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display shows money with a dollar sign, for logs.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{}${}.{:02}", sign, self.dollars().abs(), self.cents_part())
    }
}

impl Serialize for Money {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.amount())
    }
}

impl<'de> Deserialize<'de> for Money {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(de::Error::custom)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
