//! # Points Rules
//!
//! Seven independent rules, each scoring one aspect of a receipt.
//!
//! ## Rule Table
//! ```text
//! ┌──────────────────────────┬───────────────────────────────────────────────┐
//! │ Rule                     │ Points                                        │
//! ├──────────────────────────┼───────────────────────────────────────────────┤
//! │ retailer_alphanumeric    │ 1 per alphanumeric character                  │
//! │ round_total              │ 50 if the total has no cents                  │
//! │ quarter_multiple         │ 25 if the total is a multiple of 0.25         │
//! │ item_pairs               │ 5 per two items                               │
//! │ description_length       │ ceil(price × 0.2) per item whose trimmed      │
//! │                          │ description length is a multiple of 3         │
//! │ odd_purchase_day         │ 6 if the day of the month is odd              │
//! │ afternoon_purchase       │ 10 if bought 14:01 through 15:59              │
//! └──────────────────────────┴───────────────────────────────────────────────┘
//! ```
//!
//! Rules never allocate state and never look at each other, so each one can
//! be tested on its own.

use crate::error::{CoreError, CoreResult};
use crate::money::{Money, Rate};
use crate::types::{Item, Points};

pub const ROUND_TOTAL_POINTS: Points = 50;
pub const QUARTER_MULTIPLE_POINTS: Points = 25;
pub const POINTS_PER_ITEM_PAIR: Points = 5;
pub const ODD_DAY_POINTS: Points = 6;
pub const AFTERNOON_POINTS: Points = 10;

/// The `× 0.2` applied to qualifying item prices.
pub const DESCRIPTION_PRICE_RATE: Rate = Rate::from_bps(2000);

const QUARTER: Money = Money::from_cents(25);

/// One point for every alphanumeric character in the retailer name.
///
/// Letters and digits of any script count; whitespace and punctuation do not.
pub fn retailer_alphanumeric(retailer: &str) -> Points {
    retailer.chars().filter(|c| c.is_alphanumeric()).count() as Points
}

/// 50 points when the total is a whole dollar amount.
pub fn round_total(total: Money) -> Points {
    if total.is_whole_dollars() {
        ROUND_TOTAL_POINTS
    } else {
        0
    }
}

/// 25 points when the total is a multiple of 0.25.
pub fn quarter_multiple(total: Money) -> Points {
    if total.is_multiple_of(QUARTER) {
        QUARTER_MULTIPLE_POINTS
    } else {
        0
    }
}

/// 5 points for every complete pair of items.
pub fn item_pairs(item_count: usize) -> Points {
    (item_count / 2) as Points * POINTS_PER_ITEM_PAIR
}

/// Price-based points for items with a trimmed description length divisible by 3.
///
/// Length is counted in characters after trimming leading and trailing
/// whitespace, so an all-blank description (length 0) qualifies.
pub fn description_length(items: &[Item]) -> Points {
    items
        .iter()
        .filter(|item| item.short_description.trim().chars().count() % 3 == 0)
        .map(|item| item.price.ceil_dollars_at(DESCRIPTION_PRICE_RATE).max(0) as Points)
        .sum()
}

/// 6 points when the day of the month is odd.
///
/// The day is the last `-`-separated token of the date. Only its parity is
/// read, so arbitrarily long digit runs are fine and no calendar check runs.
pub fn odd_purchase_day(purchase_date: &str) -> CoreResult<Points> {
    let day = purchase_date.rsplit('-').next().unwrap_or_default();
    let last_digit = digits("purchaseDate", day)?
        .last()
        .copied()
        .unwrap_or_default();

    if last_digit % 2 == 1 {
        Ok(ODD_DAY_POINTS)
    } else {
        Ok(0)
    }
}

/// 10 points when the purchase time is after 14:00 and before 16:00.
///
/// 14:00 itself and 16:00 score nothing. Minutes must be 0-59; hours are not
/// range-checked and simply fall outside the window.
pub fn afternoon_purchase(purchase_time: &str) -> CoreResult<Points> {
    let (hour, minutes) = purchase_time
        .split_once(':')
        .filter(|(_, minutes)| !minutes.contains(':'))
        .ok_or_else(|| CoreError::malformed("purchaseTime", "expected hh:mm"))?;

    let hour = number("purchaseTime", hour)?;
    let minutes = number("purchaseTime", minutes)?;

    if minutes > 59 {
        return Err(CoreError::malformed(
            "purchaseTime",
            format!("minutes must be between 0 and 59, found {}", minutes),
        ));
    }

    if (hour == 14 && minutes > 0) || hour == 15 {
        Ok(AFTERNOON_POINTS)
    } else {
        Ok(0)
    }
}

// =============================================================================
// Token Helpers
// =============================================================================

/// Decimal digit values of a non-empty, all-ASCII-digit token.
fn digits(field: &str, token: &str) -> CoreResult<Vec<u8>> {
    if token.is_empty() || !token.bytes().all(|b| b.is_ascii_digit()) {
        return Err(CoreError::malformed(field, format!("'{}' is not numeric", token)));
    }
    Ok(token.bytes().map(|b| b - b'0').collect())
}

/// Value of a digit token. Saturates instead of overflowing: a huge hour is
/// still outside the window and a huge minute is still above 59.
fn number(field: &str, token: &str) -> CoreResult<u64> {
    Ok(digits(field, token)?
        .into_iter()
        .fold(0u64, |acc, d| acc.saturating_mul(10).saturating_add(u64::from(d))))
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn item(description: &str, cents: i64) -> Item {
        Item::new(description, Money::from_cents(cents))
    }

    #[test]
    fn test_retailer_alphanumeric() {
        assert_eq!(retailer_alphanumeric("Target"), 6);
        assert_eq!(retailer_alphanumeric("M&M Corner Market"), 14);
        assert_eq!(retailer_alphanumeric("  - & -  "), 0);
        assert_eq!(retailer_alphanumeric("7-Eleven"), 7);
        assert_eq!(retailer_alphanumeric("Café 東京"), 6);
    }

    #[test]
    fn test_round_total() {
        assert_eq!(round_total(Money::from_cents(10000)), 50);
        assert_eq!(round_total(Money::from_cents(900)), 50);
        assert_eq!(round_total(Money::from_cents(0)), 50);
        assert_eq!(round_total(Money::from_cents(3535)), 0);
        assert_eq!(round_total(Money::from_cents(1001)), 0);
    }

    #[test]
    fn test_quarter_multiple() {
        assert_eq!(quarter_multiple(Money::from_cents(10000)), 25);
        assert_eq!(quarter_multiple(Money::from_cents(125)), 25);
        assert_eq!(quarter_multiple(Money::from_cents(1075)), 25);
        assert_eq!(quarter_multiple(Money::from_cents(3535)), 0);
        assert_eq!(quarter_multiple(Money::from_cents(265)), 0);
    }

    #[test]
    fn test_round_and_quarter_boundaries() {
        let hundred = Money::from_cents(10000);
        assert_eq!(round_total(hundred) + quarter_multiple(hundred), 75);

        let odd = Money::from_cents(3535);
        assert_eq!(round_total(odd) + quarter_multiple(odd), 0);
    }

    #[test]
    fn test_item_pairs() {
        assert_eq!(item_pairs(0), 0);
        assert_eq!(item_pairs(1), 0);
        assert_eq!(item_pairs(2), 5);
        assert_eq!(item_pairs(4), 10);
        assert_eq!(item_pairs(5), 10);
    }

    #[test]
    fn test_description_length() {
        // 18 chars, 12.25 × 0.2 = 2.45 → 3
        assert_eq!(description_length(&[item("Emils Cheese Pizza", 1225)]), 3);
        // Trimmed to 24 chars, 12.00 × 0.2 = 2.4 → 3
        assert_eq!(description_length(&[item("   Klarbrunn 12-PK 12 FL OZ  ", 1200)]), 3);
        // 17 chars, no points
        assert_eq!(description_length(&[item("Mountain Dew 12PK", 649)]), 0);
        // Exact product is not rounded up
        assert_eq!(description_length(&[item("abc", 1000)]), 2);
        // Blank description has length 0
        assert_eq!(description_length(&[item("   ", 1)]), 1);
        assert_eq!(description_length(&[item("abc", 0)]), 0);
    }

    #[test]
    fn test_description_length_counts_characters_not_bytes() {
        // 3 characters, 6 bytes
        assert_eq!(description_length(&[item("äöü", 500)]), 1);
    }

    #[test]
    fn test_description_length_sums_items() {
        let items = [
            item("Mountain Dew 12PK", 649),
            item("Emils Cheese Pizza", 1225),
            item("Knorr Creamy Chicken", 126),
            item("Doritos Nacho Cheese", 335),
            item("   Klarbrunn 12-PK 12 FL OZ  ", 1200),
        ];
        assert_eq!(description_length(&items), 6);
    }

    #[test]
    fn test_odd_purchase_day() {
        assert_eq!(odd_purchase_day("2022-01-01").unwrap(), 6);
        assert_eq!(odd_purchase_day("2022-01-02").unwrap(), 0);
        assert_eq!(odd_purchase_day("2022-03-20").unwrap(), 0);
        assert_eq!(odd_purchase_day("2022-02-31").unwrap(), 6);
        assert_eq!(odd_purchase_day("2022-01-99999999999999999999999").unwrap(), 6);
    }

    #[test]
    fn test_odd_purchase_day_malformed() {
        for bad in ["2022-01-xx", "2022-01-", "", "2022-01-1a"] {
            assert!(
                matches!(odd_purchase_day(bad), Err(CoreError::MalformedField { .. })),
                "expected {bad:?} to be rejected"
            );
        }
    }

    #[test]
    fn test_afternoon_window() {
        assert_eq!(afternoon_purchase("13:59").unwrap(), 0);
        assert_eq!(afternoon_purchase("14:00").unwrap(), 0);
        assert_eq!(afternoon_purchase("14:01").unwrap(), 10);
        assert_eq!(afternoon_purchase("14:33").unwrap(), 10);
        assert_eq!(afternoon_purchase("15:00").unwrap(), 10);
        assert_eq!(afternoon_purchase("15:59").unwrap(), 10);
        assert_eq!(afternoon_purchase("16:00").unwrap(), 0);
        assert_eq!(afternoon_purchase("08:13").unwrap(), 0);
        assert_eq!(afternoon_purchase("99:00").unwrap(), 0);
    }

    #[test]
    fn test_afternoon_rejects_bad_minutes() {
        assert!(matches!(
            afternoon_purchase("15:60"),
            Err(CoreError::MalformedField { .. })
        ));
        assert!(matches!(
            afternoon_purchase("14:99999999999999999999999"),
            Err(CoreError::MalformedField { .. })
        ));
    }

    #[test]
    fn test_afternoon_malformed() {
        for bad in ["13:1g", "1401", "14:01:00", ":30", "14:", ""] {
            assert!(
                matches!(afternoon_purchase(bad), Err(CoreError::MalformedField { .. })),
                "expected {bad:?} to be rejected"
            );
        }
    }
}
