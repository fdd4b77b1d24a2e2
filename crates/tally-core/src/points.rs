//! # Points Calculator
//!
//! Composes the [`rules`](crate::rules) into a receipt's total.
//!
//! ## User Workflow
//! ```text
//! Validated Receipt
//!      │
//!      ▼
//! breakdown(receipt) ← each rule scored on its own
//!      │
//!      ▼
//! PointsBreakdown { retailer: 6, round_total: 0, ... }
//!      │
//!      ▼
//! total() → 28
//! ```

use serde::Serialize;

use crate::error::{CoreError, CoreResult};
use crate::rules;
use crate::types::{Points, Receipt};

/// Per-rule contributions for one receipt.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PointsBreakdown {
    pub retailer: Points,
    pub round_total: Points,
    pub quarter_multiple: Points,
    pub item_pairs: Points,
    pub descriptions: Points,
    pub odd_day: Points,
    pub afternoon: Points,
}

impl PointsBreakdown {
    /// Sum of every rule.
    pub fn total(&self) -> Points {
        self.retailer
            + self.round_total
            + self.quarter_multiple
            + self.item_pairs
            + self.descriptions
            + self.odd_day
            + self.afternoon
    }
}

/// Scores each rule separately.
///
/// ## Errors
/// - [`CoreError::EmptyItemList`] if the receipt has no items
/// - [`CoreError::MalformedField`] for an unusable date or time
pub fn breakdown(receipt: &Receipt) -> CoreResult<PointsBreakdown> {
    if receipt.items.is_empty() {
        return Err(CoreError::EmptyItemList);
    }

    Ok(PointsBreakdown {
        retailer: rules::retailer_alphanumeric(&receipt.retailer),
        round_total: rules::round_total(receipt.total),
        quarter_multiple: rules::quarter_multiple(receipt.total),
        item_pairs: rules::item_pairs(receipt.items.len()),
        descriptions: rules::description_length(&receipt.items),
        odd_day: rules::odd_purchase_day(&receipt.purchase_date)?,
        afternoon: rules::afternoon_purchase(&receipt.purchase_time)?,
    })
}

/// Total reward points for a receipt.
///
/// Pure: the same receipt always yields the same number.
pub fn calculate(receipt: &Receipt) -> CoreResult<Points> {
    Ok(breakdown(receipt)?.total())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Money;
    use crate::types::Item;
    use crate::validation::validate;

    fn fixture(json: &str) -> Receipt {
        let payload: serde_json::Value = serde_json::from_str(json).unwrap();
        validate(&payload).unwrap()
    }

    #[test]
    fn test_target_fixture() {
        let receipt = fixture(include_str!("../fixtures/target.json"));
        let points = breakdown(&receipt).unwrap();

        assert_eq!(
            points,
            PointsBreakdown {
                retailer: 6,
                round_total: 0,
                quarter_multiple: 0,
                item_pairs: 10,
                descriptions: 6,
                odd_day: 6,
                afternoon: 0,
            }
        );
        assert_eq!(calculate(&receipt).unwrap(), 28);
    }

    #[test]
    fn test_simple_fixture() {
        let receipt = fixture(include_str!("../fixtures/simple.json"));
        assert_eq!(calculate(&receipt).unwrap(), 31);
    }

    #[test]
    fn test_corner_market_fixture() {
        let receipt = fixture(include_str!("../fixtures/corner-market.json"));
        let points = breakdown(&receipt).unwrap();

        assert_eq!(points.retailer, 14);
        assert_eq!(points.round_total, 50);
        assert_eq!(points.quarter_multiple, 25);
        assert_eq!(points.item_pairs, 10);
        assert_eq!(points.afternoon, 10);
        assert_eq!(points.total(), 109);
    }

    #[test]
    fn test_walgreens_fixture() {
        let receipt = fixture(include_str!("../fixtures/walgreens.json"));
        assert_eq!(calculate(&receipt).unwrap(), 15);
    }

    #[test]
    fn test_calculate_is_idempotent() {
        let receipt = fixture(include_str!("../fixtures/corner-market.json"));
        let first = calculate(&receipt).unwrap();
        for _ in 0..10 {
            assert_eq!(calculate(&receipt).unwrap(), first);
        }
    }

    #[test]
    fn test_empty_items_rejected_standalone() {
        let receipt = Receipt {
            retailer: "Target".to_string(),
            purchase_date: "2022-01-01".to_string(),
            purchase_time: "13:01".to_string(),
            items: vec![],
            total: Money::from_cents(0),
        };
        assert_eq!(calculate(&receipt), Err(CoreError::EmptyItemList));
    }

    #[test]
    fn test_malformed_time_propagates() {
        let receipt = Receipt {
            retailer: "Target".to_string(),
            purchase_date: "2022-01-01".to_string(),
            purchase_time: "14:75".to_string(),
            items: vec![Item::new("Gatorade", Money::from_cents(225))],
            total: Money::from_cents(225),
        };
        assert!(matches!(
            calculate(&receipt),
            Err(CoreError::MalformedField { ref field, .. }) if field == "purchaseTime"
        ));
    }
}
