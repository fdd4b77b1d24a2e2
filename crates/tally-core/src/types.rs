//! # Domain Types
//!
//! Core domain types used throughout Tally.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Receipt      │   │      Item       │   │  ScoredReceipt  │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  retailer       │   │  description    │   │  id (UUID)      │       │
//! │  │  purchase_date  │   │  price (Money)  │   │  receipt        │       │
//! │  │  purchase_time  │   └─────────────────┘   │  points (frozen)│       │
//! │  │  items          │                         │  scored_at      │       │
//! │  │  total (Money)  │                         └─────────────────┘       │
//! │  └─────────────────┘                                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Money fields are already fixed-point by the time a `Receipt` exists.
//! Date and time stay as the submitted text; the rules read them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use crate::money::Money;

/// Reward points. Every rule contributes a non-negative amount.
pub type Points = u64;

// =============================================================================
// Receipt
// =============================================================================

/// A purchase receipt that passed validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Receipt {
    /// Store name as printed on the receipt.
    pub retailer: String,

    /// `yyyy-mm-dd`, syntactic only.
    pub purchase_date: String,

    /// `hh:mm`, 24-hour clock, syntactic only.
    pub purchase_time: String,

    /// Purchased items, in receipt order.
    pub items: Vec<Item>,

    /// Amount paid.
    pub total: Money,
}

/// A single line on a receipt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub short_description: String,
    pub price: Money,
}

impl Item {
    pub fn new(short_description: impl Into<String>, price: Money) -> Self {
        Item {
            short_description: short_description.into(),
            price,
        }
    }
}

// =============================================================================
// Receipt Identifier
// =============================================================================

/// Opaque identifier handed back on submission.
///
/// Minted as a UUID v4 string. Clients must not parse it, and lookups treat
/// any string as a candidate key, so `"47318413"` is simply not found.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReceiptId(String);

impl ReceiptId {
    /// Mints a fresh identifier.
    pub fn generate() -> Self {
        ReceiptId(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ReceiptId {
    fn from(value: &str) -> Self {
        ReceiptId(value.to_string())
    }
}

impl fmt::Display for ReceiptId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// =============================================================================
// Scored Receipt
// =============================================================================

/// A receipt together with the points it earned at submission time.
///
/// ## Frozen Score
/// `points` is computed exactly once, before the receipt is stored. Lookups
/// return it as-is and never run the rules again.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoredReceipt {
    pub id: ReceiptId,
    pub receipt: Receipt,
    pub points: Points,
    pub scored_at: DateTime<Utc>,
}

impl ScoredReceipt {
    pub fn new(id: ReceiptId, receipt: Receipt, points: Points) -> Self {
        ScoredReceipt {
            id,
            receipt,
            points,
            scored_at: Utc::now(),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_ids_are_unique_uuids() {
        let a = ReceiptId::generate();
        let b = ReceiptId::generate();
        assert_ne!(a, b);
        assert!(Uuid::parse_str(a.as_str()).is_ok());
    }

    #[test]
    fn test_receipt_serializes_in_wire_shape() {
        let receipt = Receipt {
            retailer: "Walgreens".to_string(),
            purchase_date: "2022-01-02".to_string(),
            purchase_time: "08:13".to_string(),
            items: vec![Item::new("Dasani", Money::from_cents(140))],
            total: Money::from_cents(140),
        };

        let json = serde_json::to_value(&receipt).unwrap();
        assert_eq!(json["purchaseDate"], "2022-01-02");
        assert_eq!(json["items"][0]["shortDescription"], "Dasani");
        assert_eq!(json["items"][0]["price"], "1.40");
        assert_eq!(json["total"], "1.40");
    }

    #[test]
    fn test_scored_receipt_keeps_points() {
        let receipt = Receipt {
            retailer: "Target".to_string(),
            purchase_date: "2022-01-02".to_string(),
            purchase_time: "13:13".to_string(),
            items: vec![Item::new("Pepsi - 12-oz", Money::from_cents(125))],
            total: Money::from_cents(125),
        };
        let id = ReceiptId::from("abc");
        let scored = ScoredReceipt::new(id.clone(), receipt.clone(), 31);

        assert_eq!(scored.id, id);
        assert_eq!(scored.receipt, receipt);
        assert_eq!(scored.points, 31);
    }
}
