//! # tally-store: Receipt Storage for Tally
//!
//! Keeps every accepted receipt together with the points it earned, keyed by
//! its opaque identifier.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                          Tally Data Flow                                │
//! │                                                                         │
//! │  ReceiptService::process (tally-api)                                   │
//! │       │  validate → calculate → ScoredReceipt                           │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                   tally-store (THIS CRATE)                      │   │
//! │  │                                                                 │   │
//! │  │   trait ReceiptStore ◄──── InMemoryReceiptStore                 │   │
//! │  │   insert / get / len        RwLock<HashMap<ReceiptId, ...>>     │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The store never runs the points rules. It only keeps what it is given,
//! which is how the score stays frozen after submission.
//!
//! ## Usage
//!
//! ```rust
//! use tally_core::{Item, Money, Receipt, ReceiptId, ScoredReceipt};
//! use tally_store::{InMemoryReceiptStore, ReceiptStore};
//!
//! let store = InMemoryReceiptStore::new();
//! let receipt = Receipt {
//!     retailer: "Target".to_string(),
//!     purchase_date: "2022-01-02".to_string(),
//!     purchase_time: "13:13".to_string(),
//!     items: vec![Item::new("Pepsi - 12-oz", Money::from_cents(125))],
//!     total: Money::from_cents(125),
//! };
//! let id = ReceiptId::generate();
//! store.insert(ScoredReceipt::new(id.clone(), receipt, 31)).unwrap();
//!
//! assert_eq!(store.get(id.as_str()).unwrap().points, 31);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod memory;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{StoreError, StoreResult};
pub use memory::InMemoryReceiptStore;

use tally_core::ScoredReceipt;

/// Storage for scored receipts.
///
/// Implementations must be safe to share across request handlers.
pub trait ReceiptStore: Send + Sync {
    /// Stores a receipt under its own `id`. Fails on a duplicate id.
    fn insert(&self, scored: ScoredReceipt) -> StoreResult<()>;

    /// Looks up a receipt by identifier.
    fn get(&self, id: &str) -> StoreResult<ScoredReceipt>;

    /// Number of stored receipts.
    fn len(&self) -> StoreResult<usize>;
}
