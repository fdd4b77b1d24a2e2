//! # In-Memory Receipt Store
//!
//! ## Thread Safety
//! The map is wrapped in a `RwLock` because:
//! 1. Many requests may look up points at the same time (shared read lock)
//! 2. Only one submission may modify the map at a time (exclusive write lock)
//! 3. Entries are inserted whole, so a reader never sees a half-built receipt
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Store Operations                                     │
//! │                                                                         │
//! │  HTTP Request              Store Call             Lock                  │
//! │  ────────────              ──────────             ────                  │
//! │                                                                         │
//! │  POST /receipts/process ──► insert(scored) ─────► write                 │
//! │                                                                         │
//! │  GET /receipts/{id}/... ──► get(id) ────────────► read                  │
//! │                                                                         │
//! │  GET /health ─────────────► len() ──────────────► read                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::sync::RwLock;

use tally_core::{ReceiptId, ScoredReceipt};
use tracing::debug;

use crate::error::{StoreError, StoreResult};
use crate::ReceiptStore;

/// Receipt store backed by a `HashMap`, lost on restart.
#[derive(Debug, Default)]
pub struct InMemoryReceiptStore {
    receipts: RwLock<HashMap<ReceiptId, ScoredReceipt>>,
}

impl InMemoryReceiptStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ReceiptStore for InMemoryReceiptStore {
    fn insert(&self, scored: ScoredReceipt) -> StoreResult<()> {
        let mut receipts = self.receipts.write().map_err(|_| StoreError::LockPoisoned)?;

        match receipts.entry(scored.id.clone()) {
            Entry::Occupied(existing) => Err(StoreError::DuplicateId(existing.key().to_string())),
            Entry::Vacant(slot) => {
                debug!(id = %scored.id, points = scored.points, "Receipt stored");
                slot.insert(scored);
                Ok(())
            }
        }
    }

    fn get(&self, id: &str) -> StoreResult<ScoredReceipt> {
        let receipts = self.receipts.read().map_err(|_| StoreError::LockPoisoned)?;

        receipts
            .get(&ReceiptId::from(id))
            .cloned()
            .ok_or_else(|| StoreError::not_found(id))
    }

    fn len(&self) -> StoreResult<usize> {
        let receipts = self.receipts.read().map_err(|_| StoreError::LockPoisoned)?;
        Ok(receipts.len())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
