//! # Store Error Types
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  StoreError (this module)                                               │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ApiError (in tally-api) ← NotFound → 404, everything else → 500       │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

/// Receipt store errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// No receipt under this identifier.
    #[error("Receipt not found: {0}")]
    NotFound(String),

    /// An identifier was minted twice.
    ///
    /// ## When This Occurs
    /// - Never with UUID v4 ids in practice; the existing entry is kept
    #[error("Duplicate receipt id: {0}")]
    DuplicateId(String),

    /// A thread panicked while holding the store lock.
    #[error("Receipt store lock poisoned")]
    LockPoisoned,
}

impl StoreError {
    pub fn not_found(id: impl Into<String>) -> Self {
        StoreError::NotFound(id.into())
    }
}

/// Convenience type alias for Results with StoreError.
pub type StoreResult<T> = Result<T, StoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            StoreError::not_found("47318413").to_string(),
            "Receipt not found: 47318413"
        );
        assert_eq!(StoreError::LockPoisoned.to_string(), "Receipt store lock poisoned");
    }
}
