//! # Error Types
//!
//! Domain-specific error types for tally-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  tally-core errors (this file)                                         │
//! │  ├── ValidationError  - Raw payload rejected by the validator          │
//! │  └── CoreError        - Points calculation failures                    │
//! │                                                                         │
//! │  tally-store errors (separate crate)                                   │
//! │  └── StoreError       - Lookup / insert failures                       │
//! │                                                                         │
//! │  HTTP errors (in app)                                                  │
//! │  └── ApiError         - What the client sees (400 / 404 / 500)         │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → ApiError → "The receipt is invalid"│
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The distinctions below exist for logs and tests. The HTTP boundary
//! collapses all of them into one response.

use thiserror::Error;

// =============================================================================
// Validation Error
// =============================================================================

/// Raw payload validation errors.
///
/// Returned by [`crate::validation::Validator::validate`] at the first
/// failing field. `field` is a path such as `total` or `items[2].price`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Body is not JSON, or not a JSON object.
    #[error("Receipt payload is malformed: {reason}")]
    MalformedPayload { reason: String },

    /// A required field is absent.
    #[error("{field} is required")]
    MissingField { field: String },

    /// A regex-constrained field failed its pattern.
    #[error("{field} does not match {pattern}")]
    PatternMismatch { field: String, pattern: String },

    /// The items array is present but empty.
    #[error("Receipt must contain at least one item")]
    EmptyItemList,

    /// Wrong JSON type, or a date/time that does not split into numeric parts.
    #[error("{field} has invalid format: {reason}")]
    MalformedField { field: String, reason: String },
}

impl ValidationError {
    pub(crate) fn missing(field: &str) -> Self {
        ValidationError::MissingField {
            field: field.to_string(),
        }
    }

    pub(crate) fn malformed(field: &str, reason: impl Into<String>) -> Self {
        ValidationError::MalformedField {
            field: field.to_string(),
            reason: reason.into(),
        }
    }

    pub(crate) fn mismatch(field: &str, pattern: &str) -> Self {
        ValidationError::PatternMismatch {
            field: field.to_string(),
            pattern: pattern.to_string(),
        }
    }
}

// =============================================================================
// Core Error
// =============================================================================

/// Points calculation errors.
///
/// The calculator can be called without going through the validator, so it
/// re-checks what it depends on.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// Receipt has no items.
    ///
    /// ## When This Occurs
    /// - `calculate` called directly on a hand-built receipt
    /// - The validator should already have rejected it
    #[error("Receipt must contain at least one item")]
    EmptyItemList,

    /// A date or time component could not be used by a rule.
    ///
    /// ## When This Occurs
    /// - Non-digit day token (`2022-01-xx`)
    /// - Non-digit hour or minute, or the wrong number of `:` parts
    /// - Minutes above 59
    #[error("{field} has invalid format: {reason}")]
    MalformedField { field: String, reason: String },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

impl CoreError {
    pub(crate) fn malformed(field: &str, reason: impl Into<String>) -> Self {
        CoreError::MalformedField {
            field: field.to_string(),
            reason: reason.into(),
        }
    }
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::missing("total");
        assert_eq!(err.to_string(), "total is required");

        let err = ValidationError::mismatch("items[0].price", r"^\d+\.\d{2}$");
        assert_eq!(err.to_string(), r"items[0].price does not match ^\d+\.\d{2}$");

        assert_eq!(
            ValidationError::EmptyItemList.to_string(),
            "Receipt must contain at least one item"
        );
    }

    #[test]
    fn test_core_error_messages() {
        let err = CoreError::malformed("purchaseTime", "minutes must be between 0 and 59");
        assert_eq!(
            err.to_string(),
            "purchaseTime has invalid format: minutes must be between 0 and 59"
        );
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let core_err: CoreError = ValidationError::EmptyItemList.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }
}
