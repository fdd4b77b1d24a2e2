//! # tally-core: Pure Business Logic for Tally
//!
//! This crate is the **heart** of Tally. It decides whether a submitted
//! receipt is well-formed and how many reward points it earns, as pure
//! functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                           Tally Architecture                            │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    tally-api (axum)                             │   │
//! │  │    POST /receipts/process    GET /receipts/{id}/points          │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ tally-core (THIS CRATE) ★                       │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │ validation│  │   rules   │  │  points   │  │   money   │  │   │
//! │  │   │ Validator │  │ 7 rules   │  │ calculate │  │   Money   │  │   │
//! │  │   │  policies │  │           │  │ breakdown │  │   cents   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO STORAGE • NO NETWORK • PURE FUNCTIONS            │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    tally-store (Receipt Store)                  │   │
//! │  │              id → receipt + frozen points                       │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Receipt, Item, ScoredReceipt, ReceiptId)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`error`] - Domain error types
//! - [`validation`] - Raw payload validation and policies
//! - [`rules`] - The seven points rules
//! - [`points`] - Rule composition
//!
//! ## Example Usage
//!
//! ```rust
//! use serde_json::json;
//! use tally_core::{calculate, validate};
//!
//! let payload = json!({
//!     "retailer": "Walgreens",
//!     "purchaseDate": "2022-01-02",
//!     "purchaseTime": "08:13",
//!     "total": "2.65",
//!     "items": [
//!         { "shortDescription": "Pepsi - 12-oz", "price": "1.25" },
//!         { "shortDescription": "Dasani", "price": "1.40" }
//!     ]
//! });
//!
//! let receipt = validate(&payload).unwrap();
//! assert_eq!(calculate(&receipt).unwrap(), 15);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod money;
pub mod points;
pub mod rules;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use points::{breakdown, calculate, PointsBreakdown};
pub use types::*;
pub use validation::{validate, RetailerPolicy, ValidationPolicy, Validator};
