//! # Tally API
//!
//! HTTP server that scores purchase receipts.
//!
//! ## Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                          Tally API Server                               │
//! │                                                                         │
//! │  ┌────────────────┐  ┌─────────────────────┐  ┌──────────────────────┐ │
//! │  │  routes        │  │  ReceiptService     │  │  ReceiptStore        │ │
//! │  │                │  │                     │  │                      │ │
//! │  │ • GET  /       │  │ • process           │  │ • insert             │ │
//! │  │ • GET  /health │─►│   validate → score  │─►│ • get                │ │
//! │  │ • POST process │  │ • points            │  │ • len                │ │
//! │  │ • GET  points  │  │                     │  │                      │ │
//! │  └────────────────┘  └─────────────────────┘  └──────────────────────┘ │
//! │                                                                         │
//! │  TraceLayer + DefaultBodyLimit wrap every route                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration
//! `tally.toml` in the working directory, overridden by environment variables:
//! - `TALLY_HOST` - bind address (default: 0.0.0.0)
//! - `TALLY_PORT` - HTTP port (default: 8080)
//! - `TALLY_RETAILER_POLICY` - `lenient` (default) or `strict`
//! - `TALLY_MAX_BODY_BYTES` - request body limit (default: 2097152)
//! - `RUST_LOG` - log filter

pub mod config;
pub mod dto;
pub mod error;
pub mod routes;
pub mod services;

use std::sync::Arc;

use tally_core::{ValidationPolicy, Validator};
use tally_store::ReceiptStore;

// Re-exports
pub use config::ApiConfig;
pub use error::{ApiError, ApiResult};
pub use routes::create_router;
pub use services::ReceiptService;

/// Shared application state.
pub struct AppState {
    pub receipts: ReceiptService,
    pub config: ApiConfig,
}

impl AppState {
    pub fn new(config: ApiConfig, store: Arc<dyn ReceiptStore>) -> Self {
        let validator = Validator::new(ValidationPolicy::for_retailer(config.retailer_policy));

        Self {
            receipts: ReceiptService::new(validator, store),
            config,
        }
    }
}
