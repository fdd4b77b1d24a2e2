//! Error types for the Tally API.
//!
//! Every failure a handler can hit ends up as an [`ApiError`], which knows
//! its own HTTP status. Response bodies are short plain-text messages; the
//! detailed cause only goes to the log.

use axum::extract::rejection::BytesRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use tally_core::{CoreError, ValidationError};
use tally_store::StoreError;
use tracing::{debug, error, warn};

/// Body returned for any rejected receipt.
pub const INVALID_RECEIPT_MESSAGE: &str = "The receipt is invalid";

/// Body returned when an id is unknown.
pub const NOT_FOUND_MESSAGE: &str = "No receipt found for that id";

/// Body returned for unexpected server-side failures.
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

/// Tally API errors.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Invalid receipt: {0}")]
    InvalidReceipt(#[from] CoreError),

    #[error("Unreadable request body: {0}")]
    UnreadableBody(String),

    #[error("Receipt not found: {0}")]
    NotFound(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Result alias for handlers and services.
pub type ApiResult<T> = Result<T, ApiError>;

impl From<ValidationError> for ApiError {
    fn from(error: ValidationError) -> Self {
        ApiError::InvalidReceipt(CoreError::Validation(error))
    }
}

impl From<BytesRejection> for ApiError {
    fn from(rejection: BytesRejection) -> Self {
        ApiError::UnreadableBody(rejection.body_text())
    }
}

impl From<StoreError> for ApiError {
    fn from(error: StoreError) -> Self {
        match error {
            StoreError::NotFound(id) => ApiError::NotFound(id),
            other => ApiError::Internal(other.to_string()),
        }
    }
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::InvalidReceipt(_) | ApiError::UnreadableBody(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();

        let message = match &self {
            ApiError::InvalidReceipt(cause) => {
                warn!(%cause, "Rejected receipt");
                INVALID_RECEIPT_MESSAGE
            }
            ApiError::UnreadableBody(cause) => {
                warn!(%cause, "Rejected receipt body");
                INVALID_RECEIPT_MESSAGE
            }
            ApiError::NotFound(id) => {
                debug!(%id, "Unknown receipt id");
                NOT_FOUND_MESSAGE
            }
            ApiError::Internal(msg) => {
                error!(%msg, "Request failed");
                INTERNAL_ERROR_MESSAGE
            }
        };

        (status, message).into_response()
    }
}
