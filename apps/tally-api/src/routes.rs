//! HTTP routes and handlers.
//!
//! ```text
//! GET  /                        banner
//! GET  /health                  liveness + receipt count
//! POST /receipts/process        JSON receipt → {"id": ...}
//! GET  /receipts/:id/points     {"points": ...} or 404
//! ```

use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::rejection::BytesRejection;
use axum::extract::{DefaultBodyLimit, Path, State};
use axum::routing::{get, post};
use axum::{Json, Router};
use chrono::Utc;
use tower_http::trace::TraceLayer;

use crate::dto::{HealthResponse, PointsResponse, ProcessResponse};
use crate::error::ApiResult;
use crate::AppState;

/// Text served on `GET /`.
pub const BANNER: &str = "Tally receipt processor. POST /receipts/process, GET /receipts/{id}/points";

/// Create the API router with all routes.
pub fn create_router(state: Arc<AppState>) -> Router {
    let body_limit = state.config.max_body_bytes;

    Router::new()
        .route("/", get(banner))
        .route("/health", get(health))
        .route("/receipts/process", post(process_receipt))
        .route("/receipts/:id/points", get(receipt_points))
        .with_state(state)
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(TraceLayer::new_for_http())
}

async fn banner() -> &'static str {
    BANNER
}

async fn health(State(state): State<Arc<AppState>>) -> ApiResult<Json<HealthResponse>> {
    Ok(Json(HealthResponse {
        status: "serving".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        receipts: state.receipts.count()?,
        server_time: Utc::now().to_rfc3339(),
    }))
}

async fn process_receipt(
    State(state): State<Arc<AppState>>,
    body: Result<Bytes, BytesRejection>,
) -> ApiResult<Json<ProcessResponse>> {
    let id = state.receipts.process(&body?)?;
    Ok(Json(ProcessResponse { id }))
}

async fn receipt_points(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> ApiResult<Json<PointsResponse>> {
    let points = state.receipts.points(&id)?;
    Ok(Json(PointsResponse { points }))
}

// =============================================================================
// Unit Tests
// =============================================================================
