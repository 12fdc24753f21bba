//! HTTP handlers.
//!
//! ```text
//! POST /receipts/process       → 201 { "id" }       | 400 ApiError
//! GET  /receipts/:id/points    → 200 { "points" }   | 404 { "points": 0 }
//! GET  /receipts/:id           → 200 ScoredReceipt  | 404 ApiError
//! GET  /health                 → 200 { "status", "receipts" }
//! ```

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use points_core::response::{package_points, package_process};
use points_core::{PointsResponse, ProcessResponse, Receipt, ScoredReceipt};
use serde::Serialize;
use tracing::{debug, info};

use crate::error::{ApiError, ApiResult};
use crate::AppState;

/// Builds the router with every receipt endpoint.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/receipts/process", post(process_receipt))
        .route("/receipts/:id/points", get(get_points))
        .route("/receipts/:id", get(get_receipt))
        .route("/health", get(health))
        .with_state(state)
}

/// POST /receipts/process
async fn process_receipt(
    State(state): State<AppState>,
    payload: Result<Json<Receipt>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<ProcessResponse>)> {
    let Json(receipt) = payload?;

    let retailer = receipt.retailer.clone();
    let items = receipt.items.len();
    let id = state.registry.store(receipt)?;

    info!(id = %id, retailer = %retailer, items, "Receipt processed");
    Ok((StatusCode::CREATED, Json(package_process(id))))
}

/// GET /receipts/:id/points
///
/// An unknown id answers 404 with a zero score body.
async fn get_points(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    match state.registry.lookup(&id) {
        Some(points) => {
            debug!(id = %id, points, "Points lookup");
            (StatusCode::OK, Json(package_points(points))).into_response()
        }
        None => {
            debug!(id = %id, "Points lookup for unknown receipt");
            (StatusCode::NOT_FOUND, Json(PointsResponse::absent())).into_response()
        }
    }
}

/// GET /receipts/:id
async fn get_receipt(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<ScoredReceipt>> {
    state
        .registry
        .get(&id)
        .map(|scored| Json(ScoredReceipt::clone(&scored)))
        .ok_or_else(|| ApiError::not_found("Receipt", &id))
}

/// Liveness body.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub receipts: usize,
}

/// GET /health
async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        receipts: state.registry.len(),
    })
}
