//! # API Endpoint Handlers
//!
//! This module implements the actual HTTP endpoint handlers.

use super::{
    AppState,
    types::{HealthResponse, SnapshotResponse, SubmitResponse},
};
use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use campus_core::{Catalog, IncidentDraft};

// =============================================================================
// HEALTH HANDLER
// =============================================================================

/// Health check endpoint.
pub async fn health_handler() -> impl IntoResponse {
    Json(HealthResponse::default())
}

// =============================================================================
// CATALOG HANDLER
// =============================================================================

/// Form options and stage labels.
pub async fn catalog_handler() -> impl IntoResponse {
    Json(Catalog::builtin())
}

// =============================================================================
// SUBMIT HANDLER
// =============================================================================

/// Submit an incident draft and restart the pipeline.
pub async fn submit_handler(
    State(state): State<AppState>,
    Json(draft): Json<IncidentDraft>,
) -> impl IntoResponse {
    let mut console = state.console.write().await;
    match console.submit(draft).await {
        Ok(accepted) => (
            StatusCode::OK,
            Json(SubmitResponse::accepted(accepted.run, accepted.snapshot)),
        ),
        Err(e) => (
            StatusCode::BAD_REQUEST,
            Json(SubmitResponse::rejected(e.to_string())),
        ),
    }
}

// =============================================================================
// PROGRESS HANDLER
// =============================================================================

/// Current pipeline progress.
pub async fn progress_handler(State(state): State<AppState>) -> impl IntoResponse {
    let console = state.console.read().await;
    (StatusCode::OK, Json(console.progress().await))
}

// =============================================================================
// SNAPSHOT HANDLER
// =============================================================================

/// Snapshot panel plus explanation and contacts once something was submitted.
pub async fn snapshot_handler(State(state): State<AppState>) -> impl IntoResponse {
    let console = state.console.read().await;

    let response = SnapshotResponse {
        campus: console.campus().to_string(),
        snapshot: console.snapshot(),
        explanation: console.explanation().map(str::to_string),
        emergency_contacts: console.emergency_contacts().cloned(),
    };

    (StatusCode::OK, Json(response))
}
