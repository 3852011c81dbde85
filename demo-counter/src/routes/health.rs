//! Health check endpoint.

use axum::{extract::State, response::IntoResponse, Json};

use demo_common::Health;

use crate::routes::AppState;

/// GET /health - Health check reporting the current count without
/// incrementing it
pub async fn health(State(state): State<AppState>) -> impl IntoResponse {
    Json(Health::healthy_with_count(state.store.load().await))
}
