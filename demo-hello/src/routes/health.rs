//! Health check endpoint.

use axum::{response::IntoResponse, Json};

use demo_common::Health;

/// GET /health - Basic health check, no dependency checks performed
pub async fn health() -> impl IntoResponse {
    Json(Health::healthy())
}
