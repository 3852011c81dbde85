//! Visit and reset endpoints.

use std::path::Path;

use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse},
    Json,
};
use serde::Serialize;
use tracing::{debug, error, info};

use crate::store::CounterStore;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub store: CounterStore,
    pub instance: String,
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// GET / - Record a visit and render the count
///
/// The increment is a plain read-then-write against the counter file;
/// concurrent visits may collapse into one.
pub async fn visit(State(state): State<AppState>) -> impl IntoResponse {
    match state.store.record_visit().await {
        Ok(count) => {
            debug!("Visit {} recorded", count);
            Html(render_page(count, &state.instance, state.store.path())).into_response()
        }
        Err(e) => {
            error!("Failed to persist visit: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Failed to persist visit".to_string(),
                }),
            )
                .into_response()
        }
    }
}

/// GET /reset - Overwrite the count with zero
pub async fn reset(State(state): State<AppState>) -> impl IntoResponse {
    match state.store.reset().await {
        Ok(()) => {
            info!("Counter reset to 0");
            "Counter reset to 0".into_response()
        }
        Err(e) => {
            error!("Failed to reset counter: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Failed to reset counter".to_string(),
                }),
            )
                .into_response()
        }
    }
}

fn render_page(count: u64, instance: &str, path: &Path) -> String {
    format!(
        r#"<html>
  <head><title>Visitor Counter - Persistence Demo</title></head>
  <body style="font-family: Arial; text-align: center; padding: 50px;">
    <h1>Persistent Volume Demo</h1>
    <h2>Total Visits: {count}</h2>
    <p>Pod: {instance}</p>
    <p>Data stored at: {path}</p>
    <p style="color: #666; font-size: 14px;">
      Try deleting the pod - the counter will persist!
    </p>
  </body>
</html>
"#,
        count = count,
        instance = instance,
        path = path.display(),
    )
}
