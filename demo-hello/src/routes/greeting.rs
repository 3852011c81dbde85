//! Root greeting endpoint.

use axum::{response::IntoResponse, Json};
use chrono::Utc;

use demo_common::Greeting;

/// Fixed greeting message returned on every request
const MESSAGE: &str = "Hello, World!";

/// GET / - Greeting with host metadata
///
/// Every field is computed fresh per request; there is no cached state.
pub async fn greet() -> impl IntoResponse {
    Json(Greeting {
        message: MESSAGE.to_string(),
        hostname: lookup_hostname(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: Utc::now(),
    })
}

/// OS network hostname, "unknown" if the lookup fails
fn lookup_hostname() -> String {
    hostname::get()
        .ok()
        .and_then(|h| h.into_string().ok())
        .unwrap_or_else(|| "unknown".to_string())
}
