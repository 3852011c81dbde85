//! Visitor-counter demo service library.
//!
//! Exposes the router so integration tests can drive it without binding
//! a socket; the binary in `main.rs` is a thin wrapper around [`app`].

pub mod config;
pub mod routes;
pub mod store;

use axum::{routing::get, Router};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::routes::{health, reset, visit, AppState};

/// Build the service router.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/", get(visit))
        .route("/health", get(health))
        .route("/reset", get(reset))
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
