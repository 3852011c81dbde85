//! Hello-world demo service library.
//!
//! Exposes the router so integration tests can drive it without binding
//! a socket; the binary in `main.rs` is a thin wrapper around [`app`].

pub mod config;
pub mod routes;

use axum::{routing::get, Router};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::routes::{greet, health};

/// Build the service router.
pub fn app() -> Router {
    Router::new()
        .route("/", get(greet))
        .route("/health", get(health))
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}
