//! HTTP route handlers.

pub mod health;
pub mod visit;

pub use health::health;
pub use visit::{reset, visit, AppState};
