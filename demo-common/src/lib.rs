//! Shared response types for the demo services.
//!
//! This crate contains the wire payloads shared between:
//! - demo-hello (the stateless hello-world service)
//! - demo-counter (the persistent visitor counter)
//!
//! Any changes to response format should be made here.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Payload returned by the hello-world root route.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Greeting {
    /// Fixed greeting message
    pub message: String,

    /// Network hostname of the serving process
    pub hostname: String,

    /// Service version
    pub version: String,

    /// When the response was produced (RFC 3339)
    pub timestamp: DateTime<Utc>,
}

/// Health check payload for both services.
///
/// The counter service reports its current count; the hello-world service
/// has no state and omits the field entirely.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Health {
    /// Always "healthy" while the process is serving
    pub status: String,

    /// Current visit count, counter service only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<u64>,
}

impl Health {
    /// Health payload with no count (hello-world service)
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            count: None,
        }
    }

    /// Health payload carrying the current count (counter service)
    pub fn healthy_with_count(count: u64) -> Self {
        Self {
            status: "healthy".to_string(),
            count: Some(count),
        }
    }
}
