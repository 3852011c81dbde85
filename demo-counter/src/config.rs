//! Configuration for the visitor-counter service.
//!
//! All configuration is read from environment variables.

use std::env;
use std::path::PathBuf;

/// Default location of the counter file (a mounted volume in container runs)
pub const DEFAULT_COUNTER_FILE: &str = "/data/counter.txt";

/// Service configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server host
    pub host: String,

    /// HTTP server port
    pub port: u16,

    /// Counter file path
    pub counter_file: PathBuf,

    /// Instance name shown on the page, display only
    pub instance: String,

    /// Log level
    pub log_level: String,

    /// Enable JSON logging
    pub log_json: bool,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
            counter_file: env::var("COUNTER_FILE")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(DEFAULT_COUNTER_FILE)),
            instance: env::var("HOSTNAME").unwrap_or_else(|_| "unknown".to_string()),
            log_level: env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
            log_json: env::var("LOG_JSON")
                .map(|v| v == "true" || v == "1")
                .unwrap_or(false),
        }
    }

    /// Get the full server address
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
