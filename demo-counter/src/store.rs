//! Counter persistence.
//!
//! One non-negative integer, stored as decimal text in a single flat file.
//! Reads that fail for any reason fall back to zero; writes propagate their
//! errors to the caller.

use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

/// Errors from the counter file
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("counter file I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("counter file holds non-numeric content: {content:?}")]
    Malformed { content: String },
}

/// File-backed visit counter
#[derive(Debug, Clone)]
pub struct CounterStore {
    path: PathBuf,
}

impl CounterStore {
    /// Create a store for the given counter file
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Path of the counter file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Ensure the data directory exists and seed the file with "0" if absent.
    ///
    /// Never overwrites an existing file; the persisted count survives
    /// process restarts.
    pub async fn init(&self) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }

        if !self.path.exists() {
            tokio::fs::write(&self.path, "0").await?;
        }

        Ok(())
    }

    /// Current count, treating any read or parse failure as zero.
    pub async fn load(&self) -> u64 {
        match self.try_load().await {
            Ok(count) => count,
            Err(e) => {
                debug!("Counter read failed ({}), treating as 0", e);
                0
            }
        }
    }

    /// Current count, surfacing read and parse failures.
    async fn try_load(&self) -> Result<u64, StoreError> {
        let content = tokio::fs::read_to_string(&self.path).await?;
        let trimmed = content.trim();

        if trimmed.is_empty() {
            return Ok(0);
        }

        trimmed.parse().map_err(|_| StoreError::Malformed {
            content: trimmed.to_string(),
        })
    }

    /// Record one visit and return the new count.
    ///
    /// Unlocked read-modify-write: concurrent visits may read the same
    /// value and lose an increment.
    pub async fn record_visit(&self) -> Result<u64, StoreError> {
        let next = self.load().await + 1;
        self.persist(next).await?;
        Ok(next)
    }

    /// Overwrite the count with zero.
    pub async fn reset(&self) -> Result<(), StoreError> {
        self.persist(0).await
    }

    async fn persist(&self, count: u64) -> Result<(), StoreError> {
        tokio::fs::write(&self.path, count.to_string()).await?;
        Ok(())
    }
}
