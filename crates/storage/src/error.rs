//! Typed error enum for the storage layer.
//!
//! Callers match on the failure mode (pool exhaustion, SQL failure, blocking
//! task failure) instead of downcasting opaque boxes.

use thiserror::Error;

/// Storage-layer error covering every expected failure mode.
#[derive(Debug, Error)]
pub enum StorageError {
    /// SQL statement or connection failure.
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// No pooled connection could be acquired.
    #[error("connection pool error: {0}")]
    Pool(#[from] r2d2::Error),

    /// The blocking task running the query panicked or was cancelled.
    #[error("blocking task failed: {0}")]
    Join(String),
}

impl StorageError {
    /// Whether the archive table is absent (sheet never initialized or dropped).
    pub fn is_missing_table(&self) -> bool {
        matches!(
            self,
            Self::Database(rusqlite::Error::SqliteFailure(_, Some(msg))) if msg.contains("no such table")
        )
    }
}

impl From<tokio::task::JoinError> for StorageError {
    fn from(err: tokio::task::JoinError) -> Self {
        Self::Join(err.to_string())
    }
}
