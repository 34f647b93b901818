//! Typed error enum for the service layer.

use passage_archive_core::ClassifyError;
use passage_archive_storage::StorageError;
use thiserror::Error;

/// Service-layer error separating rejected input from store failures.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// The submission was rejected by the classifier; nothing was written.
    #[error(transparent)]
    Validation(#[from] ClassifyError),

    /// The append failed. The store's message is passed through unchanged.
    #[error("{0}")]
    Write(#[source] StorageError),

    /// An explicit read (listing, connection check) failed.
    #[error("{0}")]
    Read(#[source] StorageError),
}

impl ServiceError {
    /// Whether the submission collides with a stored supplement passage.
    pub fn is_duplicate(&self) -> bool {
        matches!(self, Self::Validation(e) if e.is_duplicate())
    }
}
