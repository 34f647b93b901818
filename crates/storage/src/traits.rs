//! Store abstraction consumed by the service layer.

use async_trait::async_trait;
use passage_archive_core::Record;

use crate::error::StorageError;

/// Row-oriented archive: read everything, append one row.
///
/// Implementations never update or delete rows, and never coordinate concurrent
/// writers; one `append_record` is one atomic write.
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// All well-formed records in sheet order. Malformed rows are skipped.
    async fn load_records(&self) -> Result<Vec<Record>, StorageError>;

    /// Append exactly one row. No read-after-write verification.
    async fn append_record(&self, record: &Record) -> Result<(), StorageError>;

    /// Number of rows in the sheet, malformed ones included.
    async fn count_records(&self) -> Result<usize, StorageError>;

    /// Connection test: reach the sheet and report how many rows it holds.
    async fn check(&self) -> Result<usize, StorageError> {
        let rows = self.count_records().await?;
        tracing::info!(rows, "Archive store reachable");
        Ok(rows)
    }
}
