//! Async [`RecordStore`] for [`Storage`] via `spawn_blocking`.

use async_trait::async_trait;
use passage_archive_core::Record;

use super::Storage;
use crate::error::StorageError;
use crate::traits::RecordStore;

/// Helper: run a blocking closure on the tokio blocking pool.
async fn blocking<F, T>(f: F) -> Result<T, StorageError>
where
    F: FnOnce() -> Result<T, StorageError> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(f).await?
}

#[async_trait]
impl RecordStore for Storage {
    async fn load_records(&self) -> Result<Vec<Record>, StorageError> {
        let s = self.clone();
        blocking(move || s.load_records()).await
    }

    async fn append_record(&self, record: &Record) -> Result<(), StorageError> {
        let s = self.clone();
        let record = record.clone();
        blocking(move || s.append_record(&record)).await
    }

    async fn count_records(&self) -> Result<usize, StorageError> {
        let s = self.clone();
        blocking(move || s.count_records()).await
    }
}
