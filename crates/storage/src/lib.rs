//! Storage layer for passage-archive
//!
//! SQLite-backed archive sheet: one table, one row per record, append-only.

mod error;
mod migrations;
mod storage;
#[cfg(test)]
mod tests;
mod traits;

pub use error::StorageError;
pub use storage::Storage;
pub use traits::RecordStore;
