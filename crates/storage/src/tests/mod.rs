//! Test utilities and module declarations for storage tests.

use crate::Storage;
use passage_archive_core::{Category, Record};
use tempfile::TempDir;

#[expect(clippy::unwrap_used, reason = "test code")]
pub fn create_test_storage() -> (Storage, TempDir) {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir.path().join("test.db");
    let storage = Storage::new(&db_path).unwrap();
    (storage, temp_dir)
}

pub fn create_test_record(category: Category, detail1: &str, detail2: &str, item: &str) -> Record {
    Record {
        registered_at: "2025-06-14 16:30:00".to_owned(),
        category,
        detail1: detail1.to_owned(),
        detail2: detail2.to_owned(),
        detail3: String::new(),
        item_number: item.to_owned(),
        display_title: detail1.to_owned(),
        passage_text: format!("Passage for {detail1} {detail2} {item}."),
    }
}

/// Run raw SQL against the archive, bypassing the typed API.
#[expect(clippy::unwrap_used, reason = "test code")]
pub fn exec_raw(storage: &Storage, sql: &str) {
    storage.pool.get().unwrap().execute_batch(sql).unwrap();
}
