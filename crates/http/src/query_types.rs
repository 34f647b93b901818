//! Request/query types (Deserialize)

use passage_archive_core::MAX_LIST_LIMIT;
use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
pub struct RecordsQuery {
    /// Stored name, kebab-case name or form label of a category.
    pub category: Option<String>,
    pub limit: Option<usize>,
}

impl RecordsQuery {
    /// Requested limit, or `default`, capped to prevent unbounded listings.
    pub fn capped_limit(&self, default: usize) -> usize {
        self.limit.unwrap_or(default).min(MAX_LIST_LIMIT)
    }
}

#[derive(Debug, Deserialize)]
pub struct UnitsQuery {
    #[serde(default)]
    pub textbook: String,
}
