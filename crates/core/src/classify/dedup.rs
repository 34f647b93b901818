//! Duplicate detection for supplement passages.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{normalize_number_cell, Category, Record};

/// `(textbook, unit, item number)` identifying one supplement passage.
///
/// Unit and item number are integer-normalized so `"07"` and `"7"` collide.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DedupKey {
    pub textbook: String,
    pub unit: String,
    pub item_number: String,
}

impl DedupKey {
    #[must_use]
    pub fn new(textbook: &str, unit: &str, item_number: &str) -> Self {
        Self {
            textbook: textbook.trim().to_owned(),
            unit: normalize_number_cell(unit),
            item_number: normalize_number_cell(item_number),
        }
    }

    /// Key of a stored record, or `None` for non-supplement rows.
    #[must_use]
    pub fn of_record(record: &Record) -> Option<Self> {
        (record.category == Category::Supplement)
            .then(|| Self::new(&record.detail1, &record.detail2, &record.item_number))
    }
}

impl fmt::Display for DedupKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.textbook, self.unit, self.item_number)
    }
}

/// First stored supplement record carrying `key`.
///
/// Linear scan; archives hold classroom-scale row counts.
#[must_use]
pub fn find_duplicate<'a>(existing: &'a [Record], key: &DedupKey) -> Option<&'a Record> {
    existing.iter().find(|record| DedupKey::of_record(record).as_ref() == Some(key))
}
