//! Archived passage rows.

mod category;
mod vocab;

pub use category::*;
pub use vocab::*;

use serde::{Deserialize, Serialize};

/// Column labels of the archive sheet, in sheet order.
pub const RECORD_COLUMNS: [&str; 8] = [
    "registered_at",
    "category",
    "detail1",
    "detail2",
    "detail3",
    "item_number",
    "display_title",
    "passage_text",
];

/// One archived passage with its classification metadata.
///
/// Which detail slots carry meaning depends on `category`:
///
/// | category   | detail1       | detail2 | detail3 |
/// |------------|---------------|---------|---------|
/// | MockExam   | grade         | year    | month   |
/// | Supplement | textbook name | unit    | ""      |
/// | External   | source        | ""      | ""      |
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Record {
    pub registered_at: String,
    pub category: Category,
    pub detail1: String,
    pub detail2: String,
    pub detail3: String,
    pub item_number: String,
    pub display_title: String,
    pub passage_text: String,
}

impl Record {
    /// Build a record from untyped sheet cells keyed by column label.
    ///
    /// Missing cells read as empty strings. Returns `None` when the category cell
    /// is not a recognised category; such rows take no part in classification.
    pub fn from_cells<'a, F>(mut cell: F) -> Option<Self>
    where
        F: FnMut(&str) -> Option<&'a str>,
    {
        let mut text = |label: &str| cell(label).map(str::trim).unwrap_or_default().to_owned();
        let category = Category::from_cell(&text("category"))?;
        Some(Self {
            registered_at: text("registered_at"),
            category,
            detail1: text("detail1"),
            detail2: text("detail2"),
            detail3: text("detail3"),
            item_number: text("item_number"),
            display_title: text("display_title"),
            passage_text: text("passage_text"),
        })
    }

    /// Cell values in [`RECORD_COLUMNS`] order.
    #[must_use]
    pub fn cells(&self) -> [&str; 8] {
        [
            &self.registered_at,
            self.category.as_str(),
            &self.detail1,
            &self.detail2,
            &self.detail3,
            &self.item_number,
            &self.display_title,
            &self.passage_text,
        ]
    }
}
