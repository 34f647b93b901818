//! Record classification and normalization.
//!
//! [`classify_and_build`] turns one [`Submission`] into the canonical 8-cell
//! [`Record`]. Checks run in a fixed order and the first failure wins:
//!
//! 1. a category is selected
//! 2. the passage is non-blank
//! 3. every field the category requires is present
//! 4. present values are well-formed
//! 5. supplement passages do not collide with a stored `(textbook, unit, item)`
//!
//! Mock exam and external passages are never checked for duplicates.

mod dedup;
mod options;
#[cfg(test)]
mod tests;

pub use dedup::*;
pub use options::*;

use crate::constants::{EXTERNAL_ITEM_NUMBER, UNSPECIFIED_EXTERNAL_TITLE, UNSPECIFIED_SUPPLEMENT_TITLE};
use crate::error::{ClassifyError, Result};
use crate::{
    normalize_exam_month, normalize_exam_year, normalize_mock_exam_item, normalize_number_cell,
    parse_positive, Category, Clock, ExternalFields, Grade, MockExamFields, Record, Submission,
    SubmissionFields, SupplementFields, TextbookChoice, UnitChoice,
};

/// Classified cells of a record, before the timestamp and passage are attached.
struct Classified {
    category: Category,
    detail1: String,
    detail2: String,
    detail3: String,
    item_number: String,
    display_title: String,
}

impl Classified {
    fn into_record(self, registered_at: String, passage_text: String) -> Record {
        Record {
            registered_at,
            category: self.category,
            detail1: self.detail1,
            detail2: self.detail2,
            detail3: self.detail3,
            item_number: self.item_number,
            display_title: self.display_title,
            passage_text,
        }
    }
}

/// Validate a submission against the stored records and build its row.
///
/// `existing` is only read: for supplement duplicate checks and to confirm that
/// "existing" textbook and unit picks really exist. The record is stamped with
/// `clock`; nothing is persisted here.
///
/// # Errors
/// Returns the first [`ClassifyError`] in check order.
pub fn classify_and_build(
    submission: &Submission,
    existing: &[Record],
    clock: &dyn Clock,
) -> Result<Record> {
    let fields = submission.fields.as_ref().ok_or(ClassifyError::MissingCategory)?;

    let passage = submission.passage_text.trim();
    if passage.is_empty() {
        return Err(ClassifyError::MissingPassage);
    }

    let classified = match fields {
        SubmissionFields::MockExam(f) => classify_mock_exam(f)?,
        SubmissionFields::Supplement(f) => classify_supplement(f, existing)?,
        SubmissionFields::External(f) => classify_external(f),
    };

    Ok(classified.into_record(clock.timestamp(), passage.to_owned()))
}

/// Display title for a supplement passage.
#[must_use]
pub fn supplement_title(textbook: &str) -> String {
    non_blank_or(textbook, UNSPECIFIED_SUPPLEMENT_TITLE)
}

/// Display title for an external passage.
#[must_use]
pub fn external_title(source: &str) -> String {
    non_blank_or(source, UNSPECIFIED_EXTERNAL_TITLE)
}

fn non_blank_or(value: &str, placeholder: &str) -> String {
    let value = value.trim();
    if value.is_empty() { placeholder.to_owned() } else { value.to_owned() }
}

fn require<'a>(field: &'static str, raw: &'a str) -> Result<&'a str> {
    let trimmed = raw.trim();
    if trimmed.is_empty() { Err(ClassifyError::MissingField(field)) } else { Ok(trimmed) }
}

fn classify_mock_exam(fields: &MockExamFields) -> Result<Classified> {
    let grade = require("grade", &fields.grade)?;
    let year = require("year", &fields.year)?;
    let month = require("month", &fields.month)?;
    let item = require("item_number", &fields.item_number)?;

    let grade: Grade = grade.parse()?;
    let year = normalize_exam_year(year)?;
    let month = normalize_exam_month(month)?;
    let item_number = normalize_mock_exam_item(item)?;

    let display_title = format!("{} {year} {month}", grade.label());
    Ok(Classified {
        category: Category::MockExam,
        detail1: grade.label().to_owned(),
        detail2: year,
        detail3: month,
        item_number,
        display_title,
    })
}

fn classify_supplement(fields: &SupplementFields, existing: &[Record]) -> Result<Classified> {
    let textbook = require("textbook", fields.textbook.name())?;
    let unit_raw = require("unit", fields.unit.raw())?;
    let item_raw = require("item_number", &fields.item_number)?;

    if matches!(fields.textbook, TextbookChoice::Existing(_))
        && !textbook_names(existing).iter().any(|name| name == textbook)
    {
        return Err(ClassifyError::invalid("textbook", textbook));
    }

    let unit = match fields.unit {
        UnitChoice::New(_) => parse_positive("unit", unit_raw)?.to_string(),
        UnitChoice::Existing(_) => {
            let unit = normalize_number_cell(unit_raw);
            if !units_for_textbook(existing, textbook).contains(&unit) {
                return Err(ClassifyError::invalid("unit", unit_raw));
            }
            unit
        },
    };
    let item_number = parse_positive("item_number", item_raw)?.to_string();

    let key = DedupKey::new(textbook, &unit, &item_number);
    if find_duplicate(existing, &key).is_some() {
        return Err(ClassifyError::DuplicateRecord(key));
    }

    Ok(Classified {
        category: Category::Supplement,
        detail1: textbook.to_owned(),
        detail2: unit,
        detail3: String::new(),
        item_number,
        display_title: supplement_title(textbook),
    })
}

fn classify_external(fields: &ExternalFields) -> Classified {
    let source = fields.source.trim();
    Classified {
        category: Category::External,
        detail1: source.to_owned(),
        detail2: String::new(),
        detail3: String::new(),
        item_number: EXTERNAL_ITEM_NUMBER.to_owned(),
        display_title: external_title(source),
    }
}
