//! Request-scoped input for a single archive submission.

mod form;

pub use form::*;

use crate::Category;

/// Everything the classifier needs from one form submission.
///
/// `fields` is `None` until the user picks a category.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Submission {
    pub fields: Option<SubmissionFields>,
    pub passage_text: String,
}

impl Submission {
    #[must_use]
    pub fn new(fields: Option<SubmissionFields>, passage_text: impl Into<String>) -> Self {
        Self { fields, passage_text: passage_text.into() }
    }

    #[must_use]
    pub fn category(&self) -> Option<Category> {
        self.fields.as_ref().map(SubmissionFields::category)
    }
}

/// Category-specific raw values. Coercion happens in the classifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionFields {
    MockExam(MockExamFields),
    Supplement(SupplementFields),
    External(ExternalFields),
}

impl SubmissionFields {
    #[must_use]
    pub const fn category(&self) -> Category {
        match *self {
            Self::MockExam(_) => Category::MockExam,
            Self::Supplement(_) => Category::Supplement,
            Self::External(_) => Category::External,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MockExamFields {
    pub grade: String,
    pub year: String,
    pub month: String,
    pub item_number: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SupplementFields {
    pub textbook: TextbookChoice,
    pub unit: UnitChoice,
    pub item_number: String,
}

/// Textbook picked from the stored list, or typed in as a new book.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextbookChoice {
    Existing(String),
    New(String),
}

impl TextbookChoice {
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Existing(name) | Self::New(name) => name.trim(),
        }
    }
}

/// Unit picked from the book's stored units, or added as a new number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UnitChoice {
    Existing(String),
    New(String),
}

impl UnitChoice {
    #[must_use]
    pub fn raw(&self) -> &str {
        match self {
            Self::Existing(unit) | Self::New(unit) => unit.trim(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExternalFields {
    pub source: String,
}
