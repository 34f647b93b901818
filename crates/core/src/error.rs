use std::result::Result as StdResult;

use thiserror::Error;

use crate::DedupKey;

/// Reasons a submission is rejected before it reaches the store.
///
/// Every variant is recoverable: the caller reports the message and lets the
/// user fix the form and submit again.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClassifyError {
    #[error("no category selected")]
    MissingCategory,

    #[error("passage text is empty")]
    MissingPassage,

    #[error("required field is missing: {0}")]
    MissingField(&'static str),

    #[error("invalid value for {field}: {value:?}")]
    InvalidField { field: &'static str, value: String },

    #[error("duplicate record: {0}")]
    DuplicateRecord(DedupKey),
}

impl ClassifyError {
    /// Whether this rejection is a duplicate-key collision rather than bad input.
    #[must_use]
    pub const fn is_duplicate(&self) -> bool {
        matches!(self, Self::DuplicateRecord(_))
    }

    pub(crate) fn invalid(field: &'static str, value: impl Into<String>) -> Self {
        Self::InvalidField { field, value: value.into() }
    }
}

pub type Result<T> = StdResult<T, ClassifyError>;
