//! Classification enums for archived passages.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ClassifyError;

/// Top-level classification of an archived passage.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    /// Nationwide mock exam (grade / year / month / item).
    MockExam,
    /// Supplementary textbook (book / unit / item).
    Supplement,
    /// Anything else, identified only by its source.
    External,
}

impl Category {
    pub const ALL: &'static [Self] = &[Self::MockExam, Self::Supplement, Self::External];

    /// Cell value written to the store.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match *self {
            Self::MockExam => "MockExam",
            Self::Supplement => "Supplement",
            Self::External => "External",
        }
    }

    /// Label shown by the entry form.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match *self {
            Self::MockExam => "모의고사",
            Self::Supplement => "부교재",
            Self::External => "외부지문",
        }
    }

    /// Parse a store cell or form value. Accepts the stored name, its kebab-case
    /// form and the Korean form label.
    #[must_use]
    pub fn from_cell(cell: &str) -> Option<Self> {
        let cell = cell.trim();
        if let Some(found) = Self::ALL.iter().find(|c| c.label() == cell) {
            return Some(*found);
        }
        match cell.to_ascii_lowercase().replace(['-', '_', ' '], "").as_str() {
            "mockexam" => Some(Self::MockExam),
            "supplement" => Some(Self::Supplement),
            "external" => Some(Self::External),
            _ => None,
        }
    }
}

impl FromStr for Category {
    type Err = ClassifyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_cell(s).ok_or_else(|| ClassifyError::invalid("category", s))
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// High-school grade a mock exam was written for.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Grade {
    Grade1,
    Grade2,
    Grade3,
}

impl Grade {
    pub const ALL: &'static [Self] = &[Self::Grade1, Self::Grade2, Self::Grade3];

    /// Label written to `detail1` and used in the display title.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match *self {
            Self::Grade1 => "고1",
            Self::Grade2 => "고2",
            Self::Grade3 => "고3",
        }
    }
}

impl FromStr for Grade {
    type Err = ClassifyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Some(found) = Self::ALL.iter().find(|g| g.label() == trimmed) {
            return Ok(*found);
        }
        match trimmed.to_ascii_lowercase().replace(['-', '_', ' '], "").as_str() {
            "grade1" | "1" => Ok(Self::Grade1),
            "grade2" | "2" => Ok(Self::Grade2),
            "grade3" | "3" => Ok(Self::Grade3),
            _ => Err(ClassifyError::invalid("grade", s)),
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
