//! Flat form payload as the entry UI sends it.

use serde::{Deserialize, Deserializer, Serialize};

use super::{
    ExternalFields, MockExamFields, Submission, SubmissionFields, SupplementFields,
    TextbookChoice, UnitChoice,
};
use crate::{clean_passage_text, Category};

/// Raw values of every widget on the entry form.
///
/// Only the widgets belonging to `category` are read; the rest are ignored.
/// `new_textbook` and `add_unit` switch the supplement pickers from "choose a
/// stored value" to "type a new one". `continuous` keeps the category selected
/// after a successful save and has no effect on the stored record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormInput {
    #[serde(deserialize_with = "category_or_blank")]
    pub category: Option<Category>,
    pub grade: String,
    pub year: String,
    pub month: String,
    pub item_number: String,
    pub textbook: String,
    pub new_textbook: bool,
    pub unit: String,
    pub add_unit: bool,
    pub source: String,
    pub passage_text: String,
    pub clean_text: bool,
    pub continuous: bool,
}

impl FormInput {
    /// Narrow the form to the fields of the selected category.
    #[must_use]
    pub fn to_submission(&self) -> Submission {
        let fields = self.category.map(|category| match category {
            Category::MockExam => SubmissionFields::MockExam(MockExamFields {
                grade: self.grade.clone(),
                year: self.year.clone(),
                month: self.month.clone(),
                item_number: self.item_number.clone(),
            }),
            Category::Supplement => SubmissionFields::Supplement(SupplementFields {
                textbook: if self.new_textbook {
                    TextbookChoice::New(self.textbook.clone())
                } else {
                    TextbookChoice::Existing(self.textbook.clone())
                },
                unit: if self.add_unit {
                    UnitChoice::New(self.unit.clone())
                } else {
                    UnitChoice::Existing(self.unit.clone())
                },
                item_number: self.item_number.clone(),
            }),
            Category::External => {
                SubmissionFields::External(ExternalFields { source: self.source.clone() })
            },
        });
        let passage_text = if self.clean_text {
            clean_passage_text(&self.passage_text)
        } else {
            self.passage_text.clone()
        };
        Submission { fields, passage_text }
    }

    /// Category the form keeps after a successful save.
    #[must_use]
    pub const fn retained_category(&self) -> Option<Category> {
        if self.continuous { self.category } else { None }
    }
}

/// Read the category widget the way a sheet cell is read: blank means "not
/// selected", and stored names or Korean labels are accepted.
fn category_or_blank<'de, D>(deserializer: D) -> Result<Option<Category>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(cell) => Category::from_cell(cell)
            .map(Some)
            .ok_or_else(|| serde::de::Error::custom(format!("invalid category: {cell:?}"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_category_yields_no_fields() {
        let form = FormInput { passage_text: "Text".to_owned(), ..FormInput::default() };
        let submission = form.to_submission();
        assert!(submission.fields.is_none());
        assert_eq!(submission.passage_text, "Text");
    }

    #[test]
    fn supplement_flags_pick_choice_variants() {
        let form = FormInput {
            category: Some(Category::Supplement),
            textbook: "BookA".to_owned(),
            new_textbook: true,
            unit: "4".to_owned(),
            item_number: "2".to_owned(),
            source: "ignored".to_owned(),
            ..FormInput::default()
        };
        let Some(SubmissionFields::Supplement(fields)) = form.to_submission().fields else {
            panic!("expected supplement fields");
        };
        assert_eq!(fields.textbook, TextbookChoice::New("BookA".to_owned()));
        assert_eq!(fields.unit, UnitChoice::Existing("4".to_owned()));
    }

    #[test]
    fn clean_text_is_opt_in() {
        let mut form = FormInput {
            category: Some(Category::External),
            passage_text: "wrapped\nline. Next".to_owned(),
            ..FormInput::default()
        };
        assert_eq!(form.to_submission().passage_text, "wrapped\nline. Next");
        form.clean_text = true;
        assert_eq!(form.to_submission().passage_text, "wrapped line.\n\nNext");
    }

    #[test]
    fn continuous_keeps_category() {
        let mut form = FormInput { category: Some(Category::MockExam), ..FormInput::default() };
        assert_eq!(form.retained_category(), None);
        form.continuous = true;
        assert_eq!(form.retained_category(), Some(Category::MockExam));
    }

    #[test]
    fn deserializes_partial_json() {
        let form: FormInput = serde_json::from_str(
            r#"{"category":"supplement","textbook":"BookA","unit":"3","item_number":"5","passage_text":"x"}"#,
        )
        .expect("valid form json");
        assert_eq!(form.category, Some(Category::Supplement));
        assert!(!form.new_textbook);
        assert_eq!(form.grade, "");
    }

    #[test]
    fn blank_category_reads_as_unselected() {
        for body in [r#"{"category":""}"#, r#"{"category":"  "}"#, r#"{"category":null}"#, "{}"] {
            let form: FormInput = serde_json::from_str(body).expect("valid form json");
            assert_eq!(form.category, None, "{body}");
        }
    }

    #[test]
    fn category_accepts_stored_names_and_labels() {
        for (cell, expected) in [
            ("Supplement", Category::Supplement),
            ("부교재", Category::Supplement),
            ("MockExam", Category::MockExam),
            ("external", Category::External),
        ] {
            let body = format!(r#"{{"category":"{cell}"}}"#);
            let form: FormInput = serde_json::from_str(&body).expect("valid form json");
            assert_eq!(form.category, Some(expected), "{cell}");
        }
    }

    #[test]
    fn unknown_category_is_rejected() {
        let err = serde_json::from_str::<FormInput>(r#"{"category":"worksheet"}"#).unwrap_err();
        assert!(err.to_string().contains("invalid category"), "{err}");
    }
}
