use chrono::NaiveDate;

use crate::{
    classify_and_build, Category, ClassifyError, DedupKey, ExternalFields, FixedClock,
    MockExamFields, Record, Submission, SubmissionFields, SupplementFields, TextbookChoice,
    UnitChoice, UNSPECIFIED_EXTERNAL_TITLE,
};

fn clock() -> FixedClock {
    let at = NaiveDate::from_ymd_opt(2025, 6, 14)
        .and_then(|d| d.and_hms_opt(16, 30, 0))
        .expect("valid timestamp");
    FixedClock(at)
}

fn mock_exam(grade: &str, year: &str, month: &str, item: &str) -> SubmissionFields {
    SubmissionFields::MockExam(MockExamFields {
        grade: grade.to_owned(),
        year: year.to_owned(),
        month: month.to_owned(),
        item_number: item.to_owned(),
    })
}

fn supplement(textbook: TextbookChoice, unit: UnitChoice, item: &str) -> SubmissionFields {
    SubmissionFields::Supplement(SupplementFields { textbook, unit, item_number: item.to_owned() })
}

fn existing_book(name: &str) -> TextbookChoice {
    TextbookChoice::Existing(name.to_owned())
}

fn existing_unit(unit: &str) -> UnitChoice {
    UnitChoice::Existing(unit.to_owned())
}

fn external(source: &str) -> SubmissionFields {
    SubmissionFields::External(ExternalFields { source: source.to_owned() })
}

fn stored_supplement(book: &str, unit: &str, item: &str) -> Record {
    Record {
        registered_at: "2025-01-01 00:00:00".to_owned(),
        category: Category::Supplement,
        detail1: book.to_owned(),
        detail2: unit.to_owned(),
        detail3: String::new(),
        item_number: item.to_owned(),
        display_title: book.to_owned(),
        passage_text: "row...".to_owned(),
    }
}

fn build(fields: SubmissionFields, existing: &[Record]) -> Result<Record, ClassifyError> {
    classify_and_build(&Submission::new(Some(fields), "Hello world."), existing, &clock())
}

#[test]
fn mock_exam_scenario() {
    let mut existing = Vec::new();
    let first = build(mock_exam("Grade2", "25년", "06월", "21"), &existing).expect("valid mock exam");
    assert_eq!(first.display_title, "고2 25년 06월");
    assert_eq!(first.detail1, "고2");
    assert_eq!(first.detail2, "25년");
    assert_eq!(first.detail3, "06월");
    assert_eq!(first.item_number, "21");
    assert_eq!(first.registered_at, "2025-06-14 16:30:00");
    assert_eq!(first.passage_text, "Hello world.");

    // Identical mock exam rows are accepted again.
    existing.push(first.clone());
    let second = build(mock_exam("Grade2", "25년", "06월", "21"), &existing).expect("no dup check");
    assert_eq!(second, first);
}

#[test]
fn mock_exam_title_is_single_spaced_for_every_grade_and_month() {
    for grade in ["Grade1", "Grade2", "Grade3"] {
        for month in crate::MOCK_EXAM_MONTHS {
            let record = build(mock_exam(grade, "24", month, "43~45"), &[]).expect("valid");
            let expected = format!("{} {} {}", record.detail1, record.detail2, record.detail3);
            assert_eq!(record.display_title, expected);
            assert_eq!(record.display_title.split(' ').count(), 3);
        }
    }
}

#[test]
fn mock_exam_missing_and_invalid_fields() {
    assert_eq!(
        build(mock_exam("Grade1", " ", "06", "21"), &[]),
        Err(ClassifyError::MissingField("year"))
    );
    // Presence is checked for every field before any value is parsed.
    assert_eq!(
        build(mock_exam("Grade9", "25", "06", ""), &[]),
        Err(ClassifyError::MissingField("item_number"))
    );
    assert_eq!(
        build(mock_exam("Grade1", "25", "05", "21"), &[]),
        Err(ClassifyError::InvalidField { field: "month", value: "05".to_owned() })
    );
    assert_eq!(
        build(mock_exam("Grade1", "25", "06", "41"), &[]),
        Err(ClassifyError::InvalidField { field: "item_number", value: "41".to_owned() })
    );
}

#[test]
fn missing_category_wins_over_everything() {
    let submission = Submission::new(None, "   ");
    assert_eq!(classify_and_build(&submission, &[], &clock()), Err(ClassifyError::MissingCategory));
}

#[test]
fn blank_passage_is_rejected_for_every_category() {
    let complete = [
        mock_exam("Grade2", "25", "06", "21"),
        supplement(TextbookChoice::New("BookA".to_owned()), UnitChoice::New("1".to_owned()), "1"),
        external("Newspaper"),
    ];
    for fields in complete {
        for blank in ["", "   ", "\n\t "] {
            let submission = Submission::new(Some(fields.clone()), blank);
            assert_eq!(
                classify_and_build(&submission, &[], &clock()),
                Err(ClassifyError::MissingPassage),
                "category {:?}",
                fields.category()
            );
        }
    }
}

#[test]
fn passage_check_precedes_field_checks() {
    let submission = Submission::new(Some(mock_exam("", "", "", "")), " ");
    assert_eq!(classify_and_build(&submission, &[], &clock()), Err(ClassifyError::MissingPassage));
}

#[test]
fn supplement_scenario() {
    let existing = vec![stored_supplement("BookA", "3", "5")];

    let dup = build(supplement(existing_book("BookA"), existing_unit("3"), "5"), &existing);
    assert_eq!(
        dup,
        Err(ClassifyError::DuplicateRecord(DedupKey {
            textbook: "BookA".to_owned(),
            unit: "3".to_owned(),
            item_number: "5".to_owned(),
        }))
    );

    let ok = build(supplement(existing_book("BookA"), existing_unit("3"), "6"), &existing)
        .expect("different item number");
    assert_eq!(ok.category, Category::Supplement);
    assert_eq!(ok.detail1, "BookA");
    assert_eq!(ok.detail2, "3");
    assert_eq!(ok.detail3, "");
    assert_eq!(ok.item_number, "6");
    assert_eq!(ok.display_title, "BookA");
}

#[test]
fn changing_any_key_part_avoids_the_duplicate() {
    let existing = vec![stored_supplement("BookA", "3", "5"), stored_supplement("BookB", "1", "1")];

    let other_book = build(supplement(existing_book("BookB"), UnitChoice::New("3".to_owned()), "5"), &existing);
    assert!(other_book.is_ok(), "{other_book:?}");

    let new_book =
        build(supplement(TextbookChoice::New("BookC".to_owned()), UnitChoice::New("3".to_owned()), "5"), &existing);
    assert!(new_book.is_ok(), "{new_book:?}");

    let other_unit = build(supplement(existing_book("BookA"), UnitChoice::New("4".to_owned()), "5"), &existing);
    assert!(other_unit.is_ok(), "{other_unit:?}");

    let other_item = build(supplement(existing_book("BookA"), existing_unit("3"), "7"), &existing);
    assert!(other_item.is_ok(), "{other_item:?}");
}

#[test]
fn zero_padded_item_numbers_collide() {
    let first = build(
        supplement(TextbookChoice::New("BookA".to_owned()), UnitChoice::New("2".to_owned()), "07"),
        &[],
    )
    .expect("first submission");
    assert_eq!(first.item_number, "7");

    let second = build(supplement(existing_book("BookA"), existing_unit("2"), "7"), &[first]);
    assert!(matches!(second, Err(ClassifyError::DuplicateRecord(_))), "{second:?}");
}

#[test]
fn new_textbook_equal_to_stored_one_still_dedups() {
    let existing = vec![stored_supplement("BookA", "3", "5")];
    let result =
        build(supplement(TextbookChoice::New("BookA".to_owned()), UnitChoice::New("03".to_owned()), "5"), &existing);
    assert!(matches!(result, Err(ClassifyError::DuplicateRecord(_))), "{result:?}");
}

#[test]
fn supplement_field_validation() {
    let existing = vec![stored_supplement("BookA", "3", "5")];

    assert_eq!(
        build(supplement(existing_book(" "), existing_unit("3"), "1"), &existing),
        Err(ClassifyError::MissingField("textbook"))
    );
    assert_eq!(
        build(supplement(existing_book("BookA"), existing_unit(""), "1"), &existing),
        Err(ClassifyError::MissingField("unit"))
    );
    assert_eq!(
        build(supplement(existing_book("BookA"), existing_unit("3"), ""), &existing),
        Err(ClassifyError::MissingField("item_number"))
    );
    assert_eq!(
        build(supplement(existing_book("BookZ"), existing_unit("3"), "1"), &existing),
        Err(ClassifyError::InvalidField { field: "textbook", value: "BookZ".to_owned() })
    );
    assert_eq!(
        build(supplement(existing_book("BookA"), existing_unit("9"), "1"), &existing),
        Err(ClassifyError::InvalidField { field: "unit", value: "9".to_owned() })
    );
    assert_eq!(
        build(supplement(existing_book("BookA"), UnitChoice::New("0".to_owned()), "1"), &existing),
        Err(ClassifyError::InvalidField { field: "unit", value: "0".to_owned() })
    );
    assert_eq!(
        build(supplement(existing_book("BookA"), existing_unit("3"), "five"), &existing),
        Err(ClassifyError::InvalidField { field: "item_number", value: "five".to_owned() })
    );
}

#[test]
fn external_always_numbers_one() {
    for source in ["EBS 수능특강", "  The Economist  ", ""] {
        let record = build(external(source), &[]).expect("external is always valid");
        assert_eq!(record.category, Category::External);
        assert_eq!(record.item_number, "1");
        assert_eq!(record.detail2, "");
        assert_eq!(record.detail3, "");
        assert_eq!(record.detail1, source.trim());
    }
}

#[test]
fn external_blank_source_gets_placeholder_title() {
    let record = build(external("   "), &[]).expect("valid");
    assert_eq!(record.display_title, UNSPECIFIED_EXTERNAL_TITLE);
    let named = build(external("Reader's Digest"), &[]).expect("valid");
    assert_eq!(named.display_title, "Reader's Digest");
}

#[test]
fn external_and_mock_exam_ignore_supplement_rows() {
    let existing = vec![stored_supplement("BookA", "3", "5")];
    assert!(build(external("BookA"), &existing).is_ok());
    assert!(build(mock_exam("Grade3", "23", "11", "40"), &existing).is_ok());
}

#[test]
fn passage_is_stored_trimmed() {
    let submission = Submission::new(Some(external("src")), "\n  Body text.  \n");
    let record = classify_and_build(&submission, &[], &clock()).expect("valid");
    assert_eq!(record.passage_text, "Body text.");
}
