//! Coercion of raw form values into the canonical cell formats.
//!
//! Blank input is reported as missing by the caller before these run; every
//! function here receives a non-blank string.

use crate::constants::{
    MOCK_EXAM_GROUPED_ITEMS, MOCK_EXAM_MONTHS, MOCK_EXAM_SINGLE_ITEMS, MONTH_SUFFIX, YEAR_SUFFIX,
};
use crate::error::{ClassifyError, Result};

/// `25`, `25년` or `2025` → `25년`.
pub fn normalize_exam_year(raw: &str) -> Result<String> {
    let digits = raw.trim().trim_end_matches(YEAR_SUFFIX).trim();
    let two = match digits.len() {
        2 => digits,
        4 if digits.starts_with("20") => digits.get(2..).unwrap_or_default(),
        _ => return Err(ClassifyError::invalid("year", raw)),
    };
    if !two.chars().all(|c| c.is_ascii_digit()) {
        return Err(ClassifyError::invalid("year", raw));
    }
    Ok(format!("{two}{YEAR_SUFFIX}"))
}

/// `6`, `06` or `06월` → `06월`, restricted to exam months.
pub fn normalize_exam_month(raw: &str) -> Result<String> {
    let digits = raw.trim().trim_end_matches(MONTH_SUFFIX).trim();
    let month: u32 = digits.parse().map_err(|_| ClassifyError::invalid("month", raw))?;
    let padded = format!("{month:02}");
    if !MOCK_EXAM_MONTHS.contains(&padded.as_str()) {
        return Err(ClassifyError::invalid("month", raw));
    }
    Ok(format!("{padded}{MONTH_SUFFIX}"))
}

/// Mock exam item: `18`..=`40`, `41~42` or `43~45`.
pub fn normalize_mock_exam_item(raw: &str) -> Result<String> {
    let trimmed = raw.trim();
    if let Some(grouped) = MOCK_EXAM_GROUPED_ITEMS.iter().find(|g| **g == trimmed) {
        return Ok((*grouped).to_owned());
    }
    let (first, last) = MOCK_EXAM_SINGLE_ITEMS;
    match trimmed.parse::<u32>() {
        Ok(n) if (first..=last).contains(&n) => Ok(n.to_string()),
        _ => Err(ClassifyError::invalid("item_number", raw)),
    }
}

/// Parse a strictly positive integer (`"07"` → 7).
pub fn parse_positive(field: &'static str, raw: &str) -> Result<u32> {
    match raw.trim().parse::<u32>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(ClassifyError::invalid(field, raw)),
    }
}

/// Integer-normalize a stored number cell (`"07"` → `"7"`, `"5.0"` → `"5"`),
/// keeping non-numeric cells as trimmed text.
#[must_use]
pub fn normalize_number_cell(cell: &str) -> String {
    let trimmed = cell.trim();
    // Spreadsheet exports write whole numbers as `5.0`.
    let integral = match trimmed.split_once('.') {
        Some((whole, zeros)) if !zeros.is_empty() && zeros.chars().all(|c| c == '0') => whole,
        _ => trimmed,
    };
    integral.parse::<u64>().map_or_else(|_| trimmed.to_owned(), |n| n.to_string())
}

/// Every item number the mock exam form offers, in form order.
#[must_use]
pub fn mock_exam_item_numbers() -> Vec<String> {
    let (first, last) = MOCK_EXAM_SINGLE_ITEMS;
    (first..=last)
        .map(|n| n.to_string())
        .chain(MOCK_EXAM_GROUPED_ITEMS.iter().map(|g| (*g).to_owned()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn year_forms() {
        assert_eq!(normalize_exam_year("25").as_deref(), Ok("25년"));
        assert_eq!(normalize_exam_year("25년").as_deref(), Ok("25년"));
        assert_eq!(normalize_exam_year("2024").as_deref(), Ok("24년"));
        assert!(normalize_exam_year("5").is_err());
        assert!(normalize_exam_year("2a").is_err());
    }

    #[test]
    fn month_forms() {
        assert_eq!(normalize_exam_month("6").as_deref(), Ok("06월"));
        assert_eq!(normalize_exam_month("06월").as_deref(), Ok("06월"));
        assert_eq!(normalize_exam_month("11").as_deref(), Ok("11월"));
        assert_eq!(
            normalize_exam_month("05"),
            Err(ClassifyError::InvalidField { field: "month", value: "05".to_owned() })
        );
    }

    #[test]
    fn mock_items() {
        assert_eq!(normalize_mock_exam_item("021").as_deref(), Ok("21"));
        assert_eq!(normalize_mock_exam_item("43~45").as_deref(), Ok("43~45"));
        assert!(normalize_mock_exam_item("17").is_err());
        assert!(normalize_mock_exam_item("41").is_err());
        let all = mock_exam_item_numbers();
        assert_eq!(all.len(), 25);
        assert_eq!(all.first().map(String::as_str), Some("18"));
        assert_eq!(all.last().map(String::as_str), Some("43~45"));
    }

    #[test]
    fn positive_numbers() {
        assert_eq!(parse_positive("unit", " 07 "), Ok(7));
        assert!(parse_positive("unit", "0").is_err());
        assert!(parse_positive("unit", "-3").is_err());
        assert_eq!(normalize_number_cell("007"), "7");
        assert_eq!(normalize_number_cell(" Lesson 2 "), "Lesson 2");
    }

    #[test]
    fn integral_decimal_cells() {
        assert_eq!(normalize_number_cell("5.0"), "5");
        assert_eq!(normalize_number_cell(" 05.00 "), "5");
        assert_eq!(normalize_number_cell("5.5"), "5.5");
        assert_eq!(normalize_number_cell("5."), "5.");
        assert_eq!(normalize_number_cell(".0"), ".0");
    }
}
