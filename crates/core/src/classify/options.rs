//! Selection options derived from stored records.

use std::collections::HashSet;

use crate::{normalize_number_cell, Category, Record};

fn supplements(records: &[Record]) -> impl Iterator<Item = &Record> {
    records.iter().filter(|r| r.category == Category::Supplement)
}

/// Distinct supplement textbook names in first-seen order. Blank names are skipped.
#[must_use]
pub fn textbook_names(records: &[Record]) -> Vec<String> {
    let mut seen: HashSet<&str> = HashSet::new();
    supplements(records)
        .map(|r| r.detail1.trim())
        .filter(|name| !name.is_empty() && seen.insert(*name))
        .map(ToOwned::to_owned)
        .collect()
}

/// Distinct units stored for `textbook`, numeric units first in ascending order.
#[must_use]
pub fn units_for_textbook(records: &[Record], textbook: &str) -> Vec<String> {
    let textbook = textbook.trim();
    let mut units: Vec<String> = Vec::new();
    for record in supplements(records).filter(|r| r.detail1.trim() == textbook) {
        let unit = normalize_number_cell(&record.detail2);
        if !unit.is_empty() && !units.contains(&unit) {
            units.push(unit);
        }
    }
    units.sort_by(|a, b| match (a.parse::<u64>(), b.parse::<u64>()) {
        (Ok(x), Ok(y)) => x.cmp(&y),
        (Ok(_), Err(_)) => std::cmp::Ordering::Less,
        (Err(_), Ok(_)) => std::cmp::Ordering::Greater,
        (Err(_), Err(_)) => a.cmp(b),
    });
    units
}
