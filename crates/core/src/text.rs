//! Cosmetic cleanup for pasted passages.
//!
//! Text copied out of PDFs arrives hard-wrapped at the page width. Cleaning joins
//! the wrapped lines back together and starts a new paragraph after every
//! sentence-ending period. Abbreviations such as "U.S." are split too; callers
//! opt in per submission.

use std::sync::LazyLock;

use regex::Regex;

static LINE_BREAKS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[ \t]*(?:\r?\n[ \t]*)+").expect("line break regex"));

static SPACE_RUNS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[ \t]{2,}").expect("space run regex"));

static SENTENCE_END: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\.[ \t]+").expect("sentence end regex"));

/// Join hard-wrapped lines and break paragraphs after periods.
#[must_use]
pub fn clean_passage_text(text: &str) -> String {
    let joined = LINE_BREAKS.replace_all(text, " ");
    let single_spaced = SPACE_RUNS.replace_all(&joined, " ");
    let paragraphed = SENTENCE_END.replace_all(&single_spaced, ".\n\n");
    paragraphed.trim().to_owned()
}
