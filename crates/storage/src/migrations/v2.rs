//! Migration v2: columns missing from hand-imported tables, plus the
//! index backing textbook and unit option listings

pub(super) const COLUMN_DEF: &str = "TEXT NOT NULL DEFAULT ''";

pub(super) const INDEX_SQL: &str = "
CREATE INDEX IF NOT EXISTS idx_passages_category_detail
    ON passages(category, detail1, detail2);
";
