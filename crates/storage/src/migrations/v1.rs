//! Migration v1: archive table, one TEXT cell per column label

pub(super) const SQL: &str = "
CREATE TABLE IF NOT EXISTS passages (
    registered_at TEXT NOT NULL DEFAULT '',
    category TEXT NOT NULL DEFAULT '',
    detail1 TEXT NOT NULL DEFAULT '',
    detail2 TEXT NOT NULL DEFAULT '',
    detail3 TEXT NOT NULL DEFAULT '',
    item_number TEXT NOT NULL DEFAULT '',
    display_title TEXT NOT NULL DEFAULT '',
    passage_text TEXT NOT NULL DEFAULT ''
);
";
