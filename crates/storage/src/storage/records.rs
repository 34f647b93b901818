//! Row-level reads and appends on the `passages` table.

use passage_archive_core::{RECORD_COLUMNS, Record};
use rusqlite::params_from_iter;
use rusqlite::types::Value;

use super::{Storage, get_conn, log_row_error};
use crate::error::StorageError;
use crate::migrations::TABLE;

/// Render a stored cell as sheet text. Numbers typed into an imported sheet
/// come back as plain digits.
fn cell_text(value: Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::Integer(i) => i.to_string(),
        Value::Real(f) => f.to_string(),
        Value::Text(s) => s,
        Value::Blob(b) => String::from_utf8_lossy(&b).into_owned(),
    }
}

fn read_cells(row: &rusqlite::Row<'_>, width: usize) -> rusqlite::Result<Vec<String>> {
    (0..width).map(|idx| row.get::<_, Value>(idx).map(cell_text)).collect()
}

impl Storage {
    /// Every well-formed record in insertion order.
    ///
    /// Rows whose category cell is not a known category are skipped with a
    /// warning. A missing table reads as an empty sheet.
    pub fn load_records(&self) -> Result<Vec<Record>, StorageError> {
        let conn = get_conn(&self.pool)?;
        let sql = format!("SELECT * FROM {TABLE} ORDER BY rowid");
        let mut stmt = match conn.prepare(&sql) {
            Ok(stmt) => stmt,
            Err(e) => {
                let err = StorageError::from(e);
                if err.is_missing_table() {
                    tracing::warn!(table = TABLE, "Archive table missing, treating as empty");
                    return Ok(Vec::new());
                }
                return Err(err);
            },
        };

        let labels: Vec<String> = stmt.column_names().into_iter().map(str::to_owned).collect();
        let width = labels.len();
        let rows = stmt.query_map([], |row| read_cells(row, width))?;
        let mut records = Vec::new();
        let mut skipped = 0usize;
        for (position, cells) in rows.filter_map(log_row_error).enumerate() {
            let lookup = |label: &str| {
                labels.iter().position(|name| name == label).and_then(|idx| cells.get(idx)).map(String::as_str)
            };
            match Record::from_cells(lookup) {
                Some(record) => records.push(record),
                None => {
                    skipped = skipped.saturating_add(1);
                    tracing::warn!(row = position.saturating_add(1), "Skipping row with unknown category");
                },
            }
        }
        tracing::debug!(loaded = records.len(), skipped, "Loaded archive records");
        Ok(records)
    }

    /// Append one row. Cells are written exactly as the record holds them.
    pub fn append_record(&self, record: &Record) -> Result<(), StorageError> {
        let conn = get_conn(&self.pool)?;
        let columns = RECORD_COLUMNS.join(", ");
        let placeholders = vec!["?"; RECORD_COLUMNS.len()].join(", ");
        let sql = format!("INSERT INTO {TABLE} ({columns}) VALUES ({placeholders})");
        conn.execute(&sql, params_from_iter(record.cells()))?;
        tracing::debug!(
            category = record.category.as_str(),
            title = %record.display_title,
            "Appended archive row"
        );
        Ok(())
    }

    /// Total rows, including ones `load_records` would skip.
    pub fn count_records(&self) -> Result<usize, StorageError> {
        let conn = get_conn(&self.pool)?;
        let sql = format!("SELECT COUNT(*) FROM {TABLE}");
        let count: i64 = conn.query_row(&sql, [], |row| row.get(0))?;
        Ok(count as usize)
    }
}
