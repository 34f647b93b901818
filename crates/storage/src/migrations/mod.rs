#![allow(
    clippy::redundant_pub_crate,
    reason = "migrations module is private, pub(crate) is intentional"
)]

mod column_helpers;
mod v1;
mod v2;

use column_helpers::add_column_if_not_exists;
use passage_archive_core::RECORD_COLUMNS;
use rusqlite::Connection;

pub const SCHEMA_VERSION: i32 = 2;

/// Archive table name. Every row is one record; `rowid` carries sheet order.
pub(crate) const TABLE: &str = "passages";

pub fn run_migrations(conn: &Connection) -> Result<(), rusqlite::Error> {
    conn.pragma_update(None, "journal_mode", "WAL")?;
    conn.pragma_update(None, "synchronous", "NORMAL")?;
    conn.pragma_update(None, "busy_timeout", 5000i32)?;

    let current_version: i32 = conn.pragma_query_value(None, "user_version", |row| row.get(0))?;

    tracing::info!("Database schema version: {} (target: {})", current_version, SCHEMA_VERSION);

    if current_version < 1i32 {
        tracing::info!("Running migration v1: passages table");
        conn.execute_batch(v1::SQL)?;
    }

    if current_version < 2i32 {
        tracing::info!("Running migration v2: backfill imported columns, options index");
        for column in RECORD_COLUMNS {
            add_column_if_not_exists(conn, TABLE, column, v2::COLUMN_DEF)?;
        }
        conn.execute_batch(v2::INDEX_SQL)?;
    }

    conn.pragma_update(None, "user_version", SCHEMA_VERSION)?;
    tracing::info!("Database schema up to date (version {})", SCHEMA_VERSION);

    Ok(())
}
