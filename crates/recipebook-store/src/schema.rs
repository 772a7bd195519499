//! Schema definition
//!
//! Table and column names match the journal's original database file, so a
//! file created by earlier versions opens without any conversion step.

#![allow(clippy::result_large_err)]

use crate::errors::{from_rusqlite, Result};
use rusqlite::Connection;

/// Identity rows (`username` is the display name)
pub const USERS_TABLE: &str = "users";

/// Recipe rows (`username` is the owner's display name)
pub const RECIPES_TABLE: &str = "recipes";

/// DDL for both tables; every statement is idempotent
///
/// Columns stay untyped beyond their affinity so a file written by earlier
/// versions opens without any change to its layout.
pub const SCHEMA_SQL: &str = r#"
CREATE TABLE IF NOT EXISTS users (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    username TEXT
);

CREATE TABLE IF NOT EXISTS recipes (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    username TEXT,
    title TEXT,
    note TEXT,
    image BLOB,
    created_at TEXT -- YYYY-MM-DD HH:MM:SS, local time
);
"#;

/// Create any missing tables
///
/// Returns `true` when the journal already had both tables.
pub fn ensure_schema(conn: &Connection) -> Result<bool> {
    let existing = table_exists(conn, USERS_TABLE)? && table_exists(conn, RECIPES_TABLE)?;

    conn.execute_batch(SCHEMA_SQL)
        .map_err(|e| from_rusqlite("initialize", e))?;
    Ok(existing)
}

/// Check whether a table exists in the connected database
pub fn table_exists(conn: &Connection, table: &str) -> Result<bool> {
    let count: i64 = conn
        .query_row(
            "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = ?1",
            [table],
            |row| row.get(0),
        )
        .map_err(|e| from_rusqlite("table_exists", e))?;
    Ok(count > 0)
}
