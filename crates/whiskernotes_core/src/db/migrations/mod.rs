//! Additive schema migration for the notes table.
//!
//! # Responsibility
//! - Create the notes table with the full current column set when absent.
//! - Back-fill newer columns on tables created by older builds.
//!
//! # Invariants
//! - Migration only adds columns, each with a fixed default.
//! - Existing rows and their `id`/`created_at` values are preserved.
//! - Columns are never removed, renamed, or rewritten.

use crate::db::DbResult;
use rusqlite::Connection;

/// Columns added after the initial table shape, with their defaults.
///
/// Order matters only for readability; each entry is applied independently
/// when missing.
const ADDITIVE_COLUMNS: &[(&str, &str)] = &[
    ("is_pinned", "INTEGER NOT NULL DEFAULT 0"),
    ("tags", "TEXT NOT NULL DEFAULT ''"),
    ("category", "TEXT NOT NULL DEFAULT 'Personal'"),
    ("word_count", "INTEGER NOT NULL DEFAULT 0"),
];

/// Ensures the notes table exists with the full current column set.
///
/// Fresh databases get the complete table in one statement; databases
/// created by older builds gain each missing column via `ALTER TABLE ADD
/// COLUMN` with its fixed default. Idempotent.
pub fn ensure_schema(conn: &Connection) -> DbResult<()> {
    conn.execute_batch(include_str!("notes_table.sql"))?;

    let existing = existing_columns(conn)?;
    for (name, decl) in ADDITIVE_COLUMNS {
        if existing.iter().any(|column| column == name) {
            continue;
        }
        conn.execute_batch(&format!("ALTER TABLE notes ADD COLUMN {name} {decl};"))?;
    }

    Ok(())
}

fn existing_columns(conn: &Connection) -> DbResult<Vec<String>> {
    let mut stmt = conn.prepare("PRAGMA table_info(notes);")?;
    let mut rows = stmt.query([])?;
    let mut columns = Vec::new();
    while let Some(row) = rows.next()? {
        columns.push(row.get::<_, String>("name")?);
    }
    Ok(columns)
}
