//! Raw CRUD/query operations over the notes table.
//!
//! # Responsibility
//! - Own all SQL touching the notes table.
//! - Derive `word_count` and maintain `created_at`/`updated_at` on writes.
//!
//! # Invariants
//! - Every operation opens a fresh connection, executes, and closes; no
//!   connection or transaction spans two logical operations.
//! - Mutations on a missing id return `Ok(false)`, never an error; existence
//!   checks belong to the service layer.
//! - `toggle_pin` flips the flag in one atomic statement and leaves
//!   `updated_at` untouched.

use crate::db::open::raw_open;
use crate::db::{open_db, DbResult};
use crate::model::note::{count_words, Note, NoteId, SortOrder};
use log::info;
use rusqlite::{params, Connection, Row};
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

const NOTE_SELECT_SQL: &str = "SELECT
    id,
    title,
    content,
    created_at,
    updated_at,
    is_pinned,
    tags,
    category,
    word_count
FROM notes";

/// Pinned first, most recently updated next; `id` keeps ties stable.
const ORDER_PINNED_UPDATED: &str = " ORDER BY is_pinned DESC, updated_at DESC, id ASC";
const ORDER_ALPHABETICAL: &str = " ORDER BY title ASC, id ASC";

/// Durable store for notes, keyed by database file path.
///
/// Holds no open connection: each operation connects, runs its
/// statement(s), and closes, matching the single-user cooperative model.
pub struct NoteStore {
    db_path: PathBuf,
}

impl NoteStore {
    /// Opens the store, creating and migrating the database file as needed.
    ///
    /// The bootstrap connection is dropped before returning; later
    /// operations open fresh connections against the same path.
    pub fn open(path: impl AsRef<Path>) -> DbResult<NoteStore> {
        let db_path = path.as_ref().to_path_buf();
        drop(open_db(&db_path)?);
        info!("event=store_open module=db status=ok path={}", db_path.display());
        Ok(NoteStore { db_path })
    }

    /// Path of the backing database file.
    pub fn path(&self) -> &Path {
        &self.db_path
    }

    fn connect(&self) -> DbResult<Connection> {
        raw_open(&self.db_path)
    }

    /// Inserts one note and returns its assigned id.
    ///
    /// `created_at` and `updated_at` share a single instant; `word_count`
    /// is derived from `content`.
    pub fn create(
        &self,
        title: &str,
        content: &str,
        tags: &str,
        category: &str,
    ) -> DbResult<NoteId> {
        let conn = self.connect()?;
        let now = now_ms();
        conn.execute(
            "INSERT INTO notes (
                title,
                content,
                created_at,
                updated_at,
                is_pinned,
                tags,
                category,
                word_count
            ) VALUES (?1, ?2, ?3, ?4, 0, ?5, ?6, ?7);",
            params![title, content, now, now, tags, category, count_words(content)],
        )?;
        Ok(conn.last_insert_rowid())
    }

    /// Point lookup by id. Absence is `Ok(None)`, not an error.
    pub fn get(&self, id: NoteId) -> DbResult<Option<Note>> {
        let conn = self.connect()?;
        let mut stmt = conn.prepare(&format!("{NOTE_SELECT_SQL} WHERE id = ?1;"))?;
        let mut rows = stmt.query([id])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_note_row(row)?));
        }
        Ok(None)
    }

    /// Returns a full snapshot of the table in the requested order.
    pub fn list(&self, order: SortOrder) -> DbResult<Vec<Note>> {
        let conn = self.connect()?;
        let sql = format!("{NOTE_SELECT_SQL}{};", order_clause(order));
        collect_notes(&conn, &sql, params![])
    }

    /// Overwrites title/content/tags/category wholesale, recomputing
    /// `word_count` and refreshing `updated_at`.
    ///
    /// Returns `false` when no row had that id.
    pub fn update(
        &self,
        id: NoteId,
        title: &str,
        content: &str,
        tags: &str,
        category: &str,
    ) -> DbResult<bool> {
        let conn = self.connect()?;
        let changed = conn.execute(
            "UPDATE notes
             SET
                title = ?1,
                content = ?2,
                tags = ?3,
                category = ?4,
                word_count = ?5,
                updated_at = ?6
             WHERE id = ?7;",
            params![title, content, tags, category, count_words(content), now_ms(), id],
        )?;
        Ok(changed > 0)
    }

    /// Hard-deletes one note. Returns `false` when it did not exist.
    pub fn delete(&self, id: NoteId) -> DbResult<bool> {
        let conn = self.connect()?;
        let changed = conn.execute("DELETE FROM notes WHERE id = ?1;", [id])?;
        Ok(changed > 0)
    }

    /// Case-insensitive substring match across title, content, and tags.
    ///
    /// The query is wildcard-wrapped, so the empty string matches every
    /// row; short-circuiting empty input is the caller's concern.
    pub fn search(&self, query: &str) -> DbResult<Vec<Note>> {
        let conn = self.connect()?;
        let pattern = format!("%{query}%");
        let sql = format!(
            "{NOTE_SELECT_SQL}
             WHERE title LIKE ?1 OR content LIKE ?1 OR tags LIKE ?1{ORDER_PINNED_UPDATED};"
        );
        collect_notes(&conn, &sql, [pattern.as_str()])
    }

    /// Exact category match, default listing order.
    pub fn get_by_category(&self, category: &str) -> DbResult<Vec<Note>> {
        let conn = self.connect()?;
        let sql = format!("{NOTE_SELECT_SQL} WHERE category = ?1{ORDER_PINNED_UPDATED};");
        collect_notes(&conn, &sql, [category])
    }

    /// Substring match against the tags column, default listing order.
    ///
    /// Matches partial tag names and neighboring tags; that looseness is
    /// part of the contract.
    pub fn get_by_tag(&self, tag: &str) -> DbResult<Vec<Note>> {
        let conn = self.connect()?;
        let pattern = format!("%{tag}%");
        let sql = format!("{NOTE_SELECT_SQL} WHERE tags LIKE ?1{ORDER_PINNED_UPDATED};");
        collect_notes(&conn, &sql, [pattern.as_str()])
    }

    /// Flips `is_pinned` in a single atomic statement.
    ///
    /// `updated_at` is deliberately untouched: pinning is not an edit.
    /// Returns `false` when the id is absent.
    pub fn toggle_pin(&self, id: NoteId) -> DbResult<bool> {
        let conn = self.connect()?;
        let changed = conn.execute(
            "UPDATE notes SET is_pinned = 1 - is_pinned WHERE id = ?1;",
            [id],
        )?;
        Ok(changed > 0)
    }
}

fn order_clause(order: SortOrder) -> &'static str {
    match order {
        SortOrder::Alphabetical => ORDER_ALPHABETICAL,
        SortOrder::Updated | SortOrder::Pinned => ORDER_PINNED_UPDATED,
    }
}

fn collect_notes<P: rusqlite::Params>(
    conn: &Connection,
    sql: &str,
    params: P,
) -> DbResult<Vec<Note>> {
    let mut stmt = conn.prepare(sql)?;
    let mut rows = stmt.query(params)?;
    let mut notes = Vec::new();
    while let Some(row) = rows.next()? {
        notes.push(parse_note_row(row)?);
    }
    Ok(notes)
}

fn parse_note_row(row: &Row<'_>) -> DbResult<Note> {
    Ok(Note {
        id: row.get("id")?,
        title: row.get("title")?,
        content: row.get("content")?,
        created_at: row.get("created_at")?,
        updated_at: row.get("updated_at")?,
        is_pinned: row.get::<_, i64>("is_pinned")? != 0,
        tags: row.get("tags")?,
        category: row.get("category")?,
        word_count: row.get("word_count")?,
    })
}

fn now_ms() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_millis() as i64)
        .unwrap_or(0)
}
