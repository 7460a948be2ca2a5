//! SQLite storage engine for notes.
//!
//! # Responsibility
//! - Open and configure SQLite connections.
//! - Keep the notes table schema current via additive column migration.
//! - Provide the raw CRUD/query surface (`NoteStore`).
//!
//! # Invariants
//! - Schema setup runs before any application data is read or written.
//! - Migration only ever adds columns; existing rows are never rewritten.
//! - Connection-level failures are fatal at this layer: no retry, no
//!   partial-failure recovery.

use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod migrations;
mod open;
pub mod store;

pub use open::open_db;
pub use store::NoteStore;

pub type DbResult<T> = Result<T, DbError>;

/// Fatal storage-layer error.
///
/// Operations referencing a nonexistent id do not produce this; they signal
/// absence through `Ok(false)` / `Ok(None)` instead.
#[derive(Debug)]
pub enum DbError {
    Sqlite(rusqlite::Error),
}

impl Display for DbError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sqlite(err) => write!(f, "{err}"),
        }
    }
}

impl Error for DbError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Sqlite(err) => Some(err),
        }
    }
}

impl From<rusqlite::Error> for DbError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Sqlite(value)
    }
}
