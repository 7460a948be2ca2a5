//! Core persistence and validation layer for WhiskerNotes.
//! This crate is the single source of truth for note business invariants;
//! GUI collaborators call in only through [`NoteService`] and [`ConfigStore`].

pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;
pub mod validate;

pub use db::{DbError, DbResult, NoteStore};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::note::{count_words, Category, Note, NoteId, SortOrder};
pub use repo::note_repo::{NoteRepository, SqliteNoteRepository};
pub use service::config::{ConfigMap, ConfigStore, CONFIG_FILE};
pub use service::note_service::{NoteService, NoteServiceError};
pub use validate::{
    validate_category, validate_content, validate_tags, validate_title, ValidationError,
};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
