//! Note repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Expose storage operations under stable domain names.
//! - Give the service a substitutable seam for testing or backend swap.
//!
//! # Invariants
//! - Every method maps 1:1 onto a `NoteStore` operation; `exists` is the
//!   only synthesized method.
//! - Missing-id mutations keep storage's boolean signal; turning it into a
//!   typed not-found error is the service's job.

use crate::db::{DbResult, NoteStore};
use crate::model::note::{Note, NoteId, SortOrder};

/// Data-access contract for notes.
pub trait NoteRepository {
    /// Creates one note and returns its assigned id.
    fn create(&self, title: &str, content: &str, tags: &str, category: &str) -> DbResult<NoteId>;
    /// Gets one note by id; absence is `Ok(None)`.
    fn get_by_id(&self, id: NoteId) -> DbResult<Option<Note>>;
    /// Lists all notes in the requested order.
    fn get_all(&self, order: SortOrder) -> DbResult<Vec<Note>>;
    /// Overwrites one note's fields wholesale; `false` when absent.
    fn update(&self, id: NoteId, title: &str, content: &str, tags: &str, category: &str)
        -> DbResult<bool>;
    /// Hard-deletes one note; `false` when absent.
    fn delete(&self, id: NoteId) -> DbResult<bool>;
    /// True iff a note with this id is present.
    fn exists(&self, id: NoteId) -> DbResult<bool>;
    /// Substring search across title/content/tags.
    fn search(&self, query: &str) -> DbResult<Vec<Note>>;
    /// Flips one note's pin flag; `false` when absent.
    fn toggle_pin(&self, id: NoteId) -> DbResult<bool>;
    /// Exact-match category filter.
    fn get_by_category(&self, category: &str) -> DbResult<Vec<Note>>;
    /// Substring tag filter.
    fn get_by_tag(&self, tag: &str) -> DbResult<Vec<Note>>;
}

/// SQLite-backed repository forwarding to [`NoteStore`].
pub struct SqliteNoteRepository {
    store: NoteStore,
}

impl SqliteNoteRepository {
    /// Wraps an opened store.
    pub fn new(store: NoteStore) -> Self {
        Self { store }
    }
}

impl NoteRepository for SqliteNoteRepository {
    fn create(&self, title: &str, content: &str, tags: &str, category: &str) -> DbResult<NoteId> {
        self.store.create(title, content, tags, category)
    }

    fn get_by_id(&self, id: NoteId) -> DbResult<Option<Note>> {
        self.store.get(id)
    }

    fn get_all(&self, order: SortOrder) -> DbResult<Vec<Note>> {
        self.store.list(order)
    }

    fn update(
        &self,
        id: NoteId,
        title: &str,
        content: &str,
        tags: &str,
        category: &str,
    ) -> DbResult<bool> {
        self.store.update(id, title, content, tags, category)
    }

    fn delete(&self, id: NoteId) -> DbResult<bool> {
        self.store.delete(id)
    }

    fn exists(&self, id: NoteId) -> DbResult<bool> {
        Ok(self.store.get(id)?.is_some())
    }

    fn search(&self, query: &str) -> DbResult<Vec<Note>> {
        self.store.search(query)
    }

    fn toggle_pin(&self, id: NoteId) -> DbResult<bool> {
        self.store.toggle_pin(id)
    }

    fn get_by_category(&self, category: &str) -> DbResult<Vec<Note>> {
        self.store.get_by_category(category)
    }

    fn get_by_tag(&self, tag: &str) -> DbResult<Vec<Note>> {
        self.store.get_by_tag(tag)
    }
}
