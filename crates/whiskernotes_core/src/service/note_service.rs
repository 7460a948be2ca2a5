//! Note use-case service.
//!
//! # Responsibility
//! - Provide the create/update/delete/get/list/search/pin façade used by
//!   UI collaborators.
//! - Enforce existence-then-validate-then-mutate on every mutating call.
//!
//! # Invariants
//! - Storage's silent `false` on a missing id becomes a typed
//!   `NoteNotFound` here; the two signals must not be collapsed.
//! - Empty or whitespace-only search queries short-circuit to the default
//!   listing instead of a match-everything substring search.
//! - Tags are validated on both mutating paths alongside title, content,
//!   and category.

use crate::db::DbError;
use crate::model::note::{Note, NoteId, SortOrder};
use crate::repo::note_repo::NoteRepository;
use crate::validate::{
    validate_category, validate_content, validate_tags, validate_title, ValidationError,
};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Service error for note use-cases.
#[derive(Debug)]
pub enum NoteServiceError {
    /// Input violates a stated constraint.
    Validation(ValidationError),
    /// Target note does not exist.
    NoteNotFound(NoteId),
    /// Fatal persistence-layer failure.
    Db(DbError),
}

impl Display for NoteServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::NoteNotFound(id) => write!(f, "note not found: {id}"),
            Self::Db(err) => write!(f, "{err}"),
        }
    }
}

impl Error for NoteServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::NoteNotFound(_) => None,
            Self::Db(err) => Some(err),
        }
    }
}

impl From<ValidationError> for NoteServiceError {
    fn from(value: ValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<DbError> for NoteServiceError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

/// Sole entry point for note operations, generic over the repository seam.
pub struct NoteService<R: NoteRepository> {
    repo: R,
}

impl<R: NoteRepository> NoteService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Validates and creates one note, returning its assigned id.
    ///
    /// The title is stored verbatim; an empty title is legal here and any
    /// "Untitled Note" substitution happens at the UI boundary.
    pub fn create_note(
        &self,
        title: &str,
        content: &str,
        tags: &str,
        category: &str,
    ) -> Result<NoteId, NoteServiceError> {
        self.validate_inputs(title, content, tags, category)?;
        Ok(self.repo.create(title, content, tags, category)?)
    }

    /// Validates and overwrites one note's fields wholesale.
    ///
    /// Raises `NoteNotFound` when the id is absent, unlike storage's own
    /// silent no-op.
    pub fn update_note(
        &self,
        id: NoteId,
        title: &str,
        content: &str,
        tags: &str,
        category: &str,
    ) -> Result<bool, NoteServiceError> {
        self.require_exists(id)?;
        self.validate_inputs(title, content, tags, category)?;
        Ok(self.repo.update(id, title, content, tags, category)?)
    }

    /// Hard-deletes one note; `NoteNotFound` when the id is absent.
    pub fn delete_note(&self, id: NoteId) -> Result<bool, NoteServiceError> {
        self.require_exists(id)?;
        Ok(self.repo.delete(id)?)
    }

    /// Flips one note's pin flag; `NoteNotFound` when the id is absent.
    pub fn toggle_pin(&self, id: NoteId) -> Result<bool, NoteServiceError> {
        self.require_exists(id)?;
        Ok(self.repo.toggle_pin(id)?)
    }

    /// Gets one note by id. Absence is a valid outcome, not an error.
    pub fn get_note(&self, id: NoteId) -> Result<Option<Note>, NoteServiceError> {
        Ok(self.repo.get_by_id(id)?)
    }

    /// Lists all notes in the requested order.
    pub fn get_all_notes(&self, order: SortOrder) -> Result<Vec<Note>, NoteServiceError> {
        Ok(self.repo.get_all(order)?)
    }

    /// Substring search across title, content, and tags.
    ///
    /// Empty or whitespace-only queries return the full default-ordered
    /// listing instead of invoking a match-everything search.
    pub fn search_notes(&self, query: &str) -> Result<Vec<Note>, NoteServiceError> {
        let trimmed = query.trim();
        if trimmed.is_empty() {
            return self.get_all_notes(SortOrder::default());
        }
        Ok(self.repo.search(trimmed)?)
    }

    /// Exact-match category filter.
    pub fn get_notes_by_category(&self, category: &str) -> Result<Vec<Note>, NoteServiceError> {
        Ok(self.repo.get_by_category(category)?)
    }

    /// Substring tag filter.
    pub fn get_notes_by_tag(&self, tag: &str) -> Result<Vec<Note>, NoteServiceError> {
        Ok(self.repo.get_by_tag(tag)?)
    }

    fn require_exists(&self, id: NoteId) -> Result<(), NoteServiceError> {
        if !self.repo.exists(id)? {
            return Err(NoteServiceError::NoteNotFound(id));
        }
        Ok(())
    }

    fn validate_inputs(
        &self,
        title: &str,
        content: &str,
        tags: &str,
        category: &str,
    ) -> Result<(), NoteServiceError> {
        validate_title(title)?;
        validate_content(content)?;
        validate_category(category)?;
        validate_tags(tags)?;
        Ok(())
    }
}
