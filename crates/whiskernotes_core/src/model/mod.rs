//! Domain model for notes.
//!
//! # Responsibility
//! - Define the canonical note record persisted by the storage engine.
//! - Provide the category and sort-order vocabularies shared by all layers.
//!
//! # Invariants
//! - Every note is identified by a stable `NoteId` assigned at creation.
//! - `word_count` is derived from `content`, never mutated independently.

pub mod note;
