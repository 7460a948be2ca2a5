//! Repository layer abstraction over note storage.
//!
//! # Responsibility
//! - Define the data-access contract the note service depends on.
//! - Isolate SQLite details from service orchestration.
//!
//! # Invariants
//! - Repository methods forward 1:1 to storage with identical contracts;
//!   no caching, no extra logic.

pub mod note_repo;
