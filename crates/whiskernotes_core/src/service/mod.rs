//! Use-case services consumed by UI collaborators.
//!
//! # Responsibility
//! - Orchestrate repository + validator into the application's sole façade.
//! - Persist flat UI settings as a side document.
//!
//! # Invariants
//! - Mutating note calls follow existence-then-validate-then-mutate.
//! - Reads never fail validation.

pub mod config;
pub mod note_service;
