//! Console walkthrough of the WhiskerNotes core without any GUI.
//!
//! # Responsibility
//! - Exercise create/list/update/search/pin/delete end to end against a
//!   scratch database to verify core wiring.
//! - Keep output deterministic for quick local sanity checks.

use std::error::Error;
use std::process::ExitCode;
use whiskernotes_core::{NoteService, NoteStore, SortOrder, SqliteNoteRepository};

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("demo failed: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), Box<dyn Error>> {
    let db_path = std::env::temp_dir().join(format!("whiskernotes-demo-{}.db", std::process::id()));

    println!("WhiskerNotes core demo (v{})", whiskernotes_core::core_version());
    println!("database: {}", db_path.display());

    let store = NoteStore::open(&db_path)?;
    let service = NoteService::new(SqliteNoteRepository::new(store));

    let welcome_id = service.create_note(
        "Welcome to WhiskerNotes",
        "This is your first note! WhiskerNotes is a cozy notes app.",
        "welcome",
        "Personal",
    )?;
    let shopping_id = service.create_note(
        "Shopping List",
        "- Milk\n- Bread\n- Cat treats\n- Coffee",
        "errands,home",
        "Personal",
    )?;
    service.create_note(
        "Project Ideas",
        "1. Build a cat-themed todo app\n2. Create pixel art cats\n3. Learn GUI development",
        "projects",
        "Ideas",
    )?;

    println!("\nall notes:");
    for note in service.get_all_notes(SortOrder::Updated)? {
        println!(
            "  [{}] {} (category={}, words={}, pinned={})",
            note.id, note.title, note.category, note.word_count, note.is_pinned
        );
    }

    service.update_note(
        welcome_id,
        "Welcome to WhiskerNotes (Updated)",
        "This note has been updated! Auto-save keeps your changes safe.",
        "welcome",
        "Personal",
    )?;
    println!("\nupdated note {welcome_id}");

    service.toggle_pin(shopping_id)?;
    println!("pinned note {shopping_id}");

    println!("\nsearch for `cat`:");
    for note in service.search_notes("cat")? {
        println!("  - {}", note.title);
    }

    service.delete_note(shopping_id)?;
    println!("\ndeleted note {shopping_id}");

    let remaining = service.get_all_notes(SortOrder::default())?;
    println!("{} notes remaining", remaining.len());

    std::fs::remove_file(&db_path)?;
    println!("\ndemo database cleaned up");
    Ok(())
}
