use rusqlite::Connection;
use whiskernotes_core::{NoteStore, SortOrder};

/// Table shape produced by builds that predate pinning, tags, categories,
/// and word counts.
const LEGACY_TABLE_SQL: &str = "CREATE TABLE notes (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    title TEXT NOT NULL,
    content TEXT NOT NULL,
    created_at INTEGER NOT NULL,
    updated_at INTEGER NOT NULL
);";

fn column_names(conn: &Connection) -> Vec<String> {
    let mut stmt = conn.prepare("PRAGMA table_info(notes);").unwrap();
    let mut rows = stmt.query([]).unwrap();
    let mut names = Vec::new();
    while let Some(row) = rows.next().unwrap() {
        names.push(row.get::<_, String>("name").unwrap());
    }
    names
}

#[test]
fn fresh_database_gets_full_schema() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("fresh.db");
    let _store = NoteStore::open(&path).unwrap();

    let conn = Connection::open(&path).unwrap();
    let names = column_names(&conn);
    for expected in [
        "id",
        "title",
        "content",
        "created_at",
        "updated_at",
        "is_pinned",
        "tags",
        "category",
        "word_count",
    ] {
        assert!(names.iter().any(|name| name == expected), "missing column {expected}");
    }
}

#[test]
fn legacy_table_gains_newer_columns_with_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("legacy.db");

    {
        let conn = Connection::open(&path).unwrap();
        conn.execute_batch(LEGACY_TABLE_SQL).unwrap();
        conn.execute(
            "INSERT INTO notes (title, content, created_at, updated_at)
             VALUES ('old note', 'kept as-is', 111, 222);",
            [],
        )
        .unwrap();
    }

    let store = NoteStore::open(&path).unwrap();
    let notes = store.list(SortOrder::Updated).unwrap();
    assert_eq!(notes.len(), 1);

    let migrated = &notes[0];
    assert_eq!(migrated.id, 1);
    assert_eq!(migrated.title, "old note");
    assert_eq!(migrated.content, "kept as-is");
    assert_eq!(migrated.created_at, 111);
    assert_eq!(migrated.updated_at, 222);
    assert!(!migrated.is_pinned);
    assert_eq!(migrated.tags, "");
    assert_eq!(migrated.category, "Personal");
    assert_eq!(migrated.word_count, 0);
}

#[test]
fn migrated_rows_participate_in_new_features() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("legacy.db");

    {
        let conn = Connection::open(&path).unwrap();
        conn.execute_batch(LEGACY_TABLE_SQL).unwrap();
        conn.execute(
            "INSERT INTO notes (title, content, created_at, updated_at)
             VALUES ('survivor', 'text', 1, 1);",
            [],
        )
        .unwrap();
    }

    let store = NoteStore::open(&path).unwrap();
    assert!(store.toggle_pin(1).unwrap());
    assert!(store.get(1).unwrap().unwrap().is_pinned);

    assert!(store.update(1, "survivor", "three word body", "legacy", "Other").unwrap());
    let updated = store.get(1).unwrap().unwrap();
    assert_eq!(updated.word_count, 3);
    assert_eq!(updated.created_at, 1);
}

#[test]
fn reopening_is_idempotent() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("whiskernotes.db");

    let store = NoteStore::open(&path).unwrap();
    let id = store.create("t", "c", "", "Personal").unwrap();
    drop(store);

    let reopened = NoteStore::open(&path).unwrap();
    assert!(reopened.get(id).unwrap().is_some());

    let conn = Connection::open(&path).unwrap();
    // Exactly one notes table, untouched by the second open.
    let count: i64 = conn
        .query_row(
            "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = 'notes';",
            [],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(count, 1);
}
