use rusqlite::{params, Connection};
use tempfile::TempDir;
use whiskernotes_core::{NoteService, NoteStore, SortOrder, SqliteNoteRepository};

fn service_fixture() -> (TempDir, NoteService<SqliteNoteRepository>) {
    let dir = tempfile::tempdir().unwrap();
    let store = NoteStore::open(dir.path().join("whiskernotes.db")).unwrap();
    (dir, NoteService::new(SqliteNoteRepository::new(store)))
}

fn fixture_conn(dir: &TempDir) -> Connection {
    Connection::open(dir.path().join("whiskernotes.db")).unwrap()
}

#[test]
fn search_matches_title_content_and_tags_case_insensitively() {
    let (_dir, service) = service_fixture();

    let treats = service
        .create_note("Shopping", "- Milk\n- Cat treats", "errands", "Personal")
        .unwrap();
    let themed = service
        .create_note("Art project", "pixel sketches", "cat-themed,art", "Ideas")
        .unwrap();
    let title_hit = service
        .create_note("CATALOG of plants", "greenhouse", "", "Other")
        .unwrap();
    service
        .create_note("Unrelated", "nothing here", "", "Personal")
        .unwrap();

    let hits = service.search_notes("cat").unwrap();
    let ids: Vec<i64> = hits.iter().map(|note| note.id).collect();
    assert_eq!(hits.len(), 3);
    assert!(ids.contains(&treats));
    assert!(ids.contains(&themed));
    assert!(ids.contains(&title_hit));
}

#[test]
fn blank_query_short_circuits_to_full_default_listing() {
    let (_dir, service) = service_fixture();

    service.create_note("one", "body", "", "Personal").unwrap();
    service.create_note("two", "body", "", "Work").unwrap();

    let all = service.get_all_notes(SortOrder::default()).unwrap();
    assert_eq!(service.search_notes("").unwrap(), all);
    assert_eq!(service.search_notes("   \t ").unwrap(), all);
}

#[test]
fn store_level_empty_query_matches_every_row() {
    let dir = tempfile::tempdir().unwrap();
    let store = NoteStore::open(dir.path().join("whiskernotes.db")).unwrap();

    store.create("a", "x", "", "Personal").unwrap();
    store.create("b", "y", "", "Work").unwrap();

    // Wildcard-wrapping the empty string yields `%%`.
    assert_eq!(store.search("").unwrap().len(), 2);
}

#[test]
fn pinned_sort_puts_pinned_first_then_most_recently_updated() {
    let (dir, service) = service_fixture();

    let oldest = service.create_note("oldest", "body", "", "Personal").unwrap();
    let newest = service.create_note("newest", "body", "", "Personal").unwrap();
    let pinned_old = service.create_note("pinned", "body", "", "Personal").unwrap();
    service.toggle_pin(pinned_old).unwrap();

    let conn = fixture_conn(&dir);
    for (id, stamp) in [(oldest, 1_000), (newest, 3_000), (pinned_old, 2_000)] {
        conn.execute(
            "UPDATE notes SET updated_at = ?1 WHERE id = ?2;",
            params![stamp, id],
        )
        .unwrap();
    }

    let listed = service.get_all_notes(SortOrder::Pinned).unwrap();
    let ids: Vec<i64> = listed.iter().map(|note| note.id).collect();
    assert_eq!(ids, vec![pinned_old, newest, oldest]);

    for pair in listed.windows(2) {
        assert!(pair[0].is_pinned as u8 >= pair[1].is_pinned as u8);
        if pair[0].is_pinned == pair[1].is_pinned {
            assert!(pair[0].updated_at >= pair[1].updated_at);
        }
    }
}

#[test]
fn updated_sort_is_also_pinned_first() {
    let (dir, service) = service_fixture();

    let plain = service.create_note("plain", "body", "", "Personal").unwrap();
    let pinned = service.create_note("pinned", "body", "", "Personal").unwrap();
    service.toggle_pin(pinned).unwrap();

    let conn = fixture_conn(&dir);
    conn.execute("UPDATE notes SET updated_at = 9000 WHERE id = ?1;", [plain])
        .unwrap();
    conn.execute("UPDATE notes SET updated_at = 1000 WHERE id = ?1;", [pinned])
        .unwrap();

    let listed = service.get_all_notes(SortOrder::Updated).unwrap();
    assert_eq!(listed[0].id, pinned);
    assert_eq!(listed[1].id, plain);
}

#[test]
fn alphabetical_sort_orders_by_title_ascending() {
    let (_dir, service) = service_fixture();

    service.create_note("Cherry", "body", "", "Personal").unwrap();
    service.create_note("Apple", "body", "", "Personal").unwrap();
    service.create_note("Banana", "body", "", "Personal").unwrap();

    let titles: Vec<String> = service
        .get_all_notes(SortOrder::Alphabetical)
        .unwrap()
        .into_iter()
        .map(|note| note.title)
        .collect();
    assert_eq!(titles, vec!["Apple", "Banana", "Cherry"]);
}

#[test]
fn unknown_sort_key_falls_back_to_default_order() {
    let (_dir, service) = service_fixture();

    service.create_note("only", "body", "", "Personal").unwrap();

    let via_key = service
        .get_all_notes(SortOrder::from_key("nonsense"))
        .unwrap();
    let via_default = service.get_all_notes(SortOrder::default()).unwrap();
    assert_eq!(via_key, via_default);
}

#[test]
fn category_filter_is_exact_match() {
    let (_dir, service) = service_fixture();

    let work = service.create_note("standup", "notes", "", "Work").unwrap();
    service.create_note("groceries", "list", "", "Personal").unwrap();

    let filtered = service.get_notes_by_category("Work").unwrap();
    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0].id, work);

    // SQLite `=` on text is case-sensitive; no case folding here.
    assert!(service.get_notes_by_category("work").unwrap().is_empty());
}

#[test]
fn tag_filter_matches_substrings_and_neighboring_tags() {
    let (_dir, service) = service_fixture();

    let exact = service
        .create_note("a", "body", "recipes,dinner", "Personal")
        .unwrap();
    let partial = service
        .create_note("b", "body", "recipe-drafts", "Personal")
        .unwrap();
    service.create_note("c", "body", "travel", "Personal").unwrap();

    let hits = service.get_notes_by_tag("recipe").unwrap();
    let ids: Vec<i64> = hits.iter().map(|note| note.id).collect();
    assert_eq!(hits.len(), 2);
    assert!(ids.contains(&exact));
    assert!(ids.contains(&partial));
}
