use tempfile::TempDir;
use whiskernotes_core::{
    NoteService, NoteServiceError, NoteStore, SqliteNoteRepository, ValidationError,
};

fn service_fixture() -> (TempDir, NoteService<SqliteNoteRepository>) {
    let dir = tempfile::tempdir().unwrap();
    let store = NoteStore::open(dir.path().join("whiskernotes.db")).unwrap();
    (dir, NoteService::new(SqliteNoteRepository::new(store)))
}

fn tag_list(count: usize) -> String {
    (0..count).map(|i| format!("tag{i}")).collect::<Vec<_>>().join(",")
}

#[test]
fn create_rejects_overlong_title() {
    let (_dir, service) = service_fixture();

    let err = service
        .create_note(&"t".repeat(201), "body", "", "Personal")
        .unwrap_err();
    assert!(matches!(
        err,
        NoteServiceError::Validation(ValidationError::TitleTooLong(201))
    ));

    assert!(service
        .create_note(&"t".repeat(200), "body", "", "Personal")
        .is_ok());
}

#[test]
fn create_rejects_overlong_content() {
    let (_dir, service) = service_fixture();

    let err = service
        .create_note("title", &"c".repeat(100_001), "", "Personal")
        .unwrap_err();
    assert!(matches!(
        err,
        NoteServiceError::Validation(ValidationError::ContentTooLong(_))
    ));
}

#[test]
fn create_accepts_decorated_category_and_rejects_unknown() {
    let (_dir, service) = service_fixture();

    let id = service.create_note("t", "c", "", "Work 💼").unwrap();
    // The decorated label is stored verbatim; normalization is a UI concern.
    let note = service.get_note(id).unwrap().unwrap();
    assert_eq!(note.category, "Work 💼");

    let err = service.create_note("t", "c", "", "Unknown").unwrap_err();
    assert!(matches!(
        err,
        NoteServiceError::Validation(ValidationError::UnknownCategory(_))
    ));
}

#[test]
fn create_enforces_tag_count_boundary() {
    let (_dir, service) = service_fixture();

    assert!(service
        .create_note("t", "c", &tag_list(20), "Personal")
        .is_ok());

    let err = service
        .create_note("t", "c", &tag_list(21), "Personal")
        .unwrap_err();
    assert!(matches!(
        err,
        NoteServiceError::Validation(ValidationError::TooManyTags(21))
    ));
}

#[test]
fn create_rejects_overlong_single_tag() {
    let (_dir, service) = service_fixture();

    let err = service
        .create_note("t", "c", &"x".repeat(31), "Personal")
        .unwrap_err();
    assert!(matches!(
        err,
        NoteServiceError::Validation(ValidationError::TagTooLong(_))
    ));
}

#[test]
fn update_validates_after_existence_check() {
    let (_dir, service) = service_fixture();

    let id = service.create_note("t", "c", "", "Personal").unwrap();

    // Existing note, bad category: validation error, not not-found.
    let err = service.update_note(id, "t", "c", "", "Nope").unwrap_err();
    assert!(matches!(err, NoteServiceError::Validation(_)));

    // Missing note, bad category: the existence check fires first.
    let err = service.update_note(id + 100, "t", "c", "", "Nope").unwrap_err();
    assert!(matches!(err, NoteServiceError::NoteNotFound(_)));
}

#[test]
fn failed_update_leaves_note_untouched() {
    let (_dir, service) = service_fixture();

    let id = service.create_note("keep", "original", "a,b", "Study").unwrap();
    let before = service.get_note(id).unwrap().unwrap();

    service
        .update_note(id, "new", "changed", &tag_list(21), "Study")
        .unwrap_err();

    let after = service.get_note(id).unwrap().unwrap();
    assert_eq!(after, before);
}
