use notez_core::db::open_db_in_memory;
use notez_core::{
    NotePatch, NoteService, NoteServiceError, SqliteNoteRepository, DEFAULT_CATEGORY,
    FAVORITE_CATEGORY,
};

#[test]
fn create_rejects_empty_title() {
    let conn = open_db_in_memory().unwrap();
    let service = NoteService::new(SqliteNoteRepository::new(&conn));

    let err = service.create("   ", "body", "Work").unwrap_err();
    assert!(matches!(err, NoteServiceError::EmptyTitle));
    assert!(service.list().unwrap().is_empty());
}

#[test]
fn create_defaults_blank_category() {
    let conn = open_db_in_memory().unwrap();
    let service = NoteService::new(SqliteNoteRepository::new(&conn));

    let note = service.create("Plain", "body", "").unwrap();
    assert_eq!(note.category, DEFAULT_CATEGORY);
}

#[test]
fn marker_title_forces_favorite_category_on_create() {
    let conn = open_db_in_memory().unwrap();
    let service = NoteService::new(SqliteNoteRepository::new(&conn));

    let note = service.create("Idea ⭐", "Ship it", "Ideas").unwrap();
    assert_eq!(note.category, FAVORITE_CATEGORY);
    assert_eq!(note.title, "Idea ⭐");
    // The marker drives the category only; the favorite flag stays manual.
    assert!(!note.favorite);
}

#[test]
fn marker_title_forces_favorite_category_on_update() {
    let conn = open_db_in_memory().unwrap();
    let service = NoteService::new(SqliteNoteRepository::new(&conn));

    let created = service.create("Plain", "body", "Work").unwrap();
    let updated = service
        .update(
            created.id,
            NotePatch {
                title: Some("Plain ⭐".to_string()),
                ..NotePatch::default()
            },
        )
        .unwrap();

    assert_eq!(updated.category, FAVORITE_CATEGORY);
    assert_eq!(updated.content, "body");
}

#[test]
fn update_rejects_blank_title_and_leaves_row_untouched() {
    let conn = open_db_in_memory().unwrap();
    let service = NoteService::new(SqliteNoteRepository::new(&conn));

    let created = service.create("Keep", "body", "Work").unwrap();
    let err = service
        .update(
            created.id,
            NotePatch {
                title: Some("  ".to_string()),
                ..NotePatch::default()
            },
        )
        .unwrap_err();
    assert!(matches!(err, NoteServiceError::EmptyTitle));

    let note = service.get(created.id).unwrap().unwrap();
    assert_eq!(note.title, "Keep");
}

#[test]
fn update_missing_note_maps_to_note_not_found() {
    let conn = open_db_in_memory().unwrap();
    let service = NoteService::new(SqliteNoteRepository::new(&conn));

    let err = service
        .update(
            99,
            NotePatch {
                content: Some("ghost".to_string()),
                ..NotePatch::default()
            },
        )
        .unwrap_err();
    assert!(matches!(err, NoteServiceError::NoteNotFound(99)));
}

#[test]
fn empty_patch_update_on_missing_note_reports_not_found() {
    let conn = open_db_in_memory().unwrap();
    let service = NoteService::new(SqliteNoteRepository::new(&conn));

    let err = service.update(99, NotePatch::default()).unwrap_err();
    assert!(matches!(err, NoteServiceError::NoteNotFound(99)));
}

#[test]
fn empty_patch_update_on_existing_note_returns_it_unchanged() {
    let conn = open_db_in_memory().unwrap();
    let service = NoteService::new(SqliteNoteRepository::new(&conn));

    let created = service.create("Keep", "body", "Work").unwrap();
    let updated = service.update(created.id, NotePatch::default()).unwrap();
    assert_eq!(updated, created);
}

#[test]
fn delete_and_toggles_round_trip_through_the_service() {
    let conn = open_db_in_memory().unwrap();
    let service = NoteService::new(SqliteNoteRepository::new(&conn));

    let note = service.create("Flags", "", "General").unwrap();

    service.toggle_favorite(note.id).unwrap();
    service.toggle_pinned(note.id).unwrap();
    let flagged = service.get(note.id).unwrap().unwrap();
    assert!(flagged.favorite);
    assert!(flagged.is_pinned);

    service.delete(note.id).unwrap();
    assert!(service.get(note.id).unwrap().is_none());

    let err = service.delete(note.id).unwrap_err();
    assert!(matches!(err, NoteServiceError::NoteNotFound(id) if id == note.id));
}
