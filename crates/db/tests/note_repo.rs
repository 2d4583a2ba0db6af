//! Integration tests for the PostgreSQL note repository.
//!
//! Each test gets a fresh database with migrations applied. They need a
//! reachable server via `DATABASE_URL`; run with `cargo test -- --ignored`.

use assert_matches::assert_matches;
use chrono::{Duration, Utc};
use notes_core::error::CoreError;
use notes_db::models::note::{NewNote, NotePatch, TITLE_TAKEN};
use notes_db::repositories::PgNoteRepo;
use notes_db::NoteGateway;
use sqlx::PgPool;
use uuid::Uuid;

fn new_note(title: &str) -> NewNote {
    let now = Utc::now();
    NewNote {
        title: title.to_string(),
        content: "body".to_string(),
        category: Some("misc".to_string()),
        published: true,
        created_at: now,
        updated_at: now,
    }
}

fn empty_patch() -> NotePatch {
    NotePatch {
        title: None,
        content: None,
        category: None,
        published: None,
        updated_at: Utc::now() + Duration::seconds(1),
    }
}

#[sqlx::test(migrations = "../../db/migrations")]
#[ignore = "requires DATABASE_URL"]
async fn bootstrap_is_idempotent(pool: PgPool) {
    notes_db::bootstrap(&pool).await.unwrap();
    notes_db::bootstrap(&pool).await.unwrap();
    notes_db::health_check(&pool).await.unwrap();
}

#[sqlx::test(migrations = "../../db/migrations")]
#[ignore = "requires DATABASE_URL"]
async fn insert_generates_id_and_keeps_timestamps_equal(pool: PgPool) {
    let repo = PgNoteRepo::new(pool);
    let note = repo.insert(&new_note("First")).await.unwrap();

    assert!(!note.id.is_nil());
    assert_eq!(note.created_at, note.updated_at);
    assert_eq!(note.title, "First");
    assert_eq!(note.category.as_deref(), Some("misc"));
    assert!(note.published);
}

#[sqlx::test(migrations = "../../db/migrations")]
#[ignore = "requires DATABASE_URL"]
async fn duplicate_title_maps_to_conflict(pool: PgPool) {
    let repo = PgNoteRepo::new(pool);
    repo.insert(&new_note("Same")).await.unwrap();

    let err = repo.insert(&new_note("Same")).await.unwrap_err();
    assert_matches!(err, CoreError::Conflict(msg) if msg == TITLE_TAKEN);
}

#[sqlx::test(migrations = "../../db/migrations")]
#[ignore = "requires DATABASE_URL"]
async fn renaming_onto_taken_title_maps_to_conflict(pool: PgPool) {
    let repo = PgNoteRepo::new(pool);
    repo.insert(&new_note("Taken")).await.unwrap();
    let other = repo.insert(&new_note("Free")).await.unwrap();

    let patch = NotePatch {
        title: Some("Taken".to_string()),
        ..empty_patch()
    };
    let err = repo.update_fields(other.id, &patch).await.unwrap_err();
    assert_matches!(err, CoreError::Conflict(msg) if msg == TITLE_TAKEN);

    let unchanged = repo.find_by_id(other.id).await.unwrap();
    assert_eq!(unchanged.title, "Free");
}

#[sqlx::test(migrations = "../../db/migrations")]
#[ignore = "requires DATABASE_URL"]
async fn find_page_is_bounded_by_limit(pool: PgPool) {
    let repo = PgNoteRepo::new(pool);
    for i in 0..5 {
        repo.insert(&new_note(&format!("note-{i}"))).await.unwrap();
    }

    assert_eq!(repo.find_page(2, 0).await.unwrap().len(), 2);
    assert_eq!(repo.find_page(2, 4).await.unwrap().len(), 1);
    assert!(repo.find_page(2, 10).await.unwrap().is_empty());
}

#[sqlx::test(migrations = "../../db/migrations")]
#[ignore = "requires DATABASE_URL"]
async fn unknown_id_is_not_found_and_delete_affects_zero_rows(pool: PgPool) {
    let repo = PgNoteRepo::new(pool);
    let id = Uuid::new_v4();

    assert_matches!(
        repo.find_by_id(id).await,
        Err(CoreError::NotFound { entity: "Note", .. })
    );
    assert_eq!(repo.delete_by_id(id).await.unwrap(), 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
#[ignore = "requires DATABASE_URL"]
async fn update_touches_only_present_fields(pool: PgPool) {
    let repo = PgNoteRepo::new(pool);
    let original = repo.insert(&new_note("Keep")).await.unwrap();

    let patch = NotePatch {
        category: Some("work".to_string()),
        ..empty_patch()
    };
    let updated = repo
        .update_fields(original.id, &patch)
        .await
        .unwrap()
        .expect("row exists");

    assert_eq!(updated.category.as_deref(), Some("work"));
    assert_eq!(updated.title, original.title);
    assert_eq!(updated.content, original.content);
    assert_eq!(updated.published, original.published);
    assert_eq!(updated.created_at, original.created_at);
    assert!(updated.updated_at > original.updated_at);
}

#[sqlx::test(migrations = "../../db/migrations")]
#[ignore = "requires DATABASE_URL"]
async fn explicit_false_unpublishes(pool: PgPool) {
    let repo = PgNoteRepo::new(pool);
    let note = repo.insert(&new_note("Public")).await.unwrap();
    assert!(note.published);

    let patch = NotePatch {
        published: Some(false),
        ..empty_patch()
    };
    repo.update_fields(note.id, &patch).await.unwrap();

    let stored = repo.find_by_id(note.id).await.unwrap();
    assert!(!stored.published);
}

#[sqlx::test(migrations = "../../db/migrations")]
#[ignore = "requires DATABASE_URL"]
async fn update_of_missing_row_returns_none(pool: PgPool) {
    let repo = PgNoteRepo::new(pool);
    let result = repo.update_fields(Uuid::new_v4(), &empty_patch()).await.unwrap();
    assert!(result.is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
#[ignore = "requires DATABASE_URL"]
async fn delete_removes_the_row(pool: PgPool) {
    let repo = PgNoteRepo::new(pool);
    let note = repo.insert(&new_note("Gone")).await.unwrap();

    assert_eq!(repo.delete_by_id(note.id).await.unwrap(), 1);
    assert_matches!(
        repo.find_by_id(note.id).await,
        Err(CoreError::NotFound { .. })
    );
}
