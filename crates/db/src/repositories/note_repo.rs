//! Repository for the `notes` table.

use async_trait::async_trait;
use notes_core::error::CoreError;
use notes_core::types::DbId;
use sqlx::PgPool;

use crate::gateway::{NoteGateway, NOTE_ENTITY};
use crate::models::note::{NewNote, Note, NotePatch, TITLE_TAKEN};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, content, category, published, created_at, updated_at";

/// PostgreSQL implementation of [`NoteGateway`].
#[derive(Clone)]
pub struct PgNoteRepo {
    pool: PgPool,
}

impl PgNoteRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl NoteGateway for PgNoteRepo {
    async fn insert(&self, note: &NewNote) -> Result<Note, CoreError> {
        let query = format!(
            "INSERT INTO notes (title, content, category, published, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Note>(&query)
            .bind(&note.title)
            .bind(&note.content)
            .bind(&note.category)
            .bind(note.published)
            .bind(note.created_at)
            .bind(note.updated_at)
            .fetch_one(&self.pool)
            .await
            .map_err(classify_sqlx_error)
    }

    async fn find_by_id(&self, id: DbId) -> Result<Note, CoreError> {
        let query = format!("SELECT {COLUMNS} FROM notes WHERE id = $1");
        sqlx::query_as::<_, Note>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(classify_sqlx_error)?
            .ok_or_else(|| CoreError::not_found(NOTE_ENTITY, id))
    }

    async fn find_page(&self, limit: i64, offset: i64) -> Result<Vec<Note>, CoreError> {
        let query =
            format!("SELECT {COLUMNS} FROM notes ORDER BY created_at, id LIMIT $1 OFFSET $2");
        sqlx::query_as::<_, Note>(&query)
            .bind(limit)
            .bind(offset)
            .fetch_all(&self.pool)
            .await
            .map_err(classify_sqlx_error)
    }

    async fn update_fields(&self, id: DbId, patch: &NotePatch) -> Result<Option<Note>, CoreError> {
        let query = format!(
            "UPDATE notes SET
                title = COALESCE($2, title),
                content = COALESCE($3, content),
                category = COALESCE($4, category),
                published = COALESCE($5, published),
                updated_at = $6
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Note>(&query)
            .bind(id)
            .bind(&patch.title)
            .bind(&patch.content)
            .bind(&patch.category)
            .bind(patch.published)
            .bind(patch.updated_at)
            .fetch_optional(&self.pool)
            .await
            .map_err(classify_sqlx_error)
    }

    async fn delete_by_id(&self, id: DbId) -> Result<u64, CoreError> {
        let result = sqlx::query("DELETE FROM notes WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(classify_sqlx_error)?;
        Ok(result.rows_affected())
    }

    async fn ping(&self) -> Result<(), CoreError> {
        crate::health_check(&self.pool)
            .await
            .map_err(classify_sqlx_error)
    }
}

/// SQLSTATE for `unique_violation`.
const UNIQUE_VIOLATION: &str = "23505";

/// Translate a sqlx error into the domain taxonomy.
///
/// Unique violations on a `uq_`-prefixed constraint become `Conflict`;
/// everything else becomes `Store` and is logged.
fn classify_sqlx_error(err: sqlx::Error) -> CoreError {
    if let sqlx::Error::Database(db_err) = &err {
        if let Some(conflict) = unique_conflict(db_err.code().as_deref(), db_err.constraint()) {
            return conflict;
        }
    }
    tracing::error!(error = %err, "Database error");
    CoreError::Store(err.to_string())
}

/// The `Conflict` for a database error `code` raised by `constraint`, if it is
/// a unique violation on one of our `uq_` constraints.
fn unique_conflict(code: Option<&str>, constraint: Option<&str>) -> Option<CoreError> {
    if code != Some(UNIQUE_VIOLATION) {
        return None;
    }
    match constraint? {
        "uq_notes_title" => Some(CoreError::Conflict(TITLE_TAKEN.to_string())),
        other if other.starts_with("uq_") => Some(CoreError::Conflict(format!(
            "Duplicate value violates unique constraint: {other}"
        ))),
        _ => None,
    }
}
