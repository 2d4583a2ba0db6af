//! Handlers for the `/notes` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use chrono::Utc;
use notes_core::error::CoreError;
use notes_core::pagination::Page;
use notes_core::types::DbId;
use notes_core::validation::ensure_valid;
use notes_db::gateway::NOTE_ENTITY;
use notes_db::models::note::{CreateNoteInput, NewNote, NotePatch, UpdateNoteInput};
use serde::{de, Deserialize, Deserializer};

use crate::error::{AppError, AppResult};
use crate::extract::{AppJson, AppQuery};
use crate::response::{DataResponse, NoteData, NoteListResponse};
use crate::state::AppState;

/// Query parameters for `GET /notes` (`?page=&limit=`).
///
/// An empty value (`?page=`) counts as absent.
#[derive(Debug, Default, Deserialize)]
pub struct ListNotesParams {
    #[serde(default, deserialize_with = "empty_as_none")]
    pub page: Option<i64>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub limit: Option<i64>,
}

fn empty_as_none<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => value.parse().map(Some).map_err(de::Error::custom),
    }
}

/// POST /notes
pub async fn create(
    State(state): State<AppState>,
    AppJson(input): AppJson<CreateNoteInput>,
) -> AppResult<(StatusCode, Json<DataResponse<NoteData>>)> {
    ensure_valid(&input)?;

    let new_note = NewNote::from_input(input, Utc::now());
    let note = state.notes.insert(&new_note).await?;
    tracing::info!(note_id = %note.id, "Note created");

    Ok((StatusCode::CREATED, Json(DataResponse::note(note))))
}

/// GET /notes
pub async fn list(
    State(state): State<AppState>,
    AppQuery(params): AppQuery<ListNotesParams>,
) -> AppResult<Json<NoteListResponse>> {
    let page = Page::resolve(params.page, params.limit);
    let notes = state.notes.find_page(page.limit, page.offset).await?;
    tracing::debug!(limit = page.limit, offset = page.offset, results = notes.len(), "Listed notes");

    Ok(Json(NoteListResponse::new(notes)))
}

/// GET /notes/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<DataResponse<NoteData>>> {
    let id = parse_note_id(&id)?;
    let note = state.notes.find_by_id(id).await?;
    Ok(Json(DataResponse::note(note)))
}

/// PATCH /notes/{id}
///
/// Only fields present in the body are changed; `updatedAt` is always
/// refreshed. Responds with the row as stored after the update.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    AppJson(input): AppJson<UpdateNoteInput>,
) -> AppResult<Json<DataResponse<NoteData>>> {
    let id = parse_note_id(&id)?;
    ensure_valid(&input)?;

    // Existence check first: the update itself reports a missing row as `None`.
    state.notes.find_by_id(id).await?;

    let patch = NotePatch::from_input(input, Utc::now());
    let note = state
        .notes
        .update_fields(id, &patch)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found(NOTE_ENTITY, id)))?;
    tracing::info!(note_id = %id, "Note updated");

    Ok(Json(DataResponse::note(note)))
}

/// DELETE /notes/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<String>) -> AppResult<StatusCode> {
    let id = parse_note_id(&id)?;
    let deleted = state.notes.delete_by_id(id).await?;
    if deleted == 0 {
        return Err(AppError::Core(CoreError::not_found(NOTE_ENTITY, id)));
    }
    tracing::info!(note_id = %id, "Note deleted");
    Ok(StatusCode::NO_CONTENT)
}

/// A path segment that is not a UUID cannot name a stored note.
fn parse_note_id(raw: &str) -> Result<DbId, CoreError> {
    raw.parse::<DbId>()
        .map_err(|_| CoreError::not_found(NOTE_ENTITY, raw))
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use axum::extract::rejection::QueryRejection;
    use axum::extract::Query;
    use axum::http::Uri;

    use super::*;

    fn params(query: &str) -> Result<ListNotesParams, QueryRejection> {
        let uri: Uri = format!("/notes?{query}").parse().unwrap();
        Query::try_from_uri(&uri).map(|Query(params)| params)
    }

    #[test]
    fn empty_paging_values_are_absent() {
        let parsed = params("page=&limit=").unwrap();
        assert_eq!((parsed.page, parsed.limit), (None, None));

        let parsed = params("page=2&limit=5").unwrap();
        assert_eq!((parsed.page, parsed.limit), (Some(2), Some(5)));

        let parsed = params("").unwrap();
        assert_eq!((parsed.page, parsed.limit), (None, None));
    }

    #[test]
    fn non_numeric_paging_is_rejected() {
        assert!(params("page=abc").is_err());
    }

    #[test]
    fn parse_note_id_accepts_uuid() {
        let id = DbId::new_v4();
        assert_eq!(parse_note_id(&id.to_string()).unwrap(), id);
    }

    #[test]
    fn parse_note_id_maps_garbage_to_not_found() {
        assert_matches!(
            parse_note_id("not-a-uuid"),
            Err(CoreError::NotFound { entity: "Note", id }) if id == "not-a-uuid"
        );
    }
}
