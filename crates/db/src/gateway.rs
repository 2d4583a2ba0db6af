//! The persistence seam the note handlers depend on.

use async_trait::async_trait;
use notes_core::error::CoreError;
use notes_core::types::DbId;

use crate::models::note::{NewNote, Note, NotePatch};

/// Entity name used in [`CoreError::NotFound`].
pub const NOTE_ENTITY: &str = "Note";

/// CRUD access to stored notes.
///
/// Implementations translate backend failures into [`CoreError`]:
/// uniqueness violations become `Conflict`, everything unexpected `Store`.
#[async_trait]
pub trait NoteGateway: Send + Sync {
    /// Insert a note and return it with its generated id.
    async fn insert(&self, note: &NewNote) -> Result<Note, CoreError>;

    /// Fetch one note. Fails with `NotFound` when no row matches.
    async fn find_by_id(&self, id: DbId) -> Result<Note, CoreError>;

    /// Fetch at most `limit` notes starting at `offset`, oldest first.
    async fn find_page(&self, limit: i64, offset: i64) -> Result<Vec<Note>, CoreError>;

    /// Apply the present fields of `patch` and return the stored row.
    ///
    /// Returns `Ok(None)` when no row has the id; deciding whether that is an
    /// error is left to the caller.
    async fn update_fields(&self, id: DbId, patch: &NotePatch) -> Result<Option<Note>, CoreError>;

    /// Remove a note, returning how many rows were deleted.
    async fn delete_by_id(&self, id: DbId) -> Result<u64, CoreError>;

    /// Cheap reachability probe.
    async fn ping(&self) -> Result<(), CoreError>;
}
