//! In-process [`NoteGateway`] backed by a vector.
//!
//! Mirrors the PostgreSQL repository's observable behaviour (generated ids,
//! unique titles, insertion-ordered pages) so the HTTP layer can be exercised
//! without a database.

use async_trait::async_trait;
use notes_core::error::CoreError;
use notes_core::types::DbId;
use tokio::sync::RwLock;

use crate::gateway::{NoteGateway, NOTE_ENTITY};
use crate::models::note::{NewNote, Note, NotePatch, TITLE_TAKEN};

#[derive(Default)]
pub struct MemoryNoteRepo {
    notes: RwLock<Vec<Note>>,
}

impl MemoryNoteRepo {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored notes.
    pub async fn len(&self) -> usize {
        self.notes.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.notes.read().await.is_empty()
    }
}

fn title_taken(notes: &[Note], title: &str, except: Option<DbId>) -> bool {
    notes
        .iter()
        .any(|n| n.title == title && Some(n.id) != except)
}

#[async_trait]
impl NoteGateway for MemoryNoteRepo {
    async fn insert(&self, note: &NewNote) -> Result<Note, CoreError> {
        let mut notes = self.notes.write().await;
        if title_taken(&notes, &note.title, None) {
            return Err(CoreError::Conflict(TITLE_TAKEN.to_string()));
        }

        let stored = Note {
            id: DbId::new_v4(),
            title: note.title.clone(),
            content: note.content.clone(),
            category: note.category.clone(),
            published: note.published,
            created_at: note.created_at,
            updated_at: note.updated_at,
        };
        notes.push(stored.clone());
        Ok(stored)
    }

    async fn find_by_id(&self, id: DbId) -> Result<Note, CoreError> {
        self.notes
            .read()
            .await
            .iter()
            .find(|n| n.id == id)
            .cloned()
            .ok_or_else(|| CoreError::not_found(NOTE_ENTITY, id))
    }

    async fn find_page(&self, limit: i64, offset: i64) -> Result<Vec<Note>, CoreError> {
        let skip = usize::try_from(offset.max(0)).unwrap_or(usize::MAX);
        let take = usize::try_from(limit.max(0)).unwrap_or(usize::MAX);
        Ok(self
            .notes
            .read()
            .await
            .iter()
            .skip(skip)
            .take(take)
            .cloned()
            .collect())
    }

    async fn update_fields(&self, id: DbId, patch: &NotePatch) -> Result<Option<Note>, CoreError> {
        let mut notes = self.notes.write().await;
        if let Some(title) = &patch.title {
            if title_taken(&notes, title, Some(id)) {
                return Err(CoreError::Conflict(TITLE_TAKEN.to_string()));
            }
        }

        Ok(notes.iter_mut().find(|n| n.id == id).map(|note| {
            patch.apply_to(note);
            note.clone()
        }))
    }

    async fn delete_by_id(&self, id: DbId) -> Result<u64, CoreError> {
        let mut notes = self.notes.write().await;
        let before = notes.len();
        notes.retain(|n| n.id != id);
        Ok((before - notes.len()) as u64)
    }

    async fn ping(&self) -> Result<(), CoreError> {
        Ok(())
    }
}
