//! Note entity model and DTOs.

use notes_core::types::{DbId, Timestamp};
use notes_core::validation::{present_text, required_text};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// Client-facing message for a title uniqueness violation.
pub const TITLE_TAKEN: &str = "Title already exists, please use another title";

/// A note row from the `notes` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub id: DbId,
    pub title: String,
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    pub published: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Request body for creating a note.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct CreateNoteInput {
    #[serde(default)]
    #[validate(custom(function = "required_text"), length(max = 255))]
    pub title: String,
    #[serde(default)]
    #[validate(custom(function = "required_text"))]
    pub content: String,
    #[validate(length(max = 100))]
    pub category: Option<String>,
    #[serde(default)]
    pub published: bool,
}

/// Request body for a partial update. Absent fields are left untouched.
///
/// `published` stays an `Option` so an explicit `false` can be told apart
/// from an omitted key.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateNoteInput {
    #[validate(custom(function = "present_text"), length(max = 255))]
    pub title: Option<String>,
    #[validate(custom(function = "present_text"))]
    pub content: Option<String>,
    #[validate(length(max = 100))]
    pub category: Option<String>,
    pub published: Option<bool>,
}

/// A fully-built note ready for insertion.
#[derive(Debug, Clone, PartialEq)]
pub struct NewNote {
    pub title: String,
    pub content: String,
    pub category: Option<String>,
    pub published: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl NewNote {
    /// Build from a validated create request, stamping both timestamps with `now`.
    pub fn from_input(input: CreateNoteInput, now: Timestamp) -> Self {
        Self {
            title: input.title,
            content: input.content,
            category: non_empty(input.category),
            published: input.published,
            created_at: now,
            updated_at: now,
        }
    }
}

/// The set of columns an update actually touches.
///
/// `None` means "leave as is". `updated_at` is always written.
#[derive(Debug, Clone, PartialEq)]
pub struct NotePatch {
    pub title: Option<String>,
    pub content: Option<String>,
    pub category: Option<String>,
    pub published: Option<bool>,
    pub updated_at: Timestamp,
}

impl NotePatch {
    /// Keep only the non-empty text fields and an explicitly sent `published`.
    pub fn from_input(input: UpdateNoteInput, now: Timestamp) -> Self {
        Self {
            title: non_empty(input.title),
            content: non_empty(input.content),
            category: non_empty(input.category),
            published: input.published,
            updated_at: now,
        }
    }

    /// Apply the present fields to an in-memory note.
    pub fn apply_to(&self, note: &mut Note) {
        if let Some(title) = &self.title {
            note.title = title.clone();
        }
        if let Some(content) = &self.content {
            note.content = content.clone();
        }
        if let Some(category) = &self.category {
            note.category = Some(category.clone());
        }
        if let Some(published) = self.published {
            note.published = published;
        }
        note.updated_at = self.updated_at;
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.is_empty())
}
