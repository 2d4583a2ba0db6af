//! Shared response envelope types for API handlers.
//!
//! Every response carries a top-level `status`: `"success"`, `"fail"`
//! (client-correctable) or `"error"` (server or store side).

use notes_core::validation::FieldViolation;
use notes_db::models::note::Note;
use serde::Serialize;

pub const SUCCESS: &str = "success";
pub const FAIL: &str = "fail";
pub const ERROR: &str = "error";

/// Standard `{ "status": "success", "data": T }` envelope.
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub status: &'static str,
    pub data: T,
}

impl<T: Serialize> DataResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            status: SUCCESS,
            data,
        }
    }
}

/// `data` payload of single-note responses.
#[derive(Debug, Serialize)]
pub struct NoteData {
    pub note: Note,
}

impl DataResponse<NoteData> {
    pub fn note(note: Note) -> Self {
        Self::success(NoteData { note })
    }
}

/// `{ "status": "success", "results": n, "notes": [...] }` list envelope.
#[derive(Debug, Serialize)]
pub struct NoteListResponse {
    pub status: &'static str,
    pub results: usize,
    pub notes: Vec<Note>,
}

impl NoteListResponse {
    pub fn new(notes: Vec<Note>) -> Self {
        Self {
            status: SUCCESS,
            results: notes.len(),
            notes,
        }
    }
}

/// `{ "status": "fail" | "error", "message": ... }` error envelope.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub status: &'static str,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<FieldViolation>>,
}

impl ErrorResponse {
    pub fn new(status: &'static str, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
            errors: None,
        }
    }

    pub fn with_errors(mut self, errors: Vec<FieldViolation>) -> Self {
        self.errors = Some(errors);
        self
    }
}
