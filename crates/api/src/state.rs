use std::sync::Arc;

use notes_db::NoteGateway;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Persistence gateway for notes, injected at startup.
    pub notes: Arc<dyn NoteGateway>,
}
