pub mod health;
pub mod note;

use axum::Router;

use crate::state::AppState;

/// Build the resource route tree.
///
/// ```text
/// /notes          list (GET), create (POST)
/// /notes/{id}     get (GET), update (PATCH), delete (DELETE)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().nest("/notes", note::router())
}
