use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use notes_core::error::CoreError;

use crate::response::{ErrorResponse, ERROR, FAIL};

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds HTTP-specific variants.
/// Implements [`IntoResponse`] to produce the `{status, message}` envelope.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `notes_core` or the persistence gateway.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// The request body or query string could not be decoded.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// An unexpected failure inside the server, e.g. a handler panic.
    /// The detail is logged, never sent to the client.
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            AppError::Core(core) => match core {
                CoreError::NotFound { entity, .. } => (
                    StatusCode::NOT_FOUND,
                    ErrorResponse::new(
                        FAIL,
                        format!("No {} with that ID exists", entity.to_lowercase()),
                    ),
                ),
                CoreError::Validation(violations) => (
                    StatusCode::BAD_REQUEST,
                    ErrorResponse::new(FAIL, "Validation failed").with_errors(violations),
                ),
                CoreError::Conflict(msg) => (StatusCode::CONFLICT, ErrorResponse::new(FAIL, msg)),
                CoreError::Store(msg) => {
                    tracing::warn!(error = %msg, "Store failure surfaced to client");
                    (StatusCode::BAD_GATEWAY, ErrorResponse::new(ERROR, msg))
                }
            },

            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, ErrorResponse::new(FAIL, msg)),
            AppError::InternalError(msg) => {
                tracing::error!(error = %msg, "Internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse::new(ERROR, "An internal error occurred"),
                )
            }
        };

        (status, axum::Json(body)).into_response()
    }
}
