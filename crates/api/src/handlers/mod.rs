//! Request handlers.
//!
//! Each submodule provides async handler functions for one resource. Handlers
//! validate input, delegate to the injected gateway on [`AppState`] and map
//! errors via [`AppError`].
//!
//! [`AppState`]: crate::state::AppState
//! [`AppError`]: crate::error::AppError

pub mod note;
