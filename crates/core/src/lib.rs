//! Domain building blocks shared by the notes service crates.
//!
//! Holds the id/timestamp aliases, the [`error::CoreError`] taxonomy, the
//! declarative validation engine and pagination arithmetic. Nothing in here
//! touches the database or HTTP.

pub mod error;
pub mod pagination;
pub mod types;
pub mod validation;
