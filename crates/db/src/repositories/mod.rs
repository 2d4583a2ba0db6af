//! Gateway implementations.
//!
//! [`PgNoteRepo`] is the production store; [`MemoryNoteRepo`] keeps notes in
//! process and backs the HTTP-level tests.

pub mod memory;
pub mod note_repo;

pub use memory::MemoryNoteRepo;
pub use note_repo::PgNoteRepo;
