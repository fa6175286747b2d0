//! Error types for the todo store.
//!
//! # Design
//! `NotFound` gets a dedicated variant because callers distinguish "the
//! todo does not exist" (a client mistake, 404 at the boundary) from
//! `Storage` (the database itself failed, 500 at the boundary).
//! `EmptyTitle` is the one validation rule the store enforces.

use thiserror::Error;

/// Errors returned by [`TodoStore`](crate::TodoStore) operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// No todo exists with the given id.
    #[error("no todo with id {0}")]
    NotFound(i64),

    /// The title was empty or whitespace-only.
    #[error("todo title must not be empty")]
    EmptyTitle,

    /// The underlying SQLite database failed or is unreachable.
    #[error("storage error: {0}")]
    Storage(#[from] rusqlite::Error),
}
