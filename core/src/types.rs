//! Domain types for the todo store.
//!
//! # Design
//! These types are the single source of truth for the wire shape: both the
//! JSON surface and the HTML surface in the server crate serialize `Todo`
//! exactly as it is stored, so the field names here (`id`, `title`,
//! `complete`) are the API contract.

use serde::{Deserialize, Serialize};

/// A single persisted todo item.
///
/// `id` is allocated by the store on creation and never reused; `title` is
/// immutable after creation; `complete` starts `false` and only changes via
/// the toggle operation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Todo {
    pub id: i64,
    pub title: String,
    pub complete: bool,
}

/// Request payload for creating a new todo.
///
/// Creation takes a title and nothing else; the store assigns the id and
/// sets `complete` to `false`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTodo {
    pub title: String,
}
