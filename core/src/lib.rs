//! Synchronous persistence core for the todo service.
//!
//! # Overview
//! Owns the durable collection of todo records in a single SQLite table
//! and exposes the four store operations (list, create, toggle, delete).
//! The server crate layers HTTP on top; this crate never touches the
//! network and stays fully testable in isolation.
//!
//! # Design
//! - `TodoStore` holds only a database path and a write mutex — no
//!   long-lived connection. Each operation opens a connection scoped to
//!   that call, so release is guaranteed on every exit path.
//! - Mutations run inside one transaction per operation; a failed
//!   operation rolls back on drop.
//! - `NotFound` and `EmptyTitle` are structured errors, never panics,
//!   so both HTTP surfaces can translate them into proper statuses.

mod db;
pub mod error;
pub mod store;
pub mod types;

pub use error::StoreError;
pub use store::TodoStore;
pub use types::{CreateTodo, Todo};
