//! The todo store: sole owner of todo persistence.
//!
//! # Design
//! `TodoStore` holds a database path and a write mutex, never a long-lived
//! connection. Every operation opens a fresh connection scoped to that one
//! operation and drops it on every exit path, so uncommitted work rolls
//! back automatically on failure. Writes serialize through the mutex;
//! WAL mode lets readers run without it.

use std::path::PathBuf;
use std::sync::{Mutex, PoisonError};

use rusqlite::{params, Connection, Row};

use crate::db;
use crate::error::StoreError;
use crate::types::Todo;

/// Durable, SQLite-backed collection of [`Todo`] records.
///
/// All reads and writes go through this type; nothing else touches the
/// `todos` table.
#[derive(Debug)]
pub struct TodoStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl TodoStore {
    /// Open a store backed by the SQLite file at `path`, creating the file
    /// and schema on first use.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let store = Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        };
        store.with_write(|conn| db::ensure_schema(conn))?;
        Ok(store)
    }

    /// All todos in insertion order. Empty vector if none exist.
    pub fn list(&self) -> Result<Vec<Todo>, StoreError> {
        self.with_read(|conn| {
            let mut stmt = conn.prepare("SELECT id, title, complete FROM todos ORDER BY id")?;
            let rows = stmt.query_map([], row_to_todo)?;
            let todos = rows.collect::<Result<Vec<_>, _>>()?;
            Ok(todos)
        })
    }

    /// Insert a new todo with `complete = false` and return it as stored.
    ///
    /// Rejects empty and whitespace-only titles with
    /// [`StoreError::EmptyTitle`]; the title is otherwise stored verbatim.
    pub fn create(&self, title: &str) -> Result<Todo, StoreError> {
        if title.trim().is_empty() {
            return Err(StoreError::EmptyTitle);
        }
        self.with_write(|conn| {
            let tx = conn.transaction()?;
            tx.execute(
                "INSERT INTO todos (title, complete) VALUES (?1, 0)",
                params![title],
            )?;
            let id = tx.last_insert_rowid();
            let todo = tx.query_row(
                "SELECT id, title, complete FROM todos WHERE id = ?1",
                params![id],
                row_to_todo,
            )?;
            tx.commit()?;
            Ok(todo)
        })
    }

    /// Flip `complete` for the todo with `id` and return the updated record.
    ///
    /// Deliberately not idempotent: repeated calls alternate the flag.
    pub fn toggle(&self, id: i64) -> Result<Todo, StoreError> {
        self.with_write(|conn| {
            let tx = conn.transaction()?;
            let changed = tx.execute(
                "UPDATE todos SET complete = NOT complete WHERE id = ?1",
                params![id],
            )?;
            if changed == 0 {
                return Err(StoreError::NotFound(id));
            }
            let todo = tx.query_row(
                "SELECT id, title, complete FROM todos WHERE id = ?1",
                params![id],
                row_to_todo,
            )?;
            tx.commit()?;
            Ok(todo)
        })
    }

    /// Remove the todo with `id` permanently.
    ///
    /// A second delete of the same id reports [`StoreError::NotFound`]
    /// rather than silently succeeding.
    pub fn delete(&self, id: i64) -> Result<(), StoreError> {
        self.with_write(|conn| {
            let changed = conn.execute("DELETE FROM todos WHERE id = ?1", params![id])?;
            if changed == 0 {
                return Err(StoreError::NotFound(id));
            }
            Ok(())
        })
    }

    /// Run `op` with a fresh read connection. No mutex: WAL allows
    /// concurrent readers.
    fn with_read<T>(
        &self,
        op: impl FnOnce(&Connection) -> Result<T, StoreError>,
    ) -> Result<T, StoreError> {
        let conn = db::connect(&self.path)?;
        op(&conn)
    }

    /// Run `op` with a fresh write connection, serialized through the
    /// store's write mutex.
    fn with_write<T>(
        &self,
        op: impl FnOnce(&mut Connection) -> Result<T, StoreError>,
    ) -> Result<T, StoreError> {
        // The mutex guards no data; a poisoned token still serializes.
        let _guard = self
            .write_lock
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        let mut conn = db::connect(&self.path)?;
        op(&mut conn)
    }
}

fn row_to_todo(row: &Row<'_>) -> rusqlite::Result<Todo> {
    Ok(Todo {
        id: row.get(0)?,
        title: row.get(1)?,
        complete: row.get(2)?,
    })
}
