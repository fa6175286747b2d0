//! SQLite connection bootstrap for the todo store.
//!
//! # Design
//! Connections are opened fresh per store operation, so everything a
//! usable connection needs (busy timeout, WAL journaling, foreign keys)
//! is applied here in one place. The schema is a single `todos` table;
//! `AUTOINCREMENT` keeps ids monotonic even across deletes.

use std::path::Path;
use std::time::Duration;

use rusqlite::Connection;

use crate::error::StoreError;

const TODOS_SCHEMA: &str = "
    CREATE TABLE IF NOT EXISTS todos (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        title TEXT NOT NULL CHECK (length(title) > 0),
        complete INTEGER NOT NULL DEFAULT 0
    )
";

/// Open the database at `path` and apply the connection pragmas.
pub(crate) fn connect(path: &Path) -> Result<Connection, StoreError> {
    let conn = Connection::open(path)?;
    conn.busy_timeout(Duration::from_secs(5))?;
    // journal_mode returns a row, so it cannot go through `execute`.
    conn.query_row("PRAGMA journal_mode=WAL;", [], |_| Ok(()))?;
    conn.execute("PRAGMA foreign_keys=ON;", [])?;
    Ok(conn)
}

/// Create the `todos` table if it does not exist yet.
pub(crate) fn ensure_schema(conn: &Connection) -> Result<(), StoreError> {
    conn.execute(TODOS_SCHEMA, [])?;
    Ok(())
}
