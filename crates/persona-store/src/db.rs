//! Database connection management
//!
//! Opening and configuring SQLite connections for sessions

use crate::errors::{connection_error, Result};
use rusqlite::{Connection, OpenFlags};
use std::path::Path;
use std::time::Duration;

const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// Open an existing SQLite database file
///
/// A missing file is a `Connection` error unless `create` is set, in which
/// case the file is created. The directory must exist either way.
pub fn open<P: AsRef<Path>>(path: P, create: bool) -> Result<Connection> {
    let path = path.as_ref();
    let mut flags = OpenFlags::SQLITE_OPEN_READ_WRITE
        | OpenFlags::SQLITE_OPEN_URI
        | OpenFlags::SQLITE_OPEN_NO_MUTEX;
    if create {
        flags |= OpenFlags::SQLITE_OPEN_CREATE;
    }
    Connection::open_with_flags(path, flags)
        .map_err(|e| connection_error(&path.display().to_string(), e))
}

/// Open a private in-memory SQLite database (for testing)
pub fn open_in_memory() -> Result<Connection> {
    Connection::open_in_memory().map_err(|e| connection_error(":memory:", e))
}

/// Open a named shared-cache in-memory database
///
/// Every connection opened with the same name sees the same database for as
/// long as at least one of them stays open.
pub fn open_shared_memory(name: &str) -> Result<Connection> {
    let uri = shared_memory_uri(name);
    Connection::open_with_flags(
        &uri,
        OpenFlags::SQLITE_OPEN_READ_WRITE
            | OpenFlags::SQLITE_OPEN_CREATE
            | OpenFlags::SQLITE_OPEN_URI
            | OpenFlags::SQLITE_OPEN_NO_MUTEX,
    )
    .map_err(|e| connection_error(&uri, e))
}

fn shared_memory_uri(name: &str) -> String {
    format!("file:{}?mode=memory&cache=shared", name)
}

/// Configure a connection for session use
pub fn configure(conn: &Connection) -> Result<()> {
    // Fails early on unreadable files and non-SQLite files.
    conn.query_row("SELECT COUNT(*) FROM sqlite_master", [], |row| row.get::<_, i64>(0))
        .map_err(|e| connection_error("schema probe", e))?;

    conn.busy_timeout(BUSY_TIMEOUT)
        .map_err(|e| connection_error("busy_timeout", e))?;

    conn.pragma_update(None, "foreign_keys", true)
        .map_err(|e| connection_error("foreign_keys", e))?;

    // In-memory databases report "memory" and keep their journal mode.
    let _mode: String = conn
        .pragma_update_and_check(None, "journal_mode", "WAL", |row| row.get(0))
        .map_err(|e| connection_error("journal_mode", e))?;

    Ok(())
}
