//! Database connection management
//!
//! Opens and configures SQLite connections

use crate::errors::from_rusqlite;
use innkeep_core::errors::Result;
use rusqlite::{Connection, OpenFlags};
use std::path::Path;
use std::time::Duration;

/// Open an existing SQLite database at the given path
///
/// The file must already exist; creation is the provisioner's job.
pub fn open<P: AsRef<Path>>(path: P) -> Result<Connection> {
    Connection::open_with_flags(
        path,
        OpenFlags::SQLITE_OPEN_READ_WRITE | OpenFlags::SQLITE_OPEN_NO_MUTEX,
    )
    .map_err(|e| from_rusqlite("open_database", e))
}

/// Open an in-memory SQLite database (for testing)
pub fn open_in_memory() -> Result<Connection> {
    Connection::open_in_memory().map_err(|e| from_rusqlite("open_database", e))
}

/// Configure a connection: bounded busy waits and WAL journaling
pub fn configure(conn: &Connection, busy_timeout_ms: u64) -> Result<()> {
    conn.busy_timeout(Duration::from_millis(busy_timeout_ms))
        .map_err(|e| from_rusqlite("configure_connection", e))?;

    // In-memory databases report "memory" and keep it
    let mode: String = conn
        .pragma_update_and_check(None, "journal_mode", "WAL", |row| row.get(0))
        .map_err(|e| from_rusqlite("configure_connection", e))?;
    tracing::debug!(journal_mode = %mode, "connection configured");

    Ok(())
}
