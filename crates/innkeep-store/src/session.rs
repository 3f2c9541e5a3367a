//! Scoped connection handle

use crate::config::StoreConfig;
use crate::db;
use crate::errors::from_rusqlite;
use innkeep_core::errors::Result;
use rusqlite::Connection;
use std::path::{Path, PathBuf};

/// An open session against one registry database
///
/// Acquired once at startup and shared by every registry operation. The
/// underlying connection is released when the session is dropped, whatever
/// path the caller takes out; [`Session::close`] releases it explicitly and
/// reports any failure doing so.
#[derive(Debug)]
pub struct Session {
    conn: Connection,
    path: Option<PathBuf>,
}

impl Session {
    /// Open a session on an existing database file
    pub fn open(path: &Path, config: &StoreConfig) -> Result<Self> {
        let conn = db::open(path)?;
        db::configure(&conn, config.busy_timeout_ms)?;
        Ok(Self {
            conn,
            path: Some(path.to_path_buf()),
        })
    }

    /// Open a session on a private in-memory database
    pub fn open_in_memory() -> Result<Self> {
        let conn = db::open_in_memory()?;
        Ok(Self { conn, path: None })
    }

    pub fn connection(&self) -> &Connection {
        &self.conn
    }

    /// Database file backing this session; `None` for in-memory sessions
    pub fn database_path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Close the session, surfacing errors the implicit drop would swallow
    pub fn close(self) -> Result<()> {
        self.conn
            .close()
            .map_err(|(_, e)| from_rusqlite("close_session", e))
    }
}
