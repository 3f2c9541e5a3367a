//! Provisioning runner
//!
//! Creates the database if needed, opens a session on it and ensures the
//! schema, in that order.

use super::schema::ensure_schema;
use crate::config::StoreConfig;
use crate::errors::from_io;
use crate::session::Session;
use innkeep_core::errors::Result;
use innkeep_core::{log_op_end, log_op_error, log_op_start};
use std::fs::{self, OpenOptions};
use std::io;

/// What `create_database` found
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatabaseCreation {
    Created,
    AlreadyExists,
}

/// Create the target database, treating an existing one as success
///
/// Creates `data_dir` as needed, then claims `<database>.sqlite3` with an
/// exclusive create. Every error other than "already exists" propagates.
pub fn create_database(config: &StoreConfig) -> Result<DatabaseCreation> {
    fs::create_dir_all(&config.data_dir).map_err(|e| from_io("create_database", e))?;

    match OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(config.database_path())
    {
        Ok(_) => Ok(DatabaseCreation::Created),
        Err(e) if e.kind() == io::ErrorKind::AlreadyExists => Ok(DatabaseCreation::AlreadyExists),
        Err(e) => Err(from_io("create_database", e)),
    }
}

/// Ensure the database and the `customers` table exist and open a session
///
/// Safe to call on every startup. On failure the caller must not go on to
/// issue registry operations.
///
/// ## Errors
///
/// - `Storage`: the database could not be created, opened, configured, or
///   its schema could not be applied
pub fn ensure_ready(config: &StoreConfig) -> Result<Session> {
    log_op_start!("provision", database = config.database.as_str());
    let start = std::time::Instant::now();

    let session = ensure_ready_impl(config).map_err(|e| {
        log_op_error!(
            "provision",
            e.clone(),
            duration_ms = start.elapsed().as_millis() as u64
        );
        e
    })?;

    log_op_end!(
        "provision",
        duration_ms = start.elapsed().as_millis() as u64,
        database = config.database.as_str()
    );

    Ok(session)
}

fn ensure_ready_impl(config: &StoreConfig) -> Result<Session> {
    let path = config.database_path();

    match create_database(config)? {
        DatabaseCreation::Created => {
            tracing::info!(path = %path.display(), "created database")
        }
        DatabaseCreation::AlreadyExists => {
            tracing::debug!(path = %path.display(), "database already exists")
        }
    }

    let session = Session::open(&path, config)?;
    ensure_schema(&session)?;

    Ok(session)
}
