//! Store connection parameters

use serde::Deserialize;
use std::path::PathBuf;

/// File extension of database files inside `data_dir`
pub const DATABASE_EXTENSION: &str = "sqlite3";

/// Connection parameters for the registry store
///
/// Sourced by an outer configuration layer; the store only consumes them.
/// `data_dir` plays the role of the database server: every named database
/// lives in it as `<database>.sqlite3`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    pub data_dir: PathBuf,
    pub database: String,
    pub busy_timeout_ms: u64,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(".innkeep"),
            database: "hotel".to_string(),
            busy_timeout_ms: 5_000,
        }
    }
}

impl StoreConfig {
    pub fn new(data_dir: impl Into<PathBuf>, database: impl Into<String>) -> Self {
        Self {
            data_dir: data_dir.into(),
            database: database.into(),
            ..Self::default()
        }
    }

    /// Full path of the database file
    pub fn database_path(&self) -> PathBuf {
        self.data_dir
            .join(format!("{}.{}", self.database, DATABASE_EXTENSION))
    }
}
