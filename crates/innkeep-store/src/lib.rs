//! Innkeep Store - SQLite persistence for the guest registry
//!
//! Provides:
//! - `StoreConfig`, the connection parameters consumed by the provisioner
//! - The schema provisioner (`provision::ensure_ready`), which idempotently
//!   creates the database and the `customers` table
//! - `Session`, the scoped connection handle shared by all registry operations
//! - `CustomerRepo`, the SQL behind check-in, list, find and check-out
//! - Classification of SQLite failures into `RegistryError`

pub mod config;
pub mod db;
pub mod errors;
pub mod provision;
pub mod repo;
pub mod session;

// Re-export key types
pub use config::StoreConfig;
pub use innkeep_core::errors::Result;
pub use provision::{ensure_ready, DatabaseCreation};
pub use repo::CustomerRepo;
pub use session::Session;
