//! Schema provisioner
//!
//! Provides:
//! - Idempotent database creation ("already exists" is success)
//! - Idempotent `customers` table creation
//! - `ensure_ready`, the single startup entry point returning a live `Session`

mod runner;
mod schema;

pub use runner::{create_database, ensure_ready, DatabaseCreation};
pub use schema::{ensure_schema, CUSTOMERS_DDL, CUSTOMERS_TABLE};
