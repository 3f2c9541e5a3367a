//! Subcommand handlers
//!
//! Each handler takes the session opened at startup and returns
//! `Result<(), Box<dyn std::error::Error>>`; `main` prints the error and
//! exits 1.

pub mod check_in;
pub mod check_out;
pub mod find;
pub mod list;
pub mod menu;
