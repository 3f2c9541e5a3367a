//! Core types shared across Innkeep facilities
//!
//! This crate holds the canonical structured-logging vocabulary used by the
//! error and logging facilities in `innkeep-core` and by every crate that
//! emits lifecycle events.

pub mod schema;
