//! Innkeep Core - guest registry domain kernel
//!
//! This crate provides the storage-agnostic pieces of the guest registry:
//! - The `Customer` record, `RoomNumber`, and check-in/check-out request types
//! - Input validation for caller-supplied fields
//! - The error taxonomy (`RegistryError`) and the structured error facility
//!   (`ExError`, `ExErrorKind`) with stable codes
//! - The structured logging facility shared by the store and engine layers

pub mod errors;
pub mod logging_facility;
pub mod model;
pub mod rules;

// Re-export commonly used types
pub use errors::{ExError, ExErrorKind, OutcomeKind, RegistryError, Result};
pub use model::{
    CheckInRequest, Confirmation, Customer, NewCustomer, PendingCheckOut, RoomNumber,
};
