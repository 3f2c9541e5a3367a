//! Error handling for innkeep-store
//!
//! Maps rusqlite and I/O failures onto `RegistryError` at the storage boundary.

use innkeep_core::errors::RegistryError;
use innkeep_core::RoomNumber;
use rusqlite::{ffi, ErrorCode};

/// Qualified column SQLite names in a room-number uniqueness failure
pub const ROOM_NUMBER_COLUMN: &str = "customers.room_number";

/// Create a storage error from rusqlite::Error
pub fn from_rusqlite(op: &str, err: rusqlite::Error) -> RegistryError {
    RegistryError::storage(op, err.to_string())
}

/// Create a storage error from an I/O failure
pub fn from_io(op: &str, err: std::io::Error) -> RegistryError {
    RegistryError::storage(op, err.to_string())
}

/// Whether the error is the room-number uniqueness constraint firing
///
/// Matches on the SQLite extended result code and the offending column, not on
/// the rendered message as a whole.
pub fn is_room_number_conflict(err: &rusqlite::Error) -> bool {
    match err {
        rusqlite::Error::SqliteFailure(failure, message) => {
            failure.code == ErrorCode::ConstraintViolation
                && failure.extended_code == ffi::SQLITE_CONSTRAINT_UNIQUE
                && message
                    .as_deref()
                    .is_some_and(|m| m.contains(ROOM_NUMBER_COLUMN))
        }
        _ => false,
    }
}

/// Classify a failed insert: the room-number conflict or a generic storage error
pub fn classify_insert_error(err: rusqlite::Error, room_number: RoomNumber) -> RegistryError {
    if is_room_number_conflict(&err) {
        RegistryError::RoomOccupied { room_number }
    } else {
        from_rusqlite("insert_customer", err)
    }
}
