use crate::errors::{RegistryError, Result};
use crate::model::{CheckInRequest, NewCustomer, RoomNumber};

/// Require a non-blank text field, returning it trimmed
///
/// # Errors
/// Returns `MissingField` if the value is absent, empty, or whitespace-only.
pub fn require_text(field: &'static str, value: Option<&str>) -> Result<String> {
    match value.map(str::trim) {
        Some(text) if !text.is_empty() => Ok(text.to_string()),
        _ => Err(RegistryError::MissingField { field }),
    }
}

/// Require a room number field and parse it
///
/// # Errors
/// Returns `MissingField` if absent or blank, `InvalidRoomNumber` if it is
/// present but not an integer.
pub fn require_room_number(value: Option<&str>) -> Result<RoomNumber> {
    match value {
        Some(raw) => RoomNumber::parse(raw),
        None => Err(RegistryError::MissingField {
            field: "room_number",
        }),
    }
}

/// Validate a check-in request
///
/// Fields are checked in entry order (name, contact, address, room number) and
/// the first failure is reported. Nothing here touches storage.
///
/// # Errors
/// See [`require_text`] and [`require_room_number`].
pub fn validate_check_in(request: &CheckInRequest) -> Result<NewCustomer> {
    let name = require_text("name", request.name.as_deref())?;
    let contact = require_text("contact", request.contact.as_deref())?;
    let address = require_text("address", request.address.as_deref())?;
    let room_number = require_room_number(request.room_number.as_deref())?;

    Ok(NewCustomer {
        name,
        contact,
        address,
        room_number,
    })
}
