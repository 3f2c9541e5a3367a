//! Two-phase check-out
//!
//! `resolve_check_out` finds the occupant without mutating anything; the
//! caller shows the name, asks the operator, and hands the answer to
//! `confirm_check_out`. Between the two phases another session may remove the
//! record; that case is detected by the delete's row count only.

use innkeep_core::errors::{RegistryError, Result};
use innkeep_core::model::{Confirmation, PendingCheckOut, RoomNumber};
use innkeep_core::{log_op_end, log_op_error, log_op_start};
use innkeep_store::{CustomerRepo, Session};

/// Resolve the occupant of a room ahead of check-out
///
/// ## Errors
///
/// - `MissingField` / `InvalidRoomNumber`: input is blank or not an integer
///   (storage is not touched)
/// - `RoomVacant`: nobody is checked into the room
/// - `Storage`: database failure
pub fn resolve_check_out(session: &Session, room_number: &str) -> Result<PendingCheckOut> {
    log_op_start!("resolve_check_out");
    let start = std::time::Instant::now();

    let pending = resolve_check_out_impl(session, room_number).map_err(|e| {
        log_op_error!(
            "resolve_check_out",
            e.clone(),
            duration_ms = start.elapsed().as_millis() as u64
        );
        e
    })?;

    log_op_end!(
        "resolve_check_out",
        duration_ms = start.elapsed().as_millis() as u64,
        room_number = pending.room_number.get()
    );

    Ok(pending)
}

fn resolve_check_out_impl(session: &Session, room_number: &str) -> Result<PendingCheckOut> {
    let room_number = RoomNumber::parse(room_number)?;
    let name = CustomerRepo::occupant_name(session.connection(), room_number)?
        .ok_or(RegistryError::RoomVacant { room_number })?;

    Ok(PendingCheckOut { room_number, name })
}

/// Complete a resolved check-out once the operator has answered
///
/// ## Returns
///
/// The name of the guest who was checked out
///
/// ## Errors
///
/// - `CheckOutCancelled`: the operator declined (nothing deleted)
/// - `CheckOutFailed`: the record was already gone when the delete ran
/// - `Storage`: database failure
pub fn confirm_check_out(
    session: &Session,
    pending: PendingCheckOut,
    confirmation: Confirmation,
) -> Result<String> {
    let room = pending.room_number.get();
    log_op_start!("confirm_check_out", room_number = room);
    let start = std::time::Instant::now();

    let name = confirm_check_out_impl(session, pending, confirmation).map_err(|e| {
        log_op_error!(
            "confirm_check_out",
            e.clone(),
            duration_ms = start.elapsed().as_millis() as u64,
            room_number = room
        );
        e
    })?;

    log_op_end!(
        "confirm_check_out",
        duration_ms = start.elapsed().as_millis() as u64,
        room_number = room
    );

    Ok(name)
}

fn confirm_check_out_impl(
    session: &Session,
    pending: PendingCheckOut,
    confirmation: Confirmation,
) -> Result<String> {
    let PendingCheckOut { room_number, name } = pending;

    if !confirmation.is_confirmed() {
        return Err(RegistryError::CheckOutCancelled { room_number });
    }

    match CustomerRepo::delete_by_room(session.connection(), room_number)? {
        0 => Err(RegistryError::CheckOutFailed { room_number }),
        _ => Ok(name),
    }
}

/// Resolve, confirm through `confirm`, and complete a check-out in one call
///
/// `confirm` is only invoked when the room is occupied.
///
/// ## Errors
///
/// Any error of [`resolve_check_out`] or [`confirm_check_out`].
pub fn check_out<F>(session: &Session, room_number: &str, confirm: F) -> Result<String>
where
    F: FnOnce(&PendingCheckOut) -> Confirmation,
{
    let pending = resolve_check_out(session, room_number)?;
    let confirmation = confirm(&pending);
    confirm_check_out(session, pending, confirmation)
}
