//! Check-in, list and lookup

use innkeep_core::errors::{RegistryError, Result};
use innkeep_core::model::{CheckInRequest, Customer, RoomNumber};
use innkeep_core::{log_op_end, log_op_error, log_op_start};
use innkeep_store::{CustomerRepo, Session};

/// Check a guest into a room
///
/// ## Returns
///
/// The created record, with store-assigned `id` and `check_in_timestamp`
///
/// ## Errors
///
/// - `MissingField`: a field is absent or blank (nothing submitted)
/// - `InvalidRoomNumber`: room number is not an integer (nothing submitted)
/// - `RoomOccupied`: another guest holds the room
/// - `Storage`: any other database failure
pub fn check_in(session: &Session, request: CheckInRequest) -> Result<Customer> {
    log_op_start!("check_in");
    let start = std::time::Instant::now();

    let customer = check_in_impl(session, &request).map_err(|e| {
        log_op_error!(
            "check_in",
            e.clone(),
            duration_ms = start.elapsed().as_millis() as u64
        );
        e
    })?;

    log_op_end!(
        "check_in",
        duration_ms = start.elapsed().as_millis() as u64,
        customer_id = customer.id,
        room_number = customer.room_number.get()
    );

    Ok(customer)
}

fn check_in_impl(session: &Session, request: &CheckInRequest) -> Result<Customer> {
    let new_customer = request.validate()?;
    CustomerRepo::insert(session.connection(), &new_customer)
}

/// List every checked-in guest, ascending by room number
///
/// An empty registry is an empty list, not an error.
///
/// ## Errors
///
/// - `Storage`: database failure
pub fn list_all(session: &Session) -> Result<Vec<Customer>> {
    log_op_start!("list_all");
    let start = std::time::Instant::now();

    let customers = CustomerRepo::list_all(session.connection()).map_err(|e| {
        log_op_error!(
            "list_all",
            e.clone(),
            duration_ms = start.elapsed().as_millis() as u64
        );
        e
    })?;

    log_op_end!(
        "list_all",
        duration_ms = start.elapsed().as_millis() as u64,
        row_count = customers.len()
    );

    Ok(customers)
}

/// Look up the guest in a room
///
/// ## Errors
///
/// - `MissingField` / `InvalidRoomNumber`: input is blank or not an integer
///   (storage is not touched)
/// - `RoomVacant`: nobody is checked into the room
/// - `Storage`: database failure
pub fn find_by_room(session: &Session, room_number: &str) -> Result<Customer> {
    log_op_start!("find_by_room");
    let start = std::time::Instant::now();

    let customer = find_by_room_impl(session, room_number).map_err(|e| {
        log_op_error!(
            "find_by_room",
            e.clone(),
            duration_ms = start.elapsed().as_millis() as u64
        );
        e
    })?;

    log_op_end!(
        "find_by_room",
        duration_ms = start.elapsed().as_millis() as u64,
        customer_id = customer.id,
        room_number = customer.room_number.get()
    );

    Ok(customer)
}

fn find_by_room_impl(session: &Session, room_number: &str) -> Result<Customer> {
    let room_number = RoomNumber::parse(room_number)?;
    CustomerRepo::find_by_room(session.connection(), room_number)?
        .ok_or(RegistryError::RoomVacant { room_number })
}
