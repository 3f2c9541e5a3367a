//! Two-phase check-out and cross-session behaviour

use innkeep_core::{CheckInRequest, Confirmation, OutcomeKind, RegistryError, RoomNumber};
use innkeep_engine::{check_in, check_out, confirm_check_out, find_by_room, resolve_check_out};
use innkeep_store::provision::{ensure_ready, ensure_schema};
use innkeep_store::{Session, StoreConfig};
use tempfile::TempDir;

fn setup_session() -> Session {
    let session = Session::open_in_memory().unwrap();
    ensure_schema(&session).unwrap();
    session
}

fn check_in_alice(session: &Session) {
    check_in(
        session,
        CheckInRequest::new("Alice Tan", "555-0100", "1 Main St", "101"),
    )
    .unwrap();
}

#[test]
fn test_resolve_names_the_occupant() {
    let session = setup_session();
    check_in_alice(&session);

    let pending = resolve_check_out(&session, "101").unwrap();

    assert_eq!(pending.room_number, RoomNumber::new(101));
    assert_eq!(pending.name, "Alice Tan");
}

#[test]
fn test_resolve_vacant_room_is_not_found() {
    let session = setup_session();

    let err = resolve_check_out(&session, "404").unwrap_err();

    assert_eq!(
        err,
        RegistryError::RoomVacant {
            room_number: RoomNumber::new(404)
        }
    );
}

#[test]
fn test_confirm_callback_not_called_for_vacant_room() {
    let session = setup_session();
    let mut asked = false;

    let err = check_out(&session, "404", |_| {
        asked = true;
        Confirmation::Confirmed
    })
    .unwrap_err();

    assert_eq!(err.outcome(), OutcomeKind::NotFound);
    assert!(!asked, "Operator must not be prompted for a vacant room");
}

#[test]
fn test_callback_sees_occupant_name() {
    let session = setup_session();
    check_in_alice(&session);

    let removed = check_out(&session, "101", |pending| {
        Confirmation::from_response(if pending.name == "Alice Tan" { "yes" } else { "no" })
    })
    .unwrap();

    assert_eq!(removed, "Alice Tan");
}

#[test]
fn test_declined_confirmation_keeps_record() {
    let session = setup_session();
    check_in_alice(&session);
    let pending = resolve_check_out(&session, "101").unwrap();

    let err = confirm_check_out(&session, pending, Confirmation::Declined).unwrap_err();

    assert_eq!(
        err,
        RegistryError::CheckOutCancelled {
            room_number: RoomNumber::new(101)
        }
    );
    assert!(find_by_room(&session, "101").is_ok());
}

#[test]
fn test_record_vanishing_between_phases_fails_check_out() {
    let session = setup_session();
    check_in_alice(&session);
    let pending = resolve_check_out(&session, "101").unwrap();

    // Another writer removes the record before confirmation
    session
        .connection()
        .execute("DELETE FROM customers WHERE room_number = 101", [])
        .unwrap();

    let err = confirm_check_out(&session, pending, Confirmation::Confirmed).unwrap_err();

    assert_eq!(
        err,
        RegistryError::CheckOutFailed {
            room_number: RoomNumber::new(101)
        }
    );
    assert_eq!(err.outcome(), OutcomeKind::Storage);
}

#[test]
fn test_two_sessions_race_for_one_room() {
    let dir = TempDir::new().unwrap();
    let config = StoreConfig::new(dir.path(), "hotel");
    let front_desk = ensure_ready(&config).unwrap();
    let back_office = ensure_ready(&config).unwrap();

    check_in(
        &front_desk,
        CheckInRequest::new("Alice Tan", "555-0100", "1 Main St", "101"),
    )
    .unwrap();
    let err = check_in(
        &back_office,
        CheckInRequest::new("Bob Lee", "555-0101", "2 Oak Ave", "101"),
    )
    .unwrap_err();

    assert_eq!(err.outcome(), OutcomeKind::Conflict);
    assert_eq!(find_by_room(&back_office, "101").unwrap().name, "Alice Tan");
}

#[test]
fn test_check_out_visible_to_other_session() {
    let dir = TempDir::new().unwrap();
    let config = StoreConfig::new(dir.path(), "hotel");
    let first = ensure_ready(&config).unwrap();
    let second = ensure_ready(&config).unwrap();
    check_in_alice(&first);

    let pending = resolve_check_out(&first, "101").unwrap();
    check_out(&second, "101", |_| Confirmation::Confirmed).unwrap();

    let err = confirm_check_out(&first, pending, Confirmation::Confirmed).unwrap_err();
    assert!(matches!(err, RegistryError::CheckOutFailed { .. }));
}
