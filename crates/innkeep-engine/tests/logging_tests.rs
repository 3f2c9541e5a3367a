//! Lifecycle logging emitted by registry operations

use innkeep_core::logging_facility::test_capture::init_test_capture;
use innkeep_core::CheckInRequest;
use innkeep_core_types::schema::{EVENT_END, EVENT_END_ERROR, EVENT_START};
use innkeep_engine::{check_in, find_by_room};
use innkeep_store::provision::ensure_schema;
use innkeep_store::Session;
use tracing::Level;

fn setup_session() -> Session {
    let session = Session::open_in_memory().unwrap();
    ensure_schema(&session).unwrap();
    session
}

#[test]
fn test_check_in_emits_start_and_end() {
    let capture = init_test_capture();
    let session = setup_session();

    check_in(
        &session,
        CheckInRequest::new("Alice Tan", "555-0100", "1 Main St", "7101"),
    )
    .unwrap();

    capture.assert_event_exists("check_in", EVENT_START);
    let end_found = capture.count_events(|e| {
        e.op.as_deref() == Some("check_in")
            && e.event.as_deref() == Some(EVENT_END)
            && e.fields.get("room_number").map(String::as_str) == Some("7101")
    });
    assert_eq!(end_found, 1);
}

#[test]
fn test_vacant_lookup_logs_warning_with_code() {
    let capture = init_test_capture();
    let session = setup_session();

    find_by_room(&session, "7404").unwrap_err();

    let warnings: Vec<_> = capture
        .events_for_op("find_by_room")
        .into_iter()
        .filter(|e| e.event.as_deref() == Some(EVENT_END_ERROR))
        .collect();
    assert!(!warnings.is_empty());
    assert!(warnings.iter().all(|e| e.level == Level::WARN));
    assert!(warnings
        .iter()
        .any(|e| e.fields.get("err_code").map(String::as_str) == Some("ERR_NOT_FOUND")));
}

#[test]
fn test_storage_failure_logs_error() {
    let capture = init_test_capture();
    // No schema: the insert fails in the store
    let session = Session::open_in_memory().unwrap();

    check_in(
        &session,
        CheckInRequest::new("Dana Cruz", "555-0199", "9 Elm Rd", "7999"),
    )
    .unwrap_err();

    let errors = capture.count_events(|e| {
        e.op.as_deref() == Some("check_in")
            && e.event.as_deref() == Some(EVENT_END_ERROR)
            && e.level == Level::ERROR
    });
    assert!(errors >= 1);
}
