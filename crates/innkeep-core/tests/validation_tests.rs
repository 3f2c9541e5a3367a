#![allow(clippy::unwrap_used, clippy::expect_used)]

use innkeep_core::{CheckInRequest, OutcomeKind, RegistryError, RoomNumber};
use proptest::prelude::*;

#[test]
fn test_valid_request_is_trimmed() {
    let request = CheckInRequest::new(" Alice Tan ", "555-0100", "1 Main St ", " 101");

    let customer = request.validate().unwrap();

    assert_eq!(customer.name, "Alice Tan");
    assert_eq!(customer.contact, "555-0100");
    assert_eq!(customer.address, "1 Main St");
    assert_eq!(customer.room_number, RoomNumber::new(101));
}

#[test]
fn test_each_empty_field_is_reported_by_name() {
    let cases = [
        (CheckInRequest::new("", "555-0100", "1 Main St", "101"), "name"),
        (CheckInRequest::new("Alice", "  ", "1 Main St", "101"), "contact"),
        (CheckInRequest::new("Alice", "555-0100", "", "101"), "address"),
        (CheckInRequest::new("Alice", "555-0100", "1 Main St", ""), "room_number"),
    ];

    for (request, expected_field) in cases {
        let err = request.validate().unwrap_err();
        assert_eq!(
            err,
            RegistryError::MissingField {
                field: expected_field
            }
        );
        assert_eq!(err.outcome(), OutcomeKind::Validation);
    }
}

#[test]
fn test_absent_fields_are_missing() {
    let request = CheckInRequest {
        name: Some("Alice".to_string()),
        ..CheckInRequest::default()
    };

    assert_eq!(
        request.validate().unwrap_err(),
        RegistryError::MissingField { field: "contact" }
    );
}

#[test]
fn test_unparseable_room_is_distinct_from_missing() {
    let request = CheckInRequest::new("Bob Lee", "555-0101", "2 Oak Ave", "one-oh-one");

    let err = request.validate().unwrap_err();

    assert!(matches!(err, RegistryError::InvalidRoomNumber { ref input } if input == "one-oh-one"));
    assert_eq!(err.outcome(), OutcomeKind::Validation);
}

#[test]
fn test_name_is_checked_before_room_number() {
    let request = CheckInRequest::new("", "555-0101", "2 Oak Ave", "abc");

    assert_eq!(
        request.validate().unwrap_err(),
        RegistryError::MissingField { field: "name" }
    );
}

proptest! {
    #[test]
    fn prop_any_integer_parses(n in any::<i64>()) {
        prop_assert_eq!(RoomNumber::parse(&n.to_string()).unwrap().get(), n);
    }

    #[test]
    fn prop_alphabetic_input_is_invalid(s in "[a-zA-Z]{1,12}") {
        let is_invalid = matches!(
            RoomNumber::parse(&s),
            Err(RegistryError::InvalidRoomNumber { .. })
        );
        prop_assert!(is_invalid);
    }
}
