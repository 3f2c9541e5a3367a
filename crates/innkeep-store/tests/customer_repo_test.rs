// Integration tests for CustomerRepo against a provisioned store

use innkeep_core::{NewCustomer, RegistryError, RoomNumber};
use innkeep_store::provision::ensure_schema;
use innkeep_store::{CustomerRepo, Session};

fn setup_session() -> Session {
    let session = Session::open_in_memory().unwrap();
    ensure_schema(&session).unwrap();
    session
}

fn guest(name: &str, room: i64) -> NewCustomer {
    NewCustomer {
        name: name.to_string(),
        contact: format!("contact for {}", name),
        address: format!("address for {}", name),
        room_number: RoomNumber::new(room),
    }
}

#[test]
fn test_insert_assigns_id_and_timestamp() {
    let session = setup_session();

    let created = CustomerRepo::insert(session.connection(), &guest("Alice Tan", 101)).unwrap();

    assert!(created.id > 0);
    assert_eq!(created.room_number, RoomNumber::new(101));
    assert_eq!(created.check_in_display().len(), "YYYY-MM-DD HH:MM:SS".len());
}

#[test]
fn test_insert_duplicate_room_is_conflict() {
    let session = setup_session();
    CustomerRepo::insert(session.connection(), &guest("Alice Tan", 101)).unwrap();

    let err = CustomerRepo::insert(session.connection(), &guest("Bob Lee", 101)).unwrap_err();

    assert_eq!(
        err,
        RegistryError::RoomOccupied {
            room_number: RoomNumber::new(101)
        }
    );
}

#[test]
fn test_ids_are_not_reused_after_delete() {
    let session = setup_session();
    let first = CustomerRepo::insert(session.connection(), &guest("Alice Tan", 101)).unwrap();
    CustomerRepo::delete_by_room(session.connection(), RoomNumber::new(101)).unwrap();

    let second = CustomerRepo::insert(session.connection(), &guest("Bob Lee", 101)).unwrap();

    assert!(second.id > first.id);
}

#[test]
fn test_list_orders_by_room() {
    let session = setup_session();
    for (name, room) in [("C", 305), ("A", 101), ("B", 220)] {
        CustomerRepo::insert(session.connection(), &guest(name, room)).unwrap();
    }

    let rooms: Vec<i64> = CustomerRepo::list_all(session.connection())
        .unwrap()
        .iter()
        .map(|c| c.room_number.get())
        .collect();

    assert_eq!(rooms, vec![101, 220, 305]);
}

#[test]
fn test_find_and_occupant_on_vacant_room() {
    let session = setup_session();

    assert!(CustomerRepo::find_by_room(session.connection(), RoomNumber::new(404))
        .unwrap()
        .is_none());
    assert!(CustomerRepo::occupant_name(session.connection(), RoomNumber::new(404))
        .unwrap()
        .is_none());
}

#[test]
fn test_find_returns_stored_record() {
    let session = setup_session();
    let created = CustomerRepo::insert(session.connection(), &guest("Alice Tan", 101)).unwrap();

    let found = CustomerRepo::find_by_room(session.connection(), RoomNumber::new(101))
        .unwrap()
        .unwrap();

    assert_eq!(found, created);
}

#[test]
fn test_delete_counts_rows() {
    let session = setup_session();
    CustomerRepo::insert(session.connection(), &guest("Alice Tan", 101)).unwrap();

    assert_eq!(
        CustomerRepo::delete_by_room(session.connection(), RoomNumber::new(101)).unwrap(),
        1
    );
    assert_eq!(
        CustomerRepo::delete_by_room(session.connection(), RoomNumber::new(101)).unwrap(),
        0
    );
}

#[test]
fn test_queries_without_table_are_storage_errors() {
    let session = Session::open_in_memory().unwrap();

    let err = CustomerRepo::list_all(session.connection()).unwrap_err();

    assert!(matches!(err, RegistryError::Storage { ref op, .. } if op == "list_customers"));
}
