//! SQLite repository for customer records

use crate::errors::{classify_insert_error, from_rusqlite};
use innkeep_core::errors::Result;
use innkeep_core::model::{Customer, NewCustomer, RoomNumber, CHECK_IN_TIMESTAMP_FORMAT};
use rusqlite::types::Type;
use rusqlite::{params, Connection, OptionalExtension, Row};

const CUSTOMER_COLUMNS: &str = "id, name, contact, address, room_number, check_in_timestamp";

/// SQLite repository for customer records
pub struct CustomerRepo;

impl CustomerRepo {
    /// Insert a validated customer; the store assigns `id` and the timestamp
    ///
    /// A clash on `room_number` is reported as `RoomOccupied`.
    pub fn insert(conn: &Connection, customer: &NewCustomer) -> Result<Customer> {
        let (id, raw_timestamp): (i64, String) = conn
            .query_row(
                "INSERT INTO customers (name, contact, address, room_number)
                 VALUES (?1, ?2, ?3, ?4)
                 RETURNING id, check_in_timestamp",
                params![
                    customer.name,
                    customer.contact,
                    customer.address,
                    customer.room_number.get(),
                ],
                |row| Ok((row.get(0)?, row.get(1)?)),
            )
            .map_err(|e| classify_insert_error(e, customer.room_number))?;

        let check_in_timestamp = parse_timestamp(1, &raw_timestamp)
            .map_err(|e| from_rusqlite("insert_customer", e))?;

        tracing::debug!(customer_id = id, room_number = customer.room_number.get(), "customer inserted");

        Ok(Customer {
            id,
            name: customer.name.clone(),
            contact: customer.contact.clone(),
            address: customer.address.clone(),
            room_number: customer.room_number,
            check_in_timestamp,
        })
    }

    /// All customers, ascending by room number
    pub fn list_all(conn: &Connection) -> Result<Vec<Customer>> {
        let mut stmt = conn
            .prepare(&format!(
                "SELECT {} FROM customers ORDER BY room_number ASC",
                CUSTOMER_COLUMNS
            ))
            .map_err(|e| from_rusqlite("list_customers", e))?;

        let customers = stmt
            .query_map([], customer_from_row)
            .map_err(|e| from_rusqlite("list_customers", e))?
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(|e| from_rusqlite("list_customers", e))?;

        Ok(customers)
    }

    /// The customer occupying a room, if any
    pub fn find_by_room(conn: &Connection, room_number: RoomNumber) -> Result<Option<Customer>> {
        conn.query_row(
            &format!(
                "SELECT {} FROM customers WHERE room_number = ?1",
                CUSTOMER_COLUMNS
            ),
            [room_number.get()],
            customer_from_row,
        )
        .optional()
        .map_err(|e| from_rusqlite("find_customer", e))
    }

    /// Name of the occupant of a room, if any
    pub fn occupant_name(conn: &Connection, room_number: RoomNumber) -> Result<Option<String>> {
        conn.query_row(
            "SELECT name FROM customers WHERE room_number = ?1",
            [room_number.get()],
            |row| row.get(0),
        )
        .optional()
        .map_err(|e| from_rusqlite("find_occupant", e))
    }

    /// Delete the record for a room, returning the number of rows removed
    pub fn delete_by_room(conn: &Connection, room_number: RoomNumber) -> Result<usize> {
        let removed = conn
            .execute(
                "DELETE FROM customers WHERE room_number = ?1",
                [room_number.get()],
            )
            .map_err(|e| from_rusqlite("delete_customer", e))?;

        tracing::debug!(room_number = room_number.get(), removed, "customer delete executed");
        Ok(removed)
    }
}

fn customer_from_row(row: &Row<'_>) -> rusqlite::Result<Customer> {
    let raw_timestamp: String = row.get(5)?;
    Ok(Customer {
        id: row.get(0)?,
        name: row.get(1)?,
        contact: row.get(2)?,
        address: row.get(3)?,
        room_number: RoomNumber::new(row.get(4)?),
        check_in_timestamp: parse_timestamp(5, &raw_timestamp)?,
    })
}

fn parse_timestamp(idx: usize, raw: &str) -> rusqlite::Result<chrono::NaiveDateTime> {
    chrono::NaiveDateTime::parse_from_str(raw, CHECK_IN_TIMESTAMP_FORMAT)
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(idx, Type::Text, Box::new(e)))
}
