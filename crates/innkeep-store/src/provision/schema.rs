//! The `customers` table definition

use crate::errors::from_rusqlite;
use crate::session::Session;
use innkeep_core::errors::Result;

/// Name of the registry's only table
pub const CUSTOMERS_TABLE: &str = "customers";

/// Table DDL; safe to run against a database that already has the table
pub const CUSTOMERS_DDL: &str = "
CREATE TABLE IF NOT EXISTS customers (
    id                 INTEGER PRIMARY KEY AUTOINCREMENT,
    name               TEXT    NOT NULL CHECK (length(trim(name)) > 0),
    contact            TEXT    NOT NULL CHECK (length(trim(contact)) > 0),
    address            TEXT    NOT NULL CHECK (length(trim(address)) > 0),
    room_number        INTEGER NOT NULL,
    check_in_timestamp TEXT    NOT NULL DEFAULT (datetime('now', 'localtime')),
    CONSTRAINT uq_customers_room_number UNIQUE (room_number)
);
";

/// Create the `customers` table if it is absent
pub fn ensure_schema(session: &Session) -> Result<()> {
    session
        .connection()
        .execute_batch(CUSTOMERS_DDL)
        .map_err(|e| from_rusqlite("create_table", e))?;
    tracing::debug!(table = CUSTOMERS_TABLE, "schema ensured");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ensure_schema_twice() {
        let session = Session::open_in_memory().unwrap();
        ensure_schema(&session).unwrap();
        ensure_schema(&session).unwrap();

        let count: i64 = session
            .connection()
            .query_row(
                "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = ?1",
                [CUSTOMERS_TABLE],
                |row| row.get(0),
            )
            .unwrap();
        assert_eq!(count, 1);
    }

    #[test]
    fn test_blank_name_rejected_by_store() {
        let session = Session::open_in_memory().unwrap();
        ensure_schema(&session).unwrap();

        let result = session.connection().execute(
            "INSERT INTO customers (name, contact, address, room_number) VALUES ('  ', 'c', 'a', 1)",
            [],
        );
        assert!(result.is_err());
    }
}
