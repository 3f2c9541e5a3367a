use super::RoomNumber;
use crate::errors::Result;
use crate::rules::validation;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Fixed, sortable text form of `check_in_timestamp`
pub const CHECK_IN_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// A checked-in guest as stored in the `customers` table
///
/// `id` and `check_in_timestamp` are assigned by the store when the record is
/// created and never change afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    pub id: i64,
    pub name: String,
    pub contact: String,
    pub address: String,
    pub room_number: RoomNumber,
    #[serde(with = "check_in_timestamp")]
    pub check_in_timestamp: NaiveDateTime,
}

impl Customer {
    /// Check-in time rendered as `YYYY-MM-DD HH:MM:SS`
    pub fn check_in_display(&self) -> String {
        self.check_in_timestamp
            .format(CHECK_IN_TIMESTAMP_FORMAT)
            .to_string()
    }
}

/// Validated check-in fields, ready to be submitted to the store
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCustomer {
    pub name: String,
    pub contact: String,
    pub address: String,
    pub room_number: RoomNumber,
}

/// Raw check-in input as supplied by a caller
///
/// Every field is optional so that front ends can pass through exactly what
/// the operator entered; [`CheckInRequest::validate`] decides what is missing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CheckInRequest {
    pub name: Option<String>,
    pub contact: Option<String>,
    pub address: Option<String>,
    pub room_number: Option<String>,
}

impl CheckInRequest {
    pub fn new(
        name: impl Into<String>,
        contact: impl Into<String>,
        address: impl Into<String>,
        room_number: impl Into<String>,
    ) -> Self {
        Self {
            name: Some(name.into()),
            contact: Some(contact.into()),
            address: Some(address.into()),
            room_number: Some(room_number.into()),
        }
    }

    /// Validate the raw fields into a [`NewCustomer`]
    ///
    /// # Errors
    ///
    /// - `MissingField` for the first absent or blank field
    /// - `InvalidRoomNumber` if the room number is not an integer
    pub fn validate(&self) -> Result<NewCustomer> {
        validation::validate_check_in(self)
    }
}

mod check_in_timestamp {
    use super::CHECK_IN_TIMESTAMP_FORMAT;
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(&value.format(CHECK_IN_TIMESTAMP_FORMAT))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        NaiveDateTime::parse_from_str(&raw, CHECK_IN_TIMESTAMP_FORMAT)
            .map_err(serde::de::Error::custom)
    }
}
