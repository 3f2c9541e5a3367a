use crate::errors::{RegistryError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A room number as stored in the `customers.room_number` column
///
/// Room numbers are plain integers. Parsing trims surrounding whitespace and
/// accepts anything that fits in an `i64`; a blank input is reported as a
/// missing field rather than a malformed number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoomNumber(i64);

impl RoomNumber {
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    pub const fn get(self) -> i64 {
        self.0
    }

    /// Parse caller-supplied text into a room number
    ///
    /// # Errors
    ///
    /// - `MissingField` if the input is empty or whitespace-only
    /// - `InvalidRoomNumber` if the input is not an integer
    pub fn parse(input: &str) -> Result<Self> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(RegistryError::MissingField {
                field: "room_number",
            });
        }
        trimmed
            .parse::<i64>()
            .map(Self)
            .map_err(|_| RegistryError::InvalidRoomNumber {
                input: input.to_string(),
            })
    }
}

impl FromStr for RoomNumber {
    type Err = RegistryError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl From<i64> for RoomNumber {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl fmt::Display for RoomNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
