use super::RoomNumber;
use serde::Serialize;

/// First phase of a check-out: the room resolved to its current occupant
///
/// Produced by resolving a room number against the store. The calling layer
/// shows `name` to the operator and then passes this value back together with
/// a [`Confirmation`] to perform the deletion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PendingCheckOut {
    pub room_number: RoomNumber,
    pub name: String,
}

/// Operator's answer to the check-out prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Confirmation {
    Confirmed,
    Declined,
}

impl Confirmation {
    /// Interpret a free-text answer; only `y` or `yes` (any case) confirm.
    pub fn from_response(response: &str) -> Self {
        let answer = response.trim();
        if answer.eq_ignore_ascii_case("y") || answer.eq_ignore_ascii_case("yes") {
            Confirmation::Confirmed
        } else {
            Confirmation::Declined
        }
    }

    pub fn is_confirmed(self) -> bool {
        self == Confirmation::Confirmed
    }
}

impl From<bool> for Confirmation {
    fn from(confirmed: bool) -> Self {
        if confirmed {
            Confirmation::Confirmed
        } else {
            Confirmation::Declined
        }
    }
}
