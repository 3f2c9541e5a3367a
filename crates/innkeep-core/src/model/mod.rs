//! Domain models for the guest registry

mod check_out;
mod customer;
mod room;

pub use check_out::{Confirmation, PendingCheckOut};
pub use customer::{CheckInRequest, Customer, NewCustomer, CHECK_IN_TIMESTAMP_FORMAT};
pub use room::RoomNumber;
