//! Innkeep Engine - registry service
//!
//! Check-in, listing, lookup and two-phase check-out over a provisioned
//! `Session`. Every operation returns `Result<_, RegistryError>`; callers
//! branch on `RegistryError::outcome()` and never see storage-library errors.

pub mod commands;

pub use commands::check_out::{check_out, confirm_check_out, resolve_check_out};
pub use commands::registry::{check_in, find_by_room, list_all};
