//! Registry command handlers with boundary logging.
//!
//! ## Logging Ownership
//!
//! The engine layer owns lifecycle logging for registry operations:
//! - `log_op_start!` at entry
//! - `log_op_end!` on success
//! - `log_op_error!` on failure
//!
//! Inside the store only provisioning logs a lifecycle (`provision`); the
//! repository logs details at `debug`.

pub mod check_out;
pub mod registry;
