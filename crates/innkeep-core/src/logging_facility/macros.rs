//! Canonical logging macros
//!
//! Callers must depend on `tracing` and `innkeep-core-types`.

/// Log the start of an operation
///
/// # Example
///
/// ```
/// # use innkeep_core::log_op_start;
/// log_op_start!("check_in");
/// log_op_start!("check_in", room_number = 101);
/// ```
#[macro_export]
macro_rules! log_op_start {
    ($op:expr) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = innkeep_core_types::schema::EVENT_START,
        );
    };
    ($op:expr, $($field:tt)*) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = innkeep_core_types::schema::EVENT_START,
            $($field)*
        );
    };
}

/// Log the successful end of an operation
///
/// # Example
///
/// ```
/// # use innkeep_core::log_op_end;
/// log_op_end!("list_all", duration_ms = 3, row_count = 0);
/// ```
#[macro_export]
macro_rules! log_op_end {
    ($op:expr, duration_ms = $duration:expr) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = innkeep_core_types::schema::EVENT_END,
            duration_ms = $duration,
        );
    };
    ($op:expr, duration_ms = $duration:expr, $($field:tt)*) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = innkeep_core_types::schema::EVENT_END,
            duration_ms = $duration,
            $($field)*
        );
    };
}

/// Log an operation error
///
/// Expected outcomes (validation, conflict, not found, cancelled) are logged
/// at `warn`, storage failures at `error`.
///
/// # Example
///
/// ```
/// # use innkeep_core::{log_op_error, RegistryError};
/// let err = RegistryError::MissingField { field: "name" };
/// log_op_error!("check_in", err, duration_ms = 1);
/// ```
#[macro_export]
macro_rules! log_op_error {
    ($op:expr, $err:expr, duration_ms = $duration:expr) => {
        $crate::log_op_error!($op, $err, duration_ms = $duration,)
    };
    ($op:expr, $err:expr, duration_ms = $duration:expr, $($field:tt)*) => {{
        let ex_err: $crate::errors::ExError = $err.into();
        if ex_err.kind().is_expected() {
            tracing::warn!(
                component = module_path!(),
                op = $op,
                event = innkeep_core_types::schema::EVENT_END_ERROR,
                duration_ms = $duration,
                err_kind = ?ex_err.kind(),
                err_code = ex_err.code(),
                $($field)*
            );
        } else {
            tracing::error!(
                component = module_path!(),
                op = $op,
                event = innkeep_core_types::schema::EVENT_END_ERROR,
                duration_ms = $duration,
                err_kind = ?ex_err.kind(),
                err_code = ex_err.code(),
                message = ex_err.message(),
                $($field)*
            );
        }
    }};
}
