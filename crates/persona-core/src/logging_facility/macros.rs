//! Operation logging macros
//!
//! Every operation logs one `start` event and exactly one of `end` or
//! `end_error`. The macros reach `tracing` and the schema constants through
//! this crate, so callers need no extra dependencies.

#[doc(hidden)]
pub mod __private {
    pub use persona_core_types::schema;
    pub use tracing;
}

#[doc(hidden)]
#[macro_export]
macro_rules! __persona_op_event {
    ($level:ident, $op:expr, $event:ident $(, $($field:tt)*)?) => {
        $crate::logging_facility::macros::__private::tracing::$level!(
            component = module_path!(),
            op = $op,
            event = $crate::logging_facility::macros::__private::schema::$event,
            $($($field)*)?
        )
    };
}

/// Log the start of an operation
///
/// ```
/// # use persona_core::log_op_start;
/// log_op_start!("customer_report");
/// log_op_start!("open_session", session_id = "s-1");
/// ```
#[macro_export]
macro_rules! log_op_start {
    ($op:expr $(, $($field:tt)*)?) => {
        $crate::__persona_op_event!(info, $op, EVENT_START $(, $($field)*)?)
    };
}

/// Log the successful end of an operation; `duration_ms` is mandatory
///
/// ```
/// # use persona_core::log_op_end;
/// log_op_end!("customer_report", duration_ms = 3_u64, row_count = 2_u64);
/// ```
#[macro_export]
macro_rules! log_op_end {
    ($op:expr, duration_ms = $duration:expr $(, $($field:tt)*)?) => {
        $crate::__persona_op_event!(
            info, $op, EVENT_END, duration_ms = $duration $(, $($field)*)?
        )
    };
}

/// Log the failed end of an operation
///
/// `$err` is anything convertible into `ExError`; its kind, code and
/// rendered message become fields.
///
/// ```
/// # use persona_core::{log_op_error, errors::PersonaError};
/// let err = PersonaError::UnknownEntity { name: "Supplier".to_string() };
/// log_op_error!("parse_query", err, duration_ms = 1_u64);
/// ```
#[macro_export]
macro_rules! log_op_error {
    ($op:expr, $err:expr, duration_ms = $duration:expr $(, $($field:tt)*)?) => {{
        let ex_err: $crate::errors::ExError = $err.into();
        $crate::__persona_op_event!(
            error,
            $op,
            EVENT_END_ERROR,
            duration_ms = $duration,
            err_kind = ?ex_err.kind(),
            err_code = ex_err.code(),
            message = %ex_err
            $(, $($field)*)?
        )
    }};
}
