//! Field keys and event names shared by every persona log line
//!
//! Runners, the session provider and the test capture layer all refer to
//! these names, so renaming one here renames it everywhere.

/// Module path of the emitting code
pub const FIELD_COMPONENT: &str = "component";
/// Operation name, e.g. `customer_report`
pub const FIELD_OP: &str = "op";
/// One of the `EVENT_*` names below
pub const FIELD_EVENT: &str = "event";
pub const FIELD_DURATION_MS: &str = "duration_ms";
pub const FIELD_SESSION_ID: &str = "session_id";
/// Database a runner read from
pub const FIELD_DATABASE: &str = "database";
/// Number of entities a runner printed
pub const FIELD_ROW_COUNT: &str = "row_count";
pub const FIELD_ERR_KIND: &str = "err_kind";
pub const FIELD_ERR_CODE: &str = "err_code";

pub const EVENT_START: &str = "start";
pub const EVENT_END: &str = "end";
pub const EVENT_END_ERROR: &str = "end_error";

/// Every canonical field key
pub const CANONICAL_FIELDS: &[&str] = &[
    FIELD_COMPONENT,
    FIELD_OP,
    FIELD_EVENT,
    FIELD_DURATION_MS,
    FIELD_SESSION_ID,
    FIELD_DATABASE,
    FIELD_ROW_COUNT,
    FIELD_ERR_KIND,
    FIELD_ERR_CODE,
];
