//! Structured logging facility
//!
//! - `init(profile)` installs the process subscriber once; events go to stderr
//!   so that stdout carries only report lines
//! - `log_op_start!`, `log_op_end!`, `log_op_error!` emit the canonical
//!   start/end events with the field keys from `persona_core_types::schema`
//! - `test_capture` records events in memory for assertions
//!
//! ```rust
//! use persona_core::logging_facility::{init, Profile};
//!
//! init(Profile::Development);
//! ```

pub mod init;
pub mod macros;
pub mod test_capture;

pub use init::{init, Profile};
pub use test_capture::{init_test_capture, CapturedEvent, TestCapture};
