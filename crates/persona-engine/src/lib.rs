//! Persona Engine - the report runners
//!
//! Each runner opens a session, runs one fixed query, prints one or two
//! lines per entity and closes the session. Shutting the session factory
//! down is left to the caller.

pub mod runners;

pub use runners::{
    run_customer_report, run_employee_report, run_person_report, run_report, LabelMode, Report,
};
