//! Report runners over the person hierarchy

pub mod customer_report;
pub mod employee_report;
pub mod person_report;

use std::fmt::Display;
use std::io::Write;
use std::time::Instant;

use persona_core::{log_op_end, log_op_error, log_op_start};
use persona_store::errors::{io_error, Result};
use persona_store::{Session, SessionFactory};

pub use customer_report::run_customer_report;
pub use employee_report::run_employee_report;
pub use person_report::{run_person_report, LabelMode};

/// How an absent optional field is printed
pub const NULL_FIELD: &str = "null";

/// The available reports
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Report {
    Customers,
    Employees,
    People(LabelMode),
}

/// Run one report, returning the number of entities printed
pub fn run_report<W: Write>(report: Report, factory: &SessionFactory, out: &mut W) -> Result<usize> {
    match report {
        Report::Customers => run_customer_report(factory, out),
        Report::Employees => run_employee_report(factory, out),
        Report::People(mode) => run_person_report(factory, mode, out),
    }
}

pub(crate) fn display_opt<T: Display>(value: &Option<T>) -> String {
    match value {
        Some(v) => v.to_string(),
        None => NULL_FIELD.to_string(),
    }
}

pub(crate) fn write_line<W: Write>(out: &mut W, line: &str) -> Result<()> {
    writeln!(out, "{}", line).map_err(|e| io_error("write_report", e))
}

/// Open a session, run `body`, close the session, and log the outcome
pub(crate) fn run_in_session<F>(op: &'static str, factory: &SessionFactory, body: F) -> Result<usize>
where
    F: FnOnce(&Session) -> Result<usize>,
{
    let started = Instant::now();
    log_op_start!(op, database = %factory.config().location.describe());

    let result = factory.with_session(|session| body(session));

    let duration_ms = started.elapsed().as_millis() as u64;
    match &result {
        Ok(rows) => {
            let row_count = *rows as u64;
            log_op_end!(op, duration_ms = duration_ms, row_count = row_count);
        }
        Err(err) => log_op_error!(op, err.clone(), duration_ms = duration_ms),
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_opt() {
        assert_eq!(display_opt(&Some(12)), "12");
        assert_eq!(display_opt::<String>(&None), "null");
    }

    #[test]
    fn test_write_line_appends_newline() {
        let mut out = Vec::new();
        write_line(&mut out, "Ana - Engineer - 5000.00").unwrap();
        assert_eq!(out, b"Ana - Engineer - 5000.00\n");
    }
}
