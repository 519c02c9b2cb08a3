use std::io::Write;

use persona_core::Employee;
use persona_store::errors::Result;
use persona_store::SessionFactory;

use super::{display_opt, run_in_session, write_line};

const OP: &str = "employee_report";
pub const EMPLOYEE_QUERY: &str = "from Employee";

/// `name - job_title - salary`
pub fn format_employee(employee: &Employee) -> String {
    format!(
        "{} - {} - {}",
        employee.name,
        display_opt(&employee.job_title),
        display_opt(&employee.salary)
    )
}

/// Print every employee, one line each
pub fn run_employee_report<W: Write>(factory: &SessionFactory, out: &mut W) -> Result<usize> {
    run_in_session(OP, factory, |session| {
        let employees = session
            .create_query::<Employee>(EMPLOYEE_QUERY)?
            .result_list()?;
        for employee in &employees {
            write_line(out, &format_employee(employee))?;
        }
        Ok(employees.len())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    #[test]
    fn test_format_employee_field_order() {
        let employee = Employee::new("Ana")
            .with_job_title("Engineer")
            .with_salary(Decimal::from_str("5000.00").unwrap());
        assert_eq!(format_employee(&employee), "Ana - Engineer - 5000.00");
    }

    #[test]
    fn test_format_employee_nulls() {
        let employee = Employee::new("Rui").with_salary(Decimal::from_str("10").unwrap());
        assert_eq!(format_employee(&employee), "Rui - null - 10");
        assert_eq!(format_employee(&Employee::new("Eva")), "Eva - null - null");
    }
}
