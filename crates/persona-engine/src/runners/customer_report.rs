use std::io::Write;

use persona_core::Customer;
use persona_store::errors::Result;
use persona_store::SessionFactory;

use super::{display_opt, run_in_session, write_line};

const OP: &str = "customer_report";
pub const CUSTOMER_QUERY: &str = "from Customer";

/// `name - monthly_income`
pub fn format_customer(customer: &Customer) -> String {
    format!(
        "{} - {}",
        customer.name,
        display_opt(&customer.monthly_income)
    )
}

/// Print every customer, one line each
pub fn run_customer_report<W: Write>(factory: &SessionFactory, out: &mut W) -> Result<usize> {
    run_in_session(OP, factory, |session| {
        let customers = session
            .create_query::<Customer>(CUSTOMER_QUERY)?
            .result_list()?;
        for customer in &customers {
            write_line(out, &format_customer(customer))?;
        }
        Ok(customers.len())
    })
}
