use std::io::Write;

use persona_core::Person;
use persona_store::errors::Result;
use persona_store::SessionFactory;

use super::{run_in_session, write_line};

const OP: &str = "person_report";
pub const PERSON_QUERY: &str = "from Person";

pub const CUSTOMER_LABEL: &str = " - is a customer";
pub const SUPPLIER_LABEL: &str = " - is a supplier";
pub const EMPLOYEE_LABEL: &str = " - is an employee";
pub const PERSON_LABEL: &str = " - is a person";

/// How non-customer rows are labelled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LabelMode {
    /// Every row that is not a customer is a "supplier", employees included
    #[default]
    Literal,
    /// Employees and plain persons get their own labels
    Precise,
}

/// Classification line printed under a person's name
pub fn classify(person: &Person, mode: LabelMode) -> &'static str {
    match (person, mode) {
        (Person::Customer(_), _) => CUSTOMER_LABEL,
        (_, LabelMode::Literal) => SUPPLIER_LABEL,
        (Person::Employee(_), LabelMode::Precise) => EMPLOYEE_LABEL,
        (Person::Base(_), LabelMode::Precise) => PERSON_LABEL,
    }
}

/// Print every person (all hierarchy levels): the name, then its label
pub fn run_person_report<W: Write>(
    factory: &SessionFactory,
    mode: LabelMode,
    out: &mut W,
) -> Result<usize> {
    run_in_session(OP, factory, |session| {
        let people = session.create_query::<Person>(PERSON_QUERY)?.result_list()?;
        for person in &people {
            write_line(out, person.name())?;
            write_line(out, classify(person, mode))?;
        }
        Ok(people.len())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use persona_core::{BasePerson, Customer, Employee};

    #[test]
    fn test_literal_labels_employees_as_suppliers() {
        let employee: Person = Employee::new("Ana").into();
        let base: Person = BasePerson::new("Joao").into();
        let customer: Person = Customer::new("Maria").into();

        assert_eq!(classify(&customer, LabelMode::Literal), CUSTOMER_LABEL);
        assert_eq!(classify(&employee, LabelMode::Literal), SUPPLIER_LABEL);
        assert_eq!(classify(&base, LabelMode::Literal), SUPPLIER_LABEL);
    }

    #[test]
    fn test_precise_labels() {
        let employee: Person = Employee::new("Ana").into();
        let base: Person = BasePerson::new("Joao").into();
        let customer: Person = Customer::new("Maria").into();

        assert_eq!(classify(&customer, LabelMode::Precise), CUSTOMER_LABEL);
        assert_eq!(classify(&employee, LabelMode::Precise), EMPLOYEE_LABEL);
        assert_eq!(classify(&base, LabelMode::Precise), PERSON_LABEL);
    }

    #[test]
    fn test_default_mode_is_literal() {
        assert_eq!(LabelMode::default(), LabelMode::Literal);
    }
}
