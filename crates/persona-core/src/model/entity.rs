use super::kind::PersonKind;
use super::person::{Customer, Employee, Person};

/// A type that rows of the person table can be loaded as
///
/// Loading "all rows mapped to T" selects the rows whose kind is in
/// `T::kinds()` and converts each with `from_person`.
pub trait Entity: Sized {
    /// Entity name as written in queries
    const ENTITY_NAME: &'static str;

    /// Kinds this type can represent
    fn kinds() -> &'static [PersonKind];

    /// Narrow a loaded row to this type
    fn from_person(person: Person) -> Option<Self>;
}

impl Entity for Person {
    const ENTITY_NAME: &'static str = "Person";

    fn kinds() -> &'static [PersonKind] {
        PersonKind::Person.covered_kinds()
    }

    fn from_person(person: Person) -> Option<Self> {
        Some(person)
    }
}

impl Entity for Customer {
    const ENTITY_NAME: &'static str = "Customer";

    fn kinds() -> &'static [PersonKind] {
        PersonKind::Customer.covered_kinds()
    }

    fn from_person(person: Person) -> Option<Self> {
        match person {
            Person::Customer(c) => Some(c),
            _ => None,
        }
    }
}

impl Entity for Employee {
    const ENTITY_NAME: &'static str = "Employee";

    fn kinds() -> &'static [PersonKind] {
        PersonKind::Employee.covered_kinds()
    }

    fn from_person(person: Person) -> Option<Self> {
        match person {
            Person::Employee(e) => Some(e),
            _ => None,
        }
    }
}
