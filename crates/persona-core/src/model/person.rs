use rust_decimal::Decimal;

use super::kind::PersonKind;

/// Column length of `job_title`
pub const JOB_TITLE_MAX_LEN: usize = 60;

/// A person row with no specialization
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BasePerson {
    /// Generated surrogate key (None until persisted)
    pub id: Option<i64>,
    pub name: String,
}

impl BasePerson {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
        }
    }
}

/// A customer: a person with a monthly income
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Customer {
    pub id: Option<i64>,
    pub name: String,
    pub monthly_income: Option<Decimal>,
}

impl Customer {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            monthly_income: None,
        }
    }

    pub fn with_monthly_income(mut self, monthly_income: Decimal) -> Self {
        self.monthly_income = Some(monthly_income);
        self
    }
}

/// An employee: a person with a salary and a job title
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Employee {
    pub id: Option<i64>,
    pub name: String,
    pub salary: Option<Decimal>,
    /// At most [`JOB_TITLE_MAX_LEN`] characters
    pub job_title: Option<String>,
}

impl Employee {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            salary: None,
            job_title: None,
        }
    }

    pub fn with_salary(mut self, salary: Decimal) -> Self {
        self.salary = Some(salary);
        self
    }

    pub fn with_job_title(mut self, job_title: impl Into<String>) -> Self {
        self.job_title = Some(job_title.into());
        self
    }
}

/// Any row of the person hierarchy
///
/// The variant is the row's hierarchy level; it is fixed when the row is
/// created and never changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Person {
    Base(BasePerson),
    Customer(Customer),
    Employee(Employee),
}

impl Person {
    pub fn id(&self) -> Option<i64> {
        match self {
            Person::Base(p) => p.id,
            Person::Customer(c) => c.id,
            Person::Employee(e) => e.id,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Person::Base(p) => &p.name,
            Person::Customer(c) => &c.name,
            Person::Employee(e) => &e.name,
        }
    }

    pub fn kind(&self) -> PersonKind {
        match self {
            Person::Base(_) => PersonKind::Person,
            Person::Customer(_) => PersonKind::Customer,
            Person::Employee(_) => PersonKind::Employee,
        }
    }

    /// Set the generated id after an insert
    pub fn set_id(&mut self, id: i64) {
        match self {
            Person::Base(p) => p.id = Some(id),
            Person::Customer(c) => c.id = Some(id),
            Person::Employee(e) => e.id = Some(id),
        }
    }
}

impl From<BasePerson> for Person {
    fn from(p: BasePerson) -> Self {
        Person::Base(p)
    }
}

impl From<Customer> for Person {
    fn from(c: Customer) -> Self {
        Person::Customer(c)
    }
}

impl From<Employee> for Person {
    fn from(e: Employee) -> Self {
        Person::Employee(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_builders_set_optional_fields() {
        let employee = Employee::new("Ana")
            .with_job_title("Engineer")
            .with_salary(Decimal::from_str("5000.00").unwrap());

        assert_eq!(employee.job_title.as_deref(), Some("Engineer"));
        assert_eq!(employee.salary.unwrap().to_string(), "5000.00");
        assert_eq!(employee.id, None);
    }

    #[test]
    fn test_person_accessors_follow_variant() {
        let mut person: Person = Customer::new("Maria").into();
        assert_eq!(person.kind(), PersonKind::Customer);
        assert_eq!(person.name(), "Maria");

        person.set_id(7);
        assert_eq!(person.id(), Some(7));
    }
}
