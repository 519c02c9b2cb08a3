//! Seed parser with validation

use crate::errors::{io_error, seed_validation, Result};
use crate::seed::format_v0::{SeedPersonV0, SeedV0};
use persona_core::errors::{ExError, PersonaError};
use persona_core::rules::{parse_decimal, validate_person};
use persona_core::{BasePerson, Customer, Employee, Person};
use std::fs;
use std::path::Path;

/// Parse and validate a seed file
pub fn parse_seed_file(path: &Path) -> Result<Vec<Person>> {
    let content = fs::read_to_string(path).map_err(|e| io_error("seed_read", e))?;
    parse_seed_str(&content)
}

/// Parse and validate seed YAML into people ready to insert
pub fn parse_seed_str(content: &str) -> Result<Vec<Person>> {
    let seed: SeedV0 = serde_yaml::from_str(content)
        .map_err(|e| seed_validation(&format!("YAML parse error: {}", e)))?;

    if seed.schema_version != 0 {
        return Err(seed_validation(&format!(
            "Unsupported schema_version: {}. Expected 0",
            seed.schema_version
        )));
    }

    seed.people
        .into_iter()
        .enumerate()
        .map(|(index, entry)| {
            to_person(entry).map_err(|e| {
                let source: ExError = e.into();
                seed_validation(&format!("people[{}]: {}", index, source.message()))
                    .with_source(source)
            })
        })
        .collect()
}

fn to_person(entry: SeedPersonV0) -> std::result::Result<Person, PersonaError> {
    let person: Person = match entry {
        SeedPersonV0::Person { name } => BasePerson::new(name).into(),
        SeedPersonV0::Customer {
            name,
            monthly_income,
        } => {
            let mut customer = Customer::new(name);
            customer.monthly_income = monthly_income
                .as_deref()
                .map(|v| parse_decimal("monthly_income", v))
                .transpose()?;
            customer.into()
        }
        SeedPersonV0::Employee {
            name,
            salary,
            job_title,
        } => {
            let mut employee = Employee::new(name);
            employee.salary = salary
                .as_deref()
                .map(|v| parse_decimal("salary", v))
                .transpose()?;
            employee.job_title = job_title;
            employee.into()
        }
    };
    validate_person(&person)?;
    Ok(person)
}
