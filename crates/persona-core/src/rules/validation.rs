//! Field validation for the write path
//!
//! Loading never validates: rows are printed as stored.

use std::str::FromStr;

use rust_decimal::Decimal;

use crate::errors::{PersonaError, Result};
use crate::model::{Person, JOB_TITLE_MAX_LEN};

/// Validate a person before it is persisted
pub fn validate_person(person: &Person) -> Result<()> {
    validate_name(person.name())?;
    if let Person::Employee(employee) = person {
        if let Some(title) = &employee.job_title {
            validate_job_title(title)?;
        }
    }
    Ok(())
}

/// Names must contain something other than whitespace
pub fn validate_name(name: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(PersonaError::InvalidName {
            reason: "Name cannot be empty".to_string(),
        });
    }
    Ok(())
}

/// Job titles are limited to the column length, counted in characters
pub fn validate_job_title(title: &str) -> Result<()> {
    let len = title.chars().count();
    if len > JOB_TITLE_MAX_LEN {
        return Err(PersonaError::JobTitleTooLong {
            len,
            max: JOB_TITLE_MAX_LEN,
        });
    }
    Ok(())
}

/// Parse a decimal field, keeping its scale
pub fn parse_decimal(field: &str, value: &str) -> Result<Decimal> {
    Decimal::from_str(value.trim()).map_err(|_| PersonaError::InvalidDecimal {
        field: field.to_string(),
        value: value.to_string(),
    })
}
