//! Hydration layer - loads person rows into the tagged model
//!
//! Rows come back in id order so repeated loads are identical.

use crate::errors::{from_rusqlite, hydration_error, query_error, Result};
use crate::repo::PERSON_COLUMNS;
use persona_core::errors::PersonaError;
use persona_core::rules::parse_decimal;
use persona_core::{BasePerson, Customer, DiscriminatorMap, Employee, Person, PersonKind};
use rusqlite::{Connection, Row};

/// Raw column values of one `people` row
#[derive(Debug, Clone)]
struct PersonRow {
    id: i64,
    kind: String,
    name: String,
    monthly_income: Option<String>,
    salary: Option<String>,
    job_title: Option<String>,
}

impl PersonRow {
    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get(0)?,
            kind: row.get(1)?,
            name: row.get(2)?,
            monthly_income: row.get(3)?,
            salary: row.get(4)?,
            job_title: row.get(5)?,
        })
    }

    fn into_person(self, discriminators: &DiscriminatorMap) -> Result<Person> {
        let id = self.id;
        self.convert(discriminators)
            .map_err(|e| hydration_error(id, e))
    }

    fn convert(self, discriminators: &DiscriminatorMap) -> std::result::Result<Person, PersonaError> {
        let kind = discriminators.kind_for(&self.kind)?;
        let person = match kind {
            PersonKind::Person => Person::Base(BasePerson {
                id: Some(self.id),
                name: self.name,
            }),
            PersonKind::Customer => Person::Customer(Customer {
                id: Some(self.id),
                name: self.name,
                monthly_income: self
                    .monthly_income
                    .as_deref()
                    .map(|v| parse_decimal("monthly_income", v))
                    .transpose()?,
            }),
            PersonKind::Employee => Person::Employee(Employee {
                id: Some(self.id),
                name: self.name,
                salary: self
                    .salary
                    .as_deref()
                    .map(|v| parse_decimal("salary", v))
                    .transpose()?,
                job_title: self.job_title,
            }),
        };
        Ok(person)
    }
}

/// Load every row whose discriminator is one of those covering `target`
pub fn load_kind(
    conn: &Connection,
    target: PersonKind,
    discriminators: &DiscriminatorMap,
) -> Result<Vec<Person>> {
    // A query on the root entity reads every row, so stray discriminators
    // surface as errors instead of being skipped.
    let tags = if target.covered_kinds().len() == PersonKind::ALL.len() {
        Vec::new()
    } else {
        discriminators.tags_covering(target)
    };
    let sql = if tags.is_empty() {
        format!("SELECT {} FROM people ORDER BY id", PERSON_COLUMNS)
    } else {
        format!(
            "SELECT {} FROM people WHERE kind IN ({}) ORDER BY id",
            PERSON_COLUMNS,
            vec!["?"; tags.len()].join(", ")
        )
    };

    let mut stmt = conn.prepare(&sql).map_err(|e| query_error(&sql, e))?;

    let rows: Vec<PersonRow> = stmt
        .query_map(rusqlite::params_from_iter(tags.iter()), PersonRow::from_row)
        .map_err(from_rusqlite)?
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(from_rusqlite)?;

    rows.into_iter()
        .map(|row| row.into_person(discriminators))
        .collect()
}

/// Load a single row by id
pub fn load_person(
    conn: &Connection,
    person_id: i64,
    discriminators: &DiscriminatorMap,
) -> Result<Option<Person>> {
    use rusqlite::OptionalExtension;

    let sql = format!("SELECT {} FROM people WHERE id = ?", PERSON_COLUMNS);
    let row = conn
        .query_row(&sql, [person_id], PersonRow::from_row)
        .optional()
        .map_err(from_rusqlite)?;

    row.map(|r| r.into_person(discriminators)).transpose()
}
