//! Writes to the `people` table
//!
//! The report runners never write; these are used by seed import and tests.

use crate::errors::{from_rusqlite, Result};
use persona_core::rules::validate_person;
use persona_core::{DiscriminatorMap, Person};
use rusqlite::Connection;

/// SQLite repository for person rows
pub struct PersonRepo;

impl PersonRepo {
    /// Insert a person and return its generated id
    ///
    /// The person is validated first. Any id already set on it is ignored.
    pub fn insert(
        conn: &Connection,
        person: &Person,
        discriminators: &DiscriminatorMap,
    ) -> Result<i64> {
        validate_person(person)?;

        let kind = discriminators.tag_for(person.kind());
        let (monthly_income, salary, job_title) = match person {
            Person::Base(_) => (None, None, None),
            Person::Customer(c) => (c.monthly_income.map(|d| d.to_string()), None, None),
            Person::Employee(e) => (
                None,
                e.salary.map(|d| d.to_string()),
                e.job_title.clone(),
            ),
        };

        conn.execute(
            "INSERT INTO people (kind, name, monthly_income, salary, job_title)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            rusqlite::params![kind, person.name(), monthly_income, salary, job_title],
        )
        .map_err(from_rusqlite)?;

        Ok(conn.last_insert_rowid())
    }

    /// Insert a person and record the generated id on it
    pub fn save(
        conn: &Connection,
        person: &mut Person,
        discriminators: &DiscriminatorMap,
    ) -> Result<i64> {
        let id = Self::insert(conn, person, discriminators)?;
        person.set_id(id);
        Ok(id)
    }

    /// Count stored rows per discriminator
    pub fn count_by_tag(conn: &Connection, tag: &str) -> Result<i64> {
        conn.query_row("SELECT COUNT(*) FROM people WHERE kind = ?", [tag], |row| {
            row.get(0)
        })
        .map_err(from_rusqlite)
    }
}
