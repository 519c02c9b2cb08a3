//! Seed importer: inserts parsed people in a single transaction

use crate::errors::{from_rusqlite, Result};
use crate::repo::PersonRepo;
use crate::seed::parser::{parse_seed_file, parse_seed_str};
use persona_core::{DiscriminatorMap, Person};
use rusqlite::Connection;
use std::path::Path;

/// Outcome of an import
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportSummary {
    /// Generated ids, in seed order
    pub ids: Vec<i64>,
}

impl ImportSummary {
    pub fn inserted(&self) -> usize {
        self.ids.len()
    }
}

/// Insert `people` atomically: either every row is written or none is
pub fn import_people(
    conn: &mut Connection,
    people: &[Person],
    discriminators: &DiscriminatorMap,
) -> Result<ImportSummary> {
    let tx = conn.transaction().map_err(from_rusqlite)?;
    let mut ids = Vec::with_capacity(people.len());
    for person in people {
        ids.push(PersonRepo::insert(&tx, person, discriminators)?);
    }
    tx.commit().map_err(from_rusqlite)?;

    tracing::info!(inserted = ids.len(), "seed imported");
    Ok(ImportSummary { ids })
}

/// Parse seed YAML and import it
pub fn import_seed(
    conn: &mut Connection,
    content: &str,
    discriminators: &DiscriminatorMap,
) -> Result<ImportSummary> {
    let people = parse_seed_str(content)?;
    import_people(conn, &people, discriminators)
}

/// Parse a seed file and import it
pub fn import_seed_file(
    conn: &mut Connection,
    path: &Path,
    discriminators: &DiscriminatorMap,
) -> Result<ImportSummary> {
    let people = parse_seed_file(path)?;
    import_people(conn, &people, discriminators)
}
