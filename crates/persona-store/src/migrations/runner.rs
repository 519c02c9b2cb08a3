//! Migration runner
//!
//! Each embedded migration runs at most once per database. A database whose
//! recorded checksum for a migration differs from the embedded SQL is
//! rejected.

use crate::errors::{checksum_mismatch, from_rusqlite, migration_error, Result};
use crate::migrations::checksums::compute_checksum;
use crate::migrations::embedded::{Migration, MIGRATIONS};
use rusqlite::{Connection, OptionalExtension};

/// Apply pending migrations, returning the ids applied by this call
pub fn apply_migrations(conn: &mut Connection) -> Result<Vec<&'static str>> {
    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS schema_version (
            id INTEGER PRIMARY KEY,
            migration_id TEXT NOT NULL UNIQUE,
            applied_at INTEGER NOT NULL,
            checksum TEXT
        )",
    )
    .map_err(from_rusqlite)?;

    let mut applied = Vec::new();
    for migration in MIGRATIONS {
        if is_pending(conn, migration)? {
            apply_one(conn, migration)?;
            applied.push(migration.id);
        }
    }

    if !applied.is_empty() {
        tracing::info!(applied = ?applied, "schema migrated");
    }
    Ok(applied)
}

/// `false` when already recorded with a matching checksum
fn is_pending(conn: &Connection, migration: &Migration) -> Result<bool> {
    let recorded: Option<Option<String>> = conn
        .query_row(
            "SELECT checksum FROM schema_version WHERE migration_id = ?",
            [migration.id],
            |row| row.get(0),
        )
        .optional()
        .map_err(from_rusqlite)?;

    match recorded {
        None => Ok(true),
        Some(None) => Ok(false),
        Some(Some(previous)) => {
            let expected = compute_checksum(migration.sql);
            if previous == expected {
                Ok(false)
            } else {
                Err(checksum_mismatch(migration.id, &previous, &expected))
            }
        }
    }
}

fn apply_one(conn: &mut Connection, migration: &Migration) -> Result<()> {
    let tx = conn.transaction().map_err(from_rusqlite)?;

    tx.execute_batch(migration.sql)
        .map_err(|e| migration_error(migration.id, &e.to_string()))?;
    tx.execute(
        "INSERT INTO schema_version (migration_id, applied_at, checksum) VALUES (?, ?, ?)",
        rusqlite::params![
            migration.id,
            chrono::Utc::now().timestamp(),
            compute_checksum(migration.sql)
        ],
    )
    .map_err(from_rusqlite)?;

    tx.commit().map_err(from_rusqlite)
}
