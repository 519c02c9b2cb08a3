//! Error handling for persona-store
//!
//! Wraps persona-core ExError with store-specific helpers

use persona_core::errors::{ExError, ExErrorKind, PersonaError};

/// Result type alias using ExError
pub type Result<T> = std::result::Result<T, ExError>;

/// Create a migration error
pub fn migration_error(migration_id: &str, reason: &str) -> ExError {
    ExError::new(ExErrorKind::Persistence)
        .with_op("migration")
        .with_message(format!("Migration {} failed: {}", migration_id, reason))
}

/// Create a checksum mismatch error
pub fn checksum_mismatch(migration_id: &str, recorded: &str, embedded: &str) -> ExError {
    ExError::new(ExErrorKind::Persistence)
        .with_op("migration_checksum")
        .with_message(format!(
            "Checksum mismatch for migration {}: recorded {}, embedded {}",
            migration_id, recorded, embedded
        ))
}

/// Create a database error from rusqlite::Error
pub fn from_rusqlite(err: rusqlite::Error) -> ExError {
    ExError::new(ExErrorKind::Persistence)
        .with_op("sqlite")
        .with_message(err.to_string())
}

/// The database could not be reached or opened
pub fn connection_error(target: &str, err: rusqlite::Error) -> ExError {
    ExError::new(ExErrorKind::Connection)
        .with_op("open_session")
        .with_message(format!("Cannot open database {}: {}", target, err))
}

/// A query could not be prepared against the schema
pub fn query_error(query: &str, err: rusqlite::Error) -> ExError {
    ExError::new(ExErrorKind::Query)
        .with_op("execute_query")
        .with_message(format!("Query {:?} failed: {}", query, err))
}

/// The session factory has been shut down
pub fn factory_closed() -> ExError {
    ExError::new(ExErrorKind::SessionClosed)
        .with_op("open_session")
        .with_message("Session factory has been shut down")
}

/// Create a seed validation error
pub fn seed_validation(reason: &str) -> ExError {
    ExError::new(ExErrorKind::InvalidInput)
        .with_op("seed_parse")
        .with_message(reason.to_string())
}

/// Wrap a domain error raised while reading a stored row
pub fn hydration_error(person_id: i64, err: PersonaError) -> ExError {
    let source: ExError = err.into();
    ExError::new(source.kind())
        .with_op("hydrate_person")
        .with_entity_id(person_id.to_string())
        .with_message(source.message().to_string())
        .with_source(source)
}

/// Create an IO error
pub fn io_error(operation: &str, err: std::io::Error) -> ExError {
    ExError::new(ExErrorKind::Io)
        .with_op(operation.to_string())
        .with_message(err.to_string())
}

/// Internal invariant failure (poisoned lock and the like)
pub fn internal_error(operation: &str, reason: &str) -> ExError {
    ExError::new(ExErrorKind::Internal)
        .with_op(operation.to_string())
        .with_message(reason.to_string())
}
