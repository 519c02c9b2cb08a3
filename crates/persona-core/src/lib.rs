//! Persona Core - entity model for the person hierarchy
//!
//! This crate provides the in-memory side of the data-access layer:
//! - Person / Customer / Employee entities as a tagged union
//! - Discriminator mapping between entity kinds and stored tags
//! - A minimal entity query language (`from <Entity>`)
//! - Field rules applied on the write path
//! - The canonical error and logging facilities

pub mod errors;
pub mod logging_facility;
pub mod model;
pub mod query;
pub mod rules;

// Re-export commonly used types
pub use errors::{ExError, ExErrorKind, PersonaError, Result};
pub use model::{BasePerson, Customer, DiscriminatorMap, Employee, Entity, Person, PersonKind};
pub use query::EntityQuery;
