//! Persona Store - SQLite persistence for the person hierarchy
//!
//! Provides:
//! - Session provider (`SessionFactory`) and scoped sessions
//! - Environment-driven store configuration
//! - Embedded schema migrations with checksums
//! - Row hydration into the tagged `Person` model
//! - Seed file parsing and import

pub mod config;
pub mod db;
pub mod errors;
pub mod migrations;
pub mod repo;
pub mod seed;
pub mod session;

// Re-export key types
pub use config::{DatabaseLocation, StoreConfig};
pub use errors::Result;
pub use session::{Session, SessionFactory, TypedQuery};
