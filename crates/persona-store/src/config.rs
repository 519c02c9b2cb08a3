//! Store configuration loaded from the environment
//!
//! | Env Var                          | Default              |
//! |----------------------------------|----------------------|
//! | `PERSONA_DATABASE_URL`           | `.persona/people.db` |
//! | `PERSONA_DISCRIMINATOR_PERSON`   | `P`                  |
//! | `PERSONA_DISCRIMINATOR_CUSTOMER` | `C`                  |
//! | `PERSONA_DISCRIMINATOR_EMPLOYEE` | `F`                  |

use std::path::PathBuf;

use persona_core::errors::{ExError, PersonaError};
use persona_core::model::discriminator::{
    DEFAULT_CUSTOMER_DISCRIMINATOR, DEFAULT_EMPLOYEE_DISCRIMINATOR, DEFAULT_PERSON_DISCRIMINATOR,
};
use persona_core::DiscriminatorMap;

use crate::errors::Result;

pub const ENV_DATABASE_URL: &str = "PERSONA_DATABASE_URL";
pub const ENV_DISCRIMINATOR_PERSON: &str = "PERSONA_DISCRIMINATOR_PERSON";
pub const ENV_DISCRIMINATOR_CUSTOMER: &str = "PERSONA_DISCRIMINATOR_CUSTOMER";
pub const ENV_DISCRIMINATOR_EMPLOYEE: &str = "PERSONA_DISCRIMINATOR_EMPLOYEE";

pub const DEFAULT_DATABASE_URL: &str = ".persona/people.db";

/// Where the database lives
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DatabaseLocation {
    File(PathBuf),
    /// Shared in-memory database, alive until the factory shuts down
    InMemory,
}

impl DatabaseLocation {
    /// Parse a database URL
    ///
    /// Accepts `:memory:`, `sqlite::memory:`, `sqlite://<path>`,
    /// `sqlite:<path>` and plain paths.
    pub fn parse(url: &str) -> Result<Self> {
        let url = url.trim();
        if url.is_empty() {
            return Err(invalid(ENV_DATABASE_URL, "database URL is empty"));
        }

        if url == ":memory:" || url == "sqlite::memory:" {
            return Ok(DatabaseLocation::InMemory);
        }

        let path = url
            .strip_prefix("sqlite://")
            .or_else(|| url.strip_prefix("sqlite:"))
            .unwrap_or(url);
        if path.is_empty() {
            return Err(invalid(ENV_DATABASE_URL, "database URL has no path"));
        }

        Ok(DatabaseLocation::File(PathBuf::from(path)))
    }

    /// Human-readable form for logs and errors
    pub fn describe(&self) -> String {
        match self {
            DatabaseLocation::File(path) => path.display().to_string(),
            DatabaseLocation::InMemory => ":memory:".to_string(),
        }
    }
}

/// Everything a session factory needs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    pub location: DatabaseLocation,
    pub discriminators: DiscriminatorMap,
    /// Create a missing database file on first open. Off for read paths.
    pub create_if_missing: bool,
}

impl StoreConfig {
    pub fn new(location: DatabaseLocation) -> Self {
        Self {
            location,
            discriminators: DiscriminatorMap::default(),
            create_if_missing: false,
        }
    }

    pub fn in_memory() -> Self {
        Self::new(DatabaseLocation::InMemory)
    }

    pub fn with_discriminators(mut self, discriminators: DiscriminatorMap) -> Self {
        self.discriminators = discriminators;
        self
    }

    pub fn with_create_if_missing(mut self, create: bool) -> Self {
        self.create_if_missing = create;
        self
    }

    /// Load configuration from process environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let url = lookup(ENV_DATABASE_URL).unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string());
        let location = DatabaseLocation::parse(&url)?;

        let person = lookup(ENV_DISCRIMINATOR_PERSON)
            .unwrap_or_else(|| DEFAULT_PERSON_DISCRIMINATOR.to_string());
        let customer = lookup(ENV_DISCRIMINATOR_CUSTOMER)
            .unwrap_or_else(|| DEFAULT_CUSTOMER_DISCRIMINATOR.to_string());
        let employee = lookup(ENV_DISCRIMINATOR_EMPLOYEE)
            .unwrap_or_else(|| DEFAULT_EMPLOYEE_DISCRIMINATOR.to_string());
        let discriminators = DiscriminatorMap::new(person, customer, employee)?;

        Ok(Self {
            location,
            discriminators,
            create_if_missing: false,
        })
    }
}

fn invalid(key: &str, reason: &str) -> ExError {
    PersonaError::InvalidConfig {
        key: key.to_string(),
        reason: reason.to_string(),
    }
    .into()
}
