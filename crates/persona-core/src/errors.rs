use persona_core_types::SessionId;
use thiserror::Error;

/// Result type alias using PersonaError
pub type Result<T> = std::result::Result<T, PersonaError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Each kind maps to a stable error code that can be used for programmatic
/// error handling and for assertions in tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    // Validation
    InvalidInput,
    InvalidDiscriminator,

    // Query
    Query,

    // Session / connection
    Connection,
    SessionClosed,
    Config,

    // Integration/IO
    Io,
    Serialization,
    Persistence,

    // Internal
    Internal,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::InvalidInput => "ERR_INVALID_INPUT",
            ExErrorKind::InvalidDiscriminator => "ERR_INVALID_DISCRIMINATOR",
            ExErrorKind::Query => "ERR_QUERY",
            ExErrorKind::Connection => "ERR_CONNECTION",
            ExErrorKind::SessionClosed => "ERR_SESSION_CLOSED",
            ExErrorKind::Config => "ERR_CONFIG",
            ExErrorKind::Io => "ERR_IO",
            ExErrorKind::Serialization => "ERR_SERIALIZATION",
            ExErrorKind::Persistence => "ERR_PERSISTENCE",
            ExErrorKind::Internal => "ERR_INTERNAL",
        }
    }
}

/// Canonical structured error type
///
/// Classification fields for programmatic handling plus context for
/// debugging. Built with the `with_*` methods.
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    entity_id: Option<String>,
    session_id: Option<SessionId>,
    message: String,
    source: Option<Box<ExError>>,
}

impl ExError {
    /// Create a new error with the specified kind
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            entity_id: None,
            session_id: None,
            message: String::new(),
            source: None,
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add entity context (entity name or row id)
    pub fn with_entity_id(mut self, id: impl Into<String>) -> Self {
        self.entity_id = Some(id.into());
        self
    }

    /// Add session context
    pub fn with_session_id(mut self, session_id: SessionId) -> Self {
        self.session_id = Some(session_id);
        self
    }

    /// Add custom message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Add source error
    pub fn with_source(mut self, source: ExError) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    pub fn kind(&self) -> ExErrorKind {
        self.kind
    }

    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    pub fn entity_id(&self) -> Option<&str> {
        self.entity_id.as_deref()
    }

    pub fn session_id(&self) -> Option<&SessionId> {
        self.session_id.as_ref()
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn source_error(&self) -> Option<&ExError> {
        self.source.as_deref()
    }
}

impl std::fmt::Display for ExError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.code())?;
        if let Some(op) = &self.op {
            write!(f, " in operation '{}'", op)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        if let Some(entity_id) = &self.entity_id {
            write!(f, " (entity: {})", entity_id)?;
        }
        if let Some(source) = &self.source {
            write!(f, " caused by {}", source)?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_deref()
            .map(|s| s as &(dyn std::error::Error + 'static))
    }
}

// ========== End Error Facility ==========

/// Domain errors raised by the entity model, the query parser and
/// configuration validation
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PersonaError {
    // ===== Field rules =====
    /// Name is empty or whitespace-only
    #[error("Invalid name: {reason}")]
    InvalidName { reason: String },

    /// Job title exceeds the column length
    #[error("Job title is {len} characters, maximum is {max}")]
    JobTitleTooLong { len: usize, max: usize },

    /// A decimal field could not be parsed
    #[error("Invalid decimal for {field}: {value:?}")]
    InvalidDecimal { field: String, value: String },

    // ===== Discriminators =====
    /// A stored discriminator does not map to any entity kind
    #[error("Unknown discriminator: {value:?}")]
    UnknownDiscriminator { value: String },

    /// Two entity kinds were configured with the same discriminator
    #[error("Discriminator {value:?} is assigned to more than one entity kind")]
    DuplicateDiscriminator { value: String },

    /// A discriminator was configured as an empty string
    #[error("Discriminator for {entity} must not be empty")]
    EmptyDiscriminator { entity: String },

    // ===== Queries =====
    /// Query text does not follow `from <Entity>`
    #[error("Malformed query {query:?}: {reason}")]
    MalformedQuery { query: String, reason: String },

    /// Query names an entity that is not mapped
    #[error("Unknown entity: {name}")]
    UnknownEntity { name: String },

    /// Query result rows cannot be represented as the requested entity type
    #[error("Query {query:?} cannot produce {expected} results")]
    QueryTypeMismatch { query: String, expected: String },

    // ===== Configuration =====
    /// Configuration value missing or unusable
    #[error("Invalid configuration for {key}: {reason}")]
    InvalidConfig { key: String, reason: String },
}

impl From<PersonaError> for ExError {
    fn from(err: PersonaError) -> Self {
        let message = err.to_string();
        match err {
            PersonaError::InvalidName { .. } => ExError::new(ExErrorKind::InvalidInput)
                .with_op("validate_name")
                .with_message(message),

            PersonaError::JobTitleTooLong { .. } => ExError::new(ExErrorKind::InvalidInput)
                .with_op("validate_job_title")
                .with_entity_id("Employee")
                .with_message(message),

            PersonaError::InvalidDecimal { .. } => ExError::new(ExErrorKind::InvalidInput)
                .with_op("parse_decimal")
                .with_message(message),

            PersonaError::UnknownDiscriminator { .. } => {
                ExError::new(ExErrorKind::InvalidDiscriminator)
                    .with_op("resolve_discriminator")
                    .with_message(message)
            }

            PersonaError::DuplicateDiscriminator { .. }
            | PersonaError::EmptyDiscriminator { .. } => ExError::new(ExErrorKind::Config)
                .with_op("validate_discriminators")
                .with_message(message),

            PersonaError::MalformedQuery { .. } => ExError::new(ExErrorKind::Query)
                .with_op("parse_query")
                .with_message(message),

            PersonaError::UnknownEntity { ref name } => ExError::new(ExErrorKind::Query)
                .with_op("parse_query")
                .with_entity_id(name.clone())
                .with_message(message),

            PersonaError::QueryTypeMismatch { ref expected, .. } => {
                ExError::new(ExErrorKind::Query)
                    .with_op("create_query")
                    .with_entity_id(expected.clone())
                    .with_message(message)
            }

            PersonaError::InvalidConfig { .. } => ExError::new(ExErrorKind::Config)
                .with_op("load_config")
                .with_message(message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_code_op_and_message() {
        let err = ExError::new(ExErrorKind::Connection)
            .with_op("open_session")
            .with_message("unable to open database file");

        let rendered = err.to_string();
        assert!(rendered.starts_with("[ERR_CONNECTION]"));
        assert!(rendered.contains("open_session"));
        assert!(rendered.contains("unable to open database file"));
    }

    #[test]
    fn test_source_chain_is_exposed() {
        let inner = ExError::new(ExErrorKind::Persistence).with_message("disk I/O error");
        let outer = ExError::new(ExErrorKind::Connection).with_source(inner);

        assert_eq!(
            outer.source_error().map(|e| e.kind()),
            Some(ExErrorKind::Persistence)
        );
        assert!(std::error::Error::source(&outer).is_some());
    }
}
