//! Entity query language
//!
//! The only supported form is `from <Entity>`. The keyword is
//! case-insensitive, entity names are case-sensitive.

use crate::errors::{PersonaError, Result};
use crate::model::{Entity, PersonKind};

/// A parsed `from <Entity>` query
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntityQuery {
    text: String,
    target: PersonKind,
}

impl EntityQuery {
    /// Parse query text
    pub fn parse(text: &str) -> Result<Self> {
        let malformed = |reason: &str| PersonaError::MalformedQuery {
            query: text.to_string(),
            reason: reason.to_string(),
        };

        let mut tokens = text.split_whitespace();
        let keyword = tokens.next().ok_or_else(|| malformed("query is empty"))?;
        if !keyword.eq_ignore_ascii_case("from") {
            return Err(malformed("expected 'from'"));
        }

        let entity = tokens
            .next()
            .ok_or_else(|| malformed("missing entity name after 'from'"))?;
        if tokens.next().is_some() {
            return Err(malformed("unexpected tokens after entity name"));
        }

        let target = PersonKind::from_entity_name(entity).ok_or_else(|| {
            PersonaError::UnknownEntity {
                name: entity.to_string(),
            }
        })?;

        Ok(Self {
            text: text.trim().to_string(),
            target,
        })
    }

    /// Query selecting every row mapped to `T`
    pub fn for_entity<T: Entity>() -> Self {
        let target = PersonKind::from_entity_name(T::ENTITY_NAME).unwrap_or(PersonKind::Person);
        Self {
            text: format!("from {}", T::ENTITY_NAME),
            target,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn target(&self) -> PersonKind {
        self.target
    }

    /// Check that every row this query returns can be loaded as `T`
    pub fn ensure_result_type<T: Entity>(&self) -> Result<()> {
        let accepted = T::kinds();
        if self
            .target
            .covered_kinds()
            .iter()
            .all(|k| accepted.contains(k))
        {
            Ok(())
        } else {
            Err(PersonaError::QueryTypeMismatch {
                query: self.text.clone(),
                expected: T::ENTITY_NAME.to_string(),
            })
        }
    }
}
