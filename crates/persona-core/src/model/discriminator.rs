//! Mapping between entity kinds and the stored discriminator column

use super::kind::PersonKind;
use crate::errors::{PersonaError, Result};

pub const DEFAULT_PERSON_DISCRIMINATOR: &str = "P";
pub const DEFAULT_CUSTOMER_DISCRIMINATOR: &str = "C";
pub const DEFAULT_EMPLOYEE_DISCRIMINATOR: &str = "F";

/// Discriminator values for each level of the hierarchy
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscriminatorMap {
    person: String,
    customer: String,
    employee: String,
}

impl DiscriminatorMap {
    /// Build a map, rejecting empty or duplicated values
    pub fn new(
        person: impl Into<String>,
        customer: impl Into<String>,
        employee: impl Into<String>,
    ) -> Result<Self> {
        let map = Self {
            person: person.into(),
            customer: customer.into(),
            employee: employee.into(),
        };
        map.validate()?;
        Ok(map)
    }

    fn validate(&self) -> Result<()> {
        let mut seen: Vec<&str> = Vec::with_capacity(3);
        for kind in PersonKind::ALL {
            let value = self.tag_for(kind);
            if value.trim().is_empty() {
                return Err(PersonaError::EmptyDiscriminator {
                    entity: kind.entity_name().to_string(),
                });
            }
            if seen.contains(&value) {
                return Err(PersonaError::DuplicateDiscriminator {
                    value: value.to_string(),
                });
            }
            seen.push(value);
        }
        Ok(())
    }

    /// Discriminator stored for rows of `kind`
    pub fn tag_for(&self, kind: PersonKind) -> &str {
        match kind {
            PersonKind::Person => &self.person,
            PersonKind::Customer => &self.customer,
            PersonKind::Employee => &self.employee,
        }
    }

    /// Entity kind for a stored discriminator
    pub fn kind_for(&self, tag: &str) -> Result<PersonKind> {
        PersonKind::ALL
            .into_iter()
            .find(|k| self.tag_for(*k) == tag)
            .ok_or_else(|| PersonaError::UnknownDiscriminator {
                value: tag.to_string(),
            })
    }

    /// Discriminators covered by a query on `kind`, in hierarchy order
    pub fn tags_covering(&self, kind: PersonKind) -> Vec<&str> {
        kind.covered_kinds()
            .iter()
            .map(|k| self.tag_for(*k))
            .collect()
    }
}

impl Default for DiscriminatorMap {
    fn default() -> Self {
        Self {
            person: DEFAULT_PERSON_DISCRIMINATOR.to_string(),
            customer: DEFAULT_CUSTOMER_DISCRIMINATOR.to_string(),
            employee: DEFAULT_EMPLOYEE_DISCRIMINATOR.to_string(),
        }
    }
}
