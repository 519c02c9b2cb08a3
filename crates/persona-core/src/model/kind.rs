/// Hierarchy level of a person row
///
/// The tag of the single-table hierarchy. Stored rows carry it as a
/// configurable discriminator string (see [`super::DiscriminatorMap`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PersonKind {
    Person,
    Customer,
    Employee,
}

impl PersonKind {
    pub const ALL: [PersonKind; 3] = [
        PersonKind::Person,
        PersonKind::Customer,
        PersonKind::Employee,
    ];

    /// Entity name used in queries (`from Customer`)
    pub fn entity_name(&self) -> &'static str {
        match self {
            PersonKind::Person => "Person",
            PersonKind::Customer => "Customer",
            PersonKind::Employee => "Employee",
        }
    }

    /// Resolve an entity name as written in a query. Case-sensitive.
    pub fn from_entity_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.entity_name() == name)
    }

    /// Kinds whose rows a query on this entity returns
    ///
    /// `Person` is polymorphic and covers the whole hierarchy.
    pub fn covered_kinds(&self) -> &'static [PersonKind] {
        match self {
            PersonKind::Person => &Self::ALL,
            PersonKind::Customer => &[PersonKind::Customer],
            PersonKind::Employee => &[PersonKind::Employee],
        }
    }
}

impl std::fmt::Display for PersonKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.entity_name())
    }
}
