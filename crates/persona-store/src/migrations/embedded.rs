//! SQL migrations compiled into the binary

/// One schema change, identified by its file stem
#[derive(Debug, Clone, Copy)]
pub struct Migration {
    pub id: &'static str,
    pub sql: &'static str,
}

/// All migrations, in application order
pub const MIGRATIONS: &[Migration] = &[
    Migration {
        id: "001_people",
        sql: include_str!("../../migrations/001_people.sql"),
    },
    Migration {
        id: "002_immutable_discriminator",
        sql: include_str!("../../migrations/002_immutable_discriminator.sql"),
    },
];
