//! Repository layer mapping the person hierarchy onto the `people` table

pub mod hydration;
pub mod person_repo;

pub use person_repo::PersonRepo;

/// Column list shared by every read of the `people` table
pub(crate) const PERSON_COLUMNS: &str = "id, kind, name, monthly_income, salary, job_title";
