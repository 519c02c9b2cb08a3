//! Seed format version 0
//!
//! ```yaml
//! schema_version: 0
//! people:
//!   - kind: customer
//!     name: Maria
//!     monthly_income: "3200.50"
//!   - kind: employee
//!     name: Ana
//!     job_title: Engineer
//!     salary: "5000.00"
//!   - kind: person
//!     name: Joao
//! ```
//!
//! Decimals are strings so their scale is kept exactly.

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct SeedV0 {
    pub schema_version: u32,
    #[serde(default)]
    pub people: Vec<SeedPersonV0>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SeedPersonV0 {
    Person {
        name: String,
    },
    Customer {
        name: String,
        #[serde(default)]
        monthly_income: Option<String>,
    },
    Employee {
        name: String,
        #[serde(default)]
        salary: Option<String>,
        #[serde(default)]
        job_title: Option<String>,
    },
}
