//! Seed files: YAML lists of people imported in one transaction

pub mod format_v0;
pub mod importer;
pub mod parser;

pub use format_v0::{SeedPersonV0, SeedV0};
pub use importer::{import_seed, import_seed_file, ImportSummary};
pub use parser::{parse_seed_file, parse_seed_str};
