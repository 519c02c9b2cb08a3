//! Field rules applied before rows are written

pub mod validation;

pub use validation::{parse_decimal, validate_person};
