//! Entity model for the person hierarchy

pub mod discriminator;
pub mod entity;
pub mod kind;
pub mod person;

pub use discriminator::DiscriminatorMap;
pub use entity::Entity;
pub use kind::PersonKind;
pub use person::{BasePerson, Customer, Employee, Person, JOB_TITLE_MAX_LEN};
