//! Domain value objects and types.
//!
//! Every field of a role is a type-safe wrapper around a string that is
//! validated once, at construction, and never mutated afterwards. Holding a
//! `Phone` means holding a string that is a valid phone number.

pub mod company;
pub mod deadline;
pub mod email;
pub mod errors;
pub mod experience;
pub mod field;
pub mod job_description;
pub mod name;
pub mod phone;
pub mod salary;
pub mod tag;
pub mod website;

pub use company::Company;
pub use deadline::Deadline;
pub use email::Email;
pub use errors::{FieldKind, InvalidFormatError};
pub use experience::Experience;
pub use field::FieldValue;
pub use job_description::JobDescription;
pub use name::Name;
pub use phone::Phone;
pub use salary::Salary;
pub use tag::{tag_set, Tag};
pub use website::Website;
