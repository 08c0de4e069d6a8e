//! Domain validation errors.

use std::fmt;
use thiserror::Error;

/// The kind of field a value object represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FieldKind {
    Name,
    Phone,
    Email,
    Company,
    JobDescription,
    Salary,
    Deadline,
    Website,
    Experience,
    Tag,
}

impl FieldKind {
    /// Snake-case field name, matching the serialized record keys.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Phone => "phone",
            Self::Email => "email",
            Self::Company => "company",
            Self::JobDescription => "job_description",
            Self::Salary => "salary",
            Self::Deadline => "deadline",
            Self::Website => "website",
            Self::Experience => "experience",
            Self::Tag => "tag",
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A raw string failed a field's format predicate.
///
/// The `Display` output is the field's constraint message, verbatim, so it can
/// be shown to a user as-is. The offending input is kept for logging.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{constraint}")]
pub struct InvalidFormatError {
    field: FieldKind,
    value: String,
    constraint: &'static str,
}

impl InvalidFormatError {
    pub fn new(field: FieldKind, value: impl Into<String>, constraint: &'static str) -> Self {
        Self {
            field,
            value: value.into(),
            constraint,
        }
    }

    /// Which field rejected the input.
    pub fn field(&self) -> FieldKind {
        self.field
    }

    /// The rejected input.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// The field's fixed constraint message.
    pub fn constraint(&self) -> &'static str {
        self.constraint
    }
}
