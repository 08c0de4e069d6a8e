//! Role Tracker - validated domain model for a personal job-application tracker.
//!
//! Each tracked role bundles contact, employer and commercial details plus
//! free-form tags. Every detail is a self-validating value object, so a
//! [`Role`] that exists is a role whose fields are all well-formed.
//!
//! # Architecture
//!
//! - **domain**: Field value objects (`Name`, `Phone`, `Email`, ...) and the
//!   validation error they raise
//! - **models**: The immutable `Role` aggregate and the `RoleBuilder`
//! - **import**: Re-validation of untrusted JSON role records
//! - **error**: Error types for configuration and import plumbing
//! - **config**: Configuration management from environment variables

pub mod config;
pub mod domain;
pub mod error;
pub mod import;
pub mod models;

// Re-export commonly used types
pub use config::Config;
pub use domain::{FieldKind, FieldValue, InvalidFormatError};
pub use error::{ConfigError, ImportError};
pub use import::{import_from_reader, import_roles, ImportReport, RejectedRecord, RejectionReason};
pub use models::{Role, RoleBuilder};
