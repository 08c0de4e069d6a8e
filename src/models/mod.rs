//! The role aggregate and its builder.
//!
//! A [`Role`] is an immutable bundle of validated fields. [`RoleBuilder`] is
//! the only convenient way to assemble one from raw strings, and the way to
//! derive an updated copy of an existing role.

pub mod role;
pub mod role_builder;

pub use role::Role;
pub use role_builder::RoleBuilder;
