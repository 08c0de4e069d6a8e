//! Shared roles for integration tests.
//!
//! Every fixture is built through `RoleBuilder`, so a fixture that compiles
//! but carries an invalid literal fails loudly at the first test using it.

#![allow(dead_code)]

use role_tracker::{Role, RoleBuilder};

pub const VALID_NAME_BOB: &str = "Site Reliability Engineer";
pub const VALID_COMPANY_BOB: &str = "Shopee";
pub const VALID_TAG_URGENT: &str = "urgent";
pub const VALID_TAG_REMOTE: &str = "remote";

/// A backend internship with one tag.
pub fn alice() -> Role {
    RoleBuilder::new()
        .with_name("Backend Intern")
        .and_then(|b| b.with_company("DBS"))
        .and_then(|b| b.with_phone("94351253"))
        .and_then(|b| b.with_email("alice@example.com"))
        .and_then(|b| b.with_salary("3500"))
        .and_then(|b| b.with_deadline("2024-01-15"))
        .and_then(|b| b.with_tags([VALID_TAG_REMOTE]))
        .expect("fixture alice is valid")
        .build()
}

/// An SRE role with two tags.
pub fn bob() -> Role {
    RoleBuilder::new()
        .with_name(VALID_NAME_BOB)
        .and_then(|b| b.with_company(VALID_COMPANY_BOB))
        .and_then(|b| b.with_phone("98765432"))
        .and_then(|b| b.with_email("bob@example.com"))
        .and_then(|b| b.with_job_description("On-call rotation, Kubernetes"))
        .and_then(|b| b.with_salary("6000"))
        .and_then(|b| b.with_website("https://careers.shopee.sg"))
        .and_then(|b| b.with_experience("Kubernetes"))
        .and_then(|b| b.with_tags([VALID_TAG_URGENT, VALID_TAG_REMOTE]))
        .expect("fixture bob is valid")
        .build()
}

/// All fixture roles, in a stable order.
pub fn typical_roles() -> Vec<Role> {
    vec![alice(), bob()]
}
