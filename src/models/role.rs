//! Role model representing one job application.

use crate::domain::{
    Company, Deadline, Email, Experience, JobDescription, Name, Phone, Salary, Tag, Website,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// A job application tracked by the user.
///
/// Every field is a validated value object, so a `Role` is valid as soon as it
/// exists. Roles are immutable: changing a field means building a new `Role`
/// (see [`RoleBuilder::from_role`](crate::models::RoleBuilder::from_role)) and
/// replacing the old one wherever it is stored.
///
/// Equality is structural over every field, tags included. Tags are a set, so
/// the order they were supplied in does not matter.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Role {
    name: Name,
    phone: Phone,
    email: Email,
    company: Company,
    job_description: JobDescription,
    salary: Salary,
    deadline: Deadline,
    website: Website,
    experience: Experience,
    #[serde(default)]
    tags: BTreeSet<Tag>,
}

impl Role {
    /// Assemble a role from already-validated fields.
    ///
    /// No cross-field checks are made. `tags` is collected into an owned set,
    /// so later changes to the caller's collection cannot reach the role.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        name: Name,
        phone: Phone,
        email: Email,
        company: Company,
        job_description: JobDescription,
        tags: impl IntoIterator<Item = Tag>,
        website: Website,
        salary: Salary,
        deadline: Deadline,
        experience: Experience,
    ) -> Self {
        Self {
            name,
            phone,
            email,
            company,
            job_description,
            salary,
            deadline,
            website,
            experience,
            tags: tags.into_iter().collect(),
        }
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn phone(&self) -> &Phone {
        &self.phone
    }

    pub fn email(&self) -> &Email {
        &self.email
    }

    pub fn company(&self) -> &Company {
        &self.company
    }

    pub fn job_description(&self) -> &JobDescription {
        &self.job_description
    }

    pub fn salary(&self) -> &Salary {
        &self.salary
    }

    pub fn deadline(&self) -> &Deadline {
        &self.deadline
    }

    pub fn website(&self) -> &Website {
        &self.website
    }

    pub fn experience(&self) -> &Experience {
        &self.experience
    }

    /// Read-only view of the role's tags, in tag order.
    pub fn tags(&self) -> &BTreeSet<Tag> {
        &self.tags
    }

    /// Returns true if `other` describes the same position: same name at the
    /// same company.
    ///
    /// This is weaker than `==` and is what a role collection uses to refuse
    /// duplicates; two versions of the same role with different salaries are
    /// the same role but not equal.
    pub fn is_same_role(&self, other: &Role) -> bool {
        std::ptr::eq(self, other) || (self.name == other.name && self.company == other.company)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}; Phone: {}; Email: {}; Company: {}; Job Description: {}; Salary: {}; Deadline: {}; Website: {}; Experience: {}",
            self.name,
            self.phone,
            self.email,
            self.company,
            self.job_description,
            self.salary,
            self.deadline,
            self.website,
            self.experience,
        )?;

        if !self.tags.is_empty() {
            f.write_str("; Tags: ")?;
            for tag in &self.tags {
                write!(f, "[{}]", tag)?;
            }
        }

        Ok(())
    }
}
