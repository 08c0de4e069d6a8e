//! Incremental construction of [`Role`] values.

use super::role::Role;
use crate::domain::{
    tag_set, Company, Deadline, Email, Experience, InvalidFormatError, JobDescription, Name,
    Phone, Salary, Tag, Website,
};
use std::collections::BTreeSet;
use tracing::debug;

/// Mutable staging area for a [`Role`].
///
/// Starts either from the `DEFAULT_*` literals or from an existing role, takes
/// field overrides as raw strings, and hands out immutable snapshots via
/// [`build`](Self::build). Every setter validates through the field's value
/// type; a rejected value leaves the builder exactly as it was.
///
/// # Example
///
/// ```
/// use role_tracker::models::RoleBuilder;
///
/// # fn main() -> Result<(), role_tracker::domain::InvalidFormatError> {
/// let role = RoleBuilder::new()
///     .with_name("Backend Engineer")?
///     .with_salary("5200")?
///     .with_tags(["remote", "urgent"])?
///     .build();
///
/// assert_eq!(role.name().as_str(), "Backend Engineer");
/// assert_eq!(role.tags().len(), 2);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct RoleBuilder {
    name: Name,
    phone: Phone,
    email: Email,
    company: Company,
    job_description: JobDescription,
    tags: BTreeSet<Tag>,
    salary: Salary,
    deadline: Deadline,
    website: Website,
    experience: Experience,
}

impl RoleBuilder {
    pub const DEFAULT_NAME: &'static str = "Amy Bee";
    pub const DEFAULT_PHONE: &'static str = "85355255";
    pub const DEFAULT_EMAIL: &'static str = "amy@gmail.com";
    pub const DEFAULT_COMPANY: &'static str = "123, Jurong West Ave 6, #08-111";
    pub const DEFAULT_JOB_DESCRIPTION: &'static str = "Software Engineer Intern @ DBS";
    pub const DEFAULT_SALARY: &'static str = "4000";
    pub const DEFAULT_DEADLINE: &'static str = "2023-10-20";
    pub const DEFAULT_WEBSITE: &'static str = "www.google.com";
    pub const DEFAULT_EXPERIENCE: &'static str = "Java";

    /// Create a builder holding the default details and no tags.
    pub fn new() -> Self {
        // The DEFAULT_* literals are covered by test_default_literals_are_valid.
        Self {
            name: Name::new(Self::DEFAULT_NAME).expect("default name is valid"),
            phone: Phone::new(Self::DEFAULT_PHONE).expect("default phone is valid"),
            email: Email::new(Self::DEFAULT_EMAIL).expect("default email is valid"),
            company: Company::new(Self::DEFAULT_COMPANY).expect("default company is valid"),
            job_description: JobDescription::new(Self::DEFAULT_JOB_DESCRIPTION)
                .expect("default job description is valid"),
            tags: BTreeSet::new(),
            salary: Salary::new(Self::DEFAULT_SALARY).expect("default salary is valid"),
            deadline: Deadline::new(Self::DEFAULT_DEADLINE).expect("default deadline is valid"),
            website: Website::new(Self::DEFAULT_WEBSITE).expect("default website is valid"),
            experience: Experience::new(Self::DEFAULT_EXPERIENCE)
                .expect("default experience is valid"),
        }
    }

    /// Create a builder seeded with every field of `role`.
    ///
    /// The builder owns copies; nothing done to it afterwards affects `role`.
    pub fn from_role(role: &Role) -> Self {
        Self {
            name: role.name().clone(),
            phone: role.phone().clone(),
            email: role.email().clone(),
            company: role.company().clone(),
            job_description: role.job_description().clone(),
            tags: role.tags().clone(),
            salary: role.salary().clone(),
            deadline: role.deadline().clone(),
            website: role.website().clone(),
            experience: role.experience().clone(),
        }
    }

    /// Sets the `Name` of the role being built.
    pub fn with_name(&mut self, name: &str) -> Result<&mut Self, InvalidFormatError> {
        self.name = Name::new(name)?;
        Ok(self)
    }

    /// Sets the `Phone` of the role being built.
    pub fn with_phone(&mut self, phone: &str) -> Result<&mut Self, InvalidFormatError> {
        self.phone = Phone::new(phone)?;
        Ok(self)
    }

    /// Sets the `Email` of the role being built.
    pub fn with_email(&mut self, email: &str) -> Result<&mut Self, InvalidFormatError> {
        self.email = Email::new(email)?;
        Ok(self)
    }

    /// Sets the `Company` of the role being built.
    pub fn with_company(&mut self, company: &str) -> Result<&mut Self, InvalidFormatError> {
        self.company = Company::new(company)?;
        Ok(self)
    }

    /// Sets the `JobDescription` of the role being built.
    pub fn with_job_description(
        &mut self,
        job_description: &str,
    ) -> Result<&mut Self, InvalidFormatError> {
        self.job_description = JobDescription::new(job_description)?;
        Ok(self)
    }

    /// Sets the `Salary` of the role being built.
    pub fn with_salary(&mut self, salary: &str) -> Result<&mut Self, InvalidFormatError> {
        self.salary = Salary::new(salary)?;
        Ok(self)
    }

    /// Sets the `Deadline` of the role being built.
    pub fn with_deadline(&mut self, deadline: &str) -> Result<&mut Self, InvalidFormatError> {
        self.deadline = Deadline::new(deadline)?;
        Ok(self)
    }

    /// Sets the `Website` of the role being built.
    pub fn with_website(&mut self, website: &str) -> Result<&mut Self, InvalidFormatError> {
        self.website = Website::new(website)?;
        Ok(self)
    }

    /// Sets the `Experience` of the role being built.
    pub fn with_experience(&mut self, experience: &str) -> Result<&mut Self, InvalidFormatError> {
        self.experience = Experience::new(experience)?;
        Ok(self)
    }

    /// Parses `tags` into a tag set and replaces the current tags with it.
    ///
    /// The existing tags are not merged. If any tag is malformed the current
    /// set is kept.
    pub fn with_tags<I, S>(&mut self, tags: I) -> Result<&mut Self, InvalidFormatError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.tags = tag_set(tags)?;
        Ok(self)
    }

    /// Snapshot the current fields into a new `Role`.
    ///
    /// The builder is left untouched and can keep producing roles.
    pub fn build(&self) -> Role {
        debug!(name = %self.name, company = %self.company, "Building role");

        Role::new(
            self.name.clone(),
            self.phone.clone(),
            self.email.clone(),
            self.company.clone(),
            self.job_description.clone(),
            self.tags.iter().cloned(),
            self.website.clone(),
            self.salary.clone(),
            self.deadline.clone(),
            self.experience.clone(),
        )
    }
}

impl Default for RoleBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl From<&Role> for RoleBuilder {
    fn from(role: &Role) -> Self {
        Self::from_role(role)
    }
}
