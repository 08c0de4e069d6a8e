//! JobDescription value object.

use super::errors::FieldKind;
use super::field::field_value;
use once_cell::sync::Lazy;
use regex::Regex;

static JOB_DESCRIPTION_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\S.*$").expect("Failed to compile job description regex"));

fn is_valid_job_description(raw: &str) -> bool {
    JOB_DESCRIPTION_REGEX.is_match(raw)
}

field_value!(
    /// Free-text summary of what a role involves.
    JobDescription,
    FieldKind::JobDescription,
    "Job description can take any values, and it should not be blank",
    is_valid_job_description
);
