//! Salary value object.

use super::errors::FieldKind;
use super::field::field_value;
use once_cell::sync::Lazy;
use regex::Regex;

static SALARY_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]+$").expect("Failed to compile salary regex"));

fn is_valid_salary(raw: &str) -> bool {
    SALARY_REGEX.is_match(raw)
}

field_value!(
    /// Offered salary, as a non-empty run of ASCII digits.
    ///
    /// The raw text is stored verbatim (leading zeros included); use
    /// [`Salary::amount`] for a numeric view.
    Salary,
    FieldKind::Salary,
    "Salary should only contain numbers, and it should not be blank",
    is_valid_salary
);

impl Salary {
    /// Numeric value of the salary, or `None` if it does not fit in a `u64`.
    pub fn amount(&self) -> Option<u64> {
        self.as_str().parse().ok()
    }
}
