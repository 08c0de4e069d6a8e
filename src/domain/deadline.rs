//! Deadline value object.

use super::errors::FieldKind;
use super::field::field_value;
use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;

const DATE_FORMAT: &str = "%Y-%m-%d";

static DEADLINE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}$").expect("Failed to compile deadline regex")
});

fn is_valid_deadline(raw: &str) -> bool {
    DEADLINE_REGEX.is_match(raw) && NaiveDate::parse_from_str(raw, DATE_FORMAT).is_ok()
}

field_value!(
    /// Application deadline as an ISO calendar date (`YYYY-MM-DD`).
    ///
    /// The pattern is checked first, then the date itself, so `2023-02-30`
    /// is rejected. No comparison against today's date is made.
    ///
    /// # Example
    ///
    /// ```
    /// use role_tracker::domain::Deadline;
    ///
    /// let deadline = Deadline::new("2023-10-20").unwrap();
    /// assert_eq!(deadline.date().to_string(), "2023-10-20");
    /// assert!(Deadline::new("20/10/2023").is_err());
    /// ```
    Deadline,
    FieldKind::Deadline,
    "Deadline should be in the format YYYY-MM-DD and be a valid calendar date",
    is_valid_deadline
);

impl Deadline {
    /// The deadline as a calendar date.
    pub fn date(&self) -> NaiveDate {
        NaiveDate::parse_from_str(self.as_str(), DATE_FORMAT)
            .expect("deadline validated as a calendar date")
    }
}
