//! Name value object.

use super::errors::FieldKind;
use super::field::field_value;
use once_cell::sync::Lazy;
use regex::Regex;

static NAME_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[[:alnum:]][[:alnum:] ]*$").expect("Failed to compile name regex")
});

fn is_valid_name(raw: &str) -> bool {
    NAME_REGEX.is_match(raw)
}

field_value!(
    /// The title of a role, e.g. "Software Engineer Intern".
    ///
    /// ASCII letters, digits and spaces; the first character may not be a
    /// space, so blank input is rejected.
    ///
    /// # Example
    ///
    /// ```
    /// use role_tracker::domain::Name;
    ///
    /// let name = Name::new("Amy Bee").unwrap();
    /// assert_eq!(name.as_str(), "Amy Bee");
    /// assert!(Name::new(" Amy").is_err());
    /// ```
    Name,
    FieldKind::Name,
    "Names should only contain alphanumeric characters and spaces, and it should not be blank",
    is_valid_name
);
