//! Phone value object.

use super::errors::FieldKind;
use super::field::field_value;
use once_cell::sync::Lazy;
use regex::Regex;

static PHONE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{3,}$").expect("Failed to compile phone regex"));

fn is_valid_phone(raw: &str) -> bool {
    PHONE_REGEX.is_match(raw)
}

field_value!(
    /// A contact phone number.
    ///
    /// Digits only, at least three of them. No spaces, no `+`, no separators.
    ///
    /// # Example
    ///
    /// ```
    /// use role_tracker::domain::Phone;
    ///
    /// let phone = Phone::new("85355255").unwrap();
    /// assert_eq!(phone.to_string(), "85355255");
    /// assert!(Phone::new("+65 8535").is_err());
    /// ```
    Phone,
    FieldKind::Phone,
    "Phone numbers should only contain numbers, and it should be at least 3 digits long",
    is_valid_phone
);
