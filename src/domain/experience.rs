//! Experience value object.

use super::errors::FieldKind;
use super::field::field_value;
use once_cell::sync::Lazy;
use regex::Regex;

// ASCII word characters only: letters, digits, underscore.
static EXPERIENCE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?-u:\w)+$").expect("Failed to compile experience regex"));

fn is_valid_experience(raw: &str) -> bool {
    EXPERIENCE_REGEX.is_match(raw)
}

field_value!(
    /// Experience a role asks for, as a single word such as `Java` or
    /// `C_1_Year`.
    ///
    /// Only letters, digits and underscores are accepted, so free text like
    /// `"C - 1 Year"` is rejected even though the constraint message reads
    /// more permissively.
    ///
    /// # Example
    ///
    /// ```
    /// use role_tracker::domain::Experience;
    ///
    /// assert!(Experience::is_valid("Java"));
    /// assert!(!Experience::is_valid("C - 1 Year"));
    /// ```
    Experience,
    FieldKind::Experience,
    "Experience can take any values, and it should not be blank",
    is_valid_experience
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_experience_valid() {
        let experience = Experience::new("Java").unwrap();
        assert_eq!(experience.to_string(), "Java");
        assert!(Experience::is_valid("C_1_Year"));
        assert!(Experience::is_valid("3"));
        assert!(Experience::is_valid("_"));
    }

    #[test]
    fn test_experience_blank_rejected_with_message() {
        let err = Experience::new("").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Experience can take any values, and it should not be blank"
        );
        assert!(Experience::new(" ").is_err());
    }

    #[test]
    fn test_experience_rejects_free_text() {
        // Word characters only: spaces and hyphens fail the whole-string match.
        assert!(!Experience::is_valid("C - 1 Year"));
        assert!(!Experience::is_valid("Java "));
        assert!(!Experience::is_valid("C++"));
        assert!(!Experience::is_valid("1-2"));
    }

    #[test]
    fn test_experience_is_ascii_only() {
        assert!(!Experience::is_valid("café"));
    }
}
