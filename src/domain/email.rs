//! Email value object.

use super::errors::FieldKind;
use super::field::field_value;
use once_cell::sync::Lazy;
use regex::Regex;

// local-part: alphanumeric runs joined by single special characters.
// domain: labels of alphanumeric runs joined by hyphens, separated by periods;
// the last label is at least two characters long.
static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(concat!(
        r"^[[:alnum:]]+([+_.\-][[:alnum:]]+)*",
        r"@",
        r"([[:alnum:]]+(-[[:alnum:]]+)*\.)*",
        r"([[:alnum:]]+(-[[:alnum:]]+)*){2,}$",
    ))
    .expect("Failed to compile email regex")
});

fn is_valid_email(raw: &str) -> bool {
    EMAIL_REGEX.is_match(raw)
}

field_value!(
    /// A contact email address of the form `local-part@domain`.
    ///
    /// # Example
    ///
    /// ```
    /// use role_tracker::domain::Email;
    ///
    /// let email = Email::new("amy@gmail.com").unwrap();
    /// assert_eq!(email.domain(), "gmail.com");
    /// ```
    Email,
    FieldKind::Email,
    concat!(
        "Emails should be of the format local-part@domain ",
        "and adhere to the following constraints:\n",
        "1. The local-part should only contain alphanumeric characters and these special characters, ",
        "excluding the parentheses, (+_.-). The local-part may not start or end with any special characters.\n",
        "2. This is followed by a '@' and then a domain name. The domain name is made up of domain labels ",
        "separated by periods.\n",
        "The domain name must:\n",
        "    - end with a domain label at least 2 characters long\n",
        "    - have each domain label start and end with alphanumeric characters\n",
        "    - have each domain label consist of alphanumeric characters, separated only by hyphens, if any."
    ),
    is_valid_email
);

impl Email {
    /// Get the local part (before '@').
    pub fn local_part(&self) -> &str {
        // Constructor validates exactly one '@' exists
        self.as_str()
            .split_once('@')
            .map(|(local, _)| local)
            .unwrap_or_default()
    }

    /// Get the domain part (after '@').
    pub fn domain(&self) -> &str {
        self.as_str()
            .split_once('@')
            .map(|(_, domain)| domain)
            .unwrap_or_default()
    }
}
