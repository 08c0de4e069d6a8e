//! Website value object.

use super::errors::FieldKind;
use super::field::field_value;
use once_cell::sync::Lazy;
use regex::Regex;

// Optional scheme, at least two dot-separated host labels, optional path.
static WEBSITE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(https?://)?([A-Za-z0-9_\-]+\.)+[A-Za-z0-9_\-]{2,}(/\S*)?$")
        .expect("Failed to compile website regex")
});

fn is_valid_website(raw: &str) -> bool {
    WEBSITE_REGEX.is_match(raw)
}

field_value!(
    /// The company's or the posting's website, e.g. `www.google.com` or
    /// `https://careers.example.com/jobs/42`.
    Website,
    FieldKind::Website,
    "Website should be a valid URL such as www.example.com, and it should not be blank",
    is_valid_website
);
