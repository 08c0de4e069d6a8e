//! Company value object.

use super::errors::FieldKind;
use super::field::field_value;
use once_cell::sync::Lazy;
use regex::Regex;

/*
 * The first character must not be whitespace, otherwise " " (a blank string)
 * becomes a valid input.
 */
static COMPANY_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\S.*$").expect("Failed to compile company regex"));

fn is_valid_company(raw: &str) -> bool {
    COMPANY_REGEX.is_match(raw)
}

field_value!(
    /// The employer offering a role. Any single-line text that does not
    /// start with whitespace.
    Company,
    FieldKind::Company,
    "Company can take any values, and it should not be blank",
    is_valid_company
);
