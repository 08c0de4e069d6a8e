//! Tag value object and tag-set parsing.

use super::errors::{FieldKind, InvalidFormatError};
use super::field::field_value;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeSet;
use tracing::debug;

static TAG_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[[:alnum:]]+$").expect("Failed to compile tag regex"));

fn is_valid_tag(raw: &str) -> bool {
    TAG_REGEX.is_match(raw)
}

field_value!(
    /// A short label attached to a role, e.g. `urgent` or `remote`.
    ///
    /// Tags order by their text, which gives a role's tag set a stable
    /// iteration order.
    Tag,
    FieldKind::Tag,
    "Tags names should be alphanumeric",
    is_valid_tag
);

/// Parse raw strings into a set of tags.
///
/// Duplicates collapse into one tag. Parsing stops at the first malformed
/// string and returns its error; no partial set is produced.
///
/// # Example
///
/// ```
/// use role_tracker::domain::tag_set;
///
/// let tags = tag_set(["remote", "urgent", "remote"]).unwrap();
/// assert_eq!(tags.len(), 2);
/// assert!(tag_set(["not a tag"]).is_err());
/// ```
pub fn tag_set<I, S>(raw_tags: I) -> Result<BTreeSet<Tag>, InvalidFormatError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let tags = raw_tags
        .into_iter()
        .map(|raw| Tag::new(raw.as_ref()))
        .collect::<Result<BTreeSet<_>, _>>()?;

    debug!(count = tags.len(), "Parsed tag set");
    Ok(tags)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_valid() {
        assert!(Tag::is_valid("urgent"));
        assert!(Tag::is_valid("FAANG"));
        assert!(Tag::is_valid("2024"));
    }

    #[test]
    fn test_tag_invalid() {
        assert!(!Tag::is_valid(""));
        assert!(!Tag::is_valid(" "));
        assert!(!Tag::is_valid("high priority"));
        assert!(!Tag::is_valid("part-time"));
        assert!(!Tag::is_valid("#remote"));
    }

    #[test]
    fn test_tag_set_deduplicates() {
        let tags = tag_set(["friends", "friends", "colleagues"]).unwrap();
        assert_eq!(tags.len(), 2);
        assert!(tags.contains(&Tag::new("friends").unwrap()));
        assert!(tags.contains(&Tag::new("colleagues").unwrap()));
    }

    #[test]
    fn test_tag_set_empty() {
        let tags = tag_set(Vec::<String>::new()).unwrap();
        assert!(tags.is_empty());
    }

    #[test]
    fn test_tag_set_fails_on_first_bad_tag() {
        let err = tag_set(["ok", "not ok", "also bad!"]).unwrap_err();
        assert_eq!(err.value(), "not ok");
        assert_eq!(err.field(), FieldKind::Tag);
        assert_eq!(err.to_string(), Tag::MESSAGE_CONSTRAINTS);
    }
}
