//! Shared shape of every role field value object.
//!
//! Each field is a newtype over `String` whose only constructor validates the
//! raw input against an anchored format predicate. The `field_value!` macro
//! stamps out that shape so every field gets identical construction, equality,
//! display and serde behaviour; the individual modules only supply the
//! predicate, the constraint message and any typed accessors.

use super::errors::FieldKind;

/// Common interface over all field value objects.
///
/// Lets generic code (record import, tests) talk about a field type without
/// naming it: which field it is, what it accepts, and what it says when it
/// refuses input.
pub trait FieldValue: Sized {
    /// Which role field this type represents.
    const KIND: FieldKind;

    /// Fixed, human-readable description of the accepted format.
    const MESSAGE_CONSTRAINTS: &'static str;

    /// Returns true if `raw` satisfies the field's format predicate.
    fn is_valid(raw: &str) -> bool;

    /// The stored value, exactly as it was supplied.
    fn as_str(&self) -> &str;
}

/// Defines a validated string newtype.
///
/// Usage: `field_value!(/// docs  Name, FieldKind::Name, MESSAGE, predicate_fn);`
macro_rules! field_value {
    (
        $(#[$meta:meta])*
        $name:ident, $kind:expr, $message:expr, $predicate:path
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub struct $name(String);

        impl $name {
            /// Fixed description of the accepted format, used verbatim in errors.
            pub const MESSAGE_CONSTRAINTS: &'static str = $message;

            /// Validate `raw` and wrap it.
            ///
            /// # Errors
            ///
            /// Returns `InvalidFormatError` carrying `MESSAGE_CONSTRAINTS` if
            /// `raw` does not match the format predicate as a whole string.
            pub fn new(
                raw: impl Into<String>,
            ) -> Result<Self, $crate::domain::errors::InvalidFormatError> {
                let raw = raw.into();

                if !Self::is_valid(&raw) {
                    return Err($crate::domain::errors::InvalidFormatError::new(
                        $kind,
                        raw,
                        Self::MESSAGE_CONSTRAINTS,
                    ));
                }

                Ok(Self(raw))
            }

            /// Returns true if `raw` is an acceptable value for this field.
            pub fn is_valid(raw: &str) -> bool {
                $predicate(raw)
            }

            /// Get the value as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Convert into the underlying String.
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl $crate::domain::field::FieldValue for $name {
            const KIND: $crate::domain::errors::FieldKind = $kind;
            const MESSAGE_CONSTRAINTS: &'static str = $message;

            fn is_valid(raw: &str) -> bool {
                $predicate(raw)
            }

            fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = $crate::domain::errors::InvalidFormatError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::new(s)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(&self.0)
            }
        }

        // Serde support - serialize as string
        impl ::serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: ::serde::Serializer,
            {
                ::serde::Serialize::serialize(&self.0, serializer)
            }
        }

        // Serde support - deserialize from string with validation
        impl<'de> ::serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: ::serde::Deserializer<'de>,
            {
                let s = <String as ::serde::Deserialize>::deserialize(deserializer)?;
                $name::new(s).map_err(::serde::de::Error::custom)
            }
        }
    };
}

pub(crate) use field_value;
