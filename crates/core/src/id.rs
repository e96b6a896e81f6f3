//! Strongly-typed identifiers used across the domain.
//!
//! Identifiers are opaque strings. The console derives them from
//! human-readable names at creation time (see [`slug`]); seed data and API
//! callers may also supply ids verbatim, which are accepted as-is.

use serde::{Deserialize, Serialize};

/// Derive an identifier from a human-readable name.
///
/// Lowercases the name and replaces every character outside `[a-z0-9]`
/// with a hyphen.
pub fn slug(name: &str) -> String {
    name.to_lowercase()
        .chars()
        .map(|c| {
            if c.is_ascii_lowercase() || c.is_ascii_digit() {
                c
            } else {
                '-'
            }
        })
        .collect()
}

/// Identifier of a role.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoleId(String);

/// Identifier of an action (one of the fixed catalog entries).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ActionId(String);

/// Identifier of a resource type.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResourceId(String);

/// Identifier of a user (principal).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(String);

macro_rules! impl_slug_newtype {
    ($t:ty) => {
        impl $t {
            /// Wrap an identifier that already exists as a string.
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Derive an identifier by slugging a display name.
            pub fn from_name(name: &str) -> Self {
                Self(slug(name))
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl core::fmt::Display for $t {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<String> for $t {
            fn from(value: String) -> Self {
                Self(value)
            }
        }

        impl From<$t> for String {
            fn from(value: $t) -> Self {
                value.0
            }
        }
    };
}

impl_slug_newtype!(RoleId);
impl_slug_newtype!(ActionId);
impl_slug_newtype!(ResourceId);
impl_slug_newtype!(UserId);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slug_lowercases_and_hyphenates() {
        assert_eq!(slug("Admin"), "admin");
        assert_eq!(slug("Content Editor"), "content-editor");
        assert_eq!(slug("API User 2"), "api-user-2");
    }

    #[test]
    fn slug_replaces_every_non_alphanumeric_character() {
        assert_eq!(slug("Editor!"), "editor-");
        assert_eq!(slug("a/b.c"), "a-b-c");
    }

    #[test]
    fn from_name_and_new_agree_on_already_slugged_input() {
        assert_eq!(RoleId::from_name("viewer"), RoleId::new("viewer"));
    }
}
