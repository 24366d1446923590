//! Newtype identifiers for lists and items.

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;
use ulid::Ulid;

macro_rules! define_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Wrap an existing identifier string
            pub fn from_string(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Get the inner string value
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_string())
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s)
            }
        }

        impl From<&$name> for $name {
            fn from(id: &$name) -> Self {
                id.clone()
            }
        }

        impl Borrow<str> for $name {
            fn borrow(&self) -> &str {
                &self.0
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl PartialEq<str> for $name {
            fn eq(&self, other: &str) -> bool {
                self.0 == other
            }
        }

        impl PartialEq<&str> for $name {
            fn eq(&self, other: &&str) -> bool {
                self.0 == *other
            }
        }
    };
}

define_id!(
    /// Identifier of a list (column)
    ListId
);

define_id!(
    /// Identifier of an item (card)
    ItemId
);

impl ItemId {
    /// Build a card id from a generated ULID, e.g. `task-01j9...`
    pub fn from_ulid(ulid: Ulid) -> Self {
        Self(format!("task-{}", ulid.to_string().to_lowercase()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_display_and_eq() {
        let id = ListId::from("todo");
        assert_eq!(id.to_string(), "todo");
        assert_eq!(id, "todo");
        assert_eq!(id.as_str(), "todo");
    }

    #[test]
    fn test_item_id_from_ulid() {
        let id = ItemId::from_ulid(Ulid::nil());
        assert_eq!(id.as_str(), "task-00000000000000000000000000");
    }

    #[test]
    fn test_id_serializes_transparently() {
        let id = ItemId::from("task-1");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"task-1\"");
    }
}
