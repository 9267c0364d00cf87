//! Identifier newtypes for cards and columns

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Mutex;
use ulid::Generator;

/// Shared monotonic generator so ids created within the same millisecond
/// still sort in creation order.
static CARD_ID_GENERATOR: Mutex<Option<Generator>> = Mutex::new(None);

macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Wrap an existing identifier string
            pub fn from_string(s: impl Into<String>) -> Self {
                Self(s.into())
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

string_id!(
    /// Opaque card identifier.
    ///
    /// New ids are ULIDs: derived from the creation timestamp and strictly
    /// increasing across the process. Loaded ids may be any string.
    CardId
);

string_id!(
    /// Column key. Columns are labels on cards, not stored entities.
    ColumnId
);

impl CardId {
    /// Generate a fresh id from the current time
    pub fn new() -> Self {
        let mut guard = CARD_ID_GENERATOR
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        let generator = guard.get_or_insert_with(Generator::new);
        // Overflow only happens after 2^80 ids in one millisecond
        let ulid = generator.generate().unwrap_or_else(|_| ulid::Ulid::new());
        Self(ulid.to_string())
    }
}

impl Default for CardId {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_ids_are_unique_and_increasing() {
        let ids: Vec<CardId> = (0..100).map(|_| CardId::new()).collect();
        for pair in ids.windows(2) {
            assert!(pair[0] < pair[1], "{} !< {}", pair[0], pair[1]);
        }
    }

    #[test]
    fn test_legacy_ids_round_trip() {
        let id = CardId::from_string("1700000000000");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"1700000000000\"");
        let back: CardId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }

    #[test]
    fn test_column_id_compares_with_str() {
        let col = ColumnId::from("todo");
        assert_eq!(col, "todo");
        assert_eq!(col.to_string(), "todo");
    }
}
