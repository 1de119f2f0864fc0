/// ID types for stored documents
use crate::error::{CoreError, Result};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use uuid::Uuid;

macro_rules! document_id {
    ($(#[$meta:meta])* $name:ident, $entity:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(Uuid);

        impl $name {
            /// Generate a new random ID
            pub fn generate() -> Self {
                Self(Uuid::new_v4())
            }

            /// Parse an ID from any textual UUID representation
            pub fn parse(raw: &str) -> Result<Self> {
                Uuid::parse_str(raw)
                    .map(Self)
                    .map_err(|_| CoreError::malformed_id($entity, raw))
            }

            /// Get the inner UUID
            pub fn as_uuid(&self) -> &Uuid {
                &self.0
            }
        }

        impl From<Uuid> for $name {
            fn from(uuid: Uuid) -> Self {
                Self(uuid)
            }
        }

        impl FromStr for $name {
            type Err = CoreError;

            fn from_str(s: &str) -> Result<Self> {
                Self::parse(s)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0.hyphenated())
            }
        }

        /// Compares against a textual id regardless of its UUID formatting
        impl PartialEq<str> for $name {
            fn eq(&self, other: &str) -> bool {
                Uuid::parse_str(other).is_ok_and(|uuid| uuid == self.0)
            }
        }
    };
}

document_id!(
    /// Blog identifier
    BlogId,
    "blog"
);

document_id!(
    /// User identifier
    UserId,
    "user"
);

document_id!(
    /// Phonebook entry identifier
    PersonId,
    "person"
);
