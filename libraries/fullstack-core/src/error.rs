//! Core error types shared by both services

use thiserror::Error;

/// Result type alias using `CoreError`
pub type Result<T> = std::result::Result<T, CoreError>;

/// Core error type
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// A required field is missing or has an invalid shape
    #[error("{0}")]
    Validation(String),

    /// A uniqueness constraint would be violated
    #[error("{0}")]
    Duplicate(String),

    /// Entity not found
    #[error("{entity} not found: {id}")]
    NotFound {
        /// Kind of document
        entity: String,
        /// Requested id
        id: String,
    },

    /// Identifier is not a valid document id
    #[error("Malformatted {entity} id: {id}")]
    MalformedId {
        /// Kind of document
        entity: String,
        /// Text that failed to parse
        id: String,
    },

    /// An aggregate was requested over an empty collection
    #[error("Cannot aggregate an empty blog collection")]
    EmptyInput,

    /// Storage backend failure
    #[error("Storage error: {0}")]
    Storage(String),
}

impl CoreError {
    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Create a duplicate entry error
    pub fn duplicate(msg: impl Into<String>) -> Self {
        Self::Duplicate(msg.into())
    }

    /// Create a not found error
    pub fn not_found(entity: impl Into<String>, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity: entity.into(),
            id: id.into(),
        }
    }

    /// Create a malformed id error
    pub fn malformed_id(entity: impl Into<String>, id: impl Into<String>) -> Self {
        Self::MalformedId {
            entity: entity.into(),
            id: id.into(),
        }
    }

    /// Create a storage error
    pub fn storage(msg: impl Into<String>) -> Self {
        Self::Storage(msg.into())
    }
}
