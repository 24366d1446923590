//! Error types for the task board engine

use thiserror::Error;

/// Result type for board operations
pub type Result<T> = std::result::Result<T, BoardError>;

/// Errors that can occur in board operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// Item not found
    #[error("item not found: {id}")]
    ItemNotFound { id: String },

    /// List not found
    #[error("list not found: {id}")]
    ListNotFound { id: String },

    /// Identifier matched neither a list nor an item
    #[error("no list or item with id: {id}")]
    NotFound { id: String },

    /// Duplicate ID
    #[error("duplicate {item_type} ID: {id}")]
    DuplicateId { item_type: String, id: String },

    /// A source index that does not exist in the list
    #[error("index {index} out of range for list '{list}' of length {len}")]
    InvalidIndex {
        list: String,
        index: usize,
        len: usize,
    },

    /// Invalid field value
    #[error("invalid value for {field}: {message}")]
    InvalidValue { field: String, message: String },

    /// Board state violates one of its structural invariants
    #[error("board is corrupt: {message}")]
    Corrupt { message: String },

    /// The id generator ran out of monotonic ids for the current millisecond
    #[error("item id space exhausted")]
    IdExhausted,
}

impl BoardError {
    /// Create an item-not-found error
    pub fn item_not_found(id: impl Into<String>) -> Self {
        Self::ItemNotFound { id: id.into() }
    }

    /// Create a list-not-found error
    pub fn list_not_found(id: impl Into<String>) -> Self {
        Self::ListNotFound { id: id.into() }
    }

    /// Create an invalid value error
    pub fn invalid_value(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidValue {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Create a duplicate ID error
    pub fn duplicate_id(item_type: impl Into<String>, id: impl Into<String>) -> Self {
        Self::DuplicateId {
            item_type: item_type.into(),
            id: id.into(),
        }
    }

    /// Create a corruption error
    pub fn corrupt(message: impl Into<String>) -> Self {
        Self::Corrupt {
            message: message.into(),
        }
    }

    /// Check if this error means a referenced id did not resolve.
    ///
    /// A drag session that hits one of these is abandoned rather than failed.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::ItemNotFound { .. } | Self::ListNotFound { .. } | Self::NotFound { .. }
        )
    }
}
