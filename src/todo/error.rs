//! Error type for todo list operations.

use thiserror::Error;

/// Unified error type for the todo domain.
///
/// `InvalidData` and `NotFound` are caused by the client and recovered
/// locally; the remaining variants are storage faults.
#[derive(Error, Debug)]
pub enum TodoError {
    #[error("Invalid data")]
    InvalidData,

    #[error("Todo not found: {0}")]
    NotFound(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

impl TodoError {
    /// Create a not found error for the id as the client sent it
    pub fn not_found(id: impl Into<String>) -> Self {
        TodoError::NotFound(id.into())
    }

    /// Whether the error was caused by the backing file rather than the request.
    #[must_use]
    pub fn is_storage_fault(&self) -> bool {
        matches!(self, TodoError::IoError(_) | TodoError::JsonError(_))
    }
}
