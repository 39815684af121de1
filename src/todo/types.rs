use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::error::TodoError;

/// A single persisted todo.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    pub id: u64,
    pub text: String,
}

impl Todo {
    pub fn new(id: u64, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
        }
    }
}

/// Body accepted by the create and update endpoints.
///
/// Parse through [`TodoPayload::from_value`]: only a JSON object with a
/// string `text` and no other fields is accepted. Blank text is rejected by
/// [`TodoPayload::into_text`].
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TodoPayload {
    pub text: String,
}

impl TodoPayload {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// Build a payload from a decoded request body.
    ///
    /// Derived struct deserialization also accepts a sequence, so anything
    /// other than an object is turned away before the typed parse.
    pub fn from_value(value: Value) -> Result<Self, TodoError> {
        if !value.is_object() {
            return Err(TodoError::InvalidData);
        }
        serde_json::from_value(value).map_err(|_| TodoError::InvalidData)
    }

    /// Validate the payload and return the trimmed text to store.
    pub fn into_text(self) -> Result<String, TodoError> {
        let trimmed = self.text.trim();
        if trimmed.is_empty() {
            return Err(TodoError::InvalidData);
        }
        Ok(trimmed.to_string())
    }
}
