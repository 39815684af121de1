//! Axum handlers, one per endpoint.

mod todo_create;
mod todo_delete;
mod todo_list;
mod todo_update;

use axum::extract::rejection::JsonRejection;
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::todo::{TodoError, TodoPayload};

pub use todo_create::{create_todo, CREATED_MESSAGE};
pub use todo_delete::{delete_todo, DELETED_MESSAGE};
pub use todo_list::list_todos;
pub use todo_update::{update_todo, UPDATED_MESSAGE};

/// JSON body returned by successful mutations.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct MessageBody {
    pub message: String,
}

impl MessageBody {
    pub fn new(message: &str) -> Self {
        Self {
            message: message.to_string(),
        }
    }
}

/// Unwrap a JSON body, treating any rejection or non-object as invalid data.
fn require_payload(payload: Result<Json<Value>, JsonRejection>) -> Result<TodoPayload, TodoError> {
    match payload {
        Ok(Json(value)) => TodoPayload::from_value(value),
        Err(rejection) => {
            debug!(reason = %rejection.body_text(), "Rejected todo body");
            Err(TodoError::InvalidData)
        }
    }
}
