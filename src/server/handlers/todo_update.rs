use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::Json;
use serde_json::Value;
use tracing::info;

use super::{require_payload, MessageBody};
use crate::server::AppState;
use crate::todo::TodoError;

pub const UPDATED_MESSAGE: &str = "Todo updated successfully";

pub async fn update_todo(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<MessageBody>, TodoError> {
    let payload = require_payload(payload)?;
    let todo = state.todos.update(&id, payload).await?;
    info!(todo.id = todo.id, "Todo updated");
    Ok(Json(MessageBody::new(UPDATED_MESSAGE)))
}
