use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde_json::Value;
use tracing::info;

use super::{require_payload, MessageBody};
use crate::server::AppState;
use crate::todo::TodoError;

pub const CREATED_MESSAGE: &str = "Todo added successfully";

pub async fn create_todo(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<(StatusCode, Json<MessageBody>), TodoError> {
    let payload = require_payload(payload)?;
    let todo = state.todos.create(payload).await?;
    info!(todo.id = todo.id, "Todo added");
    Ok((StatusCode::CREATED, Json(MessageBody::new(CREATED_MESSAGE))))
}
