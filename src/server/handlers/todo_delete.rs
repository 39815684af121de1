use axum::extract::{Path, State};
use axum::Json;
use tracing::info;

use super::MessageBody;
use crate::server::AppState;
use crate::todo::TodoError;

pub const DELETED_MESSAGE: &str = "Todo deleted and IDs renumbered successfully";

pub async fn delete_todo(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MessageBody>, TodoError> {
    let removed = state.todos.delete(&id).await?;
    info!(todo.id = removed.id, "Todo deleted, ids renumbered");
    Ok(Json(MessageBody::new(DELETED_MESSAGE)))
}
