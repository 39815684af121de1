use axum::extract::State;
use axum::Json;

use crate::server::AppState;
use crate::todo::{Todo, TodoError};

pub async fn list_todos(State(state): State<AppState>) -> Result<Json<Vec<Todo>>, TodoError> {
    let todos = state.todos.list().await?;
    Ok(Json(todos))
}
