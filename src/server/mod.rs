//! HTTP surface: router, shared state and middleware.

pub mod error_mapping;
pub mod handlers;
pub mod request_log;

use std::sync::Arc;

use axum::routing::{get, put};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::todo::{TodoService, TodoStore};
use handlers::{create_todo, delete_todo, list_todos, update_todo};
use request_log::{RequestLog, RequestLogLayer};

/// Shared application state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub todos: Arc<TodoService>,
}

impl AppState {
    pub fn new(store: Arc<dyn TodoStore>) -> Self {
        Self {
            todos: Arc::new(TodoService::new(store)),
        }
    }
}

/// Routes without middleware.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/todos", get(list_todos).post(create_todo))
        .route("/todos/:id", put(update_todo).delete(delete_todo))
        .with_state(state)
}

/// Routes wrapped in tracing, request logging and CORS.
pub fn build_app(state: AppState, request_log: RequestLog, cors: CorsLayer) -> Router {
    build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(RequestLogLayer::new(request_log))
        .layer(cors)
}
