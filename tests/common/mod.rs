//! Common test utilities

use std::path::Path;
use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use serde_json::Value;
use tempfile::TempDir;
use todo_daemon::{build_router, AppState, MemoryStore, Todo, TodoStore};
use tower::ServiceExt;

/// Create a temporary directory for testing
#[allow(dead_code)] // Test utility for integration tests
pub fn create_test_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp directory")
}

/// Write a todo list file the way the daemon would
#[allow(dead_code)] // Test utility for integration tests
pub fn write_todos(path: &Path, todos: &[Todo]) {
    let content = serde_json::to_string_pretty(todos).expect("Failed to serialize todos");
    std::fs::write(path, content).expect("Failed to write todo list");
}

/// Router backed by an in-memory store seeded with `todos`
#[allow(dead_code)] // Test utility for integration tests
pub fn memory_app(todos: Vec<Todo>) -> (Arc<MemoryStore>, Router) {
    let store = Arc::new(MemoryStore::new(todos));
    let app = app_with_store(store.clone());
    (store, app)
}

/// Router backed by any store
#[allow(dead_code)] // Test utility for integration tests
pub fn app_with_store(store: Arc<dyn TodoStore>) -> Router {
    build_router(AppState::new(store))
}

/// Send a request and return the status and raw body text
#[allow(dead_code)] // Test utility for integration tests
pub async fn send_raw(
    app: &Router,
    method: &str,
    uri: &str,
    content_type: Option<&str>,
    body: &str,
) -> (StatusCode, String) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(content_type) = content_type {
        builder = builder.header("content-type", content_type);
    }
    let request = builder
        .body(Body::from(body.to_string()))
        .expect("Failed to build request");

    let response = app
        .clone()
        .oneshot(request)
        .await
        .expect("Router is infallible");
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read body");
    (
        status,
        String::from_utf8(bytes.to_vec()).expect("Body is not UTF-8"),
    )
}

/// Send a JSON request (or an empty one when `body` is `None`) and parse the JSON reply
#[allow(dead_code)] // Test utility for integration tests
pub async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let (status, text) = match body {
        Some(body) => send_raw(app, method, uri, Some("application/json"), &body.to_string()).await,
        None => send_raw(app, method, uri, None, "").await,
    };
    let value = serde_json::from_str(&text).unwrap_or(Value::Null);
    (status, value)
}
