use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::error;

use crate::todo::TodoError;

pub const INVALID_DATA_MESSAGE: &str = "Invalid data";
pub const NOT_FOUND_MESSAGE: &str = "Todo not found";

/// JSON body returned for client errors.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorBody {
    pub error: String,
}

impl ErrorBody {
    pub fn new(error: &str) -> Self {
        Self {
            error: error.to_string(),
        }
    }
}

/// Map a domain error to its HTTP status, and the JSON message for client errors.
///
/// Storage faults have no message: they surface as a bare 500.
#[must_use]
pub fn status_and_message(err: &TodoError) -> (StatusCode, Option<&'static str>) {
    match err {
        TodoError::InvalidData => (StatusCode::BAD_REQUEST, Some(INVALID_DATA_MESSAGE)),
        TodoError::NotFound(_) => (StatusCode::NOT_FOUND, Some(NOT_FOUND_MESSAGE)),
        TodoError::IoError(_) | TodoError::JsonError(_) => {
            (StatusCode::INTERNAL_SERVER_ERROR, None)
        }
    }
}

impl IntoResponse for TodoError {
    fn into_response(self) -> Response {
        if self.is_storage_fault() {
            error!(error = %self, "Storage fault while handling request");
        }
        match status_and_message(&self) {
            (status, Some(message)) => (status, Json(ErrorBody::new(message))).into_response(),
            (status, None) => (status, "Internal Server Error").into_response(),
        }
    }
}
