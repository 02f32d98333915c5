// Copyright (c) 2025 sbksba
//
// This software is licensed under the terms of the MIT License.
// See the LICENSE file in the project root for the full license text.
use axum::{
    extract::Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

/// Our custom error type for the RPC handlers.
#[derive(Debug)]
pub struct AppError {
    pub(crate) code: StatusCode,
    pub(crate) message: String,
}

impl AppError {
    pub fn new(code: StatusCode, message: &str) -> Self {
        Self {
            code,
            message: message.to_string(),
        }
    }

    /// The one domain error: a completion update aimed at a missing todo.
    pub fn not_found(todo_id: i64) -> Self {
        Self::new(
            StatusCode::NOT_FOUND,
            &format!("Todo with id {todo_id} not found"),
        )
    }

    pub fn code(&self) -> StatusCode {
        self.code
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Storage errors coming from `database.rs` are passed through as a 500
/// carrying the full context chain.
impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        tracing::error!("Storage error: {:?}", err);
        Self {
            code: StatusCode::INTERNAL_SERVER_ERROR,
            message: format!("{err:#}"),
        }
    }
}

/// Allows Axum to convert our `AppError` into an HTTP `Response`.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        tracing::error!(
            "Responding with error: status_code={}, message={}",
            self.code.as_u16(),
            self.message
        );
        (
            self.code,
            Json(serde_json::json!({ "error": self.message })),
        )
            .into_response()
    }
}
