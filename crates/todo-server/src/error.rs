//! HTTP error responses.
//!
//! [`TodoError`] の分類をステータスに写す:
//! - UserError → 400 Bad Request
//! - InternalError → 500 Internal Server Error
//!
//! 取得対象が存在しないときの 404 はコントローラが直接返す。

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use todo_core::domain::{ErrorClass, TodoError};

/// Body of every error response.
///
/// ```json
/// { "code": "USER_ERROR", "message": "...", "method": "domain.todo.validateCreateTodo" }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiError {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub method: Option<String>,
}

#[derive(Debug, Clone)]
pub struct ApiErrorResponse {
    pub status: StatusCode,
    pub error: ApiError,
}

impl ApiErrorResponse {
    pub fn not_found(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            error: ApiError {
                code: "NOT_FOUND".to_string(),
                message: message.into(),
                method: None,
            },
        }
    }
}

impl From<TodoError> for ApiErrorResponse {
    fn from(err: TodoError) -> Self {
        let status = match err.class() {
            ErrorClass::UserError => StatusCode::BAD_REQUEST,
            ErrorClass::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
        };
        Self {
            status,
            error: ApiError {
                code: err.class().as_str().to_string(),
                message: err.message().to_string(),
                method: Some(err.method_path().to_string()),
            },
        }
    }
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}
