//! Todo HTTP controllers.
//!
//! Each handler only extracts the request, calls the adapter and maps the
//! result. Failures are logged under `api.controller.todo.*` and returned.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use serde::{Deserialize, Serialize};
use todo_core::domain::{Todo, TodoError, TodoId, TodoInput};

use crate::error::ApiErrorResponse;
use crate::state::SharedState;

const GET_PATH: &str = "api.controller.todo.getTodo";
const CREATE_PATH: &str = "api.controller.todo.createTodo";
const UPDATE_PATH: &str = "api.controller.todo.updateTodo";
const DELETE_PATH: &str = "api.controller.todo.deleteTodo";

/// Request body for create and update: `{"data": {...}}`.
#[derive(Debug, Default, Deserialize)]
pub struct TodoRequest {
    #[serde(default)]
    pub data: Option<TodoInput>,
}

#[derive(Debug, Clone, Serialize)]
pub struct DeleteResponse {
    pub id: TodoId,
}

pub struct TodoController {}

impl TodoController {
    pub async fn get(
        State(state): State<SharedState>,
        Path(raw_id): Path<String>,
    ) -> Result<Json<Todo>, ApiErrorResponse> {
        let id = parse_id(GET_PATH, &raw_id)?;
        match state.adapter.get_todo(&id).await {
            Ok(Some(todo)) => Ok(Json(todo)),
            Ok(None) => Err(ApiErrorResponse::not_found(format!("no data for id {id}"))),
            Err(err) => Err(report(GET_PATH, err)),
        }
    }

    pub async fn create(
        State(state): State<SharedState>,
        body: Result<Json<TodoRequest>, JsonRejection>,
    ) -> Result<(StatusCode, Json<Todo>), ApiErrorResponse> {
        let Json(body) = parse_body(CREATE_PATH, body)?;
        state
            .adapter
            .create_todo(body.data.as_ref())
            .await
            .map(|todo| (StatusCode::CREATED, Json(todo)))
            .map_err(|err| report(CREATE_PATH, err))
    }

    pub async fn update(
        State(state): State<SharedState>,
        Path(raw_id): Path<String>,
        body: Result<Json<TodoRequest>, JsonRejection>,
    ) -> Result<Json<Todo>, ApiErrorResponse> {
        let id = parse_id(UPDATE_PATH, &raw_id)?;
        let Json(body) = parse_body(UPDATE_PATH, body)?;
        state
            .adapter
            .update_todo(&id, body.data.as_ref())
            .await
            .map(Json)
            .map_err(|err| report(UPDATE_PATH, err))
    }

    pub async fn delete(
        State(state): State<SharedState>,
        Path(raw_id): Path<String>,
    ) -> Result<Json<DeleteResponse>, ApiErrorResponse> {
        let id = parse_id(DELETE_PATH, &raw_id)?;
        state
            .adapter
            .delete_todo(&id)
            .await
            .map(|id| Json(DeleteResponse { id }))
            .map_err(|err| report(DELETE_PATH, err))
    }
}

fn parse_id(method_path: &'static str, raw: &str) -> Result<TodoId, ApiErrorResponse> {
    raw.parse()
        .map_err(|_| report(method_path, TodoError::user(method_path, format!("invalid id: {raw}"))))
}

/// Body rejections (bad JSON, wrong field types) become a `UserError` under
/// the controller's path.
fn parse_body(
    method_path: &'static str,
    body: Result<Json<TodoRequest>, JsonRejection>,
) -> Result<Json<TodoRequest>, ApiErrorResponse> {
    body.map_err(|rejection| {
        report(
            method_path,
            TodoError::user(method_path, format!("invalid request body: {}", rejection.body_text())),
        )
    })
}

fn report(method_path: &'static str, err: TodoError) -> ApiErrorResponse {
    tracing::error!(
        method = method_path,
        class = %err.class(),
        origin = err.method_path(),
        error = %err.message(),
        "request failed"
    );
    ApiErrorResponse::from(err)
}
