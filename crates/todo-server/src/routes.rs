//! Route table.
//!
//! | Method | Path | Handler |
//! |--------|------|---------|
//! | GET | /health | `health_check` |
//! | GET | /api/todo/{id} | `TodoController::get` |
//! | POST | /api/todo | `TodoController::create` |
//! | PUT | /api/todo/{id} | `TodoController::update` |
//! | DELETE | /api/todo/{id} | `TodoController::delete` |

use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Serialize;

use crate::controllers::TodoController;
use crate::state::SharedState;

pub const ROUTER_PATH: &str = "/api/todo";

#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

pub async fn health_check() -> (StatusCode, Json<HealthResponse>) {
    let response = HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    };
    (StatusCode::OK, Json(response))
}

pub fn map_routes(state: SharedState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route(ROUTER_PATH, post(TodoController::create))
        .route(
            format!("{ROUTER_PATH}/{{id}}").as_str(),
            get(TodoController::get)
                .put(TodoController::update)
                .delete(TodoController::delete),
        )
        .with_state(state)
}
