//! JSON API handlers.
//!
//! Every handler performs one store operation and encodes the result as
//! JSON. Errors surface as [`ApiError`] with a structured body, so a
//! client can always parse the response.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;

use todo_core::{CreateTodo, Todo};

use crate::error::ApiError;
use crate::{run_store, SharedStore};

/// Confirmation body returned by [`delete_todo`].
#[derive(Debug, Serialize)]
pub struct Deleted {
    pub message: &'static str,
}

/// `GET /api/todo/list` (also mounted at `/api/todos`).
pub async fn list_todos(State(store): State<SharedStore>) -> Result<Json<Vec<Todo>>, ApiError> {
    let todos = run_store(store, |store| store.list()).await?;
    Ok(Json(todos))
}

/// `POST /api/todo/new`
pub async fn create_todo(
    State(store): State<SharedStore>,
    Json(input): Json<CreateTodo>,
) -> Result<(StatusCode, Json<Todo>), ApiError> {
    let todo = run_store(store, move |store| store.create(&input.title)).await?;
    tracing::debug!(id = todo.id, "created todo");
    Ok((StatusCode::CREATED, Json(todo)))
}

/// `PATCH /api/update/{id}`
pub async fn toggle_todo(
    State(store): State<SharedStore>,
    Path(id): Path<i64>,
) -> Result<Json<Todo>, ApiError> {
    let todo = run_store(store, move |store| store.toggle(id)).await?;
    tracing::debug!(id, complete = todo.complete, "toggled todo");
    Ok(Json(todo))
}

/// `DELETE /api/delete/{id}`
pub async fn delete_todo(
    State(store): State<SharedStore>,
    Path(id): Path<i64>,
) -> Result<(StatusCode, Json<Deleted>), ApiError> {
    run_store(store, move |store| store.delete(id)).await?;
    tracing::debug!(id, "deleted todo");
    Ok((StatusCode::NO_CONTENT, Json(Deleted { message: "todo deleted" })))
}
