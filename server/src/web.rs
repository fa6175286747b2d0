//! Server-rendered HTML handlers.
//!
//! The page surface follows the classic form-post-redirect shape: `GET /`
//! renders the list, mutations redirect back to `/` so a browser refresh
//! never replays them. Mutation links use GET so they work as plain
//! anchors without client-side script.

use axum::extract::{Path, State};
use axum::http::{header, HeaderValue, StatusCode};
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::Form;
use serde::Deserialize;

use crate::error::PageError;
use crate::{render, run_store, SharedStore};

/// Form body for [`add_todo`].
#[derive(Debug, Deserialize)]
pub struct TodoForm {
    pub title: String,
}

/// `GET /`
pub async fn home(State(store): State<SharedStore>) -> Result<Html<String>, PageError> {
    let todos = run_store(store, |store| store.list()).await?;
    Ok(Html(render::todo_page(&todos)))
}

/// `POST /add`
pub async fn add_todo(
    State(store): State<SharedStore>,
    Form(form): Form<TodoForm>,
) -> Result<Redirect, PageError> {
    let todo = run_store(store, move |store| store.create(&form.title)).await?;
    tracing::debug!(id = todo.id, "created todo from form");
    Ok(Redirect::to("/"))
}

/// `GET /update/{id}`
pub async fn toggle_todo(
    State(store): State<SharedStore>,
    Path(id): Path<i64>,
) -> Result<Response, PageError> {
    let todo = run_store(store, move |store| store.toggle(id)).await?;
    tracing::debug!(id, complete = todo.complete, "toggled todo from link");
    Ok(redirect_found("/"))
}

/// `GET /delete/{id}`
pub async fn delete_todo(
    State(store): State<SharedStore>,
    Path(id): Path<i64>,
) -> Result<Response, PageError> {
    run_store(store, move |store| store.delete(id)).await?;
    tracing::debug!(id, "deleted todo from link");
    Ok(redirect_found("/"))
}

// `Redirect::to` answers 303. The GET links redirect with 302 instead,
// matching what browsers expect from a plain found-elsewhere answer.
fn redirect_found(location: &'static str) -> Response {
    (
        StatusCode::FOUND,
        [(header::LOCATION, HeaderValue::from_static(location))],
    )
        .into_response()
}
