//! HTTP presentation layer for the todo service.
//!
//! # Overview
//! Exposes the store through two parallel surfaces backed by the same
//! [`TodoStore`]: a JSON API under `/api` (CORS open to any origin) and a
//! server-rendered HTML interface driven by form posts and redirects.
//! Both surfaces produce identical store-level effects for equivalent
//! inputs; they differ only in transport encoding and response shape.
//!
//! # Design
//! - `app` wires the routers and `run` serves them; the split keeps the
//!   router testable with `tower::ServiceExt::oneshot` without binding a
//!   socket.
//! - Store operations are blocking SQLite I/O, so handlers hop to the
//!   blocking pool through `run_store` instead of stalling the executor.
//! - Each request performs exactly one store operation; the store scopes
//!   a connection and a transaction to that operation.

pub mod api;
pub mod config;
pub mod error;
pub mod render;
pub mod web;

use std::sync::Arc;

use axum::routing::{delete, get, patch, post};
use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use todo_core::{StoreError, TodoStore};

use crate::error::AppError;

/// Shared handle to the todo store, used as router state.
pub type SharedStore = Arc<TodoStore>;

/// Build the full application router over `store`.
pub fn app(store: SharedStore) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // The JSON surface is open to any origin; the page surface is
    // same-origin by nature and carries no CORS headers.
    let api = Router::new()
        .route("/api/todo/list", get(api::list_todos))
        .route("/api/todos", get(api::list_todos))
        .route("/api/todo/new", post(api::create_todo))
        .route("/api/update/{id}", patch(api::toggle_todo))
        .route("/api/delete/{id}", delete(api::delete_todo))
        .layer(cors);

    let pages = Router::new()
        .route("/", get(web::home))
        .route("/add", post(web::add_todo))
        .route("/update/{id}", get(web::toggle_todo))
        .route("/delete/{id}", get(web::delete_todo));

    api.merge(pages)
        .layer(TraceLayer::new_for_http())
        .with_state(store)
}

/// Serve the application on `listener` until the task is stopped.
pub async fn run(listener: TcpListener, store: SharedStore) -> Result<(), std::io::Error> {
    axum::serve(listener, app(store)).await
}

/// Run a blocking store operation on tokio's blocking pool.
pub(crate) async fn run_store<T, F>(store: SharedStore, op: F) -> Result<T, AppError>
where
    F: FnOnce(&TodoStore) -> Result<T, StoreError> + Send + 'static,
    T: Send + 'static,
{
    let result = tokio::task::spawn_blocking(move || op(&store)).await?;
    Ok(result?)
}
