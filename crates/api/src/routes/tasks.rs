//! Route definitions for task endpoints.

use axum::routing::{delete, get, put};
use axum::Router;

use crate::handlers::tasks;
use crate::state::AppState;

/// Task routes, mounted at the root.
///
/// ```text
/// GET    /tasks[?id=]              -> list_or_get
/// POST   /tasks                    -> create
/// GET    /tasks/search?name=       -> search
/// DELETE /tasks/{id}               -> delete
/// PUT    /tasks/{id}/execute       -> execute
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/tasks", get(tasks::list_or_get).post(tasks::create))
        .route("/tasks/search", get(tasks::search))
        .route("/tasks/{id}", delete(tasks::delete))
        .route("/tasks/{id}/execute", put(tasks::execute))
}
