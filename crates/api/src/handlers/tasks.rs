//! Handlers for task CRUD, search and execution.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Deserialize;
use taskrun_core::types::DbId;
use taskrun_db::models::task::{CreateTask, Task};

use crate::error::{AppError, AppResult, ExecutionFailure};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request types
// ---------------------------------------------------------------------------

/// Query parameters for `GET /tasks`.
#[derive(Debug, Deserialize)]
pub struct TaskQuery {
    /// When present, return only this task. Kept raw so a malformed id is
    /// answered like any other unknown id.
    pub id: Option<String>,
}

/// Query parameters for `GET /tasks/search`.
#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    /// Case-insensitive substring of the task name.
    pub name: String,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /tasks[?id=]
///
/// Without `id`, list every task. With `id`, return that single task.
pub async fn list_or_get(
    State(state): State<AppState>,
    Query(query): Query<TaskQuery>,
) -> AppResult<Response> {
    let response = match query.id.as_deref() {
        Some(raw) => {
            let id = parse_id(raw).ok_or_else(|| unknown_task(raw))?;
            Json(state.tasks.get_by_id(id).await?).into_response()
        }
        None => Json(state.tasks.list_all().await?).into_response(),
    };
    Ok(response)
}

/// GET /tasks/search?name=
pub async fn search(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> AppResult<Json<Vec<Task>>> {
    let tasks = state.tasks.find_by_name(&query.name).await?;
    if tasks.is_empty() {
        return Err(AppError::NotFound(format!(
            "No tasks found matching '{}'",
            query.name
        )));
    }
    Ok(Json(tasks))
}

/// POST /tasks
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateTask>,
) -> AppResult<(StatusCode, Json<Task>)> {
    let task = state.tasks.create(&input).await?;
    Ok((StatusCode::CREATED, Json(task)))
}

/// DELETE /tasks/{id}
///
/// Succeeds whether or not the task existed. A malformed id names no task.
pub async fn delete(
    State(state): State<AppState>,
    Path(raw): Path<String>,
) -> AppResult<StatusCode> {
    if let Some(id) = parse_id(&raw) {
        state.tasks.delete(id).await?;
    }
    Ok(StatusCode::NO_CONTENT)
}

/// PUT /tasks/{id}/execute
///
/// Every failure, including an unknown id, is reported as a 500.
pub async fn execute(
    State(state): State<AppState>,
    Path(raw): Path<String>,
) -> Result<Json<Task>, ExecutionFailure> {
    let id = parse_id(&raw).ok_or_else(|| unknown_task(&raw))?;
    let task = state.tasks.execute(id).await?;
    Ok(Json(task))
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn parse_id(raw: &str) -> Option<DbId> {
    raw.trim().parse().ok()
}

/// Error for an id that cannot name any stored task.
fn unknown_task(raw: &str) -> AppError {
    AppError::NotFound(format!("Task with id {raw} not found"))
}
