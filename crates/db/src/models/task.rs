//! Task entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use taskrun_core::execution::Execution;
use taskrun_core::types::{DbId, Timestamp};

/// A registered task with its full execution history.
///
/// `executions` is stored as a JSONB array on the task row and is never
/// absent; a fresh task has an empty history.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize, Deserialize)]
pub struct Task {
    pub id: DbId,
    pub name: String,
    pub owner: String,
    pub command: String,
    /// Oldest first.
    #[sqlx(json)]
    pub executions: Vec<Execution>,
    pub created_at: Timestamp,
}

/// DTO for registering a new task.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateTask {
    pub name: String,
    pub owner: String,
    pub command: String,
}
