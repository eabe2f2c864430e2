//! Repository for the `tasks` table.

use sqlx::types::Json;
use sqlx::PgPool;
use taskrun_core::execution::Execution;
use taskrun_core::types::DbId;

use crate::models::task::{CreateTask, Task};

/// Column list for `tasks` SELECT / RETURNING clauses.
const COLUMNS: &str = "id, name, owner, command, executions, created_at";

/// Provides CRUD, search and history-append operations for tasks.
pub struct TaskRepo;

impl TaskRepo {
    /// Insert a new task with an empty execution history.
    pub async fn create(pool: &PgPool, dto: &CreateTask) -> Result<Task, sqlx::Error> {
        let query = format!(
            "INSERT INTO tasks (name, owner, command) \
             VALUES ($1, $2, $3) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Task>(&query)
            .bind(&dto.name)
            .bind(&dto.owner)
            .bind(&dto.command)
            .fetch_one(pool)
            .await
    }

    /// Find a task by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Task>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM tasks WHERE id = $1");
        sqlx::query_as::<_, Task>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all tasks in insertion order.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<Task>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM tasks ORDER BY id");
        sqlx::query_as::<_, Task>(&query).fetch_all(pool).await
    }

    /// Tasks whose name contains `fragment`, ignoring case.
    ///
    /// `fragment` is matched literally: `%` and `_` are escaped.
    pub async fn search_by_name(pool: &PgPool, fragment: &str) -> Result<Vec<Task>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM tasks \
             WHERE name ILIKE '%' || $1 || '%' ESCAPE '\\' \
             ORDER BY id"
        );
        sqlx::query_as::<_, Task>(&query)
            .bind(escape_like(fragment))
            .fetch_all(pool)
            .await
    }

    /// Delete a task. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let rows = sqlx::query("DELETE FROM tasks WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?
            .rows_affected();

        Ok(rows > 0)
    }

    /// Append one execution to a task's history in a single statement.
    ///
    /// The row lock taken by `UPDATE` serializes concurrent appends, so no
    /// execution is lost. Returns `None` if the task does not exist.
    pub async fn append_execution(
        pool: &PgPool,
        id: DbId,
        execution: &Execution,
    ) -> Result<Option<Task>, sqlx::Error> {
        let query = format!(
            "UPDATE tasks \
             SET executions = executions || jsonb_build_array($2::jsonb) \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Task>(&query)
            .bind(id)
            .bind(Json(execution))
            .fetch_optional(pool)
            .await
    }
}

/// Escape LIKE metacharacters so `fragment` matches literally.
fn escape_like(fragment: &str) -> String {
    let mut escaped = String::with_capacity(fragment.len());
    for c in fragment.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}
