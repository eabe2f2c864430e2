//! Central task service.
//!
//! Held in [`AppState`](crate::state::AppState) as an `Arc<TaskService>`.

use std::sync::Arc;

use taskrun_core::error::CoreError;
use taskrun_core::execution::ShellRunner;
use taskrun_core::task::validate_new_task;
use taskrun_core::types::DbId;
use taskrun_db::models::task::{CreateTask, Task};
use taskrun_db::store::TaskStore;

use crate::error::AppResult;

/// Validates, stores, searches and executes tasks.
///
/// Execution lifecycle:
/// 1. Load the task (fail `NotFound` if absent).
/// 2. Run its command through the shell runner.
/// 3. Append the execution record with the store's atomic append.
///
/// A runner failure returns before step 3, so stored state is untouched.
pub struct TaskService {
    store: Arc<dyn TaskStore>,
    runner: ShellRunner,
}

impl TaskService {
    pub fn new(store: Arc<dyn TaskStore>, runner: ShellRunner) -> Self {
        Self { store, runner }
    }

    pub fn store(&self) -> &dyn TaskStore {
        self.store.as_ref()
    }

    /// Every stored task, oldest first.
    pub async fn list_all(&self) -> AppResult<Vec<Task>> {
        Ok(self.store.list_all().await?)
    }

    pub async fn get_by_id(&self, id: DbId) -> AppResult<Task> {
        self.store
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found(id).into())
    }

    /// Tasks whose name contains `fragment`, ignoring case. Empty if none.
    pub async fn find_by_name(&self, fragment: &str) -> AppResult<Vec<Task>> {
        Ok(self.store.search_by_name(fragment).await?)
    }

    /// Validate and persist a new task.
    ///
    /// A command rejected by the denylist fails with
    /// [`CoreError::InvalidCommand`] and nothing is stored.
    pub async fn create(&self, input: &CreateTask) -> AppResult<Task> {
        if let Err(err) = validate_new_task(&input.name, &input.owner, &input.command) {
            tracing::warn!(name = %input.name, error = %err, "Task rejected");
            return Err(err.into());
        }

        let task = self.store.create(input).await?;
        tracing::info!(id = task.id, name = %task.name, owner = %task.owner, "Task created");
        Ok(task)
    }

    /// Delete a task. Deleting an unknown id is a no-op.
    pub async fn delete(&self, id: DbId) -> AppResult<()> {
        let removed = self.store.delete(id).await?;
        tracing::info!(id, removed, "Task delete requested");
        Ok(())
    }

    /// Run the task's command and append the resulting execution.
    pub async fn execute(&self, id: DbId) -> AppResult<Task> {
        let task = self.get_by_id(id).await?;
        tracing::info!(id, command = %task.command, "Executing task");

        let execution = self.runner.run(&task.command).await.map_err(|err| {
            tracing::warn!(id, error = %err, "Task execution failed");
            CoreError::from(err)
        })?;

        // The task may have been deleted while the command ran.
        let updated = self
            .store
            .append_execution(id, &execution)
            .await?
            .ok_or_else(|| not_found(id))?;

        tracing::info!(
            id,
            exit_code = ?execution.exit_code,
            duration_ms = execution.duration_ms(),
            executions = updated.executions.len(),
            "Task executed"
        );
        Ok(updated)
    }
}

fn not_found(id: DbId) -> CoreError {
    CoreError::NotFound { entity: "Task", id }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
