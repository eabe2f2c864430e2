//! The task store seam.
//!
//! Services hold an `Arc<dyn TaskStore>` so the backing storage can be
//! PostgreSQL in production or memory in tests and database-less runs.

mod memory;
mod postgres;

use async_trait::async_trait;
use taskrun_core::execution::Execution;
use taskrun_core::types::DbId;

use crate::models::task::{CreateTask, Task};

pub use memory::MemoryTaskStore;
pub use postgres::PgTaskStore;

/// Persistence operations over task records.
#[async_trait]
pub trait TaskStore: Send + Sync {
    /// Short name of the backend, for logs and health output.
    fn backend(&self) -> &'static str;

    /// Verify the backend is reachable.
    async fn health_check(&self) -> Result<(), sqlx::Error>;

    /// Insert a task, assigning its id. History starts empty.
    async fn create(&self, dto: &CreateTask) -> Result<Task, sqlx::Error>;

    async fn find_by_id(&self, id: DbId) -> Result<Option<Task>, sqlx::Error>;

    /// All tasks in ascending id order.
    async fn list_all(&self) -> Result<Vec<Task>, sqlx::Error>;

    /// Case-insensitive literal substring match on `name`.
    async fn search_by_name(&self, fragment: &str) -> Result<Vec<Task>, sqlx::Error>;

    /// Remove a task. Returns `false` (not an error) if it did not exist.
    async fn delete(&self, id: DbId) -> Result<bool, sqlx::Error>;

    /// Atomically append `execution` to the task's history.
    ///
    /// Returns the updated task, or `None` if the task does not exist.
    async fn append_execution(
        &self,
        id: DbId,
        execution: &Execution,
    ) -> Result<Option<Task>, sqlx::Error>;
}
