use async_trait::async_trait;
use taskrun_core::execution::Execution;
use taskrun_core::types::DbId;

use super::TaskStore;
use crate::models::task::{CreateTask, Task};
use crate::repositories::TaskRepo;
use crate::DbPool;

/// [`TaskStore`] backed by the `tasks` table.
#[derive(Clone)]
pub struct PgTaskStore {
    pool: DbPool,
}

impl PgTaskStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TaskStore for PgTaskStore {
    fn backend(&self) -> &'static str {
        "postgres"
    }

    async fn health_check(&self) -> Result<(), sqlx::Error> {
        crate::health_check(&self.pool).await
    }

    async fn create(&self, dto: &CreateTask) -> Result<Task, sqlx::Error> {
        TaskRepo::create(&self.pool, dto).await
    }

    async fn find_by_id(&self, id: DbId) -> Result<Option<Task>, sqlx::Error> {
        TaskRepo::find_by_id(&self.pool, id).await
    }

    async fn list_all(&self) -> Result<Vec<Task>, sqlx::Error> {
        TaskRepo::list_all(&self.pool).await
    }

    async fn search_by_name(&self, fragment: &str) -> Result<Vec<Task>, sqlx::Error> {
        TaskRepo::search_by_name(&self.pool, fragment).await
    }

    async fn delete(&self, id: DbId) -> Result<bool, sqlx::Error> {
        TaskRepo::delete(&self.pool, id).await
    }

    async fn append_execution(
        &self,
        id: DbId,
        execution: &Execution,
    ) -> Result<Option<Task>, sqlx::Error> {
        TaskRepo::append_execution(&self.pool, id, execution).await
    }
}
