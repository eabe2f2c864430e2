use std::collections::BTreeMap;

use async_trait::async_trait;
use chrono::Utc;
use taskrun_core::execution::Execution;
use taskrun_core::types::DbId;
use tokio::sync::RwLock;

use super::TaskStore;
use crate::models::task::{CreateTask, Task};

/// [`TaskStore`] kept in process memory. Contents are lost on exit.
///
/// Ids start at 1 and are never reused, mirroring a `BIGSERIAL` column.
#[derive(Default)]
pub struct MemoryTaskStore {
    inner: RwLock<Inner>,
}

#[derive(Default)]
struct Inner {
    last_id: DbId,
    tasks: BTreeMap<DbId, Task>,
}

impl MemoryTaskStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TaskStore for MemoryTaskStore {
    fn backend(&self) -> &'static str {
        "memory"
    }

    async fn health_check(&self) -> Result<(), sqlx::Error> {
        Ok(())
    }

    async fn create(&self, dto: &CreateTask) -> Result<Task, sqlx::Error> {
        let mut inner = self.inner.write().await;
        inner.last_id += 1;
        let task = Task {
            id: inner.last_id,
            name: dto.name.clone(),
            owner: dto.owner.clone(),
            command: dto.command.clone(),
            executions: Vec::new(),
            created_at: Utc::now(),
        };
        inner.tasks.insert(task.id, task.clone());
        Ok(task)
    }

    async fn find_by_id(&self, id: DbId) -> Result<Option<Task>, sqlx::Error> {
        Ok(self.inner.read().await.tasks.get(&id).cloned())
    }

    async fn list_all(&self) -> Result<Vec<Task>, sqlx::Error> {
        Ok(self.inner.read().await.tasks.values().cloned().collect())
    }

    async fn search_by_name(&self, fragment: &str) -> Result<Vec<Task>, sqlx::Error> {
        let needle = fragment.to_lowercase();
        Ok(self
            .inner
            .read()
            .await
            .tasks
            .values()
            .filter(|task| task.name.to_lowercase().contains(&needle))
            .cloned()
            .collect())
    }

    async fn delete(&self, id: DbId) -> Result<bool, sqlx::Error> {
        Ok(self.inner.write().await.tasks.remove(&id).is_some())
    }

    async fn append_execution(
        &self,
        id: DbId,
        execution: &Execution,
    ) -> Result<Option<Task>, sqlx::Error> {
        let mut inner = self.inner.write().await;
        Ok(inner.tasks.get_mut(&id).map(|task| {
            task.executions.push(execution.clone());
            task.clone()
        }))
    }
}
