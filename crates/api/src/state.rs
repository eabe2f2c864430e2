use std::sync::Arc;

use crate::tasks::TaskService;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheap to clone: the service is behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// Task storage and execution.
    pub tasks: Arc<TaskService>,
}
