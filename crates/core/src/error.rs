use crate::execution::ExecutionError;
use crate::types::DbId;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    #[error("Validation failed: {0}")]
    Validation(String),

    /// The command matched an entry of the denylist in
    /// [`command_policy`](crate::command_policy).
    #[error("Unsafe command is not allowed: contains '{keyword}'")]
    InvalidCommand { keyword: &'static str },

    #[error(transparent)]
    Execution(#[from] ExecutionError),
}
