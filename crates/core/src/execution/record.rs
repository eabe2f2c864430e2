//! The execution record and the errors that prevent one from being produced.

use std::io;

use serde::{Deserialize, Serialize};

use crate::types::Timestamp;

/// One completed run of a task's command. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Execution {
    /// Captured immediately before the process was spawned.
    pub started_at: Timestamp,
    /// Captured immediately after the process exited.
    pub ended_at: Timestamp,
    /// Merged stdout and stderr, every line terminated by `\n`.
    pub output: String,
    /// Process exit code (`None` if killed by a signal).
    #[serde(default)]
    pub exit_code: Option<i32>,
}

impl Execution {
    /// Wall-clock duration in milliseconds.
    pub fn duration_ms(&self) -> i64 {
        (self.ended_at - self.started_at).num_milliseconds()
    }
}

/// Errors that stop a command from producing an [`Execution`].
///
/// A command that runs and exits non-zero is not an error; its exit code is
/// recorded on the execution instead.
#[derive(Debug, thiserror::Error)]
pub enum ExecutionError {
    /// The output pipe could not be created or the shell could not be started.
    #[error("Failed to start shell: {0}")]
    Spawn(#[source] io::Error),

    /// Reading the merged output stream failed.
    #[error("Failed to read command output: {0}")]
    Output(#[source] io::Error),

    /// Waiting for the process to exit failed.
    #[error("Failed to wait for command: {0}")]
    Wait(#[source] io::Error),
}
