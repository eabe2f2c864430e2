//! Shell command runner.
//!
//! Spawns `<shell> -c <command>`, so the command gets full shell semantics
//! (expansion, pipes, redirection, subshells). There is no timeout: a command
//! that never exits keeps the caller waiting.

use std::path::PathBuf;
use std::time::Instant;

use chrono::{TimeDelta, Utc};
use tokio::process::Command;

use super::record::{Execution, ExecutionError};
use super::subprocess;

/// Default shell program, resolved through `PATH`.
pub const DEFAULT_SHELL: &str = "sh";

/// Runs task commands through a system shell.
#[derive(Debug, Clone)]
pub struct ShellRunner {
    shell: PathBuf,
}

impl Default for ShellRunner {
    fn default() -> Self {
        Self::new(DEFAULT_SHELL)
    }
}

impl ShellRunner {
    pub fn new(shell: impl Into<PathBuf>) -> Self {
        Self {
            shell: shell.into(),
        }
    }

    /// Run `command` to completion and return its execution record.
    ///
    /// A non-zero exit code still yields `Ok`; only failures to start the
    /// shell, read its output or wait for it are errors.
    pub async fn run(&self, command: &str) -> Result<Execution, ExecutionError> {
        let started_at = Utc::now();
        let clock = Instant::now();

        let mut cmd = Command::new(&self.shell);
        cmd.arg("-c").arg(command);
        let (mut child, reader) = subprocess::spawn_merged(cmd)?;

        let output = tokio::task::spawn_blocking(move || subprocess::collect_lines(reader))
            .await
            .map_err(|e| ExecutionError::Output(std::io::Error::other(e)))?
            .map_err(ExecutionError::Output)?;

        let status = child.wait().await.map_err(ExecutionError::Wait)?;

        // Derived from the monotonic clock so `ended_at >= started_at` holds
        // even if the wall clock steps backwards mid-run.
        let elapsed = TimeDelta::from_std(clock.elapsed()).unwrap_or(TimeDelta::zero());
        let ended_at = started_at + elapsed;

        let execution = Execution {
            started_at,
            ended_at,
            output,
            exit_code: status.code(),
        };

        tracing::debug!(
            exit_code = ?execution.exit_code,
            duration_ms = execution.duration_ms(),
            output_bytes = execution.output.len(),
            "Command finished"
        );

        Ok(execution)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
