//! Admission rules for new tasks.
//!
//! Besides the command denylist, blank `name`, `owner` or `command` values
//! are rejected with [`CoreError::Validation`]. This is stricter than the
//! denylist alone: a task with an empty field never reaches the store.

use crate::command_policy;
use crate::error::CoreError;

/// Validate the fields of a task about to be created.
///
/// `name`, `owner` and `command` must be non-blank, and `command` must pass
/// the [`command_policy`] denylist.
pub fn validate_new_task(name: &str, owner: &str, command: &str) -> Result<(), CoreError> {
    require_non_blank("name", name)?;
    require_non_blank("owner", owner)?;
    require_non_blank("command", command)?;
    command_policy::validate_command(command)
}

fn require_non_blank(field: &str, value: &str) -> Result<(), CoreError> {
    if value.trim().is_empty() {
        return Err(CoreError::Validation(format!("{field} must not be empty")));
    }
    Ok(())
}
