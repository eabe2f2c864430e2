//! Command admission policy for task creation.
//!
//! A command is rejected when its raw text contains any entry of
//! [`DENYLIST`] as a literal, case-sensitive substring. Matching is not
//! word-boundary aware, so harmless words are rejected too (`address`
//! contains `dd`).
//!
//! Known weakness: this is a blacklist over the unparsed string. It is
//! trivially bypassed (command substitution, quoting, `$'\x72m'`, other
//! destructive programs) and produces false positives. The semantics are kept
//! exactly as-is because clients depend on which commands are accepted; a
//! hardened policy would be an allowlist or a sandboxed runtime.

use crate::error::CoreError;

/* --------------------------------------------------------------------------
   Denylist
   -------------------------------------------------------------------------- */

/// Substrings that disqualify a command, checked in this order.
pub const DENYLIST: &[&str] = &[
    "rm", "shutdown", "reboot", "mkfs", "dd", "kill", ":", ">", "<", "2>", ">>",
];

/// Outcome of checking a command against the denylist.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandVerdict {
    Allow,
    /// Rejected; `keyword` is the first denylist entry found in the command.
    Reject { keyword: &'static str },
}

impl CommandVerdict {
    pub fn is_allowed(&self) -> bool {
        matches!(self, Self::Allow)
    }
}

/* --------------------------------------------------------------------------
   Checks
   -------------------------------------------------------------------------- */

/// Check `command` against [`DENYLIST`]. Pure and total.
pub fn check_command(command: &str) -> CommandVerdict {
    DENYLIST
        .iter()
        .copied()
        .find(|keyword| command.contains(keyword))
        .map_or(CommandVerdict::Allow, |keyword| CommandVerdict::Reject { keyword })
}

/// Validate `command`, mapping a rejection to [`CoreError::InvalidCommand`].
pub fn validate_command(command: &str) -> Result<(), CoreError> {
    match check_command(command) {
        CommandVerdict::Allow => Ok(()),
        CommandVerdict::Reject { keyword } => Err(CoreError::InvalidCommand { keyword }),
    }
}
