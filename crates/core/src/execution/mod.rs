//! Command execution for tasks.
//!
//! [`ShellRunner`] hands a command line to a system shell (`sh -c`), captures
//! stdout and stderr as one merged stream, and produces an [`Execution`]
//! record. Nothing here touches the database; persisting the record is the
//! caller's job.

pub mod record;
pub mod shell;
pub mod subprocess;

pub use record::{Execution, ExecutionError};
pub use shell::ShellRunner;
