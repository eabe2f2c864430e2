//! Domain logic for the task runner service.
//!
//! Everything in this crate is free of database and HTTP concerns so it can
//! be exercised directly by unit tests and reused by the `db` and `api`
//! crates.

pub mod command_policy;
pub mod error;
pub mod execution;
pub mod task;
pub mod types;
