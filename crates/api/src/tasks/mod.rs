//! Task orchestration service.
//!
//! The [`TaskService`] ties the command policy and shell runner from `core`
//! to the task store, providing the single entry point handlers call.

pub mod service;

pub use service::TaskService;
