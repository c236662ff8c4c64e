//! I/O helpers for dev-agents commands.

pub mod config;
pub mod init;
pub mod task_store;
