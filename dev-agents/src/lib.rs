//! Configuration and task-spec plumbing for an AI coding-agent workflow.
//!
//! The crate keeps a strict separation:
//!
//! - **[`core`]**: Pure, deterministic logic (command building, AI presets,
//!   task document parsing). No I/O.
//! - **[`io`]**: Filesystem access (config loading, task discovery, project
//!   bootstrap).
//!
//! [`resolve`] combines the two into the resolved commands callers run.

pub mod core;
pub mod exit_codes;
pub mod io;
pub mod logging;
pub mod resolve;
pub mod task;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
