//! Stable exit codes for dev-agents CLI commands.

/// Command succeeded.
pub const OK: i32 = 0;
/// Command failed due to invalid input, I/O, or other errors.
pub const INVALID: i32 = 1;
/// `dev-agents task show` was given an id with no task document.
pub const NOT_FOUND: i32 = 2;
