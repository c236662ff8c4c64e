//! Deterministic, pure logic shared by the crate.
//!
//! Core modules must be free of I/O side effects. They operate on in-memory
//! values and return deterministic outputs suitable for tests.

pub mod ai;
pub mod command;
pub mod task_parser;
