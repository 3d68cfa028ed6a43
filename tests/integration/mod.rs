//! Integration tests for vigil
//!
//! These tests build real projects on disk and run them through the same
//! entry points the CLI uses.

pub mod helpers;
pub mod list_and_init;
pub mod run_monitors;
