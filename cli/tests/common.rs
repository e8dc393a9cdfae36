//! # fskit CLI Integration Test Common Helpers
//!
//! File: cli/tests/common.rs
//!
//! ## Overview
//!
//! This module provides shared utility functions used across the integration
//! test files (`list.rs`, `copy.rs`, `main_tests.rs`). Integration tests live
//! in `cli/tests/` and each `.rs` file there (that isn't a module like this
//! one) is compiled as a separate test crate run against the `fskit` binary.
//!

// Allow potentially unused code in this common module, as different test
// files use different helpers.
#![allow(dead_code)]

pub use assert_cmd::Command;
use std::path::Path;

/// Creates an `assert_cmd::Command` pointing at the compiled `fskit` binary
/// for the current test run.
///
/// ## Panics
/// Panics if the `fskit` binary cannot be found via `Command::cargo_bin`.
pub fn fskit_cmd() -> Command {
    Command::cargo_bin("fskit").expect("Failed to find fskit binary for testing")
}

/// Writes a small text file, creating parent directories as needed.
pub fn write_file(path: &Path, content: &str) {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).expect("create parent dirs");
    }
    std::fs::write(path, content).expect("write test file");
}
