//! # fskit Command Modules
//!
//! File: cli/src/commands/mod.rs
//!
//! ## Overview
//!
//! This module aggregates the commands that comprise the fskit CLI. It serves
//! as the central point for importing command modules so they are accessible
//! to the main application entry point (`main.rs`).
//!
//! ## Architecture
//!
//! Each command lives in its own file and defines two things:
//! - an arguments struct parsed by Clap
//! - an async `handle_*` function implementing the command
//!
//! The commands are deliberately thin: they parse and print, while the actual
//! filesystem semantics live in `common::fs`.
//!
//! ## Commands
//!
//! - `list`: single-level directory/file listing with extension filtering
//! - `copy`: single-file or directory-mode copy
//!

/// The `fskit copy` command: single-file or directory-mode copy.
pub mod copy;
/// The `fskit list` command: list immediate subdirectories or files.
pub mod list;
