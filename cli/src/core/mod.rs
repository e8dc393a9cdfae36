//! # fskit Core Infrastructure (`core`)
//!
//! File: cli/src/core/mod.rs
//!
//! ## Overview
//!
//! This module aggregates the core infrastructure pieces of fskit that are
//! not tied to any particular command: the error types and the standard
//! `Result` alias used across the whole crate.
//!
//! ## Architecture
//!
//! - **`error`**: Defines `FskitError` (typed I/O and transform failures) and
//!   the `Result<T>` alias built on `anyhow` for contextual error propagation.
//!
//! Configuration in fskit is deliberately explicit: every operation takes a
//! typed options struct (see `common::fs::list::ListOptions`) with documented
//! defaults, validated where it is consumed. There is no process-wide mutable
//! state, no config file, and no caching between calls.
//!

/// Defines `FskitError` and the crate-wide `Result<T>` alias.
pub mod error;
