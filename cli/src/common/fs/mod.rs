//! # fskit Filesystem Utilities (`common::fs`)
//!
//! File: cli/src/common/fs/mod.rs
//!
//! ## Overview
//!
//! This module is the organizational unit for the fskit filesystem core. It
//! aggregates the three submodules that make up the whole surface: listing,
//! copying, and the thin async I/O wrappers both of them are built on.
//!
//! ## Architecture
//!
//! Functionality is delegated to the following submodules, in dependency
//! order:
//!
//! - **`io`**: thin wrappers over `tokio::fs` (read, write, byte copy,
//!   rename, remove, ensure-directory) attaching path context to errors.
//! - **`list`**: single-level directory enumeration with kind and extension
//!   filtering. Depends only on the directory-read and stat primitives.
//! - **`copy`**: single-file and directory-mode copy with an optional
//!   per-file transform. Uses `list` to enumerate source files and `io` for
//!   every byte that moves.
//!
//! All three are stateless: every operation computes from its arguments and
//! the filesystem, with no caching or shared mutable state between calls.
//!

/// Single-file and directory-mode copy, with optional per-file transforms.
pub mod copy;
/// Basic async file I/O operations (read, write, byte copy, rename, remove, mkdir).
pub mod io;
/// Single-level directory listing with kind/extension filtering.
pub mod list;
