//! # fskit Shared Utilities (`common`)
//!
//! File: cli/src/common/mod.rs
//!
//! ## Overview
//!
//! This module aggregates functionality shared across fskit commands. Today
//! that is the filesystem core; keeping it under `common` leaves room for
//! future shared concerns without reshuffling the command modules.
//!

/// Filesystem utilities: listing, copying, and basic async I/O.
pub mod fs;
