//! # fskit Error Types
//!
//! File: cli/src/core/error.rs
//!
//! ## Overview
//!
//! This module defines the error types and error handling mechanisms used
//! throughout fskit. It provides a consistent approach to error management
//! with detailed error information and context.
//!
//! ## Architecture
//!
//! The error system consists of two main components:
//! - `FskitError`: A custom error enum using `thiserror` for specific error types
//! - `Result<T>`: A type alias for `anyhow::Result<T>` for flexible error handling
//!
//! The error types cover the two failure domains of the core:
//! - I/O failures (missing path, permission denied, not-a-directory, disk full)
//! - Transform failures raised by a caller-supplied transform during a copy
//!
//! I/O errors are always surfaced to the caller, never silently swallowed and
//! never retried; retry policy belongs to the caller.
//!
//! ## Examples
//!
//! Using the error system:
//!
//! ```rust
//! // Return a specific error type
//! if !metadata.is_dir() {
//!     anyhow::bail!(FskitError::FileSystem(format!(
//!         "Path exists but is not a directory: {:?}",
//!         path
//!     )));
//! }
//!
//! // Pattern matching on error types
//! match result {
//!     Ok(value) => println!("Success: {:?}", value),
//!     Err(e) if e.downcast_ref::<FskitError>().is_some_and(|fe| matches!(fe, FskitError::Transform { .. })) => {
//!         println!("A transform rejected one of the files.");
//!     }
//!     Err(e) => return Err(e),
//! }
//! ```
//!
use std::path::PathBuf;
use thiserror::Error;

/// Custom error type for the fskit application.
#[derive(Error, Debug)]
pub enum FskitError {
    /// A path had the wrong shape for the requested operation
    /// (e.g., exists but is not a directory).
    #[error("Filesystem error: {0}")]
    FileSystem(String),

    /// An underlying OS-level I/O failure, attributed to the path that failed.
    #[error("I/O operation failed for {path:?}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// A caller-supplied transform failed during a per-file copy.
    /// Attributed to the specific source/destination pair that failed;
    /// `reason` carries whatever error the transform raised.
    #[error("Transform failed for {src:?} -> {dest:?}: {reason}")]
    Transform {
        src: PathBuf,
        dest: PathBuf,
        reason: anyhow::Error,
    },
}

/// Type alias for Result using anyhow::Error for broad compatibility.
/// Anyhow allows for easy context addition and flexible error handling.
pub type Result<T> = anyhow::Result<T>;
