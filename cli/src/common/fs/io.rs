//! # fskit Filesystem I/O Operations (`common::fs::io`)
//!
//! File: cli/src/common/fs/io.rs
//!
//! ## Overview
//!
//! This module centralizes the fundamental filesystem input/output operations
//! the rest of fskit is built on. It provides thin, robust wrappers around
//! `tokio::fs` for reading whole files as text, writing text back out,
//! byte-level copying, renaming, removal, and ensuring directories exist.
//!
//! ## Architecture
//!
//! Every wrapper is async and attaches the failing path to its error, so a
//! failure deep inside a directory copy still names the exact file involved:
//!
//! - **`ensure_dir_exists`**: `mkdir -p` semantics; errors if the path exists
//!   but is not a directory.
//! - **`read_file_to_string`**: full UTF-8 text read.
//! - **`write_string_to_file`**: creates parent directories first, then
//!   writes, overwriting any existing file.
//! - **`copy_file_bytes`**: the platform byte-copy primitive; overwrites the
//!   destination.
//! - **`rename_entry`**: renames/moves a file or directory.
//! - **`remove_entry`**: removes a file, or a directory with its contents.
//!
//! Each wrapper is an await point; callers interleave cooperatively on the
//! tokio runtime rather than blocking a thread per operation.
//!
//! ## Usage
//!
//! ```rust
//! use crate::common::fs::io;
//!
//! # async fn run_example() -> crate::core::error::Result<()> {
//! let file = std::path::Path::new("./out/notes.txt");
//! io::write_string_to_file(file, "HELLO WORLD").await?;
//! let content = io::read_file_to_string(file).await?;
//! assert_eq!(content, "HELLO WORLD");
//! io::remove_entry(file).await?;
//! # Ok(())
//! # }
//! ```
//!
use crate::core::error::{FskitError, Result};
use std::path::Path;
use tokio::fs;
use tracing::{debug, info};

/// Ensures that a directory exists at the specified path.
///
/// If the path does not exist, the directory is created along with any
/// missing parents (similar to `mkdir -p`). If the path exists but is not a
/// directory (e.g., it's a file), a `FskitError::FileSystem` is returned.
///
/// # Errors
///
/// Returns an `Err` if:
/// - The path exists but is not a directory.
/// - Creating the directory fails (e.g., due to permissions).
pub async fn ensure_dir_exists(path: &Path) -> Result<()> {
    match fs::metadata(path).await {
        Ok(metadata) => {
            if !metadata.is_dir() {
                anyhow::bail!(FskitError::FileSystem(format!(
                    "Path exists but is not a directory: {:?}",
                    path
                )));
            }
            debug!("Directory already exists: {:?}", path);
        }
        Err(_) => {
            fs::create_dir_all(path)
                .await
                .map_err(|source| FskitError::Io {
                    path: path.to_path_buf(),
                    source,
                })?;
            info!("Created directory: {:?}", path);
        }
    }
    Ok(())
}

/// Reads the entire content of a file into a UTF-8 string.
///
/// # Errors
///
/// Returns an `Err` carrying `FskitError::Io` if the file cannot be found,
/// opened, or read, or if its content is not valid UTF-8.
pub async fn read_file_to_string(path: &Path) -> Result<String> {
    let content = fs::read_to_string(path)
        .await
        .map_err(|source| FskitError::Io {
            path: path.to_path_buf(),
            source,
        })?;
    Ok(content)
}

/// Writes string content to a file, overwriting it if it exists.
///
/// The parent directory of `path` is created first when missing, so writing
/// into a fresh destination tree just works.
///
/// # Errors
///
/// Returns an `Err` if:
/// - The parent directory cannot be created.
/// - Writing to the file fails (e.g., permissions, disk full).
pub async fn write_string_to_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        // A root path has no parent and already exists.
        if !parent.as_os_str().is_empty() {
            ensure_dir_exists(parent).await?;
        }
    }

    fs::write(path, content)
        .await
        .map_err(|source| FskitError::Io {
            path: path.to_path_buf(),
            source,
        })?;
    info!("Wrote content to file: {:?}", path);
    Ok(())
}

/// Copies `src` to `dest` byte-for-byte using the platform copy primitive,
/// overwriting `dest` if it exists.
///
/// # Errors
///
/// Returns an `Err` carrying `FskitError::Io` if `src` is missing or
/// unreadable, or if `dest` cannot be written.
pub async fn copy_file_bytes(src: &Path, dest: &Path) -> Result<()> {
    fs::copy(src, dest).await.map_err(|source| FskitError::Io {
        path: src.to_path_buf(),
        source,
    })?;
    debug!("Copied bytes {:?} -> {:?}", src, dest);
    Ok(())
}

/// Renames (moves) a file or directory from `from` to `to`.
///
/// # Errors
///
/// Returns an `Err` carrying `FskitError::Io` if `from` is missing or the
/// rename is rejected by the OS (e.g., cross-device move).
#[allow(dead_code)] // Part of the fs surface; exercised by tests, not by the current CLI commands.
pub async fn rename_entry(from: &Path, to: &Path) -> Result<()> {
    fs::rename(from, to)
        .await
        .map_err(|source| FskitError::Io {
            path: from.to_path_buf(),
            source,
        })?;
    info!("Renamed {:?} -> {:?}", from, to);
    Ok(())
}

/// Removes the entry at `path`: a file is unlinked, a directory is removed
/// together with its contents.
///
/// # Errors
///
/// Returns an `Err` carrying `FskitError::Io` if `path` does not exist or
/// removal fails.
#[allow(dead_code)] // Part of the fs surface; exercised by tests, not by the current CLI commands.
pub async fn remove_entry(path: &Path) -> Result<()> {
    let metadata = fs::metadata(path).await.map_err(|source| FskitError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let removal = if metadata.is_dir() {
        fs::remove_dir_all(path).await
    } else {
        fs::remove_file(path).await
    };
    removal.map_err(|source| FskitError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    info!("Removed: {:?}", path);
    Ok(())
}
