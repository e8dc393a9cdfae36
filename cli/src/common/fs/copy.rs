//! # fskit Copy Operations (`common::fs::copy`)
//!
//! File: cli/src/common/fs/copy.rs
//!
//! ## Overview
//!
//! This module implements the Copier: copying either a single file or all
//! files at the top level of a source directory into a destination directory,
//! optionally applying a caller-supplied transform to each file's content on
//! the way through (read → transform → write).
//!
//! Like the Lister, the Copier is single-level by design: directories nested
//! inside a source directory are never descended into and never copied.
//!
//! ## Architecture
//!
//! - **Dispatch**: decided once up front by stat'ing both paths. If both are
//!   existing directories, the call expands into one copy unit per top-level
//!   source file (same-named pairing, discovered via the Lister); otherwise
//!   the pair is treated as exactly one file-to-file unit.
//! - **Copy unit**: without a transform, a byte-level copy via the platform
//!   primitive; with a transform, the source is read as UTF-8 text, the
//!   transform receives a fixed-shape [`TransformInput`] and returns a
//!   [`TransformOutput`] (it may rewrite the destination path and/or the
//!   content), and the result is written out, creating/overwriting the
//!   destination.
//! - **Joining**: directory-mode units run concurrently as futures gathered
//!   with `join_all`. The parent `copy` call resolves only after every unit
//!   has completed; if any unit failed, the call fails with the first error
//!   encountered and logs the rest at warn level.
//!
//! ## Usage
//!
//! ```rust
//! use crate::common::fs::copy::{self, TransformInput, TransformOutput};
//!
//! # async fn run_example() -> crate::core::error::Result<()> {
//! let src = std::path::Path::new("./templates");
//! let dest = std::path::Path::new("./rendered");
//!
//! // Plain byte copy of every top-level file.
//! copy::copy(src, dest, None).await?;
//!
//! // Copy with a content transform.
//! let stamp = |input: TransformInput| -> crate::core::error::Result<TransformOutput> {
//!     Ok(TransformOutput {
//!         dest: input.dest,
//!         content: format!("{}\n// generated\n", input.content),
//!     })
//! };
//! copy::copy(src, dest, Some(&stamp)).await?;
//! # Ok(())
//! # }
//! ```
//!
use crate::common::fs::{io, list};
use crate::core::error::{FskitError, Result};
use anyhow::Context;
use futures_util::future;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{debug, warn};

/// The record handed to a transform for one file pair, after the source has
/// been read but before anything is written.
#[derive(Debug, Clone)]
pub struct TransformInput {
    /// Full path of the source file the content was read from.
    pub source: PathBuf,
    /// Destination path the content is about to be written to.
    pub dest: PathBuf,
    /// The file content, as UTF-8 text.
    pub content: String,
}

/// The record a transform returns. Only the destination path and the content
/// may change between input and output of this step; the source is fixed.
#[derive(Debug, Clone)]
pub struct TransformOutput {
    /// Destination path to write to (usually `input.dest`, but a transform
    /// may redirect the file).
    pub dest: PathBuf,
    /// The (possibly rewritten) content to write.
    pub content: String,
}

/// A caller-supplied per-file transform, invoked between read and write.
/// A transform that returns an `Err` fails its copy unit with a
/// `FskitError::Transform` attributed to that file pair.
pub type Transform = dyn Fn(TransformInput) -> Result<TransformOutput> + Send + Sync;

/// Copies `source` to `dest`, optionally transforming each file on the way.
///
/// Dispatch is decided once, at the start, by stat'ing both paths:
/// - Both are existing directories: every file directly inside `source` is
///   copied to the same name inside `dest`, concurrently. Nested directories
///   are silently skipped.
/// - Otherwise: `source` and `dest` are treated as one file pair.
///
/// The call resolves only after every per-file unit has completed, success or
/// failure. Within one unit, read strictly precedes transform, which strictly
/// precedes write; across units of one directory copy there is no ordering.
///
/// # Errors
///
/// Returns an `Err` if:
/// - Any underlying read/write/stat fails (`FskitError::Io`).
/// - A transform fails for some file pair (`FskitError::Transform`).
///
/// In directory mode all unit results are collected; if any unit failed, the
/// first error is returned (the call never reports success with a failed
/// unit) and the remaining failures are logged.
pub async fn copy(source: &Path, dest: &Path, transform: Option<&Transform>) -> Result<()> {
    let directory_mode = is_existing_dir(source).await && is_existing_dir(dest).await;
    if !directory_mode {
        return copy_unit(source, dest, transform).await;
    }

    // Directory mode: pair up the top-level files of `source` by name.
    let names = list::list_files(source, None).await?;
    debug!(
        "Directory copy of {} file(s): {:?} -> {:?}",
        names.len(),
        source,
        dest
    );

    // One future per file, gathered with a structured join: the parent call
    // must not resolve before every unit has run to completion.
    let units = names.into_iter().map(|name| {
        let src_file = source.join(&name);
        let dest_file = dest.join(&name);
        async move {
            let outcome = copy_unit(&src_file, &dest_file, transform).await;
            (name, outcome)
        }
    });
    let results = future::join_all(units).await;

    let mut first_error = None;
    let mut failures = 0usize;
    for (name, outcome) in results {
        if let Err(e) = outcome {
            failures += 1;
            if first_error.is_none() {
                first_error = Some(e);
            } else {
                warn!("Additional copy failure for '{}': {:#}", name, e);
            }
        }
    }

    match first_error {
        Some(e) => Err(e).with_context(|| {
            format!(
                "Directory copy {:?} -> {:?} failed for {} file(s)",
                source, dest, failures
            )
        }),
        None => Ok(()),
    }
}

/// Stat helper for the dispatch decision. A path that cannot be stat'ed is
/// simply not an existing directory; the copy units report the real error.
async fn is_existing_dir(path: &Path) -> bool {
    fs::metadata(path)
        .await
        .map(|metadata| metadata.is_dir())
        .unwrap_or(false)
}

/// Performs the copy for one source/destination file pair.
///
/// Without a transform this is a byte-level copy that overwrites the
/// destination. With a transform, the source is read as UTF-8 text, the
/// transform runs, and its output content is written to its output
/// destination (parents created as needed).
async fn copy_unit(src_file: &Path, dest_file: &Path, transform: Option<&Transform>) -> Result<()> {
    let Some(transform) = transform else {
        return io::copy_file_bytes(src_file, dest_file).await;
    };

    let content = io::read_file_to_string(src_file).await?;
    let output = transform(TransformInput {
        source: src_file.to_path_buf(),
        dest: dest_file.to_path_buf(),
        content,
    })
    .map_err(|reason| FskitError::Transform {
        src: src_file.to_path_buf(),
        dest: dest_file.to_path_buf(),
        reason,
    })?;
    io::write_string_to_file(&output.dest, &output.content).await
}
