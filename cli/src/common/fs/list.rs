//! # fskit Directory Listing (`common::fs::list`)
//!
//! File: cli/src/common/fs/list.rs
//!
//! ## Overview
//!
//! Single-level directory enumeration with filtering by entry kind (file vs.
//! directory) and, for files, by extension. This is the Lister half of the
//! fskit core; the Copier (`common::fs::copy`) uses it to discover the files
//! of a source directory.
//!
//! Traversal is deliberately one level deep: a listing contains only the
//! entries directly inside the queried directory, never anything nested.
//!
//! ## Architecture
//!
//! - **`ListOptions`**: explicit options struct with documented defaults
//!   (directories, no extension filter). Extension filters are normalized
//!   once per call: the leading dot is optional and comparison is
//!   case-insensitive, so `".json"`, `"json"` and `"JSON"` all behave the same.
//! - **`list_entries`**: reads the directory stream, stats each entry to
//!   classify it, applies the filter, and returns bare names in stream order.
//!   Entry order is whatever the OS yields — callers must not rely on it.
//! - **`list_directories`** / **`list_files`**: the two public convenience
//!   wrappers used by the commands and by the Copier.
//!
//! Stat failures are fail-fast: if any entry cannot be classified the whole
//! listing aborts with an I/O error and no partial result is returned.
//!
//! ## Usage
//!
//! ```rust
//! use crate::common::fs::list;
//!
//! # async fn run_example() -> crate::core::error::Result<()> {
//! let subdirs = list::list_directories(std::path::Path::new("./data")).await?;
//! let configs = list::list_files(std::path::Path::new("./data"), Some(".json")).await?;
//! # Ok(())
//! # }
//! ```
//!
use crate::core::error::{FskitError, Result};
use std::path::Path;
use tokio::fs;
use tracing::debug;

/// Options controlling what a listing keeps.
///
/// Defaults (via `Default`) match the directory listing: `want_files = false`,
/// no extension filter. The `extension` field is ignored unless `want_files`
/// is true.
#[derive(Debug, Clone, Default)]
pub struct ListOptions {
    /// Keep files instead of directories.
    pub want_files: bool,
    /// For file listings, keep only files with this extension.
    /// `None` or an empty string means no extension filtering.
    pub extension: Option<String>,
}

impl ListOptions {
    /// Options for listing immediate subdirectories.
    pub fn directories() -> Self {
        Self::default()
    }

    /// Options for listing immediate files, optionally filtered by extension.
    pub fn files(extension: Option<&str>) -> Self {
        Self {
            want_files: true,
            extension: extension.map(str::to_string),
        }
    }

    /// Normalizes the extension filter for comparison: strips the optional
    /// leading dot and lower-cases it. Returns `None` when no filtering by
    /// extension should happen (filter absent or empty).
    fn normalized_extension(&self) -> Option<String> {
        match self.extension.as_deref() {
            None | Some("") | Some(".") => None,
            Some(ext) => Some(ext.trim_start_matches('.').to_lowercase()),
        }
    }
}

/// Lists the names of entries directly inside `path`, filtered by `options`.
///
/// Each entry is classified with a metadata stat on its full path. With
/// `want_files` unset, only directory names are kept and any extension filter
/// is ignored; with it set, only file names are kept (anything that is not a
/// directory counts as a file), restricted to the requested extension when
/// one is supplied.
///
/// Returned names are bare entry names, not full paths, in the order the
/// directory stream produced them.
///
/// # Errors
///
/// Returns an `Err` carrying `FskitError::Io` if:
/// - `path` cannot be read as a directory (missing, permission, not-a-directory).
/// - Any entry's metadata cannot be read. This aborts the whole listing;
///   no partial result is returned.
pub async fn list_entries(path: &Path, options: &ListOptions) -> Result<Vec<String>> {
    let wanted_ext = options.normalized_extension();

    let mut reader = fs::read_dir(path).await.map_err(|source| FskitError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let mut names = Vec::new();
    loop {
        let entry = match reader.next_entry().await.map_err(|source| FskitError::Io {
            path: path.to_path_buf(),
            source,
        })? {
            Some(entry) => entry,
            None => break,
        };

        let full_path = entry.path();
        // Classify via stat. A failure here aborts the listing entirely.
        let metadata = fs::metadata(&full_path)
            .await
            .map_err(|source| FskitError::Io {
                path: full_path.clone(),
                source,
            })?;
        let is_dir = metadata.is_dir();
        let name = entry.file_name().to_string_lossy().into_owned();

        if options.want_files {
            if is_dir {
                continue;
            }
            if let Some(wanted) = &wanted_ext {
                let ext = full_path
                    .extension()
                    .map(|e| e.to_string_lossy().to_lowercase());
                if ext.as_deref() != Some(wanted.as_str()) {
                    continue;
                }
            }
            names.push(name);
        } else if is_dir {
            names.push(name);
        }
    }

    debug!(
        "Listed {} entr(y/ies) in {:?} (want_files={})",
        names.len(),
        path,
        options.want_files
    );
    Ok(names)
}

/// Lists the names of the immediate subdirectories of `path`.
///
/// # Errors
///
/// Same failure modes as [`list_entries`].
pub async fn list_directories(path: &Path) -> Result<Vec<String>> {
    list_entries(path, &ListOptions::directories()).await
}

/// Lists the names of the immediate files of `path`, optionally restricted to
/// an extension (`".json"` and `"json"` are equivalent, case-insensitive).
///
/// # Errors
///
/// Same failure modes as [`list_entries`].
pub async fn list_files(path: &Path, extension: Option<&str>) -> Result<Vec<String>> {
    list_entries(path, &ListOptions::files(extension)).await
}
