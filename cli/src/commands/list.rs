//! # fskit List Command (`commands::list`)
//!
//! File: cli/src/commands/list.rs
//!
//! ## Overview
//!
//! Handler for `fskit list`: prints the immediate subdirectories of a
//! directory, or its immediate files with `--files` (optionally filtered by
//! extension with `--ext`). One name per line, in the order the directory
//! read produced them.
//!
//! This is a thin caller over `common::fs::list`; all filtering semantics
//! live there.
//!
use crate::common::fs::list;
use crate::core::error::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing::debug;

/// Arguments for the `fskit list` command.
#[derive(Parser, Debug)]
pub struct ListArgs {
    /// The directory to list.
    pub path: PathBuf,

    /// List files instead of directories.
    #[arg(long)]
    pub files: bool,

    /// Only show files with this extension (implies --files).
    /// Case-insensitive; the leading dot is optional.
    #[arg(long, value_name = "EXT")]
    pub ext: Option<String>,
}

/// Handles the `fskit list` command: runs the appropriate listing and prints
/// the resulting names to stdout, one per line.
///
/// # Errors
///
/// Propagates listing failures (missing path, permission, not-a-directory,
/// stat failure on any entry).
pub async fn handle_list(args: ListArgs) -> Result<()> {
    debug!("Handling list command: {:?}", args);

    let names = if args.files || args.ext.is_some() {
        list::list_files(&args.path, args.ext.as_deref()).await?
    } else {
        list::list_directories(&args.path).await?
    };

    for name in names {
        println!("{name}");
    }
    Ok(())
}
