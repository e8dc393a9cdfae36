//! # fskit Copy Command (`commands::copy`)
//!
//! File: cli/src/commands/copy.rs
//!
//! ## Overview
//!
//! Handler for `fskit copy`: copies a single file, or all top-level files of
//! a source directory into a destination directory. A thin caller over
//! `common::fs::copy`; dispatch between the two modes, the per-file
//! concurrency and the failure aggregation all live there.
//!
//! Transforms are a library-level feature and are not expressible from the
//! command line; the CLI always performs plain byte copies.
//!
use crate::common::fs::copy;
use crate::core::error::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing::debug;

/// Arguments for the `fskit copy` command.
#[derive(Parser, Debug)]
pub struct CopyArgs {
    /// Source file, or source directory whose top-level files are copied.
    pub source: PathBuf,

    /// Destination file, or existing destination directory.
    pub dest: PathBuf,
}

/// Handles the `fskit copy` command: performs the copy and prints a short
/// confirmation on success.
///
/// # Errors
///
/// Propagates copy failures (missing source, unwritable destination, or any
/// failed per-file unit of a directory copy).
pub async fn handle_copy(args: CopyArgs) -> Result<()> {
    debug!("Handling copy command: {:?}", args);

    copy::copy(&args.source, &args.dest, None).await?;

    println!("Copied {:?} -> {:?}", args.source, args.dest);
    Ok(())
}
