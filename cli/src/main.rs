//! # fskit Main Entry Point
//!
//! File: cli/src/main.rs
//!
//! ## Overview
//!
//! This file serves as the main entry point for the fskit CLI. It handles:
//! - Command-line argument parsing using Clap
//! - Setting up the logging system based on verbosity flags
//! - Routing execution to the appropriate command handler
//!
//! ## Architecture
//!
//! The application follows a modular command structure:
//! - Each command (`list`, `copy`) is a variant in the `Commands` enum
//! - Commands are mapped to handler functions in their respective modules
//! - All errors are propagated to this level for consistent handling
//!
//! ## Examples
//!
//! Basic fskit usage:
//!
//! ```bash
//! # List immediate subdirectories
//! fskit list ./data
//!
//! # List top-level .json files, with debug logging
//! fskit -vv list ./data --files --ext json
//!
//! # Copy all top-level files of one directory into another
//! fskit copy ./data ./backup
//! ```
//!
//! Command processing flow:
//! 1. Parse command-line args via Clap
//! 2. Configure logging based on verbosity level
//! 3. Route to the command handler
//! 4. Format and display any errors that occur
//!
use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

// Declare the top-level modules of the CLI crate.
mod commands; // Handles specific command logic (list, copy).
mod common; // Contains the shared filesystem core (common::fs).
mod core; // Core infrastructure (errors).

/// Defines the top-level command-line arguments structure using Clap's derive macros.
#[derive(Parser, Debug)]
#[command(
    name = "fskit",
    about = "fskit: small async filesystem toolkit",
    long_about = "Single-level directory listing with kind/extension filtering, and\n\
                  single-file or directory-mode copying.",
    propagate_version = true,
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

/// Enum defining all available commands.
#[derive(Parser, Debug)]
enum Commands {
    #[command(alias = "ls")]
    List(commands::list::ListArgs),
    #[command(alias = "cp")]
    Copy(commands::copy::CopyArgs),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    fmt::Subscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();

    tracing::debug!("Parsed CLI arguments: {:?}", cli);

    let command_result = match cli.command {
        Commands::List(args) => commands::list::handle_list(args).await,
        Commands::Copy(args) => commands::copy::handle_copy(args).await,
    };

    if let Err(e) = command_result {
        tracing::error!("Command execution failed: {:?}", e);
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    Ok(())
}
