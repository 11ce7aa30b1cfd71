//! Command implementations for the geometry extractor CLI
//!
//! This module contains the command execution logic and shared helpers for
//! the CLI interface. Each command is implemented in its own module.

pub mod extract;
pub mod shared;

use crate::Result;
use crate::cli::args::{Args, Commands};

/// Main command runner for the geometry extractor
///
/// Dispatches to the appropriate subcommand handler based on CLI args.
pub fn run(args: Args) -> Result<()> {
    match args.get_command() {
        Commands::Extract(extract_args) => extract::run_extract(extract_args),
    }
}
