//! Command-line argument definitions for the geometry extractor
//!
//! This module defines the CLI interface using the clap derive API. The
//! binary is a thin host around the library: it collects input files into
//! the in-memory store, runs one extraction, and emits the result.

use crate::{Error, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// CLI arguments for the OpenFAST geometry extractor
///
/// Extracts simplified blade, tower, hub and rotor geometry from a bundle of
/// OpenFAST input files for lightweight visualization tooling.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "openfast-geometry",
    version,
    about = "Extract simplified turbine geometry from OpenFAST input file bundles",
    long_about = "Extracts blade, tower, hub and rotor geometry from a bundle of OpenFAST \
                  input files (.fst main file, ElastoDyn structural file, blade/tower \
                  distributed-property tables) without running the simulation toolchain. \
                  Partial results and diagnostics are accumulated even when individual \
                  files are malformed or missing."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands for the geometry extractor
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Extract geometry from a bundle of input files
    Extract(ExtractArgs),
}

/// Arguments for the extract command
#[derive(Debug, Clone, Parser)]
pub struct ExtractArgs {
    /// Input files and/or directories
    ///
    /// Directories are walked recursively and every regular file inside is
    /// added to the bundle under its file name. The first file whose name
    /// ends in .fst is taken as the main file.
    #[arg(
        value_name = "PATH",
        required = true,
        help = "Input files and/or directories forming one bundle"
    )]
    pub inputs: Vec<PathBuf>,

    /// Output format for the extraction result
    #[arg(
        short = 'f',
        long = "format",
        value_enum,
        default_value = "human",
        help = "Output format for the extraction result"
    )]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(
        long = "pretty",
        help = "Pretty-print JSON output (ignored for human format)"
    )]
    pub pretty: bool,

    /// Output file for the result
    ///
    /// If not specified, the result is written to stdout.
    #[arg(
        short = 'o',
        long = "output-file",
        value_name = "FILE",
        help = "Output file for the result"
    )]
    pub output_file: Option<PathBuf>,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Suppress output (quiet mode)
    #[arg(
        short = 'q',
        long = "quiet",
        help = "Suppress logging except errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,
}

/// Output format options for the extraction result
#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable summary
    Human,
    /// JSON document for scripting
    Json,
}

impl Args {
    /// Get the command if one was specified
    pub fn get_command(&self) -> Commands {
        self.command
            .clone()
            .expect("Command should be present when get_command() is called")
    }
}

impl ExtractArgs {
    /// Validate the extract command arguments for consistency
    pub fn validate(&self) -> Result<()> {
        for input in &self.inputs {
            if !input.exists() {
                return Err(Error::configuration(format!(
                    "Input path does not exist: {}",
                    input.display()
                )));
            }
        }

        if let Some(output_file) = &self.output_file {
            if let Some(parent) = output_file.parent() {
                if !parent.as_os_str().is_empty() && !parent.exists() {
                    return Err(Error::configuration(format!(
                        "Output file directory does not exist: {}",
                        parent.display()
                    )));
                }
            }
        }

        Ok(())
    }

    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => "warn",
                1 => "info",
                2 => "debug",
                _ => "trace",
            }
        }
    }
}
