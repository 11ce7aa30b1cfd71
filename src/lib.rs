//! OpenFAST Geometry Extractor Library
//!
//! A Rust library for extracting simplified turbine geometry from bundles of
//! OpenFAST aeroelastic input files, intended for lightweight visualization
//! tooling that needs the geometric layout without running the simulation
//! toolchain.
//!
//! This library provides tools for:
//! - Resolving cross-file references (main `.fst` file -> ElastoDyn structural
//!   file -> blade/tower distributed-property tables) against an in-memory
//!   file store
//! - Tolerant parsing of keyword/value lines and whitespace-delimited
//!   property tables from comment-laden, column-loose text
//! - Accumulating partial results and diagnostics when individual files are
//!   malformed or missing
//! - Serializing the extracted geometry to a plain JSON document

pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod extractor;
        pub mod file_store;
        pub mod fst_parser;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::{Extraction, GeometryResult};
pub use app::services::extractor::GeometryExtractor;
pub use app::services::file_store::FileStore;

/// Result type alias for the geometry extractor
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for the hosting layer around the extraction pipeline
///
/// The extraction pipeline itself never surfaces these: its diagnostics are
/// accumulated as strings on the [`GeometryResult`] it builds. This enum
/// covers everything outside that boundary, reading inputs from disk,
/// serializing reports, and validating CLI arguments.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Input file discovery failed
    #[error("Input discovery error: {message}")]
    InputDiscovery {
        message: String,
        #[source]
        source: walkdir::Error,
    },

    /// Report serialization failed
    #[error("Serialization error: {message}")]
    Serialization {
        message: String,
        #[source]
        source: serde_json::Error,
    },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Data validation error
    #[error("Data validation error: {message}")]
    DataValidation { message: String },
}

impl Error {
    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create an input discovery error with context
    pub fn input_discovery(message: impl Into<String>, source: walkdir::Error) -> Self {
        Self::InputDiscovery {
            message: message.into(),
            source,
        }
    }

    /// Create a serialization error with context
    pub fn serialization(message: impl Into<String>, source: serde_json::Error) -> Self {
        Self::Serialization {
            message: message.into(),
            source,
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create a data validation error
    pub fn data_validation(message: impl Into<String>) -> Self {
        Self::DataValidation {
            message: message.into(),
        }
    }
}

// Automatic conversions from common error types
impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}

impl From<walkdir::Error> for Error {
    fn from(error: walkdir::Error) -> Self {
        Self::InputDiscovery {
            message: "Input discovery failed".to_string(),
            source: error,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        Self::Serialization {
            message: "Report serialization failed".to_string(),
            source: error,
        }
    }
}
