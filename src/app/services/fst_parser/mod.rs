//! Parsers for the OpenFAST input file family
//!
//! This module handles the keyword-based text formats that make up an
//! OpenFAST model bundle: the main `.fst` configuration file, the ElastoDyn
//! structural file it references, and the blade/tower distributed-property
//! table files referenced in turn. The grammar is informal: `!` introduces a
//! comment, `---` lines separate sections, keyword/value lines are not
//! column-anchored, and tables are whitespace-delimited numeric rows under a
//! recognizable header line.
//!
//! ## Architecture
//!
//! - [`parser`] - Cross-file orchestration: main file scan, ElastoDyn scalar
//!   extraction, AeroDyn stub
//! - [`tables`] - The two distributed-property table strategies (blade and
//!   tower), which share header detection and row tokenization but terminate
//!   differently
//! - [`value_reader`] - Tolerant extraction of one typed value from a
//!   keyword/value line
//!
//! All parsing stages append into one shared [`GeometryResult`] and return an
//! explicit success flag rather than propagating failures; a malformed or
//! missing file degrades the result instead of aborting the run.
//!
//! [`GeometryResult`]: crate::app::models::GeometryResult

pub mod parser;
pub mod tables;
pub mod value_reader;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use parser::FstParser;
