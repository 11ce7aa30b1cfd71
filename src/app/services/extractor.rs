//! Geometry extraction orchestration
//!
//! The extractor owns the file store for one run, selects the main `.fst`
//! file, and drives the parser chain. One call, one fresh result record:
//! [`GeometryExtractor::extract`] consumes the extractor, so an accumulator
//! can never be reused across runs.

use tracing::{info, warn};

use crate::app::models::{Extraction, GeometryResult};
use crate::app::services::file_store::FileStore;
use crate::app::services::fst_parser::FstParser;
use crate::constants;

/// Orchestrates one geometry extraction run over a file bundle
///
/// Populate with [`add_file`](Self::add_file) or build from an iterator with
/// [`from_files`](Self::from_files), then call
/// [`extract`](Self::extract).
#[derive(Debug, Clone, Default)]
pub struct GeometryExtractor {
    store: FileStore,
}

impl GeometryExtractor {
    /// Create an extractor with an empty file store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an extractor populated from (name, content) pairs
    pub fn from_files<I, N, C>(files: I) -> Self
    where
        I: IntoIterator<Item = (N, C)>,
        N: Into<String>,
        C: Into<String>,
    {
        Self {
            store: FileStore::from_files(files),
        }
    }

    /// Add a file to the bundle
    pub fn add_file(&mut self, name: impl Into<String>, content: impl Into<String>) {
        self.store.add_file(name, content);
    }

    /// Access the underlying file store
    pub fn store(&self) -> &FileStore {
        &self.store
    }

    /// Run the extraction and return the accumulated result
    ///
    /// The first stored file whose name ends in `.fst` is taken as the main
    /// file; with no such file the run records an error and returns
    /// immediately with `success: false`. Otherwise success requires the
    /// main-file scan to complete and the errors channel to stay empty.
    /// Warnings never affect success, and the geometry record is returned in
    /// full either way.
    pub fn extract(self) -> Extraction {
        let mut geometry = GeometryResult::new();

        let main_file = self
            .store
            .iter()
            .find(|(name, _)| constants::is_main_file(name));

        let Some((name, content)) = main_file else {
            warn!("No main file in bundle of {} files", self.store.len());
            geometry.push_error("No .fst file found");
            return Extraction {
                success: false,
                geometry,
            };
        };

        info!("Extracting geometry from main file '{}'", name);
        let parser = FstParser::new(&self.store);
        let parse_ok = parser.parse_main_file(content, &mut geometry);

        Extraction {
            success: parse_ok && geometry.errors.is_empty(),
            geometry,
        }
    }
}

/// Run one extraction over a batch of (name, content) pairs
///
/// Convenience entry point for callers that hold the whole bundle in hand.
pub fn extract_from_files<I, N, C>(files: I) -> Extraction
where
    I: IntoIterator<Item = (N, C)>,
    N: Into<String>,
    C: Into<String>,
{
    GeometryExtractor::from_files(files).extract()
}
