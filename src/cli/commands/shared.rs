//! Shared components for CLI commands
//!
//! Logging setup and input-file collection used by the command
//! implementations.

use crate::app::services::file_store::FileStore;
use crate::cli::args::ExtractArgs;
use crate::{Error, Result};
use std::path::Path;
use tracing::debug;
use walkdir::WalkDir;

/// Set up structured logging for the extract command
pub fn setup_logging(args: &ExtractArgs) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let log_level = args.get_log_level();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("openfast_geometry={}", log_level)));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_level(true)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .init();

    debug!("Logging initialized at level: {}", log_level);
    Ok(())
}

/// Collect input files and directories into a file store
///
/// Plain files are read directly; directories are walked recursively and
/// every regular file inside is added. Files are stored under their file
/// name (basename), matching how bundles reference each other.
pub fn collect_input_files(inputs: &[std::path::PathBuf]) -> Result<FileStore> {
    let mut store = FileStore::new();

    for input in inputs {
        if input.is_dir() {
            for entry in WalkDir::new(input).follow_links(false) {
                let entry = entry.map_err(|e| {
                    Error::input_discovery(
                        format!("Failed to walk input directory {}", input.display()),
                        e,
                    )
                })?;
                if entry.file_type().is_file() {
                    add_file_to_store(&mut store, entry.path())?;
                }
            }
        } else {
            add_file_to_store(&mut store, input)?;
        }
    }

    debug!("Collected {} input files", store.len());
    Ok(store)
}

/// Read one file from disk and add it to the store under its file name
fn add_file_to_store(store: &mut FileStore, path: &Path) -> Result<()> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| Error::io(format!("Failed to read input file {}", path.display()), e))?;

    let name = path
        .file_name()
        .and_then(|n| n.to_str())
        .map(|n| n.to_string())
        .unwrap_or_else(|| path.display().to_string());

    debug!("Adding '{}' ({} bytes)", name, content.len());
    store.add_file(name, content);
    Ok(())
}
