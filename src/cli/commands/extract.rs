//! Extract command implementation
//!
//! Collects the input files into the in-memory store, runs one extraction,
//! and writes the result as JSON or a human-readable summary. The command
//! exits successfully whenever a structured result was produced; an
//! extraction with `success: false` is still a result, reported as such,
//! not a process failure.

use crate::app::models::Extraction;
use crate::app::services::extractor::GeometryExtractor;
use crate::cli::args::{ExtractArgs, OutputFormat};
use crate::{Error, Result};
use std::io::Write;
use tracing::info;

/// Run the extract command
pub fn run_extract(args: ExtractArgs) -> Result<()> {
    args.validate()?;
    super::shared::setup_logging(&args)?;

    let store = super::shared::collect_input_files(&args.inputs)?;
    info!("Running extraction over {} files", store.len());

    let mut extractor = GeometryExtractor::new();
    for (name, content) in store.iter() {
        extractor.add_file(name, content);
    }
    let extraction = extractor.extract();

    let output = match args.output_format {
        OutputFormat::Json => {
            if args.pretty {
                extraction.to_json_pretty()?
            } else {
                extraction.to_json()?
            }
        }
        OutputFormat::Human => render_summary(&extraction),
    };

    match &args.output_file {
        Some(path) => {
            let mut file = std::fs::File::create(path).map_err(|e| {
                Error::io(format!("Failed to create output file {}", path.display()), e)
            })?;
            writeln!(file, "{}", output)
                .map_err(|e| Error::io("Failed to write output file", e))?;
            info!("Result written to {}", path.display());
        }
        None => println!("{}", output),
    }

    Ok(())
}

/// Render a human-readable summary of the extraction result
fn render_summary(extraction: &Extraction) -> String {
    let geometry = &extraction.geometry;
    let mut lines = Vec::new();

    lines.push(format!(
        "Extraction {}",
        if extraction.success { "succeeded" } else { "failed" }
    ));
    lines.push(format!("Files read: {}", geometry.files_read.join(", ")));

    if let Some(n) = geometry.config.num_blades {
        lines.push(format!("  Number of blades: {}", n));
    }

    let mut scalar = |label: &str, value: Option<f64>| {
        if let Some(v) = value {
            lines.push(format!("  {}: {}", label, v));
        }
    };

    scalar("Rotor diameter (m)", geometry.config.rotor_diameter);
    scalar("Hub height (m)", geometry.config.hub_height);
    scalar("Blade length (m)", geometry.blades.length);
    scalar("Precone (deg)", geometry.blades.precone);
    scalar("Tower height (m)", geometry.tower.height);
    scalar("Tower base elevation (m)", geometry.tower.base_elevation);
    scalar("Hub radius (m)", geometry.hub.radius);
    scalar("Overhang (m)", geometry.hub.overhang);
    scalar("Shaft tilt (deg)", geometry.hub.shaft_tilt);

    lines.push(format!(
        "Stations: {} blade, {} tower",
        geometry.blades.stations.len(),
        geometry.tower.stations.len()
    ));

    if !geometry.errors.is_empty() {
        lines.push(format!("Errors ({}):", geometry.errors.len()));
        for error in &geometry.errors {
            lines.push(format!("  - {}", error));
        }
    }
    if !geometry.warnings.is_empty() {
        lines.push(format!("Warnings ({}):", geometry.warnings.len()));
        for warning in &geometry.warnings {
            lines.push(format!("  - {}", warning));
        }
    }

    lines.join("\n")
}
