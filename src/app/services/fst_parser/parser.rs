//! Cross-file parsing orchestration
//!
//! The main `.fst` file names the ElastoDyn structural file and the AeroDyn
//! aerodynamic file; the ElastoDyn file carries the scalar geometry and
//! names the blade/tower distributed-property files. [`FstParser`] walks
//! this reference chain against the file store, appending everything it
//! finds (and every problem it hits) onto one shared [`GeometryResult`].
//!
//! Reference keywords are matched as substrings anywhere in the line, value
//! region or comment region. That tolerance is what lets real-world bundles
//! with reshuffled columns resolve, at the cost of false positives when
//! keyword text shows up inside an unrelated comment.

use tracing::{debug, warn};

use super::tables;
use super::value_reader;
use crate::app::models::GeometryResult;
use crate::app::services::file_store::FileStore;
use crate::constants::{
    self, AERODYNAMIC_FILE_KEYWORDS, STRUCTURAL_FILE_KEYWORDS, keywords, labels,
};

/// Check whether a line references the structural (ElastoDyn) file
pub fn is_structural_reference(line: &str) -> bool {
    STRUCTURAL_FILE_KEYWORDS.iter().any(|kw| line.contains(kw))
}

/// Check whether a line references the aerodynamic (AeroDyn) file
pub fn is_aerodynamic_reference(line: &str) -> bool {
    AERODYNAMIC_FILE_KEYWORDS.iter().any(|kw| line.contains(kw))
}

/// Parser for an OpenFAST input file bundle
///
/// Borrows the populated file store for the duration of one run. Every
/// parsing method appends into the caller's [`GeometryResult`] and returns
/// an explicit success flag; no method panics or propagates an error, so a
/// partial result is always preserved.
#[derive(Debug)]
pub struct FstParser<'a> {
    store: &'a FileStore,
}

impl<'a> FstParser<'a> {
    /// Create a parser over a populated file store
    pub fn new(store: &'a FileStore) -> Self {
        Self { store }
    }

    /// Parse the main `.fst` file, dispatching to referenced sub-files
    ///
    /// Scans every non-comment line for the structural and aerodynamic file
    /// reference keywords. A resolved structural reference is parsed for
    /// geometry; a reference that names a file missing from the store gets a
    /// warning. If the whole scan finds no structural reference, that is
    /// also a warning, not an error: the run still succeeds with whatever
    /// was accumulated.
    pub fn parse_main_file(&self, content: &str, geometry: &mut GeometryResult) -> bool {
        let mut found_structural = false;

        for line in content.lines() {
            let trimmed = line.trim();
            if constants::is_skippable_line(trimmed) {
                continue;
            }

            if is_structural_reference(line) {
                let referenced = value_reader::read_str(line);
                match referenced.as_deref().and_then(|name| self.store.resolve(name)) {
                    Some(structural_content) => {
                        found_structural = true;
                        self.parse_structural_file(structural_content, geometry);
                    }
                    None => {
                        if let Some(name) = referenced {
                            geometry.push_warning(format!("EDFile '{}' not found", name));
                        }
                    }
                }
            } else if is_aerodynamic_reference(line) {
                let referenced = value_reader::read_str(line);
                if let Some(aero_content) =
                    referenced.as_deref().and_then(|name| self.store.resolve(name))
                {
                    self.parse_aerodynamic_file(aero_content, geometry);
                }
            }
        }

        if !found_structural {
            geometry.push_warning("No ElastoDyn file reference found or file not uploaded");
        }

        geometry.push_file_read(labels::MAIN_FILE);
        true
    }

    /// Parse the ElastoDyn structural file for scalar geometry
    ///
    /// Scans every line for the scalar keyword set; each hit writes the
    /// result of the tolerant read into its field, so a later duplicate
    /// keyword line overwrites an earlier one. Blade and tower table file
    /// references are resolved and parsed in place; an unresolved table
    /// reference is skipped without a diagnostic, unlike the main-file
    /// references. After the scan, hub height is derived from tower height
    /// plus the tower-to-shaft offset and reported through the warnings
    /// channel as an informational notice.
    pub fn parse_structural_file(&self, content: &str, geometry: &mut GeometryResult) -> bool {
        // Held locally until the end of the scan for the hub height derivation
        let mut tower_height: Option<f64> = None;
        let mut tower_to_shaft: Option<f64> = None;

        for line in content.lines() {
            let line = line.trim();

            if line.contains(keywords::NUM_BLADES) {
                geometry.config.num_blades = value_reader::read_i64(line);
            } else if line.contains(keywords::TIP_RADIUS) {
                if let Some(tip_radius) = value_reader::read_f64(line) {
                    geometry.config.rotor_diameter = Some(tip_radius * 2.0);
                    geometry.blades.length = Some(tip_radius);
                }
            } else if line.contains(keywords::HUB_RADIUS) {
                geometry.hub.radius = value_reader::read_f64(line);
            } else if line.contains(keywords::PRECONE) {
                geometry.blades.precone = value_reader::read_f64(line);
            } else if line.contains(keywords::OVERHANG) {
                geometry.hub.overhang = value_reader::read_f64(line);
            } else if line.contains(keywords::SHAFT_TILT) {
                geometry.hub.shaft_tilt = value_reader::read_f64(line);
            } else if line.contains(keywords::TOWER_HEIGHT)
                && !line.contains(keywords::TOWER_BASE_HEIGHT)
            {
                tower_height = value_reader::read_f64(line);
                if let Some(height) = tower_height {
                    geometry.tower.height = Some(height);
                }
            } else if line.contains(keywords::TOWER_BASE_HEIGHT) {
                if let Some(elevation) = value_reader::read_f64(line) {
                    geometry.tower.base_elevation = Some(elevation);
                }
            } else if line.contains(keywords::TOWER_TO_SHAFT) {
                tower_to_shaft = value_reader::read_f64(line);
            } else if line.contains(keywords::BLADE_FILE) {
                match value_reader::read_str(line)
                    .as_deref()
                    .and_then(|name| self.store.resolve(name))
                {
                    Some(blade_content) => {
                        tables::parse_blade_table(blade_content, geometry);
                    }
                    None => debug!("Blade file reference did not resolve: {}", line),
                }
            } else if line.contains(keywords::TOWER_FILE) {
                match value_reader::read_str(line)
                    .as_deref()
                    .and_then(|name| self.store.resolve(name))
                {
                    Some(tower_content) => {
                        tables::parse_tower_table(tower_content, geometry);
                    }
                    None => debug!("Tower file reference did not resolve: {}", line),
                }
            }
        }

        // Hub height: tower top plus the tower-to-shaft vertical offset
        if let Some(height) = tower_height {
            let offset = tower_to_shaft.unwrap_or(0.0);
            let hub_height = height + offset;
            geometry.config.hub_height = Some(hub_height);
            geometry.push_warning(format!(
                "Hub height calculated: {}m (TowerHt={} + Twr2Shft={})",
                hub_height, height, offset
            ));
        } else {
            warn!("No tower height found; hub height not derived");
        }

        geometry.push_file_read(labels::ELASTODYN);
        true
    }

    /// Record the aerodynamic file as read without extracting anything
    ///
    /// Airfoil geometry extraction is out of scope; this records the file in
    /// `filesRead` so the caller can tell the reference resolved.
    pub fn parse_aerodynamic_file(&self, _content: &str, geometry: &mut GeometryResult) -> bool {
        geometry.push_file_read(labels::AERODYN);
        true
    }
}
