//! Data models for extracted turbine geometry
//!
//! This module contains the result record built up during one extraction run
//! and the per-station records parsed from blade and tower
//! distributed-property tables. Field names follow the wire format consumed
//! by the visualization front end, so everything serializes with camelCase
//! keys and absent optional scalars are omitted.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};

// =============================================================================
// Station Records
// =============================================================================

/// One row of the blade distributed-property table
///
/// Span fraction is nominally 0-1 along the blade but is not range-checked;
/// the table files this comes from occasionally carry values slightly past
/// the tip.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BladeStation {
    /// Normalized position along the blade (0 = root, 1 = tip)
    pub span_fraction: f64,

    /// Pitch axis location as a fraction of chord
    pub pitch_axis: f64,

    /// Structural twist in degrees
    pub twist: f64,
}

/// One row of the tower distributed-property table
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TowerStation {
    /// Normalized position along the tower (0 = base, 1 = top)
    pub height_fraction: f64,
}

impl TowerStation {
    /// Create a new tower station, rejecting height fractions outside [0, 1]
    pub fn new(height_fraction: f64) -> Result<Self> {
        if !(0.0..=1.0).contains(&height_fraction) {
            return Err(Error::data_validation(format!(
                "Invalid height fraction {}: must be between 0 and 1",
                height_fraction
            )));
        }
        Ok(Self { height_fraction })
    }
}

// =============================================================================
// Geometry Groups
// =============================================================================

/// Top-level rotor configuration scalars
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RotorConfig {
    /// Number of blades
    #[serde(skip_serializing_if = "Option::is_none")]
    pub num_blades: Option<i64>,

    /// Rotor diameter in meters (twice the blade tip radius)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rotor_diameter: Option<f64>,

    /// Hub height in meters, derived from tower height and the
    /// tower-to-shaft offset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hub_height: Option<f64>,
}

/// Blade geometry: overall length, precone, and the station table
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BladeGeometry {
    /// Blade length in meters (tip radius)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub length: Option<f64>,

    /// Precone angle in degrees
    #[serde(skip_serializing_if = "Option::is_none")]
    pub precone: Option<f64>,

    /// Per-station records in file order
    pub stations: Vec<BladeStation>,
}

/// Tower geometry: height, base elevation, and the station table
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TowerGeometry {
    /// Tower height in meters
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,

    /// Tower base elevation above ground in meters
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_elevation: Option<f64>,

    /// Per-station records in file order
    pub stations: Vec<TowerStation>,
}

/// Hub geometry scalars
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HubGeometry {
    /// Hub radius in meters
    #[serde(skip_serializing_if = "Option::is_none")]
    pub radius: Option<f64>,

    /// Rotor overhang in meters
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overhang: Option<f64>,

    /// Shaft tilt in degrees
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shaft_tilt: Option<f64>,
}

// =============================================================================
// Result Record
// =============================================================================

/// The single mutable result record built up over one extraction run
///
/// Every parsing stage receives this record and appends to it; scalar fields
/// hold the last value read for their keyword, station lists preserve file
/// order, and the three diagnostic channels are append-only for the lifetime
/// of the run. `warnings` deliberately blends soft failures with purely
/// informational notices (computed values, station counts); `errors` is
/// reserved for hard failures that force `success = false` at the top level.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeometryResult {
    /// Rotor configuration scalars
    pub config: RotorConfig,

    /// Blade geometry and stations
    pub blades: BladeGeometry,

    /// Tower geometry and stations
    pub tower: TowerGeometry,

    /// Hub geometry scalars
    pub hub: HubGeometry,

    /// Hard failures; any entry forces `success = false`
    pub errors: Vec<String>,

    /// Soft failures and informational notices; never affect success
    pub warnings: Vec<String>,

    /// Labels of files consumed, in order, duplicates possible
    pub files_read: Vec<String>,
}

impl GeometryResult {
    /// Create a fresh, empty result record for one extraction run
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a hard failure message
    pub fn push_error(&mut self, message: impl Into<String>) {
        self.errors.push(message.into());
    }

    /// Append a soft failure or informational message
    pub fn push_warning(&mut self, message: impl Into<String>) {
        self.warnings.push(message.into());
    }

    /// Record that a file was consumed
    pub fn push_file_read(&mut self, label: impl Into<String>) {
        self.files_read.push(label.into());
    }
}

/// The top-level output of one extraction run
///
/// Always carries the geometry record, complete or partial; `success` is
/// false when the main file was missing or a hard failure was recorded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Extraction {
    /// Whether the run completed without hard failures
    pub success: bool,

    /// The accumulated geometry record
    pub geometry: GeometryResult,
}

impl Extraction {
    /// Serialize to a compact JSON document
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Serialize to a pretty-printed JSON document
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
