//! Application constants for the OpenFAST geometry extractor
//!
//! This module contains the keyword vocabulary, table header tokens,
//! file labels, and default values used throughout the extraction pipeline.

// =============================================================================
// File Selection and Labels
// =============================================================================

/// Extension identifying the main (top-level) input file in a bundle
pub const MAIN_FILE_EXTENSION: &str = ".fst";

/// Labels recorded in `filesRead` as each file kind is consumed
pub mod labels {
    /// Main configuration file
    pub const MAIN_FILE: &str = "main.fst";

    /// ElastoDyn structural file
    pub const ELASTODYN: &str = "ElastoDyn";

    /// AeroDyn aerodynamic file
    pub const AERODYN: &str = "AeroDyn";

    /// Blade distributed-property table file
    pub const BLADE_PROPERTIES: &str = "Blade properties";

    /// Tower distributed-property table file
    pub const TOWER_PROPERTIES: &str = "Tower properties";
}

// =============================================================================
// Cross-File Reference Keywords
// =============================================================================

/// Phrases identifying the structural (ElastoDyn) file reference line.
///
/// Matching is substring-based anywhere in the line, value region or
/// comment region, so keyword text inside a comment also matches.
pub const STRUCTURAL_FILE_KEYWORDS: &[&str] = &["EDFile", "ElastoDyn input file"];

/// Phrases identifying the aerodynamic (AeroDyn) file reference line
pub const AERODYNAMIC_FILE_KEYWORDS: &[&str] = &["AeroFile", "AeroDyn input file"];

// =============================================================================
// Structural File Scalar Keywords
// =============================================================================

/// Scalar geometry keywords scanned for in the ElastoDyn file
pub mod keywords {
    /// Number of blades
    pub const NUM_BLADES: &str = "NumBl";

    /// Blade tip radius (rotor radius)
    pub const TIP_RADIUS: &str = "TipRad";

    /// Hub radius
    pub const HUB_RADIUS: &str = "HubRad";

    /// Blade precone angle
    pub const PRECONE: &str = "PreCone";

    /// Rotor overhang
    pub const OVERHANG: &str = "OverHang";

    /// Shaft tilt angle
    pub const SHAFT_TILT: &str = "ShftTilt";

    /// Tower height. `TowerBsHt` contains this keyword as a substring, so a
    /// line only counts as tower height when the longer keyword is absent.
    pub const TOWER_HEIGHT: &str = "TowerHt";

    /// Tower base elevation above ground
    pub const TOWER_BASE_HEIGHT: &str = "TowerBsHt";

    /// Vertical distance from tower top to rotor shaft
    pub const TOWER_TO_SHAFT: &str = "Twr2Shft";

    /// Blade distributed-property file reference
    pub const BLADE_FILE: &str = "BldFile";

    /// Tower distributed-property file reference
    pub const TOWER_FILE: &str = "TwrFile";
}

// =============================================================================
// Distributed-Property Table Headers
// =============================================================================

/// Span-fraction column header token that opens the blade table
/// (matched against the upper-cased line)
pub const BLADE_TABLE_HEADER_TOKEN: &str = "BLFRACT";

/// Height-fraction column header token that opens the tower table
pub const TOWER_TABLE_HEADER_TOKEN: &str = "HTFRACT";

// =============================================================================
// Line Grammar
// =============================================================================

/// Character introducing a full-line or trailing comment
pub const COMMENT_CHAR: char = '!';

/// Prefix of section separator lines
pub const SECTION_SEPARATOR: &str = "---";

/// Values accepted as boolean true by the line-value reader
/// (case-insensitive)
pub const TRUE_VALUES: &[&str] = &["true", "t", "yes", "1"];

// =============================================================================
// Helper Functions
// =============================================================================

/// Check if a stored file name identifies the main input file
pub fn is_main_file(name: &str) -> bool {
    name.ends_with(MAIN_FILE_EXTENSION)
}

/// Check if a trimmed line is blank or a full comment/separator line
pub fn is_skippable_line(trimmed: &str) -> bool {
    trimmed.is_empty() || trimmed.starts_with(COMMENT_CHAR) || trimmed.starts_with(SECTION_SEPARATOR)
}
