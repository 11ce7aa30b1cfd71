//! Distributed-property table parsing
//!
//! Blade and tower property files carry a whitespace-delimited numeric table
//! introduced by a header line with a recognizable column-name token
//! (`BlFract` / `HtFract`). The two parsers share header detection and row
//! tokenization but terminate differently, and the difference matters:
//!
//! - The blade table has no terminator. A malformed row is skipped and
//!   parsing continues to end of input, because blade files often interleave
//!   airfoil annotations with the station rows.
//! - The tower table ends at the next `---` section separator, at the first
//!   row whose leading token fails to parse, or at the first height fraction
//!   outside [0, 1]. Rows after the table in these files are unrelated
//!   matrices whose first column also parses as a float, so the range check
//!   is the effective terminator.
//!
//! Both parsers fold their diagnostics into the warnings channel, station
//! counts included; a property table that fails to parse never fails the
//! extraction run.

use tracing::debug;

use crate::app::models::{BladeStation, GeometryResult, TowerStation};
use crate::constants::{
    self, BLADE_TABLE_HEADER_TOKEN, COMMENT_CHAR, SECTION_SEPARATOR, TOWER_TABLE_HEADER_TOKEN,
    labels,
};

/// Check whether a line is the table header for the given column token
fn is_table_header(line: &str, token: &str) -> bool {
    line.to_uppercase().contains(token)
}

/// Tokenize an in-table line into whitespace-delimited fields
///
/// Returns `None` for lines that carry no row data (blank, full comment,
/// section separator); a trailing `!` comment is stripped before splitting.
fn table_row_tokens(line: &str) -> Option<Vec<&str>> {
    if constants::is_skippable_line(line.trim()) {
        return None;
    }
    let data = match line.split_once(COMMENT_CHAR) {
        Some((before_comment, _)) => before_comment,
        None => line,
    };
    Some(data.split_whitespace().collect())
}

/// Parse the blade distributed-property table
///
/// Rows are `BlFract  PitchAxis  StrcTwst  ...`; only the first three
/// columns are kept. Malformed or short rows are skipped and parsing
/// continues to the end of the file. Stations are stored (and the count
/// reported) only when at least one row parsed.
pub fn parse_blade_table(content: &str, geometry: &mut GeometryResult) -> bool {
    let mut stations = Vec::new();
    let mut in_table = false;

    for line in content.lines() {
        if is_table_header(line, BLADE_TABLE_HEADER_TOKEN) {
            in_table = true;
            continue;
        }
        if !in_table {
            continue;
        }

        let Some(tokens) = table_row_tokens(line) else {
            continue;
        };
        if tokens.len() < 3 {
            continue;
        }

        // Skip the row on any parse failure; the table has no terminator
        let parsed = (
            tokens[0].parse::<f64>(),
            tokens[1].parse::<f64>(),
            tokens[2].parse::<f64>(),
        );
        if let (Ok(span_fraction), Ok(pitch_axis), Ok(twist)) = parsed {
            stations.push(BladeStation {
                span_fraction,
                pitch_axis,
                twist,
            });
        }
    }

    if !stations.is_empty() {
        let count = stations.len();
        debug!("Blade table produced {} stations", count);
        geometry.blades.stations = stations;
        geometry.push_file_read(labels::BLADE_PROPERTIES);
        geometry.push_warning(format!("Parsed {} blade stations", count));
    }

    true
}

/// Parse the tower distributed-property table
///
/// Rows are `HtFract  TMassDen  ...`; only the height fraction is kept.
/// Unlike the blade table, the first row whose leading token fails to parse
/// or whose height fraction falls outside [0, 1] ends the table immediately,
/// as does a `---` section separator.
pub fn parse_tower_table(content: &str, geometry: &mut GeometryResult) -> bool {
    let mut stations = Vec::new();
    let mut in_table = false;

    for line in content.lines() {
        if in_table && line.trim().starts_with(SECTION_SEPARATOR) {
            break;
        }
        if is_table_header(line, TOWER_TABLE_HEADER_TOKEN) {
            in_table = true;
            continue;
        }
        if !in_table {
            continue;
        }

        let Some(tokens) = table_row_tokens(line) else {
            continue;
        };
        let Some(first) = tokens.first() else {
            continue;
        };

        let Ok(height_fraction) = first.parse::<f64>() else {
            break;
        };
        match TowerStation::new(height_fraction) {
            Ok(station) => stations.push(station),
            // Out-of-range height fraction: past the end of the table
            Err(_) => break,
        }
    }

    if !stations.is_empty() {
        let count = stations.len();
        debug!("Tower table produced {} stations", count);
        geometry.tower.stations = stations;
        geometry.push_file_read(labels::TOWER_PROPERTIES);
        geometry.push_warning(format!("Parsed {} tower stations", count));
    }

    true
}
