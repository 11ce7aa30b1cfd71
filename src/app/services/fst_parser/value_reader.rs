//! Tolerant single-line value extraction
//!
//! OpenFAST input lines put the value first and the keyword/description
//! after, e.g. `3  NumBl  - Number of blades (-)` or
//! `"Blade.dat"  BldFile  - Name of blade properties file`. The readers here
//! take the text before the first `!` or `-` delimiter, pull its first
//! whitespace-delimited token, strip one layer of surrounding quotes, and
//! coerce to the requested type. Any failure yields `None`; nothing in this
//! module panics or returns an error.
//!
//! Known limitation, inherited from the files this was built against: the
//! `-` delimiter also matches the leading sign of a negative value, so a
//! line valued `-5.0` reads back as `None` and `5.0 ! comment` style lines
//! with embedded dashes lose everything after the dash. See DESIGN.md.

use regex::Regex;
use std::sync::OnceLock;

use crate::constants::TRUE_VALUES;

static DELIMITERS: OnceLock<Regex> = OnceLock::new();

/// The value field ends at the first `!` or `-`, whichever comes first
fn delimiters() -> &'static Regex {
    DELIMITERS.get_or_init(|| Regex::new(r"[!\-]").expect("delimiter pattern is valid"))
}

/// Extract the raw value token from a line, quotes stripped
///
/// Returns `None` when the region before the first delimiter is empty or
/// contains no token.
pub fn first_token(line: &str) -> Option<String> {
    let trimmed = line.trim();
    let field = delimiters().split(trimmed).next().unwrap_or("");
    let token = field.split_whitespace().next()?;
    Some(strip_quotes(token).to_string())
}

/// Read a string value from a keyword/value line
pub fn read_str(line: &str) -> Option<String> {
    first_token(line)
}

/// Read an integer value from a keyword/value line
pub fn read_i64(line: &str) -> Option<i64> {
    first_token(line)?.parse().ok()
}

/// Read a float value from a keyword/value line
pub fn read_f64(line: &str) -> Option<f64> {
    first_token(line)?.parse().ok()
}

/// Read a boolean value from a keyword/value line
///
/// True iff the token is one of the accepted truthy spellings
/// (case-insensitive); any other token reads as false.
pub fn read_bool(line: &str) -> Option<bool> {
    let token = first_token(line)?.to_lowercase();
    Some(TRUE_VALUES.contains(&token.as_str()))
}

/// Strip one layer of surrounding `"` quotes, then one layer of `'` quotes
fn strip_quotes(token: &str) -> &str {
    let token = token
        .strip_prefix('"')
        .and_then(|t| t.strip_suffix('"'))
        .unwrap_or(token);
    token
        .strip_prefix('\'')
        .and_then(|t| t.strip_suffix('\''))
        .unwrap_or(token)
}
