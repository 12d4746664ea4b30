//! Tokenizer for single report lines.
//!
//! One report line has the shape `<location> <description>` where
//! `<location>` is `<filename><marker><line>[:<column>][:<extra>]*`.
//! File names may legally contain the marker as a substring
//! (`some.go/file.go:1`), so the location is split on the marker's last
//! occurrence, not its first.

use super::{Position, Problem};
use crate::error::LineError;

/// Tokenize one report line into a [`Problem`].
pub(super) fn parse_line(line: &str, marker: &str) -> Result<Problem, LineError> {
    let (location, description) = line.split_once(' ').ok_or(LineError::SplitLine)?;

    let marker_end = location.rfind(marker).ok_or(LineError::SplitLocation)? + marker.len();
    let (file_name, fragment) = location.split_at(marker_end);

    Ok(Problem {
        file_name: file_name.to_string(),
        description: description.to_string(),
        position: parse_position(fragment)?,
    })
}

/// Parse the position fragment left after the file name is removed.
///
/// The fragment is split on `:`, skipping empty fields. Only the leading
/// two fields are meaningful (line, then column); trailing tool-specific
/// fields are ignored. One field means line only, column 0. No fields at
/// all yields the zero position rather than an error, so a report line
/// with a file name but no digits still parses.
pub(super) fn parse_position(fragment: &str) -> Result<Position, LineError> {
    let mut fields = fragment.split(':').filter(|f| !f.is_empty());

    let line = match fields.next() {
        Some(text) => text
            .parse()
            .map_err(|_| LineError::LineNumber(text.to_string()))?,
        None => return Ok(Position::default()),
    };

    let column = match fields.next() {
        Some(text) => text
            .parse()
            .map_err(|_| LineError::ColumnNumber(text.to_string()))?,
        None => 0,
    };

    Ok(Position { line, column })
}
