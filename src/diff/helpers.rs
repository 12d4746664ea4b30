//! Helper functions for diff parsing.

use regex::Regex;
use std::sync::LazyLock;

/// Hunk header shape: `@@ -old_start[,old_len] +new_start[,new_len] @@`,
/// optionally followed by section context.
static HUNK_HEADER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^@@ -\d+(?:,(\d+))? \+(\d+)(?:,(\d+))? @@").expect("Invalid hunk header regex")
});

/// Parsed `@@` hunk header fields needed for position mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) struct HunkHeader {
    /// First line number of the hunk on the new side.
    pub new_start: usize,
    /// Old-side line count; an omitted length means 1.
    pub old_lines: usize,
    /// New-side line count; an omitted length means 1.
    pub new_lines: usize,
}

/// Parse a hunk header, or `None` when the line is not a well-formed
/// header.
pub(super) fn parse_hunk_header(line: &str) -> Option<HunkHeader> {
    let caps = HUNK_HEADER.captures(line)?;
    let old_lines = match caps.get(1) {
        Some(len) => len.as_str().parse().ok()?,
        None => 1,
    };
    let new_start = caps[2].parse().ok()?;
    let new_lines = match caps.get(3) {
        Some(len) => len.as_str().parse().ok()?,
        None => 1,
    };
    Some(HunkHeader {
        new_start,
        old_lines,
        new_lines,
    })
}

/// Parse the new-side file path from the rest of a `diff --git` line.
///
/// The format is `a/<path> b/<path>`. Paths may contain spaces, so the
/// split looks for the last ` b/` occurrence rather than whitespace.
pub(super) fn parse_diff_git_line(rest: &str) -> Option<String> {
    let b_pos = rest.rfind(" b/")?;
    Some(normalize_path(&rest[b_pos + 3..]))
}

/// Normalize a file path to forward slashes so index lookups behave the
/// same regardless of the platform that produced the diff.
pub(super) fn normalize_path(path: &str) -> String {
    path.replace('\\', "/")
}
