//! Unified diff parsing for patch-anchored comments.
//!
//! Review systems that anchor comments within a patch do not address them
//! by file line number but by "position": the offset of a line within the
//! file's diff, counted from the file's first `@@` hunk header. The line
//! just below that header is position 1, and every following line of the
//! file's diff, later hunk headers and deleted lines included, consumes
//! the next position.
//!
//! This module parses unified diff text (`diff --git`, `---`/`+++` file
//! headers, `@@` hunk headers) into a [`DiffLineIndex`]: a lookup table
//! from (file name, new-side line number) to that position. The table is
//! built once per diff and read-only afterwards.

mod helpers;
mod parser;

#[cfg(test)]
mod tests;

pub use parser::parse_diff;

use std::collections::HashMap;

/// Lookup table from file name and new-side line number to diff position.
///
/// Absence of a file or line means that line is not part of the
/// reviewable diff: only lines present on the new side of a hunk (added
/// or context) are indexed, never deleted-only lines.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DiffLineIndex {
    files: HashMap<String, HashMap<usize, usize>>,
}

impl DiffLineIndex {
    /// Position for a new-side line, or `None` when the line is outside
    /// the diff.
    pub fn position(&self, file: &str, line: usize) -> Option<usize> {
        self.files.get(file)?.get(&line).copied()
    }

    /// True when the diff touched no indexable lines.
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    pub(super) fn insert(&mut self, file: &str, line: usize, position: usize) {
        self.files
            .entry(file.to_string())
            .or_default()
            .insert(line, position);
    }
}
