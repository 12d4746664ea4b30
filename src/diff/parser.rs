//! Core diff parsing logic.

use crate::error::{Result, ReviewError};

use super::DiffLineIndex;
use super::helpers::{normalize_path, parse_diff_git_line, parse_hunk_header};

/// Parse unified diff text into a [`DiffLineIndex`].
///
/// Walks the diff a line at a time, tracking the current file, the
/// new-side line number within it, and the running position offset
/// counted from the file's first hunk header. Every new-side line
/// (added or context) is recorded; deleted lines and later hunk headers
/// consume a position but are not recorded.
///
/// Hunk content is consumed against the old/new line counts declared in
/// the `@@` header, so content that happens to look like a file header
/// (a deleted line rendered `--- old comment`, an added line rendered
/// `+++ more pluses`) is still counted as content. Header matching only
/// applies between hunks.
///
/// A hunk header that does not match `@@ -a[,b] +c[,d] @@` aborts the
/// whole mapping with [`ReviewError::Diff`]; a partial index is never
/// returned.
pub fn parse_diff(diff: &str) -> Result<DiffLineIndex> {
    let mut index = DiffLineIndex::default();
    let mut current_file: Option<String> = None;
    // Position of the most recently consumed line, counted from the
    // current file's first hunk header.
    let mut position: usize = 0;
    let mut in_hunk = false;
    // Line number in the new file for the next new-side line.
    let mut new_line: usize = 0;
    // Old-side and new-side lines still owed by the current hunk.
    let mut old_remaining: usize = 0;
    let mut new_remaining: usize = 0;

    for line in diff.lines() {
        // While the current hunk still owes lines, everything is hunk
        // content, whatever prefix it carries beyond the first byte.
        if in_hunk && (old_remaining > 0 || new_remaining > 0) {
            if line.starts_with('+') {
                position += 1;
                if let Some(file) = current_file.as_deref() {
                    index.insert(file, new_line, position);
                }
                new_line += 1;
                new_remaining = new_remaining.saturating_sub(1);
            } else if line.starts_with('-') {
                // Deleted line: consumes a position, never indexed.
                position += 1;
                old_remaining = old_remaining.saturating_sub(1);
            } else if line.starts_with('\\') {
                // "\ No newline at end of file"; not a counted line.
                position += 1;
            } else {
                // Context line, present on both sides.
                position += 1;
                if let Some(file) = current_file.as_deref() {
                    index.insert(file, new_line, position);
                }
                new_line += 1;
                old_remaining = old_remaining.saturating_sub(1);
                new_remaining = new_remaining.saturating_sub(1);
            }
            continue;
        }

        // Trailing no-newline marker after the hunk's counted lines.
        if in_hunk && line.starts_with('\\') {
            position += 1;
            continue;
        }

        // File header: "diff --git a/path b/path".
        if let Some(rest) = line.strip_prefix("diff --git ") {
            current_file = parse_diff_git_line(rest);
            position = 0;
            in_hunk = false;
            continue;
        }

        // Old-side file header.
        if line.starts_with("--- ") {
            continue;
        }

        // New-side file header: "+++ b/path" or "+++ /dev/null".
        if let Some(rest) = line.strip_prefix("+++ ") {
            if rest == "/dev/null" {
                // File was deleted; nothing on the new side to index.
                current_file = None;
            } else if let Some(path) = rest.strip_prefix("b/") {
                current_file = Some(normalize_path(path));
            } else {
                current_file = Some(normalize_path(rest));
            }
            position = 0;
            in_hunk = false;
            continue;
        }

        // Hunk header: "@@ -old_start,old_len +new_start,new_len @@".
        if line.starts_with("@@") {
            let header = parse_hunk_header(line)
                .ok_or_else(|| ReviewError::Diff(format!("invalid hunk header: {line}")))?;
            if in_hunk {
                // Later headers of the same file consume a position.
                position += 1;
            }
            in_hunk = true;
            new_line = header.new_start;
            old_remaining = header.old_lines;
            new_remaining = header.new_lines;
            continue;
        }
    }

    Ok(index)
}
