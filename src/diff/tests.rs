//! Tests for diff parsing.

use super::helpers::{HunkHeader, normalize_path, parse_diff_git_line, parse_hunk_header};
use super::parse_diff;
use crate::error::ReviewError;

/// Test a single mixed hunk: context and added lines are indexed with
/// positions counted from the hunk header, deleted lines consume a
/// position but are not indexed.
#[test]
fn test_parse_mixed_hunk_positions() {
    let diff = r#"diff --git a/src/lib.rs b/src/lib.rs
index abc1234..def5678 100644
--- a/src/lib.rs
+++ b/src/lib.rs
@@ -1,3 +1,4 @@
 fn one() {}
-fn two() {}
+fn two(x: u32) {}
+fn three() {}
 fn four() {}
"#;

    let index = parse_diff(diff).unwrap();

    assert_eq!(index.position("src/lib.rs", 1), Some(1));
    assert_eq!(index.position("src/lib.rs", 2), Some(3));
    assert_eq!(index.position("src/lib.rs", 3), Some(4));
    assert_eq!(index.position("src/lib.rs", 4), Some(5));
    // Line 5 is beyond the hunk's new range.
    assert_eq!(index.position("src/lib.rs", 5), None);
}

/// Test that the line just below the first hunk header is position 1.
#[test]
fn test_first_line_below_header_is_position_one() {
    let diff = r#"diff --git a/src/new_file.rs b/src/new_file.rs
new file mode 100644
index 0000000..abc1234
--- /dev/null
+++ b/src/new_file.rs
@@ -0,0 +1,2 @@
+//! New module
+pub fn hello() {}
"#;

    let index = parse_diff(diff).unwrap();

    assert_eq!(index.position("src/new_file.rs", 1), Some(1));
    assert_eq!(index.position("src/new_file.rs", 2), Some(2));
}

/// Test that later hunk headers of the same file consume a position.
#[test]
fn test_later_hunk_headers_consume_a_position() {
    let diff = r#"diff --git a/src/main.rs b/src/main.rs
index abc1234..def5678 100644
--- a/src/main.rs
+++ b/src/main.rs
@@ -1,1 +1,2 @@
 fn main() {}
+fn extra() {}
@@ -10,1 +11,2 @@
 fn tail() {}
+fn more() {}
"#;

    let index = parse_diff(diff).unwrap();

    assert_eq!(index.position("src/main.rs", 1), Some(1));
    assert_eq!(index.position("src/main.rs", 2), Some(2));
    // The second "@@" line occupies position 3.
    assert_eq!(index.position("src/main.rs", 11), Some(4));
    assert_eq!(index.position("src/main.rs", 12), Some(5));
}

/// Test that the position counter restarts for each file.
#[test]
fn test_position_counter_restarts_per_file() {
    let diff = r#"diff --git a/a.rs b/a.rs
index abc1234..def5678 100644
--- a/a.rs
+++ b/a.rs
@@ -1,0 +1,2 @@
+one
+two
diff --git a/b.rs b/b.rs
index abc1234..def5678 100644
--- a/b.rs
+++ b/b.rs
@@ -1,0 +1,1 @@
+one
"#;

    let index = parse_diff(diff).unwrap();

    assert_eq!(index.position("a.rs", 2), Some(2));
    assert_eq!(index.position("b.rs", 1), Some(1));
}

/// Test that a deletion-only hunk indexes nothing.
#[test]
fn test_deleted_lines_are_not_indexed() {
    let diff = r#"diff --git a/src/lib.rs b/src/lib.rs
index abc1234..def5678 100644
--- a/src/lib.rs
+++ b/src/lib.rs
@@ -5,2 +4,0 @@
-let x = 1;
-let y = 2;
"#;

    let index = parse_diff(diff).unwrap();

    assert!(index.is_empty());
    assert_eq!(index.position("src/lib.rs", 5), None);
}

/// Test that a file deleted to /dev/null is absent from the index.
#[test]
fn test_deleted_file_is_not_indexed() {
    let diff = r#"diff --git a/gone.rs b/gone.rs
deleted file mode 100644
index abc1234..0000000
--- a/gone.rs
+++ /dev/null
@@ -1,2 +0,0 @@
-fn gone() {}
-fn also_gone() {}
"#;

    let index = parse_diff(diff).unwrap();

    assert!(index.is_empty());
    assert_eq!(index.position("gone.rs", 1), None);
}

/// Test that a no-newline marker consumes a position without being
/// indexed.
#[test]
fn test_no_newline_marker_consumes_position() {
    let diff = r#"diff --git a/x.rs b/x.rs
index abc1234..def5678 100644
--- a/x.rs
+++ b/x.rs
@@ -1,2 +1,2 @@
 fn keep() {}
-fn old() {}
+fn new() {}
\ No newline at end of file
"#;

    let index = parse_diff(diff).unwrap();

    assert_eq!(index.position("x.rs", 1), Some(1));
    assert_eq!(index.position("x.rs", 2), Some(3));
    assert_eq!(index.position("x.rs", 3), None);
}

/// Test that a deleted line whose content begins with dashes is hunk
/// content consuming a position, not an old-side file header.
#[test]
fn test_deleted_line_rendered_as_dashes() {
    let diff = r#"diff --git a/notes.txt b/notes.txt
index abc1234..def5678 100644
--- a/notes.txt
+++ b/notes.txt
@@ -1,2 +1,2 @@
 kept line
--- old comment
+-- new comment
"#;

    let index = parse_diff(diff).unwrap();

    assert_eq!(index.position("notes.txt", 1), Some(1));
    // The dashed deleted line occupies position 2.
    assert_eq!(index.position("notes.txt", 2), Some(3));
}

/// Test that an added line whose content begins with pluses is indexed
/// as content and does not clobber the current file.
#[test]
fn test_added_line_rendered_as_pluses() {
    let diff = r#"diff --git a/p.txt b/p.txt
index abc1234..def5678 100644
--- a/p.txt
+++ b/p.txt
@@ -0,0 +1,3 @@
+one
++++ more pluses
+three
"#;

    let index = parse_diff(diff).unwrap();

    assert_eq!(index.position("p.txt", 1), Some(1));
    assert_eq!(index.position("p.txt", 2), Some(2));
    assert_eq!(index.position("p.txt", 3), Some(3));
    // The plused line must not be mistaken for a "+++" file header.
    assert_eq!(index.position("more pluses", 3), None);
}

/// Test that a malformed hunk header aborts the whole mapping.
#[test]
fn test_malformed_hunk_header_fails() {
    let diff = r#"diff --git a/x.rs b/x.rs
index abc1234..def5678 100644
--- a/x.rs
+++ b/x.rs
@@ nonsense @@
+fn broken() {}
"#;

    let err = parse_diff(diff).unwrap_err();

    match err {
        ReviewError::Diff(msg) => assert!(msg.contains("invalid hunk header")),
        other => panic!("expected diff error, got: {other}"),
    }
}

#[test]
fn test_empty_diff_yields_empty_index() {
    let index = parse_diff("").unwrap();
    assert!(index.is_empty());
}

#[test]
fn test_parse_hunk_header_variants() {
    assert_eq!(
        parse_hunk_header("@@ -10,0 +11,2 @@ fn context() {"),
        Some(HunkHeader {
            new_start: 11,
            old_lines: 0,
            new_lines: 2,
        })
    );
    // Omitted lengths mean a single line on that side.
    assert_eq!(
        parse_hunk_header("@@ -1 +1 @@"),
        Some(HunkHeader {
            new_start: 1,
            old_lines: 1,
            new_lines: 1,
        })
    );
    assert_eq!(
        parse_hunk_header("@@ -5,2 +5,3 @@"),
        Some(HunkHeader {
            new_start: 5,
            old_lines: 2,
            new_lines: 3,
        })
    );
    assert_eq!(parse_hunk_header("@@ nonsense @@"), None);
    assert_eq!(parse_hunk_header("@@ -1,2 +x,3 @@"), None);
}

#[test]
fn test_parse_diff_git_line_handles_spaces() {
    assert_eq!(
        parse_diff_git_line("a/src/lib.rs b/src/lib.rs"),
        Some("src/lib.rs".to_string())
    );
    assert_eq!(
        parse_diff_git_line("a/some file.txt b/some file.txt"),
        Some("some file.txt".to_string())
    );
    assert_eq!(parse_diff_git_line("no separator here"), None);
}

#[test]
fn test_normalize_path_converts_backslashes() {
    assert_eq!(normalize_path(r"src\lib.rs"), "src/lib.rs");
    assert_eq!(normalize_path("src/lib.rs"), "src/lib.rs");
}
