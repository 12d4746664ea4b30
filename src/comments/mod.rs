//! Projection of problems into review comments.
//!
//! Two shapes are produced, matching the two ways review systems address
//! comments:
//!
//! - [`grouped_comments`]: file name -> ordered comments, for systems
//!   that anchor a comment to a file and line of a revision.
//! - [`positional_comments`]: a flat list anchored by diff position, for
//!   systems that anchor a comment within a patch.
//!
//! The projectors are pure: they emit plain records and leave wire-format
//! concerns to whatever publishes them.


use crate::diff::DiffLineIndex;
use crate::report::Problem;
use serde::Serialize;
use std::collections::BTreeMap;

/// A comment addressed by file line number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LineComment {
    pub line: usize,
    pub message: String,
}

/// A comment anchored within a patch by diff position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DiffComment {
    pub path: String,
    pub body: String,
    pub position: usize,
}

/// Group problems into per-file comments.
///
/// Discovery order is preserved within each file; the map itself is
/// keyed deterministically by file name.
pub fn grouped_comments(problems: &[Problem]) -> BTreeMap<String, Vec<LineComment>> {
    let mut comments: BTreeMap<String, Vec<LineComment>> = BTreeMap::new();
    for problem in problems {
        comments
            .entry(problem.file_name.clone())
            .or_default()
            .push(LineComment {
                line: problem.position.line,
                message: problem.description.clone(),
            });
    }
    comments
}

/// Attach problems to a patch, producing positional comments in
/// discovery order.
///
/// A problem whose (file, line) is absent from the index is dropped
/// silently: a finding on an unmodified line cannot be anchored to the
/// patch.
pub fn positional_comments(problems: &[Problem], index: &DiffLineIndex) -> Vec<DiffComment> {
    problems
        .iter()
        .filter_map(|problem| {
            index
                .position(&problem.file_name, problem.position.line)
                .map(|position| DiffComment {
                    path: problem.file_name.clone(),
                    body: problem.description.clone(),
                    position,
                })
        })
        .collect()
}
