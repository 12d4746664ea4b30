//! Linter report parsing.
//!
//! Linters following the `file:line:col: message` convention emit one
//! finding per line, with `#`-prefixed annotation lines (package headers
//! and the like) interleaved. This module reads such a stream and turns
//! it into an ordered sequence of [`Problem`] records:
//!
//! - [`ReportParser`] drives the stream line by line, tracking the
//!   1-based line number for error reporting.
//! - The tokenizer in `parser` splits each line into file name, position,
//!   and description.
//!
//! Parsing is strict: the first malformed line aborts the whole parse
//! with [`ReviewError::Parse`]. There is no recovery and no logging; the
//! caller owns all user-visible behavior.

mod parser;


use crate::error::{Result, ReviewError};
use std::io::BufRead;

/// Default extension marker, matching the `file.go:line:col: message`
/// convention of Go linters.
pub const DEFAULT_MARKER: &str = ".go";

/// Prefix of annotation lines in linter output. Such lines are skipped
/// without a parse attempt but still advance the line counter.
const COMMENT_PREFIX: char = '#';

/// Line and column within a file.
///
/// Column 0 means the report carried no column field. A report line with
/// no numeric fields at all parses to the zero position rather than
/// failing; see `parser::parse_position`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

/// One parsed linter finding.
///
/// Immutable once constructed; equality is structural. Discovery order in
/// the report stream is significant and preserved by every order-sensitive
/// consumer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Problem {
    /// File the finding refers to. Includes the extension marker and any
    /// directory prefix, exactly as written in the report.
    pub file_name: String,
    /// Free-text message, taken verbatim from the report line.
    pub description: String,
    pub position: Position,
}

/// How the stream parser treats a clean stream with zero problems.
///
/// The two front-ends of this tool historically disagreed here: one
/// returned an empty collection, the other a distinguished "no problems
/// found" error that its caller turned into a successful exit. Both
/// behaviors are deliberate, so the choice is an explicit policy rather
/// than a hardcoded default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EmptyPolicy {
    /// Zero problems is a benign empty result.
    #[default]
    Allow,
    /// Zero problems surfaces as [`ReviewError::NoProblemsFound`].
    Fail,
}

/// Streaming parser for line-oriented linter reports.
///
/// Configured with the extension marker that delimits file names from
/// trailing position digits, and with the empty-stream policy.
#[derive(Debug, Clone)]
pub struct ReportParser {
    marker: String,
    empty_policy: EmptyPolicy,
}

impl Default for ReportParser {
    fn default() -> Self {
        Self::new(DEFAULT_MARKER)
    }
}

impl ReportParser {
    /// Create a parser for reports whose file names end in `marker`.
    pub fn new(marker: impl Into<String>) -> Self {
        Self {
            marker: marker.into(),
            empty_policy: EmptyPolicy::default(),
        }
    }

    /// Select the empty-stream policy.
    pub fn empty_policy(mut self, policy: EmptyPolicy) -> Self {
        self.empty_policy = policy;
        self
    }

    /// Parse the whole stream into problems in discovery order.
    ///
    /// Reads line by line, single pass. Annotation lines (`#` prefix) are
    /// skipped; every line read, including blank and annotation lines,
    /// advances the 1-based line counter carried by parse errors. Stops at
    /// the first malformed line. Stream read failures surface verbatim as
    /// [`ReviewError::Io`], without a line number.
    pub fn problems<R: BufRead>(&self, reader: R) -> Result<Vec<Problem>> {
        let mut problems = Vec::new();

        for (index, line) in reader.lines().enumerate() {
            let line = line?;
            if line.starts_with(COMMENT_PREFIX) {
                continue;
            }

            let problem =
                parser::parse_line(&line, &self.marker).map_err(|source| ReviewError::Parse {
                    line_number: index + 1,
                    source,
                })?;
            problems.push(problem);
        }

        if problems.is_empty() && self.empty_policy == EmptyPolicy::Fail {
            return Err(ReviewError::NoProblemsFound);
        }
        Ok(problems)
    }
}
