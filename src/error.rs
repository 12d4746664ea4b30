//! Error types for the linereview CLI.
//!
//! Uses thiserror for derive macros and provides user-actionable error messages.

use crate::exit_codes;
use thiserror::Error;

/// Causes for a single report line failing to tokenize.
///
/// These always travel inside [`ReviewError::Parse`], which adds the
/// 1-based line number of the offending input line.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LineError {
    /// The line has no space separating location from description.
    #[error("failed to split line to location and description")]
    SplitLine,

    /// The location token does not contain the extension marker.
    #[error("failed split location to filename and position")]
    SplitLocation,

    /// The line-number field is not a non-negative integer.
    #[error("expected line number but got: {0}")]
    LineNumber(String),

    /// The column-number field is not a non-negative integer.
    #[error("expected column number but got: {0}")]
    ColumnNumber(String),
}

/// Main error type for linereview operations.
///
/// Each variant maps to a specific exit code; the mapping is the only
/// place where user-visible exit behavior is decided.
#[derive(Error, Debug)]
pub enum ReviewError {
    /// A report line could not be tokenized.
    #[error("could not parse line: {line_number}, {source}")]
    Parse {
        /// 1-based line number in the report stream. Counts every line
        /// read, including blank and comment lines.
        line_number: usize,
        source: LineError,
    },

    /// The report stream parsed cleanly but produced zero problems.
    ///
    /// Only raised under [`EmptyPolicy::Fail`](crate::report::EmptyPolicy);
    /// callers decide whether this aborts or counts as a benign no-op.
    #[error("no problems found")]
    NoProblemsFound,

    /// The unified diff text could not be parsed into hunks.
    #[error("malformed diff: {0}")]
    Diff(String),

    /// Reading the report stream failed. Surfaced verbatim, with no line
    /// number attached.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// The output payload could not be encoded as JSON.
    #[error("failed to encode payload: {0}")]
    Encode(#[from] serde_json::Error),

    /// User provided invalid arguments or an unreadable input file.
    #[error("{0}")]
    UserError(String),
}

impl ReviewError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            ReviewError::Parse { .. } => exit_codes::PARSE_FAILURE,
            // A clean report aborts publishing but is not a failure.
            ReviewError::NoProblemsFound => exit_codes::SUCCESS,
            ReviewError::Diff(_) => exit_codes::DIFF_FAILURE,
            ReviewError::Io(_) => exit_codes::USER_ERROR,
            ReviewError::Encode(_) => exit_codes::USER_ERROR,
            ReviewError::UserError(_) => exit_codes::USER_ERROR,
        }
    }
}

/// Result type alias for linereview operations.
pub type Result<T> = std::result::Result<T, ReviewError>;
