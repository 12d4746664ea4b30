//! Exit code constants for the linereview CLI.
//!
//! - 0: Success (including a report with zero problems)
//! - 1: User error (bad args, unreadable input, encoding failure)
//! - 2: Report parse failure (malformed linter line)
//! - 3: Diff parse failure (malformed unified diff)

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: bad arguments, unreadable input, or payload encoding failure.
pub const USER_ERROR: i32 = 1;

/// Report parse failure: a linter report line could not be tokenized.
pub const PARSE_FAILURE: i32 = 2;

/// Diff parse failure: the unified diff text could not be parsed into hunks.
pub const DIFF_FAILURE: i32 = 3;
