//! CLI argument parsing for linereview.
//!
//! Uses clap derive macros for declarative argument definitions.
//! This module defines the command structure; actual implementations
//! are in the `commands` module.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Linereview: convert line-oriented linter reports into code review comments.
///
/// Reads `file:line:col: message` linter output from stdin and prints a
/// JSON comment payload on stdout for an external publisher to consume.
/// Diagnostics go to stderr; linereview itself performs no network I/O.
#[derive(Parser, Debug)]
#[command(name = "linereview")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands for linereview.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Convert a linter report into per-file review comments.
    ///
    /// Prints a JSON object mapping file names to ordered {line, message}
    /// comments, for review systems that address comments by file and
    /// line of a revision.
    Export(ExportArgs),

    /// Anchor a linter report to a patch.
    ///
    /// Parses the given unified diff and prints a JSON array of
    /// {path, body, position} comments, for review systems that address
    /// comments by position within a patch. Problems on lines not
    /// touched by the diff are dropped.
    Anchor(AnchorArgs),
}

/// Flags shared by every report-reading command.
#[derive(Parser, Debug)]
pub struct ReportArgs {
    /// Extension marker separating file names from position digits.
    #[arg(long, default_value = crate::report::DEFAULT_MARKER)]
    pub marker: String,

    /// Echo report lines to stderr while parsing.
    #[arg(long)]
    pub show: bool,

    /// Treat a report with zero problems as "no problems found" instead
    /// of an empty payload.
    #[arg(long)]
    pub empty_error: bool,
}

/// Arguments for the `export` command.
#[derive(Parser, Debug)]
pub struct ExportArgs {
    #[command(flatten)]
    pub report: ReportArgs,
}

/// Arguments for the `anchor` command.
#[derive(Parser, Debug)]
pub struct AnchorArgs {
    /// Path to the unified diff the comments should anchor to.
    #[arg(long)]
    pub diff: PathBuf,

    #[command(flatten)]
    pub report: ReportArgs,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
