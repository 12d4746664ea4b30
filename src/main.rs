//! Linereview: convert line-oriented linter reports into code review comments.
//!
//! This is the main entry point for the `linereview` CLI. It parses
//! arguments, dispatches to the appropriate command handler, and handles
//! errors with proper exit codes.

mod cli;
mod commands;
pub mod comments;
pub mod diff;
pub mod error;
pub mod exit_codes;
pub mod report;

use cli::Cli;
use error::ReviewError;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse_args();

    match commands::dispatch(cli.command) {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        // A clean report is worth a message but aborts nothing.
        Err(err @ ReviewError::NoProblemsFound) => {
            eprintln!("{}", err);
            ExitCode::from(err.exit_code() as u8)
        }
        Err(err) => {
            // Print user-actionable error message to stderr
            eprintln!("Error: {}", err);

            // Return appropriate exit code
            ExitCode::from(err.exit_code() as u8)
        }
    }
}
