//! Command implementations for linereview.
//!
//! This module provides the dispatcher that routes CLI commands to their
//! implementations. Each command reads the linter report from stdin,
//! runs the parsing core, and prints a JSON payload on stdout. The
//! payload-building functions are pure over their inputs so they can be
//! tested without a live stdin.


use crate::cli::{AnchorArgs, Command, ExportArgs, ReportArgs};
use crate::comments::{grouped_comments, positional_comments};
use crate::diff::parse_diff;
use crate::error::{Result, ReviewError};
use crate::report::{EmptyPolicy, Problem, ReportParser};
use std::fs;
use std::io::{self, BufRead, BufReader, Read, Write};
use std::path::Path;

/// Dispatch a command to its implementation.
pub fn dispatch(command: Command) -> Result<()> {
    match command {
        Command::Export(args) => cmd_export(args),
        Command::Anchor(args) => cmd_anchor(args),
    }
}

fn cmd_export(args: ExportArgs) -> Result<()> {
    let payload = export_payload(&args.report, io::stdin().lock())?;
    println!("{payload}");
    Ok(())
}

fn cmd_anchor(args: AnchorArgs) -> Result<()> {
    let diff = load_diff(&args.diff)?;
    let payload = anchor_payload(&args.report, &diff, io::stdin().lock())?;
    println!("{payload}");
    Ok(())
}

/// Build the grouped-by-file JSON payload from a report stream.
fn export_payload(args: &ReportArgs, input: impl BufRead) -> Result<String> {
    let problems = read_problems(args, input)?;
    let comments = grouped_comments(&problems);
    Ok(serde_json::to_string_pretty(&comments)?)
}

/// Build the patch-anchored JSON payload from a diff and a report stream.
///
/// The diff is parsed up front; a malformed diff aborts before any
/// report line is consumed.
fn anchor_payload(args: &ReportArgs, diff: &str, input: impl BufRead) -> Result<String> {
    let index = parse_diff(diff)?;
    let problems = read_problems(args, input)?;
    let comments = positional_comments(&problems, &index);
    Ok(serde_json::to_string_pretty(&comments)?)
}

/// Read the diff file for the `anchor` command.
fn load_diff(path: &Path) -> Result<String> {
    fs::read_to_string(path)
        .map_err(|err| ReviewError::UserError(format!("failed to read diff {}: {err}", path.display())))
}

fn read_problems(args: &ReportArgs, input: impl BufRead) -> Result<Vec<Problem>> {
    let policy = if args.empty_error {
        EmptyPolicy::Fail
    } else {
        EmptyPolicy::Allow
    };
    let parser = ReportParser::new(args.marker.as_str()).empty_policy(policy);

    if args.show {
        parser.problems(BufReader::new(TeeReader {
            inner: input,
            echo: io::stderr(),
        }))
    } else {
        parser.problems(input)
    }
}

/// Mirrors every byte read from the report stream into `echo`, so
/// `--show` interleaves with parsing and never buffers the whole report.
struct TeeReader<R, W> {
    inner: R,
    echo: W,
}

impl<R: Read, W: Write> Read for TeeReader<R, W> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let read = self.inner.read(buf)?;
        self.echo.write_all(&buf[..read])?;
        Ok(read)
    }
}
