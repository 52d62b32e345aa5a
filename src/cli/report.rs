//! Report formatting and printing utilities.
//!
//! Diagnostics go to stderr so that rendered output on stdout stays clean.
//! Separate from core logic to allow varscout to be used as a library.

use std::io::{self, Write};

use colored::Colorize;

use super::commands::{CommandResult, CommandSummary};
use crate::{
    config::CONFIG_FILE_NAME,
    issues::{ParseErrorIssue, Severity},
};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

pub fn print(result: &CommandResult, verbose: bool) {
    print_to(result, verbose, &mut io::stderr().lock());
}

pub fn print_to<W: Write>(result: &CommandResult, verbose: bool, writer: &mut W) {
    match &result.summary {
        CommandSummary::Scan(summary) => {
            print_parse_errors_to(&result.parse_errors, verbose, writer);
            let target = match &summary.output {
                Some(path) => format!(" (written to {})", path.display()),
                None => String::new(),
            };
            print_found_to(result, summary.record_count, &target, writer);
        }
        // Announced before the server started.
        CommandSummary::Serve(_) => {}
        CommandSummary::Init(summary) => {
            if summary.created {
                let _ = writeln!(
                    writer,
                    "{} {}",
                    SUCCESS_MARK.green(),
                    format!("Created {}", CONFIG_FILE_NAME).green()
                );
            }
        }
    }
}

/// Print the scan summary and listening address of `serve`.
pub fn print_serve_banner(result: &CommandResult, verbose: bool) {
    print_serve_banner_to(result, verbose, &mut io::stderr().lock());
}

fn print_serve_banner_to<W: Write>(result: &CommandResult, verbose: bool, writer: &mut W) {
    let CommandSummary::Serve(summary) = &result.summary else {
        return;
    };

    print_parse_errors_to(&result.parse_errors, verbose, writer);
    print_found_to(result, summary.record_count, "", writer);
    let _ = writeln!(
        writer,
        "{} {}",
        "Serving documentation on".cyan(),
        format!("http://{}", summary.address).cyan().bold()
    );
}

/// Print files that could not be parsed.
///
/// Each failure is listed in verbose mode, otherwise only the count.
pub fn print_parse_errors_to<W: Write>(
    issues: &[ParseErrorIssue],
    verbose: bool,
    writer: &mut W,
) {
    if issues.is_empty() {
        return;
    }

    if !verbose {
        let _ = writeln!(
            writer,
            "{} {} file(s) could not be parsed (use {} for details)",
            "warning:".bold().yellow(),
            issues.len(),
            "-v".cyan()
        );
        return;
    }

    let severity = ParseErrorIssue::severity();
    let label = match severity {
        Severity::Warning => format!("{}:", severity).bold().yellow(),
    };
    for issue in issues {
        let _ = writeln!(writer, "{} {}", label, issue.error);
        let _ = writeln!(writer, "  {} {}", "-->".blue(), issue.location());
    }
}

fn print_found_to<W: Write>(
    result: &CommandResult,
    record_count: usize,
    suffix: &str,
    writer: &mut W,
) {
    let files = result.files_scanned;
    let message = format!(
        "Found {} {} in {} {}{}",
        record_count,
        if record_count == 1 { "variable" } else { "variables" },
        files,
        if files == 1 { "file" } else { "files" },
        suffix
    );

    if result.parse_errors.is_empty() {
        let _ = writeln!(writer, "{} {}", SUCCESS_MARK.green(), message.green());
    } else {
        let _ = writeln!(writer, "{} {}", FAILURE_MARK.red(), message);
    }
}

// ============================================================
// Tests
// ============================================================
