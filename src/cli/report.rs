//! Report formatting and printing utilities.
//!
//! Issues are grouped under a `[locale]` header, one indented line per
//! issue followed by its location. Separate from core logic to allow
//! transcheck to be used as a library.

use std::io::{self, Write};

use colored::Colorize;

use super::commands::{CheckSummary, CommandResult, CommandSummary, InitSummary, LocaleIssues};
use crate::config::CONFIG_FILE_NAME;
use crate::issues::Report;

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

/// Print the outcome of a command: issues to stderr, success notes to stdout.
pub fn print(result: &CommandResult, verbose: bool) {
    match &result.summary {
        CommandSummary::Check(summary) => {
            if result.issues.is_empty() {
                print_success_to(summary, verbose, &mut io::stdout().lock());
            } else {
                report_to(&result.issues, &mut io::stderr().lock());
            }
        }
        CommandSummary::Init(summary) => print_init(summary),
    }
}

/// Print issues grouped by locale to a custom writer.
///
/// Useful for testing or redirecting output.
pub fn report_to<W: Write>(issues: &LocaleIssues, writer: &mut W) {
    if issues.values().all(Vec::is_empty) {
        return;
    }

    for (locale, locale_issues) in issues {
        if locale_issues.is_empty() {
            continue;
        }

        let _ = writeln!(writer, "{}", format!("[{}]", locale).bold());
        for issue in locale_issues {
            let ctx = issue.context();
            let _ = writeln!(writer, "    {}", issue.message());
            let _ = writeln!(
                writer,
                "      {} {}:{} {}",
                "-->".blue(),
                ctx.file_path(),
                ctx.line(),
                format!("({})", issue.report_rule()).dimmed().cyan()
            );
        }
    }

    print_summary(issues, writer);
}

/// Print a success message to a custom writer.
pub fn print_success_to<W: Write>(summary: &CheckSummary, verbose: bool, writer: &mut W) {
    let files = summary.locale_files_checked;
    let mut msg = format!(
        "Checked {} locale {} - no issues found",
        files,
        if files == 1 { "file" } else { "files" }
    );
    if verbose {
        msg.push_str(&format!(" (reference: {})", summary.reference_locale));
    }
    let _ = writeln!(writer, "{} {}", SUCCESS_MARK.green(), msg.green());
}

fn print_init(summary: &InitSummary) {
    if summary.created {
        println!(
            "{} {}",
            SUCCESS_MARK.green(),
            format!("Created {}", CONFIG_FILE_NAME).green()
        );
    } else {
        eprintln!(
            "{} {} already exists",
            "error:".bold().red(),
            CONFIG_FILE_NAME
        );
    }
}

fn print_summary<W: Write>(issues: &LocaleIssues, writer: &mut W) {
    let total_problems: usize = issues.values().map(Vec::len).sum();
    let total_locales = issues.values().filter(|v| !v.is_empty()).count();

    let _ = writeln!(
        writer,
        "\n{} {} {} in {} {}",
        FAILURE_MARK.red(),
        total_problems,
        if total_problems == 1 {
            "problem"
        } else {
            "problems"
        }
        .red(),
        total_locales,
        if total_locales == 1 {
            "locale"
        } else {
            "locales"
        }
    );
}
