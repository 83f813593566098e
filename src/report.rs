//! Report formatting and printing utilities.
//!
//! Separate from the scanning logic so keysweep can be used as a library
//! without printing side effects. Each issue is printed as one discrete
//! line that pipelines can parse:
//!
//! ```text
//! error: "app.unused"  unreferenced-key  (messages/en.json)
//! ```

use std::io::{self, Write};

use colored::Colorize;

use crate::issue::{Issue, Severity};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

/// Print issues to stdout, one line per issue plus a summary.
pub fn report(issues: &[Issue]) {
    report_to(issues, &mut io::stdout().lock());
}

/// Print issues to a custom writer. Useful for testing or redirecting
/// output. Issues are printed in the order given; callers sort them.
pub fn report_to<W: Write>(issues: &[Issue], writer: &mut W) {
    if issues.is_empty() {
        return;
    }

    for issue in issues {
        let severity = match issue.severity {
            Severity::Error => "error".bold().red(),
            Severity::Warning => "warning".bold().yellow(),
        };
        let _ = writeln!(
            writer,
            "{}: \"{}\"  {}  ({})",
            severity,
            issue.key,
            issue.rule.to_string().dimmed().cyan(),
            issue.dictionary.dimmed()
        );
    }

    let _ = writeln!(
        writer,
        "\n{} {}",
        FAILURE_MARK.red(),
        format!(
            "{} unreferenced {} found",
            issues.len(),
            if issues.len() == 1 { "key" } else { "keys" }
        )
        .red()
    );
}

/// Print a success message when every key is referenced.
pub fn print_success(files_scanned: usize, key_count: usize) {
    print_success_to(files_scanned, key_count, &mut io::stdout().lock());
}

/// Print a success message to a custom writer.
pub fn print_success_to<W: Write>(files_scanned: usize, key_count: usize, writer: &mut W) {
    let _ = writeln!(
        writer,
        "{} {}",
        SUCCESS_MARK.green(),
        format!(
            "Scanned {} {} - all {} {} referenced",
            files_scanned,
            if files_scanned == 1 { "file" } else { "files" },
            key_count,
            if key_count == 1 { "key is" } else { "keys are" }
        )
        .green()
    );
}

/// Print a warning about files that could not be read.
pub fn print_skipped_warning(count: usize, verbose: bool) {
    print_skipped_warning_to(count, verbose, &mut io::stderr().lock());
}

/// Print a skipped-files warning to a custom writer.
pub fn print_skipped_warning_to<W: Write>(count: usize, verbose: bool, writer: &mut W) {
    if count > 0 && !verbose {
        let _ = writeln!(
            writer,
            "{} {} file(s) could not be read (use {} for details)",
            "warning:".bold().yellow(),
            count,
            "-v".cyan()
        );
    }
}
