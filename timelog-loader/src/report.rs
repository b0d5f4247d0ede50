//! Console summaries
//!
//! Human-readable output printed after each file and at the end of the run.
//! Detailed per-row logging goes through `tracing`; this is the short
//! version for whoever ran the command.

use colored::*;
use std::path::Path;
use timelog_core::RunOutcome;

use crate::source::SourceError;

/// Prints `Success` or the enumerated failures of one file
pub fn print_file_summary(path: &Path, outcome: &RunOutcome) {
    println!("{}", path.display().to_string().bold());
    println!("  Rows:     {}", outcome.len());

    let summary = outcome.to_string();
    let mut lines = summary.lines();
    if let Some(status) = lines.next() {
        if outcome.is_success() {
            println!("  {}", status.green());
        } else {
            println!("  {}", status.red());
        }
    }
    for line in lines {
        println!("  {}", line);
    }
    println!();
}

/// Prints a file that could not be read at all
pub fn print_read_failure(path: &Path, err: &SourceError) {
    println!("{}", path.display().to_string().bold());
    println!("  {}", "Failures:".red());
    println!("    1. {}", err);
    println!();
}

/// Prints the final line of the run
pub fn print_run_summary(files: usize, failed_files: usize) {
    if failed_files == 0 {
        println!(
            "{}",
            format!("✓ Finished with success ({} file(s))", files)
                .green()
                .bold()
        );
    } else {
        println!(
            "{}",
            format!(
                "✗ Finished with errors ({} of {} file(s) failed)",
                failed_files, files
            )
            .red()
            .bold()
        );
    }
}
