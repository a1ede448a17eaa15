//! Display functions for command results

use super::formatters::{opener_row, report_lines};
use crate::commands::OpenerReport;
use colored::Colorize;
use std::io::{self, Write};

/// Write the report lines to `out`, uncolored
///
/// # Errors
///
/// Returns any error from writing to `out`.
pub fn write_opener_report<W: Write>(out: &mut W, report: &OpenerReport) -> io::Result<()> {
    for line in report_lines(report) {
        writeln!(out, "{line}")?;
    }
    Ok(())
}

/// Print the chosen openers to stdout
///
/// The report itself is plain text so it pipes cleanly. Only the optional
/// verbose breakdown is colored.
///
/// # Errors
///
/// Returns an error if stdout cannot be written.
pub fn print_opener_report(report: &OpenerReport, verbose: bool) -> io::Result<()> {
    {
        let mut stdout = io::stdout().lock();
        write_opener_report(&mut stdout, report)?;
        stdout.flush()?;
    }

    if verbose {
        print_breakdown(report);
    }
    Ok(())
}

fn print_breakdown(report: &OpenerReport) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Words loaded: {}   unique letters: {}",
        report.total_words.to_string().bright_yellow(),
        report.unique_words.to_string().bright_yellow()
    );
    println!("{}", "─".repeat(60).cyan());

    for (i, opener) in report.openers.iter().enumerate() {
        println!("{}", opener_row(i + 1, opener));
    }
}
