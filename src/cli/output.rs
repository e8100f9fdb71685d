//! Terminal output formatting with colors
//!
//! Respects NO_COLOR, CLICOLOR, CLICOLOR_FORCE automatically.

use std::io::Write;

use colored::Colorize;

use crate::application::{Line, Report};
use crate::cli::error::{CliError, CliResult};

/// Render one line with its status prefix and color.
pub fn format_line(line: &Line) -> String {
    match line {
        Line::Success(msg) => format!("✅ {msg}").green().to_string(),
        Line::Info(msg) => format!("ℹ️  {msg}").blue().to_string(),
        Line::Warning(msg) => format!("⚠️  {msg}").yellow().bold().to_string(),
        Line::Plain(msg) => msg.clone(),
    }
}

/// Write every line of `report`, newline terminated, and flush.
pub fn write_report(out: &mut impl Write, report: &Report) -> CliResult<()> {
    for line in report.lines() {
        writeln!(out, "{}", format_line(line)).map_err(|e| CliError::io("write report", e))?;
    }
    out.flush().map_err(|e| CliError::io("flush stdout", e))
}

/// Render a report to a string, as it would appear on the terminal.
pub fn render(report: &Report) -> String {
    report
        .lines()
        .iter()
        .map(|l| format_line(l) + "\n")
        .collect()
}
