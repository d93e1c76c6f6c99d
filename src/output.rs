//! Output formatting for search reports.
//!
//! Provides the classic tagged text lines and a JSON form (one object per
//! report, suitable for newline-delimited streaming). Formatting is
//! presentation-only; the [`FileReport`] fields are the real contract.

use crate::FileReport;

/// Supported output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Formats a single report into one output line (no trailing newline).
pub fn format_report(report: &FileReport, format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => format_text(report),
        OutputFormat::Json => format_json(report),
    }
}

fn format_text(report: &FileReport) -> String {
    if report.is_directory {
        format!("[DIR]  {}", report.path.display())
    } else {
        format!(
            "[FILE] {} ({} bytes, {})",
            report.path.display(),
            report.size_bytes,
            report.modified.format("%Y-%m-%d %H:%M:%S")
        )
    }
}

fn format_json(report: &FileReport) -> String {
    serde_json::to_string(report).expect("JSON serialization failed")
}
