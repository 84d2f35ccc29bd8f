//! Human-readable listings and the final run report.

use crate::catalog::Release;
use crate::download::{Download, RunSummary};

use std::fmt::Write;

/// Format the numbered release table shown before a selection prompt.
pub fn format_release_table(releases: &[Release]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{:>3} | {:<40} | {:<10} | version", "no.", "release", "published");
    let _ = writeln!(out, "{}", "-".repeat(72));
    for (i, release) in releases.iter().enumerate() {
        let published = release
            .published
            .map(|dt| dt.format("%Y-%m-%d").to_string())
            .unwrap_or_else(|| String::from("unknown"));
        let _ = writeln!(
            out,
            "{:>3} | {:<40} | {:<10} | {}",
            i + 1,
            release.title,
            published,
            release.version
        );
    }
    out
}

/// Format a file listing preview: up to `max_rows` names with sizes, and a
/// trailer for the remainder.
pub fn format_file_listing(files: &[Download], max_rows: usize) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{} files", files.len());
    for (i, file) in files.iter().take(max_rows).enumerate() {
        let _ = writeln!(
            out,
            "{:>3}. {:<50} {:>10}",
            i + 1,
            file.filename,
            human_mb(file.size)
        );
    }
    if files.len() > max_rows {
        let _ = writeln!(out, "... and {} more files", files.len() - max_rows);
    }
    out
}

/// Format the final run report: tally, destination, and one line per
/// failure.
pub fn format_report(report: &RunSummary) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "download finished:");
    let _ = writeln!(out, "  total:     {}", report.total());
    let _ = writeln!(out, "  succeeded: {}", report.succeeded());
    let _ = writeln!(out, "  failed:    {}", report.failed());
    let _ = writeln!(out, "  skipped:   {}", report.skipped());
    let _ = writeln!(out, "  directory: {}", report.destination().display());
    for (download, detail) in report.failures() {
        let _ = writeln!(out, "  failed: {} - {}", download.filename, detail);
    }
    out
}

fn human_mb(bytes: u64) -> String {
    if bytes == 0 {
        return String::from("?");
    }
    format!("{:.2} MB", bytes as f64 / (1024.0 * 1024.0))
}
