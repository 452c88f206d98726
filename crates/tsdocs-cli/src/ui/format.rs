//! Formatting utilities for sizes, durations, and the generate summary.

use console::Term;
use owo_colors::OwoColorize;
use std::path::PathBuf;
use std::time::Duration;

/// Human-readable size: `1.50 KB`.
///
/// ```
/// use tsdocs_cli::ui::format_size;
///
/// assert_eq!(format_size(500), "500 B");
/// assert_eq!(format_size(1_048_576), "1.00 MB");
/// ```
pub fn format_size(bytes: u64) -> String {
    const UNITS: &[&str] = &["B", "KB", "MB", "GB"];

    if bytes == 0 {
        return "0 B".to_string();
    }

    let mut size = bytes as f64;
    let mut unit_idx = 0;

    while size >= 1024.0 && unit_idx < UNITS.len() - 1 {
        size /= 1024.0;
        unit_idx += 1;
    }

    if unit_idx == 0 {
        format!("{} {}", size as u64, UNITS[unit_idx])
    } else {
        format!("{:.2} {}", size, UNITS[unit_idx])
    }
}

/// Human-readable duration: `50ms`, `1.50s` or `2m 30s`.
pub fn format_duration(duration: Duration) -> String {
    let total_ms = duration.as_millis();

    if total_ms < 1000 {
        format!("{}ms", total_ms)
    } else if total_ms < 60_000 {
        format!("{:.2}s", duration.as_secs_f64())
    } else {
        let secs = duration.as_secs();
        let mins = secs / 60;
        let secs = secs % 60;
        format!("{}m {}s", mins, secs)
    }
}

/// Print the list of written (or rendered) files with their sizes.
pub fn print_generate_summary(files: &[(PathBuf, u64)], duration: Duration) {
    let term = Term::stderr();
    let width = (term.size().1 as usize).min(80);

    eprintln!("\n{}", "Generated".bold().underline());
    eprintln!("{}", "─".repeat(width));

    for (path, size) in files {
        eprintln!(
            "  {} {} {}",
            "▸".blue(),
            path.display().bright_white().bold(),
            format_size(*size).dimmed()
        );
    }

    eprintln!("{}", "─".repeat(width));

    let total_size: u64 = files.iter().map(|(_, size)| size).sum();
    eprintln!(
        "  {} {} file(s), {} in {}",
        "Total:".bold(),
        files.len(),
        format_size(total_size).green(),
        format_duration(duration).green()
    );
}
