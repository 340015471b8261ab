//! Formatting utilities for terminal output

/// Format a total time in whole seconds
///
/// `"{m}m {s}s"` when at least a minute has passed, else `"{s}s"`.
///
/// # Examples
/// ```
/// use tebak_kata::output::formatters::format_total_time;
///
/// assert_eq!(format_total_time(42), "42s");
/// assert_eq!(format_total_time(125), "2m 5s");
/// ```
#[must_use]
pub fn format_total_time(secs: u64) -> String {
    let minutes = secs / 60;
    let seconds = secs % 60;
    if minutes > 0 {
        format!("{minutes}m {seconds}s")
    } else {
        format!("{seconds}s")
    }
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: usize, max: usize, width: usize) -> String {
    let filled = if max == 0 { 0 } else { value * width / max };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
