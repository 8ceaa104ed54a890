//! Log line format.

use chrono::NaiveTime;

/// Time-of-day prefix format (`HH:MM:SS`).
pub const TIME_FORMAT: &str = "%H:%M:%S";

/// Platform newline appended to every line.
#[cfg(windows)]
pub const LINE_ENDING: &str = "\r\n";
#[cfg(not(windows))]
pub const LINE_ENDING: &str = "\n";

/// Format a message as `[HH:MM:SS]<message><newline>`.
pub fn format_log_line(time: NaiveTime, message: &str) -> String {
    format!("[{}]{}{}", time.format(TIME_FORMAT), message, LINE_ENDING)
}

/// Text written to a retry file: the failure, a newline, then the
/// text that could not be written.
pub fn retry_text(error: &str, text: &str) -> String {
    format!("{}\n{}", error, text)
}
