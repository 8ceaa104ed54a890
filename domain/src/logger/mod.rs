//! Log file domain: settings, line format and file naming.
//!
//! Everything here is pure; the clock and the filesystem are supplied
//! by the caller so that the rules can be tested without I/O.

mod file_name;
mod line;
mod settings;

pub use file_name::{DAILY_FILE_FORMAT, daily_file_name, resolve_file_name, validate_log_name};
pub use line::{LINE_ENDING, TIME_FORMAT, format_log_line, retry_text};
pub use settings::{DEFAULT_PAGE_SIZE, LoggerSettings};
