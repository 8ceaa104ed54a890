//! Caller-owned logger settings.

use std::path::PathBuf;

/// Default read page size. Reserved; no operation reads it.
pub const DEFAULT_PAGE_SIZE: usize = 2048;

/// Settings a caller sets on a logger before or between writes.
///
/// Nothing is validated here: a bad directory simply resolves to no path
/// and a bad file name is reported when a write tries to use it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggerSettings {
    /// Explicit output directory; falls back to config when unset.
    pub log_path: Option<PathBuf>,
    /// Explicit file name; falls back to `yyyyMMdd.txt` when unset.
    pub log_name: Option<String>,
    /// When true, writes return immediately without touching disk.
    pub silent_mode: bool,
    /// Reserved read batch size.
    pub page_size: usize,
}

impl Default for LoggerSettings {
    fn default() -> Self {
        Self {
            log_path: None,
            log_name: None,
            silent_mode: false,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl LoggerSettings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.log_path = Some(path.into());
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.log_name = Some(name.into());
        self
    }

    pub fn with_silent_mode(mut self, silent: bool) -> Self {
        self.silent_mode = silent;
        self
    }

    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size;
        self
    }
}
