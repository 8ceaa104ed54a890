//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! Settings sections deserialize into the domain [`Settings`] type.

use daylog_domain::{DEFAULT_PAGE_SIZE, LoggerSettings, Settings};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Raw `[logger]` configuration from TOML
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileLoggerConfig {
    /// Output directory; falls back to `Serilog` / `Storage` when unset
    pub path: Option<PathBuf>,
    /// Fixed file name; the daily `yyyyMMdd.txt` name when unset
    pub name: Option<String>,
    /// Suppress all writes
    pub silent: bool,
    /// Reserved read batch size
    pub page_size: usize,
}

impl Default for FileLoggerConfig {
    fn default() -> Self {
        Self {
            path: None,
            name: None,
            silent: false,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl FileLoggerConfig {
    /// Convert into the settings a `FileLogger` starts with
    pub fn to_settings(&self) -> LoggerSettings {
        LoggerSettings {
            log_path: self.path.clone(),
            log_name: self.name.clone(),
            silent_mode: self.silent,
            page_size: self.page_size,
        }
    }
}

/// Complete configuration file
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Logger defaults
    pub logger: FileLoggerConfig,
    /// Application settings (`Serilog`, `Storage`, `ForceLog`, ...)
    pub app_settings: Settings,
    /// Named connection strings
    pub connection_strings: Settings,
}
