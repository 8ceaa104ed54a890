//! Domain layer for daylog
//!
//! This crate contains the pure rules of the daily file logger and the
//! vocabulary of the configuration store. It has no dependencies on
//! infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Daily log file
//!
//! Every unnamed write on a calendar day lands in `<dir>/yyyyMMdd.txt` as a
//! line of the form `[HH:MM:SS]<message>`.
//!
//! ## Settings sections
//!
//! Configuration is a set of named sections of scalar settings. The logger
//! only reads `app_settings`; `connection_strings` is reloaded alongside it.

pub mod config;
pub mod core;
pub mod logger;

// Re-export commonly used types
pub use config::{
    APP_SETTINGS_SECTION, CONNECTION_STRINGS_SECTION, ConfigKeyInfo, DEFAULT_SECTIONS,
    FORCE_LOG_KEY, LOGGER_SECTION, SERILOG_KEY, STORAGE_KEY, SettingValue, Settings, is_set,
    known_keys, lookup_key,
};
pub use core::error::DomainError;
pub use logger::{
    DEFAULT_PAGE_SIZE, LINE_ENDING, LoggerSettings, daily_file_name, format_log_line,
    resolve_file_name, retry_text, validate_log_name,
};
