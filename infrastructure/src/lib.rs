//! Infrastructure layer for daylog
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod logging;

// Re-export commonly used types
pub use config::{
    ConfigAccessor, ConfigError, ConfigLoader, ConfigSource, ConfigStore, FileConfig,
    FileLoggerConfig,
};
pub use logging::{
    DEFAULT_DIAGNOSTIC_CAPACITY, DiagnosticWorker, QueuedDiagnostics, SystemClock,
    TokioFileAppender, spawn_diagnostics, system_file_logger,
};
