//! Application layer for daylog
//!
//! This crate contains the file logger use case and the ports it and the
//! configuration accessor talk through. It depends only on the domain layer.

pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use ports::{
    clock::{Clock, FixedClock},
    diagnostic_sink::{DiagnosticSink, TracingDiagnostics},
    key_lookup::KeyLookup,
    log_appender::LogAppender,
};
pub use use_cases::write_log::FileLogger;
