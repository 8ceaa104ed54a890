//! Port definitions (interfaces for external adapters)
//!
//! Ports define the contracts that infrastructure adapters must implement.
//! The logger reads config through `KeyLookup`; the config accessor
//! reports its failures through `DiagnosticSink`.

pub mod clock;
pub mod diagnostic_sink;
pub mod key_lookup;
pub mod log_appender;
