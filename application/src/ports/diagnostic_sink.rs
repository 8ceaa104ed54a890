//! Port for best-effort diagnostic messages.
//!
//! Used by components that must not fail their caller but still want
//! their own errors written somewhere, typically the daily log file.

use tracing::warn;

/// Receiver of diagnostic messages.
///
/// `record` is synchronous and non-fallible. It must return without
/// waiting on I/O and must never change the caller's control flow;
/// messages that cannot be delivered are dropped.
pub trait DiagnosticSink: Send + Sync {
    /// Record a diagnostic message.
    fn record(&self, message: String);
}

/// Sink that forwards to the `tracing` subscriber as a warning.
///
/// Used when there is no log file to send diagnostics to.
pub struct TracingDiagnostics;

impl DiagnosticSink for TracingDiagnostics {
    fn record(&self, message: String) {
        warn!("{}", message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn test_tracing_sink_is_usable_as_trait_object() {
        let sink: Arc<dyn DiagnosticSink> = Arc::new(TracingDiagnostics);
        sink.record("configuration store has not been loaded".to_string());
    }
}
