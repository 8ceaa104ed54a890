//! Logging infrastructure: the daily file logger's adapters.
//!
//! Provides [`TokioFileAppender`] and [`SystemClock`], which implement the
//! application's `LogAppender` and `Clock` ports against the real
//! filesystem and local time, and [`QueuedDiagnostics`], a bounded
//! queue that turns `DiagnosticSink::record` calls into log writes on a
//! background task. [`spawn_diagnostics`] picks between that queue and
//! plain `tracing` output.

mod clock;
mod diagnostic_queue;
mod file_appender;

pub use clock::SystemClock;
pub use diagnostic_queue::{DEFAULT_DIAGNOSTIC_CAPACITY, DiagnosticWorker, QueuedDiagnostics};
pub use file_appender::TokioFileAppender;

use crate::config::ConfigStore;
use daylog_application::{DiagnosticSink, FileLogger, KeyLookup, LogAppender, TracingDiagnostics};
use daylog_domain::{SERILOG_KEY, STORAGE_KEY};
use std::path::Path;
use std::sync::Arc;
use tokio::task::JoinHandle;
use tracing::debug;

/// A [`FileLogger`] writing to disk with local time and default settings.
pub fn system_file_logger(config: Arc<dyn KeyLookup>) -> FileLogger {
    FileLogger::new(config, Arc::new(TokioFileAppender), Arc::new(SystemClock))
}

/// Diagnostics sink for components reading `store`.
///
/// When the store's `Serilog` (else `Storage`) directory exists, messages
/// are queued and written there by a background worker, whose handle is
/// returned. Otherwise they go to `tracing` and no worker is started.
/// The worker's logger reads the store silently.
pub fn spawn_diagnostics(
    store: Arc<ConfigStore>,
    capacity: usize,
) -> (Arc<dyn DiagnosticSink>, Option<JoinHandle<()>>) {
    let log_dir = [SERILOG_KEY, STORAGE_KEY]
        .iter()
        .find_map(|key| KeyLookup::get(store.as_ref(), key));

    match log_dir {
        Some(dir) if TokioFileAppender.dir_exists(Path::new(&dir)) => {
            let (sink, worker) = QueuedDiagnostics::channel(capacity);
            let handle = worker.spawn(system_file_logger(store));
            (Arc::new(sink), Some(handle))
        }
        _ => {
            debug!("No log directory configured, diagnostics go to tracing");
            (Arc::new(TracingDiagnostics), None)
        }
    }
}
