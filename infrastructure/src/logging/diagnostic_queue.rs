//! Bounded diagnostics queue drained into a log file.
//!
//! [`QueuedDiagnostics`] is the [`DiagnosticSink`] handed to components
//! such as the config accessor. Recording never waits: the message is
//! offered to a bounded channel and dropped if the queue is full or the
//! worker is gone. A [`DiagnosticWorker`] drains the channel and writes
//! each message through a [`FileLogger`].

use daylog_application::{DiagnosticSink, FileLogger};
use tokio::sync::mpsc;
use tokio::sync::mpsc::error::TrySendError;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

/// Default queue capacity.
pub const DEFAULT_DIAGNOSTIC_CAPACITY: usize = 64;

/// Non-blocking sending half.
#[derive(Clone)]
pub struct QueuedDiagnostics {
    tx: mpsc::Sender<String>,
}

/// Receiving half; runs until every [`QueuedDiagnostics`] is dropped.
pub struct DiagnosticWorker {
    rx: mpsc::Receiver<String>,
}

impl QueuedDiagnostics {
    /// Create a sink and the worker that drains it.
    ///
    /// The worker is started separately so that its logger can be built
    /// after the components that hold the sink.
    pub fn channel(capacity: usize) -> (Self, DiagnosticWorker) {
        let (tx, rx) = mpsc::channel(capacity.max(1));
        (Self { tx }, DiagnosticWorker { rx })
    }
}

impl DiagnosticSink for QueuedDiagnostics {
    fn record(&self, message: String) {
        match self.tx.try_send(message) {
            Ok(()) => {}
            Err(TrySendError::Full(message)) => {
                warn!("Diagnostics queue full, dropping: {}", message);
            }
            Err(TrySendError::Closed(message)) => {
                debug!("Diagnostics worker stopped, dropping: {}", message);
            }
        }
    }
}

impl DiagnosticWorker {
    /// Write every queued message until the channel closes.
    pub async fn run(mut self, logger: FileLogger) {
        while let Some(message) = self.rx.recv().await {
            logger.write(&message).await;
        }
        debug!("Diagnostics worker finished");
    }

    /// Run on a background task.
    pub fn spawn(self, logger: FileLogger) -> JoinHandle<()> {
        tokio::spawn(self.run(logger))
    }
}
