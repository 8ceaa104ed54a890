//! Write Log use case.
//!
//! Appends timestamped lines to the daily log file. The output directory
//! comes from the logger's own settings, else the `Serilog` setting, else
//! the `Storage` setting; a directory that does not exist turns the write
//! into a no-op.
//!
//! Failures never reach the caller. A failed append is retried once under
//! `<path>-<uuid>`, with the error text prefixed, but only when the
//! `ForceLog` setting is non-blank.

use crate::ports::clock::Clock;
use crate::ports::key_lookup::KeyLookup;
use crate::ports::log_appender::LogAppender;
use daylog_domain::{
    FORCE_LOG_KEY, LoggerSettings, SERILOG_KEY, STORAGE_KEY, daily_file_name, format_log_line,
    is_set, resolve_file_name, retry_text,
};
use chrono::NaiveDateTime;
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use tracing::{debug, warn};

/// File logger: one line per message, one file per day.
///
/// Each [`write`](Self::write) is an independent one-shot attempt. There
/// is no queue and no buffering, and overlapping writes are not ordered
/// relative to each other; callers needing strict order await each write
/// before issuing the next.
pub struct FileLogger {
    settings: LoggerSettings,
    config: Arc<dyn KeyLookup>,
    appender: Arc<dyn LogAppender>,
    clock: Arc<dyn Clock>,
    last_write_path: Mutex<Option<PathBuf>>,
}

impl FileLogger {
    pub fn new(
        config: Arc<dyn KeyLookup>,
        appender: Arc<dyn LogAppender>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            settings: LoggerSettings::default(),
            config,
            appender,
            clock,
            last_write_path: Mutex::new(None),
        }
    }

    /// Replace all settings.
    pub fn with_settings(mut self, settings: LoggerSettings) -> Self {
        self.settings = settings;
        self
    }

    /// Write to a fixed file name instead of the daily one, e.g. to keep
    /// appending to a specific day's file.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.settings.log_name = Some(name.into());
        self
    }

    pub fn settings(&self) -> &LoggerSettings {
        &self.settings
    }

    /// Settings may be changed between writes.
    pub fn settings_mut(&mut self) -> &mut LoggerSettings {
        &mut self.settings
    }

    /// Full path resolved by the most recent write, if any.
    pub fn last_write_path(&self) -> Option<PathBuf> {
        self.last_write_path
            .lock()
            .ok()
            .and_then(|last| last.clone())
    }

    /// Append `[HH:MM:SS]<message>` to the resolved log file.
    pub async fn write(&self, message: &str) {
        if self.settings.silent_mode {
            return;
        }

        // One reading for both the file's date and the line's time.
        let now = self.clock.now();
        let Some(path) = self.resolve_path(now).await else {
            return;
        };

        let text = format_log_line(now.time(), message);
        if let Ok(mut last) = self.last_write_path.lock() {
            *last = Some(path.clone());
        }

        self.append_with_retry(&path, &text).await;
    }

    /// Directory from settings or config, joined with the file name.
    ///
    /// Returns `None` when no directory is configured, when it does not
    /// exist, or when the explicit file name is unusable. The last case is
    /// itself written to the directory's daily file.
    async fn resolve_path(&self, now: NaiveDateTime) -> Option<PathBuf> {
        let dir = self
            .settings
            .log_path
            .clone()
            .or_else(|| self.config.get(SERILOG_KEY).map(PathBuf::from))
            .or_else(|| self.config.get(STORAGE_KEY).map(PathBuf::from))?;

        if !self.appender.dir_exists(&dir) {
            debug!("Log directory {} does not exist, skipping write", dir.display());
            return None;
        }

        match resolve_file_name(self.settings.log_name.as_deref(), now.date()) {
            Ok(name) => Some(dir.join(name)),
            Err(e) => {
                warn!("Could not resolve log file in {}: {}", dir.display(), e);
                let fallback = dir.join(daily_file_name(now.date()));
                let text = format_log_line(now.time(), &e.to_string());
                self.append_with_retry(&fallback, &text).await;
                None
            }
        }
    }

    /// Append once, then at most one retry under a unique path.
    async fn append_with_retry(&self, path: &Path, text: &str) {
        let Err(error) = self.appender.append(path, text).await else {
            return;
        };

        if !is_set(self.config.get(FORCE_LOG_KEY).as_deref()) {
            debug!("Dropping log line for {}: {}", path.display(), error);
            return;
        }

        let retry_path = retry_path(path);
        let text = retry_text(&error.to_string(), text);
        if let Err(e) = self.appender.append(&retry_path, &text).await {
            warn!(
                "Could not write log retry file {}: {}",
                retry_path.display(),
                e
            );
        }
    }
}

/// `<path>-<uuid>`
fn retry_path(path: &Path) -> PathBuf {
    let mut raw = OsString::from(path.as_os_str());
    raw.push("-");
    raw.push(uuid::Uuid::new_v4().to_string());
    PathBuf::from(raw)
}
