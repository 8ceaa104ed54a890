//! Configuration accessor with self-reporting failures.

use super::error::ConfigError;
use super::store::ConfigStore;
use daylog_application::{DiagnosticSink, KeyLookup};
use daylog_domain::APP_SETTINGS_SECTION;
use std::sync::Arc;
use tracing::debug;

/// String-keyed reads over the application settings, plus refresh.
///
/// A failing read never reaches the caller: the error text goes to the
/// injected [`DiagnosticSink`] without waiting, and the read returns
/// `None`. Refresh failures do propagate.
#[derive(Clone)]
pub struct ConfigAccessor {
    store: Arc<ConfigStore>,
    diagnostics: Arc<dyn DiagnosticSink>,
}

impl ConfigAccessor {
    pub fn new(store: Arc<ConfigStore>, diagnostics: Arc<dyn DiagnosticSink>) -> Self {
        Self { store, diagnostics }
    }

    pub fn store(&self) -> &Arc<ConfigStore> {
        &self.store
    }

    /// Value of `key` in the application settings.
    pub fn get(&self, key: &str) -> Option<String> {
        match self.store.lookup(APP_SETTINGS_SECTION, key) {
            Ok(value) => value,
            Err(e) => {
                debug!("Config lookup for {} failed: {}", key, e);
                self.diagnostics.record(e.to_string());
                None
            }
        }
    }

    /// Reload `section`, or both default sections when `None`.
    pub fn refresh(&self, section: Option<&str>) -> Result<(), ConfigError> {
        self.store.refresh(section)
    }
}

impl KeyLookup for ConfigAccessor {
    fn get(&self, key: &str) -> Option<String> {
        ConfigAccessor::get(self, key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::loader::ConfigSource;
    use daylog_domain::Settings;
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingSink {
        messages: Mutex<Vec<String>>,
    }

    impl DiagnosticSink for RecordingSink {
        fn record(&self, message: String) {
            self.messages.lock().unwrap().push(message);
        }
    }

    fn loaded_store() -> Arc<ConfigStore> {
        Arc::new(ConfigStore::from_sections([(
            APP_SETTINGS_SECTION,
            Settings::new().with("Serilog", "/tmp/logs"),
        )]))
    }

    #[test]
    fn test_get_existing_key() {
        let sink = Arc::new(RecordingSink::default());
        let accessor = ConfigAccessor::new(loaded_store(), sink.clone());

        assert_eq!(accessor.get("Serilog").as_deref(), Some("/tmp/logs"));
        assert!(sink.messages.lock().unwrap().is_empty());
    }

    #[test]
    fn test_missing_key_is_none_without_diagnostic() {
        let sink = Arc::new(RecordingSink::default());
        let accessor = ConfigAccessor::new(loaded_store(), sink.clone());

        assert!(accessor.get("ForceLog").is_none());
        assert!(sink.messages.lock().unwrap().is_empty());
    }

    #[test]
    fn test_failure_is_recorded_and_returns_none() {
        let sink = Arc::new(RecordingSink::default());
        let store = Arc::new(ConfigStore::new(ConfigSource::file("/nonexistent.toml")));
        let accessor = ConfigAccessor::new(store, sink.clone());

        assert!(accessor.get("Serilog").is_none());
        assert_eq!(
            *sink.messages.lock().unwrap(),
            vec!["configuration store has not been loaded".to_string()]
        );
    }

    #[test]
    fn test_refresh_loads_unloaded_store() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[app_settings]\nStorage = \"/srv\"\n").unwrap();

        let sink = Arc::new(RecordingSink::default());
        let store = Arc::new(ConfigStore::new(ConfigSource::file(&path)));
        let accessor = ConfigAccessor::new(store, sink.clone());

        accessor.refresh(None).unwrap();
        assert_eq!(accessor.get("Storage").as_deref(), Some("/srv"));
    }

    #[test]
    fn test_refresh_error_propagates() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "not = [valid").unwrap();

        let store = Arc::new(ConfigStore::new(ConfigSource::file(&path)));
        let accessor = ConfigAccessor::new(store, Arc::new(RecordingSink::default()));

        assert!(accessor.refresh(None).is_err());
    }
}
