//! Explicitly owned configuration store.
//!
//! Holds the loaded settings sections in memory. The store is created by
//! the application's startup sequence and handed to whoever needs it;
//! there is no process-wide instance.

use super::error::ConfigError;
use super::loader::{ConfigLoader, ConfigSource};
use daylog_application::KeyLookup;
use daylog_domain::{APP_SETTINGS_SECTION, DEFAULT_SECTIONS, LOGGER_SECTION, Settings};
use std::collections::BTreeMap;
use std::sync::RwLock;
use tracing::debug;

/// In-memory copy of the configured settings sections.
///
/// Reads are cheap and concurrent. [`refresh`](Self::refresh) re-reads
/// sections from the backing source and swaps them in; it is not
/// coordinated with readers beyond the lock, so a reader sees either the
/// old or the new section.
pub struct ConfigStore {
    source: ConfigSource,
    sections: RwLock<Option<BTreeMap<String, Settings>>>,
}

impl ConfigStore {
    /// Create a store that has not loaded anything yet.
    ///
    /// Lookups fail with [`ConfigError::NotLoaded`] until the first
    /// successful refresh.
    pub fn new(source: ConfigSource) -> Self {
        Self {
            source,
            sections: RwLock::new(None),
        }
    }

    /// Create a store and load the default sections.
    pub fn open(source: ConfigSource) -> Result<Self, ConfigError> {
        let store = Self::new(source);
        store.refresh(None)?;
        Ok(store)
    }

    /// Create an already loaded store from in-memory sections.
    ///
    /// A later refresh reads from defaults only.
    pub fn from_sections<I, S>(sections: I) -> Self
    where
        I: IntoIterator<Item = (S, Settings)>,
        S: Into<String>,
    {
        let sections = sections
            .into_iter()
            .map(|(name, settings)| (name.into(), settings))
            .collect();
        Self {
            source: ConfigSource {
                discover: false,
                env_prefix: None,
                ..ConfigSource::default()
            },
            sections: RwLock::new(Some(sections)),
        }
    }

    pub fn source(&self) -> &ConfigSource {
        &self.source
    }

    /// Value of `key` in `section`.
    pub fn lookup(&self, section: &str, key: &str) -> Result<Option<String>, ConfigError> {
        let sections = self.sections.read().map_err(|_| ConfigError::Poisoned)?;
        let sections = sections.as_ref().ok_or(ConfigError::NotLoaded)?;
        Ok(sections.get(section).and_then(|settings| settings.get(key)))
    }

    /// Snapshot of one section.
    pub fn section(&self, section: &str) -> Result<Option<Settings>, ConfigError> {
        let sections = self.sections.read().map_err(|_| ConfigError::Poisoned)?;
        let sections = sections.as_ref().ok_or(ConfigError::NotLoaded)?;
        Ok(sections.get(section).cloned())
    }

    /// Names of all loaded sections.
    pub fn section_names(&self) -> Result<Vec<String>, ConfigError> {
        let sections = self.sections.read().map_err(|_| ConfigError::Poisoned)?;
        let sections = sections.as_ref().ok_or(ConfigError::NotLoaded)?;
        Ok(sections.keys().cloned().collect())
    }

    /// Reload sections from the backing source.
    ///
    /// With no section (or a blank name) both `app_settings` and
    /// `connection_strings` are reloaded; otherwise only the named one.
    /// Nothing is replaced unless every requested section loads. The
    /// `[logger]` table is typed configuration and cannot be refreshed.
    pub fn refresh(&self, section: Option<&str>) -> Result<(), ConfigError> {
        let names: Vec<&str> = match section.map(str::trim) {
            Some(name) if name.eq_ignore_ascii_case(LOGGER_SECTION) => {
                return Err(ConfigError::NotASettingsSection(name.to_string()));
            }
            Some(name) if !name.is_empty() => vec![name],
            _ => DEFAULT_SECTIONS.to_vec(),
        };

        let mut loaded = Vec::with_capacity(names.len());
        for name in names {
            let settings = ConfigLoader::load_section(&self.source, name)?;
            debug!("Loaded config section {} ({} keys)", name, settings.len());
            loaded.push((name.to_string(), settings));
        }

        let mut sections = self.sections.write().map_err(|_| ConfigError::Poisoned)?;
        let sections = sections.get_or_insert_with(BTreeMap::new);
        sections.extend(loaded);
        Ok(())
    }
}

/// Silent lookup: failures read as a missing key.
///
/// This is what the diagnostics logger reads through, so that a broken
/// store cannot feed diagnostics back into itself.
impl KeyLookup for ConfigStore {
    fn get(&self, key: &str) -> Option<String> {
        self.lookup(APP_SETTINGS_SECTION, key).ok().flatten()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use daylog_domain::CONNECTION_STRINGS_SECTION;
    use std::fs;

    fn config_file(content: &str) -> (tempfile::TempDir, std::path::PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, content).unwrap();
        (dir, path)
    }

    #[test]
    fn test_unloaded_store_reports_not_loaded() {
        let store = ConfigStore::new(ConfigSource::file("/nonexistent/config.toml"));
        assert!(matches!(
            store.lookup(APP_SETTINGS_SECTION, "Serilog"),
            Err(ConfigError::NotLoaded)
        ));
        assert!(KeyLookup::get(&store, "Serilog").is_none());
    }

    #[test]
    fn test_open_loads_default_sections() {
        let (_dir, path) = config_file(
            "[app_settings]\nSerilog = \"/tmp/logs\"\n\n[connection_strings]\nMain = \"db\"\n",
        );
        let store = ConfigStore::open(ConfigSource::file(path)).unwrap();

        assert_eq!(
            store.lookup(APP_SETTINGS_SECTION, "serilog").unwrap().as_deref(),
            Some("/tmp/logs")
        );
        assert_eq!(
            store.lookup(CONNECTION_STRINGS_SECTION, "Main").unwrap().as_deref(),
            Some("db")
        );
        assert_eq!(
            store.section_names().unwrap(),
            vec!["app_settings".to_string(), "connection_strings".to_string()]
        );
    }

    #[test]
    fn test_missing_key_is_none() {
        let store = ConfigStore::from_sections([(APP_SETTINGS_SECTION, Settings::new())]);
        assert_eq!(store.lookup(APP_SETTINGS_SECTION, "Nope").unwrap(), None);
    }

    #[test]
    fn test_refresh_picks_up_file_changes() {
        let (_dir, path) = config_file("[app_settings]\nSerilog = \"/old\"\n");
        let store = ConfigStore::open(ConfigSource::file(&path)).unwrap();

        fs::write(&path, "[app_settings]\nSerilog = \"/new\"\n").unwrap();
        assert_eq!(KeyLookup::get(&store, "Serilog").as_deref(), Some("/old"));

        store.refresh(None).unwrap();
        assert_eq!(KeyLookup::get(&store, "Serilog").as_deref(), Some("/new"));
    }

    #[test]
    fn test_refresh_named_section_only() {
        let (_dir, path) = config_file(
            "[app_settings]\nSerilog = \"/old\"\n\n[connection_strings]\nMain = \"old\"\n",
        );
        let store = ConfigStore::open(ConfigSource::file(&path)).unwrap();

        fs::write(
            &path,
            "[app_settings]\nSerilog = \"/new\"\n\n[connection_strings]\nMain = \"new\"\n",
        )
        .unwrap();
        store.refresh(Some(CONNECTION_STRINGS_SECTION)).unwrap();

        assert_eq!(KeyLookup::get(&store, "Serilog").as_deref(), Some("/old"));
        assert_eq!(
            store.lookup(CONNECTION_STRINGS_SECTION, "Main").unwrap().as_deref(),
            Some("new")
        );
    }

    #[test]
    fn test_refresh_blank_section_reloads_defaults() {
        let (_dir, path) = config_file("[app_settings]\nA = \"1\"\n");
        let store = ConfigStore::new(ConfigSource::file(&path));

        store.refresh(Some("  ")).unwrap();

        assert_eq!(store.section_names().unwrap().len(), 2);
    }

    #[test]
    fn test_refresh_custom_section() {
        let (_dir, path) = config_file("[features]\nbeta = true\n");
        let store = ConfigStore::new(ConfigSource::file(&path));

        store.refresh(Some("features")).unwrap();

        assert_eq!(
            store.lookup("features", "beta").unwrap().as_deref(),
            Some("true")
        );
        assert!(store.section(APP_SETTINGS_SECTION).unwrap().is_none());
    }

    #[test]
    fn test_refresh_logger_section_is_rejected() {
        let (_dir, path) = config_file("[logger]\nsilent = true\n\n[app_settings]\nA = \"1\"\n");
        let store = ConfigStore::open(ConfigSource::file(&path)).unwrap();

        let result = store.refresh(Some("logger"));

        assert!(matches!(
            result,
            Err(ConfigError::NotASettingsSection(ref name)) if name == "logger"
        ));
        assert!(store.section("logger").unwrap().is_none());
        assert_eq!(KeyLookup::get(&store, "A").as_deref(), Some("1"));
    }

    #[test]
    fn test_refresh_error_propagates_and_keeps_old_values() {
        let (_dir, path) = config_file("[app_settings]\nSerilog = \"/old\"\n");
        let store = ConfigStore::open(ConfigSource::file(&path)).unwrap();

        fs::write(&path, "[app_settings\nbroken").unwrap();
        assert!(store.refresh(None).is_err());
        assert_eq!(KeyLookup::get(&store, "Serilog").as_deref(), Some("/old"));
    }
}
