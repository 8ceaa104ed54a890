//! Port for reading a single configuration value by key.

use daylog_domain::Settings;

/// Synchronous string lookup into the application settings.
///
/// Implementations must not fail: anything that goes wrong is reported
/// their own way and surfaces here as `None`.
pub trait KeyLookup: Send + Sync {
    /// Value stored under `key`, if any.
    fn get(&self, key: &str) -> Option<String>;
}

impl KeyLookup for Settings {
    fn get(&self, key: &str) -> Option<String> {
        Settings::get(self, key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_settings_lookup() {
        let settings = Settings::new();
        let lookup: &dyn KeyLookup = &settings;
        assert!(lookup.get("Serilog").is_none());
    }

    #[test]
    fn test_settings_lookup() {
        let settings = Settings::new().with("Storage", "/srv");
        let lookup: &dyn KeyLookup = &settings;
        assert_eq!(lookup.get("storage").as_deref(), Some("/srv"));
    }
}
