//! Well-known config sections and keys.
//!
//! Defines metadata for the keys the logger consults in the
//! application-settings section. Used by `show-config` and by the
//! logger's path fallback chain.

/// Section holding plain key/value application settings.
pub const APP_SETTINGS_SECTION: &str = "app_settings";

/// Section holding named connection strings.
pub const CONNECTION_STRINGS_SECTION: &str = "connection_strings";

/// Section holding default logger settings for the CLI.
pub const LOGGER_SECTION: &str = "logger";

/// Sections reloaded when a refresh names no section.
pub const DEFAULT_SECTIONS: [&str; 2] = [APP_SETTINGS_SECTION, CONNECTION_STRINGS_SECTION];

/// First fallback log directory.
pub const SERILOG_KEY: &str = "Serilog";

/// Second fallback log directory.
pub const STORAGE_KEY: &str = "Storage";

/// Non-blank value enables the one-shot retry on write failure.
pub const FORCE_LOG_KEY: &str = "ForceLog";

/// Metadata for a single well-known key.
#[derive(Debug, Clone)]
pub struct ConfigKeyInfo {
    /// Key name inside the section (matched case-insensitively).
    pub key: &'static str,
    /// Section the key is read from.
    pub section: &'static str,
    /// Human-readable description.
    pub description: &'static str,
}

/// All well-known keys with their metadata.
pub fn known_keys() -> &'static [ConfigKeyInfo] {
    &KNOWN_KEYS
}

/// Look up a well-known key, ignoring ASCII case.
pub fn lookup_key(key: &str) -> Option<&'static ConfigKeyInfo> {
    KNOWN_KEYS.iter().find(|k| k.key.eq_ignore_ascii_case(key))
}

static KNOWN_KEYS: [ConfigKeyInfo; 3] = [
    ConfigKeyInfo {
        key: SERILOG_KEY,
        section: APP_SETTINGS_SECTION,
        description: "Log directory used when the logger has no explicit path",
    },
    ConfigKeyInfo {
        key: STORAGE_KEY,
        section: APP_SETTINGS_SECTION,
        description: "Log directory used when neither an explicit path nor Serilog is set",
    },
    ConfigKeyInfo {
        key: FORCE_LOG_KEY,
        section: APP_SETTINGS_SECTION,
        description: "Any non-blank value retries failed writes once under a unique file name",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_keys_not_empty() {
        assert_eq!(known_keys().len(), 3);
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        let info = lookup_key("forcelog").unwrap();
        assert_eq!(info.key, FORCE_LOG_KEY);
        assert_eq!(info.section, APP_SETTINGS_SECTION);
    }

    #[test]
    fn test_lookup_nonexistent_key() {
        assert!(lookup_key("nonexistent.key").is_none());
    }

    #[test]
    fn test_default_sections() {
        assert_eq!(DEFAULT_SECTIONS, ["app_settings", "connection_strings"]);
    }
}
