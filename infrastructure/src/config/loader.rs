//! Configuration file loader with multi-source merging

use super::error::ConfigError;
use super::file_config::FileConfig;
use daylog_domain::{LOGGER_SECTION, Settings};
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use std::path::PathBuf;

/// Environment prefix for overrides, e.g. `DAYLOG_APP_SETTINGS__SERILOG`.
pub const DEFAULT_ENV_PREFIX: &str = "DAYLOG_";

const PROJECT_FILE_NAMES: [&str; 2] = ["daylog.toml", ".daylog.toml"];

/// Where configuration is read from.
///
/// The store keeps its source so that a refresh re-reads the same files
/// and environment it was opened with.
#[derive(Debug, Clone)]
pub struct ConfigSource {
    /// Explicit config file (highest priority among files)
    pub explicit: Option<PathBuf>,
    /// Look for global and project config files
    pub discover: bool,
    /// Directory searched for `daylog.toml` / `.daylog.toml`
    pub project_dir: PathBuf,
    /// Environment override prefix; `None` disables env overrides
    pub env_prefix: Option<String>,
}

impl Default for ConfigSource {
    fn default() -> Self {
        Self {
            explicit: None,
            discover: true,
            project_dir: PathBuf::from("."),
            env_prefix: Some(DEFAULT_ENV_PREFIX.to_string()),
        }
    }
}

impl ConfigSource {
    /// Discovered files, an optional explicit file, and env overrides.
    pub fn discover(explicit: Option<PathBuf>) -> Self {
        Self {
            explicit,
            ..Self::default()
        }
    }

    /// Built-in defaults plus env overrides (for `--no-config`).
    pub fn defaults_only() -> Self {
        Self {
            discover: false,
            ..Self::default()
        }
    }

    /// A single file and nothing else.
    pub fn file(path: impl Into<PathBuf>) -> Self {
        Self {
            explicit: Some(path.into()),
            discover: false,
            project_dir: PathBuf::from("."),
            env_prefix: None,
        }
    }
}

fn is_logger_key(key: &str) -> bool {
    key.split('.')
        .next()
        .is_some_and(|section| section.eq_ignore_ascii_case(LOGGER_SECTION))
}

/// Configuration loader that handles file discovery and merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Build the merged figment for a source
    ///
    /// Priority (highest to lowest):
    /// 1. Environment (`<prefix><SECTION>__<KEY>`)
    /// 2. Explicit config path (if provided)
    /// 3. Project root: `./daylog.toml` or `./.daylog.toml`
    /// 4. XDG config: `$XDG_CONFIG_HOME/daylog/config.toml`
    /// 5. Default values
    pub fn figment(source: &ConfigSource) -> Figment {
        let mut figment = Figment::new().merge(Serialized::defaults(FileConfig::default()));

        if source.discover {
            if let Some(global_path) = Self::global_config_path()
                && global_path.exists()
            {
                figment = figment.merge(Toml::file(&global_path));
            }

            if let Some(project_path) = Self::project_config_path(source) {
                figment = figment.merge(Toml::file(&project_path));
            }
        }

        if let Some(path) = &source.explicit {
            figment = figment.merge(Toml::file(path));
        }

        if let Some(prefix) = &source.env_prefix {
            figment = Self::merge_env(figment, prefix);
        }

        figment
    }

    /// Merge `<prefix><SECTION>__<KEY>` overrides.
    ///
    /// `[logger]` fields are typed, so figment parses those values. Every
    /// other value is inserted as the variable's exact text: `0123` stays
    /// `0123` rather than becoming the number 123.
    fn merge_env(figment: Figment, prefix: &str) -> Figment {
        let mut figment = figment.merge(
            Env::prefixed(prefix)
                .split("__")
                .filter(|key| is_logger_key(key.as_str())),
        );

        for (key, value) in Env::prefixed(prefix).split("__").iter() {
            let key = key.as_str().to_ascii_lowercase();
            if !is_logger_key(&key) {
                figment = figment.merge(Serialized::default(&key, value));
            }
        }

        figment
    }

    /// Load the complete typed configuration
    pub fn load(source: &ConfigSource) -> Result<FileConfig, ConfigError> {
        Ok(Self::figment(source).extract()?)
    }

    /// Load a single settings section; a section absent from every
    /// source loads as empty
    pub fn load_section(source: &ConfigSource, section: &str) -> Result<Settings, ConfigError> {
        Ok(Self::figment(source).focus(section).extract::<Settings>()?)
    }

    /// Get the global config file path
    ///
    /// Returns XDG_CONFIG_HOME/daylog/config.toml if set,
    /// otherwise falls back to ~/.config/daylog/config.toml
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("daylog").join("config.toml"))
    }

    /// Get the project-level config file path (if it exists)
    pub fn project_config_path(source: &ConfigSource) -> Option<PathBuf> {
        PROJECT_FILE_NAMES
            .iter()
            .map(|name| source.project_dir.join(name))
            .find(|path| path.exists())
    }

    /// Print the config file locations being used (for debugging)
    pub fn print_config_sources(source: &ConfigSource) {
        println!("Configuration sources (in priority order):");

        if let Some(prefix) = &source.env_prefix {
            println!("  [     ] Env:      {}<SECTION>__<KEY>", prefix);
        }

        if let Some(path) = &source.explicit {
            let mark = if path.exists() { "FOUND" } else { "MISSING" };
            println!("  [{:<5}] Explicit: {}", mark, path.display());
        }

        if source.discover {
            if let Some(path) = Self::project_config_path(source) {
                println!("  [FOUND] Project:  {}", path.display());
            } else {
                println!("  [     ] Project:  ./daylog.toml or ./.daylog.toml");
            }

            if let Some(path) = Self::global_config_path() {
                if path.exists() {
                    println!("  [FOUND] Global:   {}", path.display());
                } else {
                    println!("  [     ] Global:   {}", path.display());
                }
            }
        }

        println!("  [     ] Default:  built-in defaults");
    }
}
