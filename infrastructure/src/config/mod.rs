//! Configuration loading and access for daylog
//!
//! This module handles file I/O and merging of configuration from multiple
//! sources, and the explicitly owned store the logger reads through.
//! The priority order (highest to lowest):
//!
//! 1. `DAYLOG_<SECTION>__<KEY>` environment variables
//! 2. `--config <path>` specified file
//! 3. Project root: `./daylog.toml` or `./.daylog.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/daylog/config.toml`
//! 5. Default values

mod accessor;
mod error;
mod file_config;
mod loader;
mod store;

pub use accessor::ConfigAccessor;
pub use error::ConfigError;
pub use file_config::{FileConfig, FileLoggerConfig};
pub use loader::{ConfigLoader, ConfigSource, DEFAULT_ENV_PREFIX};
pub use store::ConfigStore;
