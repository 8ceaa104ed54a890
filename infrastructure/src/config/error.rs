//! Configuration errors

use thiserror::Error;

/// Errors raised while loading or reading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to load configuration: {0}")]
    Load(#[from] Box<figment::Error>),

    #[error("configuration store has not been loaded")]
    NotLoaded,

    #[error("configuration store lock poisoned")]
    Poisoned,

    #[error("[{0}] holds logger options, not key/value settings")]
    NotASettingsSection(String),
}

impl From<figment::Error> for ConfigError {
    fn from(error: figment::Error) -> Self {
        ConfigError::Load(Box::new(error))
    }
}
