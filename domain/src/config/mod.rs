//! Configuration value objects for the domain layer
//!
//! Section names, well-known keys and the value type stored in
//! settings sections. Loading lives in the infrastructure layer.

mod config_key;
mod setting_value;

pub use config_key::{
    APP_SETTINGS_SECTION, CONNECTION_STRINGS_SECTION, ConfigKeyInfo, DEFAULT_SECTIONS,
    FORCE_LOG_KEY, LOGGER_SECTION, SERILOG_KEY, STORAGE_KEY, known_keys, lookup_key,
};
pub use setting_value::{SettingValue, Settings, is_set};
