//! Values stored in a settings section.

use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;

/// A scalar setting as written in the config source.
///
/// Consumers only ever see the string form; the variants exist so that
/// `ForceLog = true` or `Retries = 3` load without quoting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SettingValue {
    Text(String),
    Integer(i64),
    Float(f64),
    Flag(bool),
}

impl std::fmt::Display for SettingValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SettingValue::Text(s) => write!(f, "{}", s),
            SettingValue::Integer(n) => write!(f, "{}", n),
            // `{:?}` keeps the fraction of whole floats: `2.0`, not `2`
            SettingValue::Float(x) => write!(f, "{:?}", x),
            SettingValue::Flag(b) => write!(f, "{}", b),
        }
    }
}

impl From<&str> for SettingValue {
    fn from(value: &str) -> Self {
        SettingValue::Text(value.to_string())
    }
}

/// One named section of key/value settings.
///
/// Keys keep the spelling of the source but are matched ignoring ASCII
/// case, so `Serilog`, `serilog` and an env-provided `SERILOG` agree.
/// Keys differing only in case collapse to one entry on load; the one
/// sorting last wins, which puts lowercased env overrides ahead of
/// mixed-case file keys.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Settings(BTreeMap<String, SettingValue>);

impl<'de> Deserialize<'de> for Settings {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        BTreeMap::<String, SettingValue>::deserialize(deserializer)
            .map(|map| map.into_iter().collect())
    }
}

impl Settings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a value, returning `self` for chaining.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<SettingValue>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<SettingValue>) {
        let key = key.into();
        self.0.retain(|existing, _| !existing.eq_ignore_ascii_case(&key));
        self.0.insert(key, value.into());
    }

    /// String form of the value stored under `key`.
    pub fn get(&self, key: &str) -> Option<String> {
        if let Some(value) = self.0.get(key) {
            return Some(value.to_string());
        }
        self.0
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(key))
            .map(|(_, v)| v.to_string())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &SettingValue)> {
        self.0.iter()
    }
}

impl<K: Into<String>, V: Into<SettingValue>> FromIterator<(K, V)> for Settings {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut settings = Settings::new();
        for (k, v) in iter {
            settings.insert(k, v);
        }
        settings
    }
}

/// True when a looked-up value is present and not blank.
pub fn is_set(value: Option<&str>) -> bool {
    value.is_some_and(|v| !v.trim().is_empty())
}
