//! Flat key → value settings of one application tree.

use crate::constants::{MODULES, RESERVED_KEYS};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Values the INI loader treats as "off" (matched case-insensitively after trimming).
const FALSY: [&str; 6] = ["", "0", "false", "off", "no", "none"];

/// A single settings value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SettingValue {
    Text(String),
    List(Vec<String>),
}

impl SettingValue {
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            Self::List(_) => None,
        }
    }

    /// INI truthiness: empty text, `0`, `false`, `off`, `no`, `none` and empty lists are off.
    #[must_use]
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Text(s) => {
                let s = s.trim();
                !FALSY.iter().any(|f| f.eq_ignore_ascii_case(s))
            },
            Self::List(items) => !items.is_empty(),
        }
    }
}

impl From<&str> for SettingValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for SettingValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<Vec<String>> for SettingValue {
    fn from(value: Vec<String>) -> Self {
        Self::List(value)
    }
}

/// Settings loaded once per build. Keys are kept sorted so every snapshot is deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Settings(BTreeMap<String, SettingValue>);

impl Settings {
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&SettingValue> {
        self.0.get(key)
    }

    #[must_use]
    pub fn text(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(SettingValue::as_text)
    }

    /// Returns the value only when it is set and truthy.
    #[must_use]
    pub fn enabled(&self, key: &str) -> Option<&SettingValue> {
        self.get(key).filter(|v| v.is_truthy())
    }

    #[must_use]
    pub fn flag(&self, key: &str) -> bool {
        self.enabled(key).is_some()
    }

    #[must_use]
    pub fn number(&self, key: &str) -> Option<u64> {
        self.text(key).and_then(|s| s.trim().parse().ok())
    }

    /// Enabled module names in declaration order.
    ///
    /// Accepts the INI form (`a,b,c`) and a list value. Names are trimmed; empty names are
    /// dropped. Duplicates are kept.
    #[must_use]
    pub fn modules(&self) -> Vec<&str> {
        let names: Vec<&str> = match self.get(MODULES) {
            Some(SettingValue::Text(raw)) => raw.split(',').collect(),
            Some(SettingValue::List(items)) => items.iter().map(String::as_str).collect(),
            None => return Vec::new(),
        };
        names.into_iter().map(str::trim).filter(|n| !n.is_empty()).collect()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &SettingValue)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Owned entries minus the keys the build computes itself.
    #[must_use]
    pub fn into_passthrough(self) -> BTreeMap<String, SettingValue> {
        let mut map = self.0;
        for key in RESERVED_KEYS {
            map.remove(key);
        }
        map
    }
}

impl<K, V> FromIterator<(K, V)> for Settings
where
    K: Into<String>,
    V: Into<SettingValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}
