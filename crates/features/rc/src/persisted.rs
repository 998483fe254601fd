use crate::error::{RcError, RcErrorExt};
use hm3_domain::bindings::BindingMap;
use hm3_domain::filters::FilterSet;
use hm3_domain::settings::{SettingValue, Settings};
use hm3_registry::{Finalized, Registry};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use tracing::info;

/// The runtime configuration snapshot read by the application on every request.
///
/// Settings keys sit at the top level next to the three computed keys; a setting named like
/// one of them is replaced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersistedConfig {
    #[serde(flatten)]
    pub settings: BTreeMap<String, SettingValue>,
    pub handler_modules: BindingMap,
    pub output_modules: BindingMap,
    pub input_filters: FilterSet,
}

impl PersistedConfig {
    #[must_use]
    pub fn new(settings: Settings, registry: &Registry<Finalized>, filters: FilterSet) -> Self {
        Self {
            settings: settings.into_passthrough(),
            handler_modules: registry.handlers().clone(),
            output_modules: registry.outputs().clone(),
            input_filters: filters,
        }
    }

    /// Pretty JSON; maps are sorted so equal configs serialize identically.
    ///
    /// # Errors
    /// Returns [`RcError::Serialization`] if serialization fails.
    pub fn to_bytes(&self) -> Result<Vec<u8>, RcError> {
        let mut bytes = serde_json::to_vec_pretty(self).context("Failed to encode hm3.rc")?;
        bytes.push(b'\n');
        Ok(bytes)
    }

    /// Overwrites `path`.
    ///
    /// # Errors
    /// Returns [`RcError`] if encoding or writing fails.
    pub fn write(&self, path: impl AsRef<Path>) -> Result<(), RcError> {
        let path = path.as_ref();
        let bytes = self.to_bytes()?;
        fs::write(path, &bytes).context(format!("Failed to write {}", path.display()))?;
        info!(path = %path.display(), bytes = bytes.len(), "hm3.rc file written");
        Ok(())
    }

    /// # Errors
    /// Returns [`RcError`] if the file is unreadable or not a persisted config.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, RcError> {
        let path = path.as_ref();
        let bytes = fs::read(path).context(format!("Failed to read {}", path.display()))?;
        serde_json::from_slice(&bytes).context(format!("Failed to decode {}", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hm3_domain::bindings::{Binding, BindingKind};

    fn sample() -> PersistedConfig {
        let mut registry = Registry::new();
        registry.add(BindingKind::Handler, "home", Binding::new("load", "core", true), None);
        registry.add(BindingKind::Output, "home", Binding::new("header", "core", false), None);
        let settings: Settings = [
            ("modules", SettingValue::from("core")),
            ("handler_modules", SettingValue::from("stale")),
            ("themes", SettingValue::List(vec!["dark".into(), "light".into()])),
        ]
        .into_iter()
        .collect();
        let mut filters = FilterSet::default();
        filters.allowed_pages.push("home".into());
        PersistedConfig::new(settings, &registry.finalize(), filters)
    }

    #[test]
    fn computed_keys_replace_settings() {
        let config = sample();
        assert!(!config.settings.contains_key("handler_modules"));
        assert_eq!(config.handler_modules["home"][0].name, "load");

        let json: serde_json::Value = serde_json::from_slice(&config.to_bytes().unwrap()).unwrap();
        assert_eq!(json["modules"], "core");
        assert_eq!(json["handler_modules"]["home"][0]["source"], "core");
        assert_eq!(json["input_filters"]["allowed_pages"][0], "home");
        assert_eq!(json["input_filters"]["allowed_get"], serde_json::json!([]));
    }

    #[test]
    fn encoding_is_deterministic() {
        assert_eq!(sample().to_bytes().unwrap(), sample().to_bytes().unwrap());
    }
}
