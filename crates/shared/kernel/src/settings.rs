//! Settings source: an INI (or TOML) file overlaid with `HM3__*` environment variables.

use crate::error::{KernelError, KernelErrorExt};
use config::{Config, Environment, File, FileFormat, Map, Source, Value, ValueKind};
use hm3_domain::settings::{SettingValue, Settings};
use std::collections::BTreeMap;
use std::path::Path;
use tracing::{info, warn};

/// Prefix of environment overrides, e.g. `HM3__JS_COMPRESS=uglifyjs`.
pub const ENV_PREFIX: &str = "HM3";

/// Loads the flat settings of an application tree.
///
/// Layers, lowest priority first:
/// 1. **File**: INI by default, TOML when the extension is `.toml`. INI sections are
///    flattened into the top level, section keys overriding global ones.
/// 2. **Environment**: variables prefixed with `HM3__`.
///
/// Scalars become [`SettingValue::Text`] (booleans and numbers in their text form), arrays
/// become [`SettingValue::List`].
///
/// # Returns
/// * `Ok(None)` when the file does not exist or contains no keys. The caller reports this
///   and skips the build.
/// * `Ok(Some(settings))` otherwise.
///
/// # Errors
/// Returns [`KernelError::Config`] when the file exists but cannot be parsed, or holds a
/// value that has no text form (such as an array of tables).
pub fn load_settings(path: impl AsRef<Path>) -> Result<Option<Settings>, KernelError> {
    let path = path.as_ref();
    if !path.is_file() {
        warn!(path = %path.display(), "Settings file not found");
        return Ok(None);
    }

    let format = match path.extension().and_then(|e| e.to_str()) {
        Some("toml") => FileFormat::Toml,
        _ => FileFormat::Ini,
    };

    info!(path = %path.display(), "Loading settings");

    let raw = Config::builder()
        .add_source(File::from(path).format(format).required(true))
        .add_source(Environment::with_prefix(ENV_PREFIX).separator("__"))
        .build()
        .context(format!("Failed to read settings from {}", path.display()))?
        .collect()
        .context("Failed to collect settings")?;

    let mut entries = BTreeMap::new();
    flatten(raw, &mut entries)?;

    if entries.is_empty() {
        warn!(path = %path.display(), "Settings file is empty");
        return Ok(None);
    }

    Ok(Some(entries.into_iter().collect()))
}

fn flatten(
    table: Map<String, Value>,
    out: &mut BTreeMap<String, SettingValue>,
) -> Result<(), KernelError> {
    let mut sections = BTreeMap::new();

    for (key, value) in table {
        match value.kind {
            ValueKind::Table(section) => {
                sections.insert(key, section);
            },
            ValueKind::Array(items) => {
                let list = items
                    .into_iter()
                    .map(Value::into_string)
                    .collect::<Result<Vec<_>, _>>()
                    .context(format!("Setting '{key}' must be a list of scalars"))?;
                out.insert(key, SettingValue::List(list));
            },
            ValueKind::Nil => {
                out.insert(key, SettingValue::Text(String::new()));
            },
            kind => {
                let text = Value::new(None, kind)
                    .into_string()
                    .context(format!("Setting '{key}' has no text form"))?;
                out.insert(key, SettingValue::Text(text));
            },
        }
    }

    for (_, section) in sections {
        flatten(section, out)?;
    }

    Ok(())
}
