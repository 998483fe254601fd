use hm3_domain::constants::{CSS_COMPRESS, JS_COMPRESS};
use hm3_domain::settings::{SettingValue, Settings};
use std::fmt;

/// How one asset kind is compressed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompressionStrategy {
    /// Shell command that reads the text on stdin and prints the result.
    External(String),
    /// In-process whitespace collapsing.
    Builtin,
}

impl fmt::Display for CompressionStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::External(command) => write!(f, "external `{command}`"),
            Self::Builtin => f.write_str("builtin"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompressionPlan {
    pub js: CompressionStrategy,
    pub css: CompressionStrategy,
}

impl CompressionPlan {
    /// Picks an external command for each kind whose key is set to a truthy text value.
    #[must_use]
    pub fn resolve(settings: &Settings) -> Self {
        Self { js: strategy_for(settings, JS_COMPRESS), css: strategy_for(settings, CSS_COMPRESS) }
    }
}

// INI truthiness: `off`, `no`, `false`, `none`, `0` and empty values leave the builtin in place.
fn strategy_for(settings: &Settings, key: &str) -> CompressionStrategy {
    match settings.enabled(key) {
        Some(SettingValue::Text(command)) => CompressionStrategy::External(command.trim().to_owned()),
        _ => CompressionStrategy::Builtin,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_keys_use_builtin() {
        let plan = CompressionPlan::resolve(&Settings::default());
        assert_eq!(plan.js, CompressionStrategy::Builtin);
        assert_eq!(plan.css, CompressionStrategy::Builtin);
    }

    #[test]
    fn commands_are_selected_per_kind() {
        let settings: Settings =
            [("js_compress", "uglifyjs -c -m"), ("css_compress", "")].into_iter().collect();
        let plan = CompressionPlan::resolve(&settings);
        assert_eq!(plan.js, CompressionStrategy::External("uglifyjs -c -m".into()));
        assert_eq!(plan.css, CompressionStrategy::Builtin);
    }

    #[test]
    fn falsy_values_disable_commands() {
        for value in ["", "   ", "0", "off", "false", "No", "none"] {
            let settings: Settings = [("js_compress", value)].into_iter().collect();
            assert_eq!(CompressionPlan::resolve(&settings).js, CompressionStrategy::Builtin);
        }
    }

    #[test]
    fn ini_off_switches_keep_builtin_for_both_kinds() {
        let settings: Settings =
            [("css_compress", "off"), ("js_compress", "false")].into_iter().collect();
        let plan = CompressionPlan::resolve(&settings);
        assert_eq!(plan.js, CompressionStrategy::Builtin);
        assert_eq!(plan.css, CompressionStrategy::Builtin);
    }

    #[test]
    fn list_values_are_never_commands() {
        let settings: Settings =
            [("css_compress", SettingValue::List(vec!["csso".into()]))].into_iter().collect();
        assert_eq!(CompressionPlan::resolve(&settings).css, CompressionStrategy::Builtin);
    }
}
