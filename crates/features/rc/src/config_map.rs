use crate::error::{RcError, RcErrorExt};
use crate::persisted::PersistedConfig;
use hm3_domain::bindings::Binding;
use std::fs;
use std::path::Path;
use tracing::info;

const HEAD: &str = concat!(
    r#"<!DOCTYPE html><html dir="ltr" class="ltr_page" lang=en><head><title>Config Map</title>"#,
    r#"<style type="text/css">.page { padding: 10px; font-size: 120%; } "#,
    ".mod { padding-right: 10px; padding-left: 40px; }</style></head><body><table>",
);
const TAIL: &str = "</table></body></html>";

/// HTML table listing, per page with handlers, its handler then output bindings.
#[must_use]
pub fn render_config_map(config: &PersistedConfig) -> String {
    let mut html = String::from(HEAD);
    for (page, handlers) in &config.handler_modules {
        html.push_str(&format!(r#"<tr><td colspan="2" class="page">{}</td></tr>"#, escape(page)));
        push_rows(&mut html, "handler", handlers);
        if let Some(outputs) = config.output_modules.get(page) {
            push_rows(&mut html, "output", outputs);
        }
    }
    html.push_str(TAIL);
    html
}

/// Renders the config map and overwrites `path` with it.
///
/// # Errors
/// Returns [`RcError::Io`] if the file cannot be written.
pub fn write_config_map(config: &PersistedConfig, path: impl AsRef<Path>) -> Result<(), RcError> {
    let path = path.as_ref();
    fs::write(path, render_config_map(config))
        .context(format!("Failed to write {}", path.display()))?;
    info!(path = %path.display(), "config map written");
    Ok(())
}

fn push_rows(html: &mut String, label: &str, bindings: &[Binding]) {
    for binding in bindings {
        html.push_str(&format!(
            r#"<tr><td class="mod">{label}</td><td>{}</td></tr>"#,
            escape(&binding.name)
        ));
    }
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use hm3_domain::bindings::BindingMap;
    use hm3_domain::filters::FilterSet;
    use std::collections::BTreeMap;

    fn map(entries: &[(&str, &[&str])]) -> BindingMap {
        entries
            .iter()
            .map(|(page, names)| {
                ((*page).to_owned(), names.iter().map(|n| Binding::new(*n, "core", false)).collect())
            })
            .collect()
    }

    #[test]
    fn pages_list_handlers_then_outputs() {
        let config = PersistedConfig {
            settings: BTreeMap::new(),
            handler_modules: map(&[("home", &["load"]), ("a<b", &["x"])]),
            output_modules: map(&[("home", &["header", "footer"]), ("orphan", &["y"])]),
            input_filters: FilterSet::default(),
        };
        let html = render_config_map(&config);

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.ends_with(TAIL));
        let home = html.find(">home<").unwrap();
        let load = html.find(">load<").unwrap();
        let footer = html.find(">footer<").unwrap();
        assert!(home < load && load < footer);
        assert!(html.contains("a&lt;b"));
        assert!(!html.contains("orphan"));
    }

    #[test]
    fn rows_render_exactly() {
        let config = PersistedConfig {
            settings: BTreeMap::new(),
            handler_modules: map(&[("home", &["load"])]),
            output_modules: map(&[("home", &["header"])]),
            input_filters: FilterSet::default(),
        };
        let expected = concat!(
            r#"<tr><td colspan="2" class="page">home</td></tr>"#,
            r#"<tr><td class="mod">handler</td><td>load</td></tr>"#,
            r#"<tr><td class="mod">output</td><td>header</td></tr>"#,
        );
        assert_eq!(render_config_map(&config), format!("{HEAD}{expected}{TAIL}"));
    }
}
