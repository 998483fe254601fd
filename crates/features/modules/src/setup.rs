//! `setup.toml`: a module's bindings and allow-lists.

use crate::error::ModuleError;
use hm3_domain::bindings::{Binding, BindingKind, Placement};
use hm3_domain::filters::FilterSet;
use hm3_registry::{Open, Registry};
use serde::Deserialize;

/// Parsed setup descriptor of one module.
///
/// ```toml
/// [[handler]]
/// page = "home"
/// name = "load_user"
/// logged_in = true
/// after = "login"
///
/// [[output]]
/// page = "*"
/// name = "header_start"
///
/// [filters]
/// allowed_pages = ["home"]
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SetupDescriptor {
    #[serde(rename = "handler")]
    pub handlers: Vec<Registration>,
    #[serde(rename = "output")]
    pub outputs: Vec<Registration>,
    pub filters: FilterSet,
}

/// One `[[handler]]` or `[[output]]` entry.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Registration {
    /// Page identifier, or `"*"` for every page.
    pub page: String,
    pub name: String,
    #[serde(default)]
    pub logged_in: bool,
    pub before: Option<String>,
    pub after: Option<String>,
}

impl Registration {
    fn placement(&self) -> Option<Placement> {
        match (&self.before, &self.after) {
            (Some(marker), _) => Some(Placement::before(marker.clone())),
            (None, Some(marker)) => Some(Placement::after(marker.clone())),
            (None, None) => None,
        }
    }

    fn validate(&self, kind: BindingKind) -> Result<(), ModuleError> {
        let problem = if self.page.trim().is_empty() {
            Some(format!("{kind} '{}' has an empty page", self.name))
        } else if self.name.trim().is_empty() {
            Some(format!("{kind} on page '{}' has an empty name", self.page))
        } else if self.before.is_some() && self.after.is_some() {
            Some(format!("{kind} '{}' sets both `before` and `after`", self.name))
        } else {
            None
        };

        problem.map_or(Ok(()), |message| {
            Err(ModuleError::InvalidSetup { message: message.into(), context: None })
        })
    }
}

impl SetupDescriptor {
    /// Parses and validates a descriptor.
    ///
    /// # Errors
    /// * [`ModuleError::Parse`] for malformed TOML or unknown keys.
    /// * [`ModuleError::InvalidSetup`] for empty pages/names or conflicting placements.
    pub fn parse(text: &str) -> Result<Self, ModuleError> {
        let descriptor: Self = toml::from_str(text)?;
        for entry in &descriptor.handlers {
            entry.validate(BindingKind::Handler)?;
        }
        for entry in &descriptor.outputs {
            entry.validate(BindingKind::Output)?;
        }
        Ok(descriptor)
    }

    /// Registers the bindings on behalf of `module` and hands back its allow-lists.
    pub fn apply(self, module: &str, registry: &mut Registry<Open>) -> FilterSet {
        let entries = self
            .handlers
            .into_iter()
            .map(|e| (BindingKind::Handler, e))
            .chain(self.outputs.into_iter().map(|e| (BindingKind::Output, e)));

        for (kind, entry) in entries {
            let placement = entry.placement();
            let binding = Binding::new(entry.name, module, entry.logged_in);
            registry.add(kind, entry.page, binding, placement);
        }

        self.filters
    }
}
