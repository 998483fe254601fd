use crate::descriptor::ModuleDescriptor;
use crate::error::ModuleError;
use hm3_domain::capabilities::Capabilities;
use hm3_domain::filters::FilterSet;
use hm3_registry::{Open, Registry};
use std::path::{Path, PathBuf};
use tracing::info;

/// Per-module line of the scan report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleSummary {
    pub name: String,
    pub capabilities: Capabilities,
}

/// Combined contributions of every enabled module, in declaration order.
#[derive(Debug, Default)]
pub struct ScanOutcome {
    pub script: String,
    pub style: String,
    pub filters: FilterSet,
    /// Asset directories relative to the application root.
    pub assets: Vec<PathBuf>,
    pub modules: Vec<ModuleSummary>,
}

impl ScanOutcome {
    fn absorb(&mut self, module: ModuleDescriptor, registry: &mut Registry<Open>) {
        let capabilities = module.capabilities();
        let ModuleDescriptor { name, script, style, setup, assets } = module;

        if let Some(script) = script {
            self.script.push_str(&script);
        }
        if let Some(style) = style {
            self.style.push_str(&style);
        }
        if let Some(setup) = setup {
            let filters = setup.apply(&name, registry);
            self.filters = std::mem::take(&mut self.filters).merge(filters);
        }
        if let Some(path) = assets {
            self.assets.push(path);
        }
        self.modules.push(ModuleSummary { name, capabilities });
    }
}

/// Scans `modules` under `root/modules/`, registering their bindings into `registry`.
///
/// # Errors
/// Stops at the first module whose present files cannot be read or parsed.
pub fn scan<'a>(
    root: &Path,
    modules: impl IntoIterator<Item = &'a str>,
    registry: &mut Registry<Open>,
) -> Result<ScanOutcome, ModuleError> {
    let mut outcome = ScanOutcome::default();

    for name in modules {
        let module = ModuleDescriptor::load(root, name)?;
        info!(module = name, capabilities = %module.capabilities(), "scanning module");
        outcome.absorb(module, registry);
    }

    Ok(outcome)
}
