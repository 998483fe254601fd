use crate::error::{ModuleError, ModuleErrorExt};
use crate::setup::SetupDescriptor;
use hm3_domain::capabilities::Capabilities;
use hm3_domain::constants::{ASSETS_DIR, MODULES_DIR, SCRIPT_FILE, SETUP_FILE, STYLE_FILE};
use std::fs;
use std::path::{Path, PathBuf};

/// Everything a module contributes, loaded from `modules/<name>/`.
#[derive(Debug)]
pub struct ModuleDescriptor {
    pub name: String,
    pub script: Option<String>,
    pub style: Option<String>,
    pub setup: Option<SetupDescriptor>,
    /// Asset directory relative to the application root.
    pub assets: Option<PathBuf>,
}

impl ModuleDescriptor {
    /// Loads whatever the module provides. Absent files are not an error.
    ///
    /// # Errors
    /// Returns [`ModuleError`] when a present file cannot be read or its setup descriptor is
    /// invalid.
    pub fn load(root: &Path, name: &str) -> Result<Self, ModuleError> {
        let relative = Path::new(MODULES_DIR).join(name);
        let dir = root.join(&relative);

        let script = read_optional(&dir.join(SCRIPT_FILE))?;
        let style = read_optional(&dir.join(STYLE_FILE))?;

        let setup_path = dir.join(SETUP_FILE);
        let setup = match read_optional(&setup_path)? {
            Some(text) => Some(
                SetupDescriptor::parse(&text).context(setup_path.display().to_string())?,
            ),
            None => None,
        };

        let assets_relative = relative.join(ASSETS_DIR);
        let assets = root.join(&assets_relative).is_dir().then_some(assets_relative);

        Ok(Self { name: name.to_owned(), script, style, setup, assets })
    }

    #[must_use]
    pub fn capabilities(&self) -> Capabilities {
        let mut caps = Capabilities::empty();
        caps.set(Capabilities::SCRIPT, self.script.is_some());
        caps.set(Capabilities::STYLE, self.style.is_some());
        caps.set(Capabilities::SETUP, self.setup.is_some());
        caps.set(Capabilities::ASSETS, self.assets.is_some());
        caps
    }
}

fn read_optional(path: &Path) -> Result<Option<String>, ModuleError> {
    if !path.is_file() {
        return Ok(None);
    }
    fs::read_to_string(path).map(Some).context(format!("Failed to read {}", path.display()))
}
