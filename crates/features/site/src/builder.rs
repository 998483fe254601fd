use crate::entry::EntryValues;
use crate::error::{SiteError, SiteErrorExt};
use hm3_domain::constants::{
    CACHE_ID_BYTES, ENTRY_FILE, SCRIPT_FILE, SITE_DIR, SITE_ID_BYTES, STYLE_FILE,
};
use hm3_kernel::ident::unique_id;
use private::Sealed;
use std::fs;
use std::path::{self, MAIN_SEPARATOR, Path, PathBuf};
use tracing::{debug, info};
use walkdir::WalkDir;

#[derive(Debug, Default)]
struct SiteConfig {
    target: Option<PathBuf>,
    entry: Option<PathBuf>,
    assets: Vec<PathBuf>,
}

#[derive(Debug, Default)]
pub struct NoRoot;
#[derive(Debug)]
pub struct WithRoot(PathBuf);

mod private {
    pub(super) trait Sealed {}
}
impl Sealed for NoRoot {}
impl Sealed for WithRoot {}

/// Assembles the production tree. An application root is required before
/// [`SiteBuilder::create`].
#[allow(private_bounds)]
#[derive(Debug, Default)]
pub struct SiteBuilder<S: Sealed = NoRoot> {
    state: S,
    config: SiteConfig,
}

#[allow(private_bounds)]
impl<S: Sealed> SiteBuilder<S> {
    /// Output directory. Relative paths resolve against the root; defaults to `site/`.
    #[must_use = "The builder must be configured before it can be used to create the site"]
    pub fn target(mut self, dir: impl Into<PathBuf>) -> Self {
        self.config.target = Some(dir.into());
        self
    }

    /// Template entry file. Relative paths resolve against the root; defaults to `index.php`.
    #[must_use = "The builder must be configured before it can be used to create the site"]
    pub fn entry(mut self, file: impl Into<PathBuf>) -> Self {
        self.config.entry = Some(file.into());
        self
    }

    /// Module asset directories, relative to the root, mirrored into the target.
    #[must_use = "The builder must be configured before it can be used to create the site"]
    pub fn assets(mut self, dirs: impl IntoIterator<Item = PathBuf>) -> Self {
        self.config.assets.extend(dirs);
        self
    }

    fn transition<N: Sealed>(self, state: N) -> SiteBuilder<N> {
        SiteBuilder { state, config: self.config }
    }
}

impl SiteBuilder<NoRoot> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use = "The builder must be configured before it can be used to create the site"]
    pub fn root(self, root: impl Into<PathBuf>) -> SiteBuilder<WithRoot> {
        self.transition(WithRoot(root.into()))
    }
}

impl SiteBuilder<WithRoot> {
    /// Writes the production tree.
    ///
    /// 1. Creates the target directory.
    /// 2. Copies the compiled `site.js` and `site.css`.
    /// 3. Stamps the entry template with fresh identifiers, the absolute application path and
    ///    debug mode off.
    /// 4. Copies the immediate files of every asset directory to the same relative path.
    ///
    /// Nothing is rolled back on failure; re-running overwrites the partial tree.
    ///
    /// # Errors
    /// * [`SiteError::Io`] / [`SiteError::Walk`] on filesystem failures.
    /// * [`SiteError::Kernel`] when identifiers cannot be generated.
    /// * [`SiteError::MissingField`] when the template lacks one of the stamped constants.
    pub fn create(self) -> Result<ProductionTree, SiteError> {
        let root = self.state.0;
        let target = resolve(&root, self.config.target, SITE_DIR);
        let entry = resolve(&root, self.config.entry, ENTRY_FILE);

        fs::create_dir_all(&target)
            .context(format!("Failed to create {}", target.display()))?;
        info!(target = %target.display(), "creating production site");

        for file in [STYLE_FILE, SCRIPT_FILE] {
            copy(&root.join(file), &target.join(file))?;
        }

        let values = EntryValues {
            app_path: app_path(&root)?,
            cache_id: unique_id(CACHE_ID_BYTES)?,
            site_id: unique_id(SITE_ID_BYTES)?,
        };
        let template = fs::read_to_string(&entry)
            .context(format!("Failed to read entry template {}", entry.display()))?;
        let stamped = values.apply(&template).context(entry.display().to_string())?;
        let entry_name = entry.file_name().map_or_else(|| ENTRY_FILE.into(), ToOwned::to_owned);
        let entry_out = target.join(entry_name);
        fs::write(&entry_out, stamped)
            .context(format!("Failed to write {}", entry_out.display()))?;

        let mut copied_files = 0;
        for dir in &self.config.assets {
            copied_files += mirror_files(&root.join(dir), &target.join(dir))?;
        }
        debug!(copied_files, "module assets copied");

        Ok(ProductionTree {
            dir: target,
            entry: entry_out,
            cache_id: values.cache_id,
            site_id: values.site_id,
            copied_files,
        })
    }
}

/// Result of [`SiteBuilder::create`].
#[derive(Debug, Clone)]
pub struct ProductionTree {
    pub dir: PathBuf,
    pub entry: PathBuf,
    pub cache_id: String,
    pub site_id: String,
    /// Number of module asset files copied.
    pub copied_files: usize,
}

fn resolve(root: &Path, configured: Option<PathBuf>, default: &str) -> PathBuf {
    root.join(configured.unwrap_or_else(|| PathBuf::from(default)))
}

/// Absolute application path with a trailing separator.
fn app_path(root: &Path) -> Result<String, SiteError> {
    let absolute = path::absolute(root)
        .context(format!("Failed to resolve application path {}", root.display()))?;
    let mut app_path = absolute.display().to_string();
    if !app_path.ends_with(MAIN_SEPARATOR) {
        app_path.push(MAIN_SEPARATOR);
    }
    Ok(app_path)
}

fn copy(from: &Path, to: &Path) -> Result<(), SiteError> {
    fs::copy(from, to)
        .context(format!("Failed to copy {} to {}", from.display(), to.display()))?;
    Ok(())
}

/// Copies the regular files directly inside `from`; subdirectories are skipped.
fn mirror_files(from: &Path, to: &Path) -> Result<usize, SiteError> {
    fs::create_dir_all(to).context(format!("Failed to create {}", to.display()))?;

    let mut copied = 0;
    for entry in WalkDir::new(from).min_depth(1).max_depth(1).sort_by_file_name() {
        let entry = entry.context(from.display().to_string())?;
        if !entry.file_type().is_file() {
            continue;
        }
        copy(entry.path(), &to.join(entry.file_name()))?;
        copied += 1;
    }
    Ok(copied)
}
