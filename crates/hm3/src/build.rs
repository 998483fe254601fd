use crate::error::BuildError;
use hm3_assets::{Bundle, CommandRunner, CompressionPlan, Compressor, ShellRunner, write_bundle};
use hm3_domain::constants::{COMPRESS_STRICT, COMPRESS_TIMEOUT, CONFIG_MAP_FILE, RC_FILE, SETTINGS_FILE};
use hm3_domain::filters::FilterSet;
use hm3_domain::settings::Settings;
use hm3_kernel::settings::load_settings;
use hm3_modules::{ModuleSummary, scan};
use hm3_rc::{PersistedConfig, write_config_map};
use hm3_registry::Registry;
use hm3_site::{ProductionTree, SiteBuilder};
use std::path::PathBuf;
use std::time::Duration;
use tracing::{debug, info};

/// Inputs of one build. Relative paths resolve against `root`.
#[derive(Debug, Clone, Default)]
pub struct BuildOptions {
    /// Application root: holds the settings, `modules/`, `third_party/` and the entry file.
    pub root: PathBuf,
    /// Settings file; `hm3.ini` in the root when unset.
    pub settings: Option<PathBuf>,
    /// Production directory; `site/` in the root when unset.
    pub target: Option<PathBuf>,
    /// Entry template; `index.php` in the root when unset.
    pub entry: Option<PathBuf>,
    /// Fail on compressor errors. Also enabled by the `compress_strict` setting.
    pub strict_compress: bool,
    /// Also write `config_map.html`.
    pub config_map: bool,
}

impl BuildOptions {
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into(), ..Self::default() }
    }

    fn settings_path(&self) -> PathBuf {
        self.root.join(self.settings.clone().unwrap_or_else(|| PathBuf::from(SETTINGS_FILE)))
    }
}

#[derive(Debug)]
pub enum BuildOutcome {
    /// No settings (or empty settings); nothing was written.
    Skipped,
    Completed(Box<BuildReport>),
}

/// What a completed build produced.
#[derive(Debug)]
pub struct BuildReport {
    pub modules: Vec<ModuleSummary>,
    pub filters: FilterSet,
    pub bundle: Bundle,
    pub rc: PathBuf,
    pub config_map: Option<PathBuf>,
    pub site: ProductionTree,
}

/// Runs the whole pipeline with the platform shell for external compressors.
///
/// # Errors
/// Returns the first stage failure as a [`BuildError`].
pub fn run(options: &BuildOptions) -> Result<BuildOutcome, BuildError> {
    let Some(settings) = settings(options)? else {
        return Ok(BuildOutcome::Skipped);
    };
    let timeout = settings.number(COMPRESS_TIMEOUT).filter(|s| *s > 0).map(Duration::from_secs);
    execute(options, settings, ShellRunner::new(timeout))
}

/// Same as [`run`] with a caller-supplied [`CommandRunner`]; `compress_timeout` is the
/// runner's concern.
///
/// # Errors
/// Returns the first stage failure as a [`BuildError`].
pub fn run_with_runner<R: CommandRunner>(
    options: &BuildOptions,
    runner: R,
) -> Result<BuildOutcome, BuildError> {
    match settings(options)? {
        Some(settings) => execute(options, settings, runner),
        None => Ok(BuildOutcome::Skipped),
    }
}

fn settings(options: &BuildOptions) -> Result<Option<Settings>, BuildError> {
    let path = options.settings_path();
    match load_settings(&path)? {
        Some(settings) if !settings.is_empty() => {
            debug!(path = %path.display(), keys = settings.len(), "settings loaded");
            Ok(Some(settings))
        },
        _ => {
            info!(path = %path.display(), "No settings found");
            Ok(None)
        },
    }
}

fn execute<R: CommandRunner>(
    options: &BuildOptions,
    settings: Settings,
    runner: R,
) -> Result<BuildOutcome, BuildError> {
    let root = &options.root;

    let plan = CompressionPlan::resolve(&settings);
    info!(js = %plan.js, css = %plan.css, "compression strategies resolved");

    let mut registry = Registry::new();
    let scanned = scan(root, settings.modules(), &mut registry)?;

    let strict = options.strict_compress || settings.flag(COMPRESS_STRICT);
    let compressor = Compressor::new(runner).strict(strict);
    let bundle = write_bundle(root, &scanned.script, &scanned.style, &plan, &compressor)?;

    debug!(queued = registry.queued(), "finalizing registrations");
    let registry = registry.finalize();

    let rc = root.join(RC_FILE);
    let persisted = PersistedConfig::new(settings, &registry, scanned.filters.clone());
    persisted.write(&rc)?;

    let config_map = if options.config_map {
        let path = root.join(CONFIG_MAP_FILE);
        write_config_map(&persisted, &path)?;
        Some(path)
    } else {
        None
    };

    let mut site = SiteBuilder::new().root(root).assets(scanned.assets);
    if let Some(target) = &options.target {
        site = site.target(target);
    }
    if let Some(entry) = &options.entry {
        site = site.entry(entry);
    }
    let site = site.create()?;

    info!(modules = scanned.modules.len(), site = %site.dir.display(), "build complete");

    Ok(BuildOutcome::Completed(Box::new(BuildReport {
        modules: scanned.modules,
        filters: scanned.filters,
        bundle,
        rc,
        config_map,
        site,
    })))
}
