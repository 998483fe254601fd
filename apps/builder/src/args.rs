//! # CLI Argument Definitions

use clap::Parser;
use hm3::BuildOptions;
use std::path::PathBuf;

/// Assembles an hm3 application: compiles module assets, writes `hm3.rc` and creates the
/// production site.
#[derive(Debug, Parser)]
#[command(name = "hm3-build")]
#[command(author = env!("CARGO_PKG_AUTHORS"))]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub(crate) struct Cli {
    /// Application root
    #[arg(long, default_value = ".")]
    pub(crate) root: PathBuf,

    /// Settings file, relative to the root
    #[arg(long)]
    pub(crate) settings: Option<PathBuf>,

    /// Production directory, relative to the root
    #[arg(long)]
    pub(crate) target: Option<PathBuf>,

    /// Entry template, relative to the root
    #[arg(long)]
    pub(crate) entry: Option<PathBuf>,

    /// Fail the build when an external compressor fails or times out
    #[arg(long)]
    pub(crate) strict_compress: bool,

    /// Also write config_map.html
    #[arg(long)]
    pub(crate) config_map: bool,

    /// Also log to <DIR>/hm3-build.log
    #[arg(long, value_name = "DIR")]
    pub(crate) log_dir: Option<PathBuf>,

    /// Log at debug level
    #[arg(short, long)]
    pub(crate) verbose: bool,
}

impl Cli {
    pub(crate) fn options(&self) -> BuildOptions {
        BuildOptions {
            root: self.root.clone(),
            settings: self.settings.clone(),
            target: self.target.clone(),
            entry: self.entry.clone(),
            strict_compress: self.strict_compress,
            config_map: self.config_map,
        }
    }
}
