mod args;

use crate::args::Cli;
use anyhow::Context;
use clap::Parser;
use hm3::BuildOutcome;
use hm3_logger::{LevelFilter, Logger};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose { LevelFilter::DEBUG } else { LevelFilter::INFO };
    let mut logger = Logger::builder().name(env!("CARGO_BIN_NAME")).level(level);
    if let Some(dir) = &cli.log_dir {
        logger = logger.file(dir);
    }
    let _log = logger.init()?;

    match hm3::run(&cli.options()).context("Build failed")? {
        BuildOutcome::Skipped => {},
        BuildOutcome::Completed(report) => {
            tracing::debug!(modules = report.modules.len(), "done");
        },
    }

    Ok(())
}
