use crate::compress::{Compressor, escape_backslashes};
use crate::error::{AssetError, AssetErrorExt};
use crate::runner::CommandRunner;
use crate::strategy::CompressionPlan;
use hm3_domain::constants::{JS_LIBRARY, SCRIPT_FILE, STYLE_FILE};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// Paths of the two compiled files, both in the application root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bundle {
    pub script: PathBuf,
    pub style: PathBuf,
}

/// Compresses the combined sources and writes `site.css` and `site.js` under `root`.
///
/// The JavaScript library blob is prepended to the compressed script as-is. Both files are
/// written even when empty; without module scripts `site.js` stays empty and the library is
/// not needed.
///
/// # Errors
/// * [`AssetError::Io`] when a file cannot be written, or the library blob is missing while
///   there is script to compile.
/// * [`AssetError::Compressor`] from a strict [`Compressor`].
pub fn write_bundle<R: CommandRunner>(
    root: &Path,
    script: &str,
    style: &str,
    plan: &CompressionPlan,
    compressor: &Compressor<R>,
) -> Result<Bundle, AssetError> {
    let library = if script.is_empty() {
        String::new()
    } else {
        let library_path = root.join(JS_LIBRARY);
        fs::read_to_string(&library_path)
            .context(format!("Failed to read JavaScript library {}", library_path.display()))?
    };

    let style_path = root.join(STYLE_FILE);
    let css = compressor.compress(&plan.css, style).context(STYLE_FILE)?;
    fs::write(&style_path, &css).context(format!("Failed to write {}", style_path.display()))?;
    info!(strategy = %plan.css, bytes = css.len(), "site.css file created");

    let script_path = root.join(SCRIPT_FILE);
    let js = compressor.compress(&plan.js, &escape_backslashes(script)).context(SCRIPT_FILE)?;
    let mut compiled = library;
    compiled.push_str(&js);
    fs::write(&script_path, &compiled)
        .context(format!("Failed to write {}", script_path.display()))?;
    info!(strategy = %plan.js, bytes = compiled.len(), "site.js file created");

    Ok(Bundle { script: script_path, style: style_path })
}
