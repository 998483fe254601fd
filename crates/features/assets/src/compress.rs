use crate::error::AssetError;
use crate::runner::CommandRunner;
use crate::strategy::CompressionStrategy;
use tracing::warn;

/// Whitespace the builtin compressor collapses: space, tab, LF, CR, form feed, vertical tab.
const fn is_collapsible(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r' | '\x0C' | '\x0B')
}

/// Replaces every maximal whitespace run with one space.
#[must_use]
pub fn collapse_whitespace(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut in_run = false;
    for c in text.chars() {
        if is_collapsible(c) {
            if !in_run {
                out.push(' ');
            }
            in_run = true;
        } else {
            out.push(c);
            in_run = false;
        }
    }
    out
}

/// Doubles every backslash of the combined script before it is compressed.
#[must_use]
pub fn escape_backslashes(script: &str) -> String {
    script.replace('\\', "\\\\")
}

/// Applies a [`CompressionStrategy`], delegating external commands to a [`CommandRunner`].
///
/// By default a failing command is logged and whatever it printed is used. In strict mode the
/// failure is returned instead.
#[derive(Debug)]
pub struct Compressor<R> {
    runner: R,
    strict: bool,
}

impl<R: CommandRunner> Compressor<R> {
    pub const fn new(runner: R) -> Self {
        Self { runner, strict: false }
    }

    #[must_use]
    pub const fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// # Errors
    /// Only in strict mode: [`AssetError`] when the command cannot run, exits non-zero or
    /// times out.
    pub fn compress(
        &self,
        strategy: &CompressionStrategy,
        text: &str,
    ) -> Result<String, AssetError> {
        match strategy {
            CompressionStrategy::Builtin => Ok(collapse_whitespace(text)),
            CompressionStrategy::External(_) if text.is_empty() => Ok(String::new()),
            CompressionStrategy::External(command) => self.run_external(command, text),
        }
    }

    fn run_external(&self, command: &str, text: &str) -> Result<String, AssetError> {
        let output = match self.runner.run(command, text) {
            Ok(output) => output,
            Err(e) if self.strict => return Err(e),
            Err(e) => {
                warn!(command, error = %e, "compressor failed, output will be empty");
                return Ok(String::new());
            },
        };

        if !output.success {
            if self.strict {
                return Err(AssetError::Compressor {
                    message: format!("`{command}` exited with {}", describe_exit(output.code))
                        .into(),
                    context: None,
                });
            }
            warn!(command, code = ?output.code, "compressor exited unsuccessfully");
        }

        Ok(output.stdout.lines().map(str::trim_end).collect())
    }
}

fn describe_exit(code: Option<i32>) -> String {
    code.map_or_else(|| "a signal".to_owned(), |code| format!("status {code}"))
}
