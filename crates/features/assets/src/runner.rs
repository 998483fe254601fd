use crate::error::{AssetError, AssetErrorExt};
use std::io::{Read, Write};
use std::process::{Child, Command, ExitStatus, Stdio};
use std::thread;
use std::time::{Duration, Instant};
use tracing::debug;

const POLL_INTERVAL: Duration = Duration::from_millis(25);

/// What an external command printed and how it exited.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    pub stdout: String,
    pub success: bool,
    pub code: Option<i32>,
}

/// Runs a compressor command with the text to compress on stdin.
pub trait CommandRunner {
    /// # Errors
    /// Returns [`AssetError`] when the command cannot be started, its streams fail, or it
    /// outlives the runner's timeout. A non-zero exit is reported through
    /// [`CommandOutput::success`], not as an error.
    fn run(&self, command: &str, input: &str) -> Result<CommandOutput, AssetError>;
}

/// Runs commands through the platform shell (`sh -c`, `cmd /C` on Windows).
#[derive(Debug, Clone, Default)]
pub struct ShellRunner {
    timeout: Option<Duration>,
}

impl ShellRunner {
    /// Without a timeout the caller blocks until the command exits.
    #[must_use]
    pub const fn new(timeout: Option<Duration>) -> Self {
        Self { timeout }
    }

    fn wait(&self, child: &mut Child, command: &str) -> Result<ExitStatus, AssetError> {
        let Some(timeout) = self.timeout else {
            return child.wait().context(format!("Failed to wait for `{command}`"));
        };

        let deadline = Instant::now() + timeout;
        loop {
            if let Some(status) =
                child.try_wait().context(format!("Failed to poll `{command}`"))?
            {
                return Ok(status);
            }
            if Instant::now() >= deadline {
                // The process may already be gone; the timeout is what gets reported.
                let _ = child.kill();
                let _ = child.wait();
                return Err(AssetError::Compressor {
                    message: format!("`{command}` timed out after {}s", timeout.as_secs()).into(),
                    context: None,
                });
            }
            thread::sleep(POLL_INTERVAL);
        }
    }
}

impl CommandRunner for ShellRunner {
    fn run(&self, command: &str, input: &str) -> Result<CommandOutput, AssetError> {
        debug!(command, bytes = input.len(), "running compressor");

        let mut child = shell(command)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .spawn()
            .context(format!("Failed to spawn `{command}`"))?;

        // Feed stdin and drain stdout on their own threads so a large payload cannot
        // deadlock against a full pipe.
        let stdin = child.stdin.take();
        let payload = input.to_owned();
        let writer = thread::spawn(move || {
            if let Some(mut stdin) = stdin {
                // A command that exits without reading closes the pipe early.
                let _ = stdin.write_all(payload.as_bytes());
            }
        });

        let stdout = child.stdout.take();
        let reader = thread::spawn(move || -> std::io::Result<Vec<u8>> {
            let mut buf = Vec::new();
            if let Some(mut stdout) = stdout {
                stdout.read_to_end(&mut buf)?;
            }
            Ok(buf)
        });

        let status = self.wait(&mut child, command)?;
        let _ = writer.join();
        let stdout = reader
            .join()
            .map_err(|_| AssetError::Compressor {
                message: "stdout reader panicked".into(),
                context: Some(format!("`{command}`").into()),
            })?
            .context(format!("Failed to read output of `{command}`"))?;

        Ok(CommandOutput {
            stdout: String::from_utf8_lossy(&stdout).into_owned(),
            success: status.success(),
            code: status.code(),
        })
    }
}

#[cfg(not(windows))]
fn shell(command: &str) -> Command {
    let mut cmd = Command::new("sh");
    cmd.arg("-c").arg(command);
    cmd
}

#[cfg(windows)]
fn shell(command: &str) -> Command {
    let mut cmd = Command::new("cmd");
    cmd.arg("/C").arg(command);
    cmd
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    #[test]
    fn pipes_input_through_the_command() {
        let output = ShellRunner::default().run("tr a-z A-Z", "abc\ndef\n").unwrap();
        assert!(output.success);
        assert_eq!(output.stdout, "ABC\nDEF\n");
    }

    #[test]
    fn reports_non_zero_exit() {
        let output = ShellRunner::default().run("echo partial; exit 3", "").unwrap();
        assert!(!output.success);
        assert_eq!(output.code, Some(3));
        assert_eq!(output.stdout, "partial\n");
    }

    #[test]
    fn kills_commands_that_outlive_the_timeout() {
        let runner = ShellRunner::new(Some(Duration::from_millis(100)));
        let err = runner.run("sleep 5", "").unwrap_err();
        assert!(matches!(err, AssetError::Compressor { .. }));
        assert!(err.to_string().contains("timed out"));
    }

    #[test]
    fn large_payloads_do_not_deadlock() {
        let input = "x".repeat(1 << 20);
        let output = ShellRunner::new(Some(Duration::from_secs(10))).run("cat", &input).unwrap();
        assert_eq!(output.stdout.len(), input.len());
    }
}
