//! Access to the OS facilities that hold the machine identity.
//!
//! `SystemProbe` is implemented by [`HostProbe`] for the real host and by
//! test doubles that return canned output for a simulated platform.

use std::future::Future;
use std::path::Path;
use std::pin::Pin;
use std::process::Stdio;

use tracing::debug;

use crate::MachineError;

/// Boxed future returned by probe calls.
pub type ProbeFuture<'a> = Pin<Box<dyn Future<Output = Result<String, MachineError>> + Send + 'a>>;

/// Black-box OS collaborator: runs commands and reads files as text.
pub trait SystemProbe: Send + Sync {
    /// Runs `program` with `args` and returns its stdout.
    ///
    /// A spawn error or non-zero exit status is a
    /// [`MachineError::CommandFailed`].
    fn run_command<'a>(&'a self, program: &'a str, args: &'a [&'a str]) -> ProbeFuture<'a>;

    /// Reads the whole file at `path` as UTF-8.
    fn read_file<'a>(&'a self, path: &'a Path) -> ProbeFuture<'a>;
}

/// Probe backed by `tokio::process` and `tokio::fs`.
#[derive(Debug, Clone, Copy, Default)]
pub struct HostProbe;

impl SystemProbe for HostProbe {
    fn run_command<'a>(&'a self, program: &'a str, args: &'a [&'a str]) -> ProbeFuture<'a> {
        Box::pin(async move {
            let command = render_command(program, args);
            debug!(%command, "running platform probe");

            let output = tokio::process::Command::new(program)
                .args(args)
                .stdin(Stdio::null())
                .kill_on_drop(true)
                .output()
                .await
                .map_err(|e| MachineError::CommandFailed {
                    command: command.clone(),
                    reason: e.to_string(),
                })?;

            if !output.status.success() {
                let stderr = String::from_utf8_lossy(&output.stderr);
                return Err(MachineError::CommandFailed {
                    command,
                    reason: format!("{} {}", output.status, stderr.trim())
                        .trim_end()
                        .to_string(),
                });
            }

            Ok(String::from_utf8_lossy(&output.stdout).into_owned())
        })
    }

    fn read_file<'a>(&'a self, path: &'a Path) -> ProbeFuture<'a> {
        Box::pin(async move {
            debug!(path = %path.display(), "reading platform identity file");
            tokio::fs::read_to_string(path)
                .await
                .map_err(|source| MachineError::Io {
                    path: path.to_path_buf(),
                    source,
                })
        })
    }
}

/// Renders a command line for logs and error messages.
pub(crate) fn render_command(program: &str, args: &[&str]) -> String {
    std::iter::once(program)
        .chain(args.iter().copied())
        .collect::<Vec<_>>()
        .join(" ")
}
