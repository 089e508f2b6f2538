//! In-memory [`SystemProbe`] for tests in this and dependent crates.

use std::path::Path;
use std::sync::{Mutex, MutexGuard};

use crate::probe::{ProbeFuture, SystemProbe, render_command};
use crate::MachineError;

/// Probe returning canned output and recording what was asked.
///
/// Commands print `command_output` and files contain `file_contents`;
/// `None` makes the call fail. With `hang` set, commands never complete.
#[derive(Debug, Default)]
pub struct MockProbe {
    command_output: Option<String>,
    file_contents: Option<String>,
    hang: bool,
    calls: Mutex<Vec<String>>,
}

impl MockProbe {
    pub fn command(output: &str) -> Self {
        Self {
            command_output: Some(output.into()),
            ..Default::default()
        }
    }

    pub fn file(contents: &str) -> Self {
        Self {
            file_contents: Some(contents.into()),
            ..Default::default()
        }
    }

    /// Makes every command wait forever.
    pub fn hanging(mut self) -> Self {
        self.hang = true;
        self
    }

    /// Rendered commands and file paths, in call order.
    pub fn calls(&self) -> Vec<String> {
        self.log().clone()
    }

    /// Number of lookups made so far.
    pub fn lookups(&self) -> usize {
        self.log().len()
    }

    fn log(&self) -> MutexGuard<'_, Vec<String>> {
        self.calls.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl SystemProbe for MockProbe {
    fn run_command<'a>(&'a self, program: &'a str, args: &'a [&'a str]) -> ProbeFuture<'a> {
        self.log().push(render_command(program, args));
        Box::pin(async move {
            if self.hang {
                std::future::pending::<()>().await;
            }
            self.command_output
                .clone()
                .ok_or_else(|| MachineError::CommandFailed {
                    command: program.into(),
                    reason: "Command failed".into(),
                })
        })
    }

    fn read_file<'a>(&'a self, path: &'a Path) -> ProbeFuture<'a> {
        self.log().push(path.display().to_string());
        Box::pin(async move {
            self.file_contents.clone().ok_or_else(|| MachineError::Io {
                path: path.to_path_buf(),
                source: std::io::Error::new(std::io::ErrorKind::NotFound, "no such file"),
            })
        })
    }
}
