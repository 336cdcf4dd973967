use crate::error::{Error, Result};
use std::ffi::OsStr;
use std::io;
use std::process::{Command as StdCommand, Stdio};
use tracing::debug;

/// A child process invoked with an argument vector, never through a shell.
#[derive(Debug)]
pub struct Command {
    inner: StdCommand,
    display: String,
}

impl Command {
    pub fn new(program: impl AsRef<OsStr>) -> Self {
        let program = program.as_ref();
        Self {
            inner: StdCommand::new(program),
            display: quote(program),
        }
    }

    pub fn arg(mut self, arg: impl AsRef<OsStr>) -> Self {
        let arg = arg.as_ref();
        self.display.push(' ');
        self.display.push_str(&quote(arg));
        self.inner.arg(arg);
        self
    }

    /// Rendered command line, used in errors and logs.
    pub fn display(&self) -> &str { &self.display }

    /// Run to completion and return stdout as trimmed text.
    ///
    /// The exit status is not inspected; stdin and stderr are detached.
    pub fn capture_stdout(mut self) -> Result<String> {
        debug!(command = %self.display(), "running");
        let output = self
            .inner
            .stdin(Stdio::null())
            .stderr(Stdio::null())
            .output()
            .map_err(|source| Error::VersionQuery {
                command: self.display.clone(),
                source,
            })?;

        let stdout = String::from_utf8(output.stdout).map_err(|e| Error::VersionQuery {
            command: self.display.clone(),
            source:  io::Error::new(io::ErrorKind::InvalidData, e),
        })?;
        Ok(stdout.trim().to_string())
    }
}

fn quote(s: &OsStr) -> String { format!("\"{}\"", s.to_string_lossy()) }
