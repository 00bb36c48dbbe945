use std::io;
use std::path::Path;
use std::process::{Command, Output};

use tracing::debug;

use crate::error::{Result, ShellGuardError};

/// 4-space indent, binary ops may start a line, indented switch cases,
/// redirect operators followed by a space.
pub const DEFAULT_SHFMT_OPTIONS: &[&str] = &["-i", "4", "-bn", "-ci", "-sr"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormatOutcome {
    Unchanged,
    Formatted,
    /// Check mode: the file differs from its formatted form.
    NeedsFormat,
    Failed(String),
}

impl FormatOutcome {
    #[must_use]
    pub const fn is_failure(&self, check_only: bool) -> bool {
        match self {
            Self::Failed(_) => true,
            Self::NeedsFormat => check_only,
            Self::Unchanged | Self::Formatted => false,
        }
    }
}

pub trait ShellFormatter: Send + Sync {
    /// Version string of the formatter binary.
    ///
    /// # Errors
    /// Returns `FormatterUnavailable` when the binary cannot be run.
    fn version(&self) -> Result<String>;

    /// Whether formatting would change `path`.
    ///
    /// # Errors
    /// Returns an error when the formatter rejects the file.
    fn needs_format(&self, path: &Path) -> io::Result<bool>;

    /// Rewrite `path` in place.
    ///
    /// # Errors
    /// Returns an error when the formatter fails.
    fn write(&self, path: &Path) -> io::Result<()>;

    /// Diff, then rewrite unless `check_only`.
    fn format(&self, path: &Path, check_only: bool) -> FormatOutcome {
        match self.needs_format(path) {
            Ok(false) => FormatOutcome::Unchanged,
            Ok(true) if check_only => FormatOutcome::NeedsFormat,
            Ok(true) => match self.write(path) {
                Ok(()) => FormatOutcome::Formatted,
                Err(e) => FormatOutcome::Failed(e.to_string()),
            },
            Err(e) => FormatOutcome::Failed(e.to_string()),
        }
    }
}

/// `shfmt` invoked with a fixed option set.
#[derive(Debug, Clone)]
pub struct Shfmt {
    program: String,
    options: Vec<String>,
}

impl Default for Shfmt {
    fn default() -> Self {
        Self::new(
            "shfmt",
            DEFAULT_SHFMT_OPTIONS.iter().map(ToString::to_string).collect(),
        )
    }
}

impl Shfmt {
    #[must_use]
    pub fn new(program: impl Into<String>, options: Vec<String>) -> Self {
        Self {
            program: program.into(),
            options,
        }
    }

    #[must_use]
    pub fn options(&self) -> &[String] {
        &self.options
    }

    fn run(&self, mode: &str, path: &Path) -> io::Result<Output> {
        debug!(program = %self.program, mode, path = %path.display(), "running formatter");
        Command::new(&self.program)
            .args(&self.options)
            .arg(mode)
            .arg(path)
            .output()
    }
}

fn stderr_message(output: &Output) -> String {
    let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
    if stderr.is_empty() {
        format!("formatter exited with {}", output.status)
    } else {
        stderr
    }
}

impl ShellFormatter for Shfmt {
    fn version(&self) -> Result<String> {
        let output = Command::new(&self.program)
            .arg("--version")
            .output()
            .map_err(|_| ShellGuardError::FormatterUnavailable {
                program: self.program.clone(),
            })?;
        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }

    fn needs_format(&self, path: &Path) -> io::Result<bool> {
        let output = self.run("-d", path)?;
        if output.status.success() {
            return Ok(false);
        }
        // Exit status 1 with a diff on stdout means "would change";
        // anything else is a parse or usage error.
        if output.stdout.is_empty() {
            return Err(io::Error::other(stderr_message(&output)));
        }
        Ok(true)
    }

    fn write(&self, path: &Path) -> io::Result<()> {
        let output = self.run("-w", path)?;
        if output.status.success() {
            Ok(())
        } else {
            Err(io::Error::other(stderr_message(&output)))
        }
    }
}

#[cfg(test)]
#[path = "formatter_tests.rs"]
mod tests;
