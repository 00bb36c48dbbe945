use std::io;
use std::path::Path;
use std::process::Command;

use tracing::debug;

use crate::error::{Result, ShellGuardError};

pub const DEFAULT_SHELL: &str = "bash";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Validation {
    Valid,
    /// Diagnostic printed by the validator, possibly empty.
    Invalid(String),
}

pub trait SyntaxValidator: Send + Sync {
    /// Parse `path` without executing it. `Err` means the validator itself
    /// could not be run.
    fn validate(&self, path: &Path) -> io::Result<Validation>;
}

/// Runs `<shell> -n <file>`.
#[derive(Debug, Clone)]
pub struct ShellValidator {
    shell: String,
}

impl Default for ShellValidator {
    fn default() -> Self {
        Self::new(DEFAULT_SHELL)
    }
}

impl ShellValidator {
    #[must_use]
    pub fn new(shell: impl Into<String>) -> Self {
        Self {
            shell: shell.into(),
        }
    }

    #[must_use]
    pub fn shell(&self) -> &str {
        &self.shell
    }

    /// Fail early when the shell cannot be spawned at all.
    ///
    /// # Errors
    /// Returns `ValidatorUnavailable` if `<shell> --version` cannot be run.
    pub fn probe(&self) -> Result<()> {
        Command::new(&self.shell)
            .arg("--version")
            .output()
            .map(|_| ())
            .map_err(|source| ShellGuardError::ValidatorUnavailable {
                program: self.shell.clone(),
                source,
            })
    }
}

impl SyntaxValidator for ShellValidator {
    fn validate(&self, path: &Path) -> io::Result<Validation> {
        let output = Command::new(&self.shell).arg("-n").arg(path).output()?;
        if output.status.success() {
            return Ok(Validation::Valid);
        }

        let stderr = String::from_utf8_lossy(&output.stderr);
        let diagnostic = stderr
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect::<Vec<_>>()
            .join("; ");
        debug!(path = %path.display(), %diagnostic, "syntax validation failed");
        Ok(Validation::Invalid(diagnostic))
    }
}

#[cfg(test)]
#[path = "validator_tests.rs"]
mod tests;
