//! Heuristic shell-script checks.
//!
//! Every check is a named, independent predicate over one file's text. Checks
//! are line/regex based: they accept false negatives to stay cheap, and each
//! pattern is anchored (start of line, whole token, or line scoped) to keep
//! false positives low.

mod ignore;
mod palette;
mod registry;
pub mod rules;

pub use ignore::{IGNORE_MARKER, IGNORE_SCAN_LINES, IgnorePolicy};
pub use palette::Palette;
pub use registry::{
    ALL_CHECK_NAMES, CheckRegistry, CheckSettings, DEFAULT_ENV_FILE, DEFAULT_PYTHON_ENV_MARKER,
    is_known_check,
};

use std::fmt;
use std::path::Path;

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Warning,
    Critical,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Warning => f.write_str("warning"),
            Self::Critical => f.write_str("critical"),
        }
    }
}

/// One reported violation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Finding {
    pub check: &'static str,
    pub severity: Severity,
    pub message: String,
    /// 1-based line number, when the violation has a location.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<usize>,
}

impl Finding {
    #[must_use]
    pub fn critical(check: &'static str, message: impl Into<String>) -> Self {
        Self {
            check,
            severity: Severity::Critical,
            message: message.into(),
            line: None,
        }
    }

    #[must_use]
    pub fn warning(check: &'static str, message: impl Into<String>) -> Self {
        Self {
            check,
            severity: Severity::Warning,
            message: message.into(),
            line: None,
        }
    }

    #[must_use]
    pub const fn at_line(mut self, line: usize) -> Self {
        self.line = Some(line);
        self
    }

    #[must_use]
    pub fn is_critical(&self) -> bool {
        self.severity == Severity::Critical
    }
}

/// Everything a check may look at for one file.
pub struct CheckInput<'a> {
    pub path: &'a Path,
    pub extension: &'a str,
    pub content: &'a str,
    pub lines: Vec<&'a str>,
    /// Unix permission bits, `None` where the platform has none.
    pub mode: Option<u32>,
}

impl<'a> CheckInput<'a> {
    #[must_use]
    pub fn new(path: &'a Path, extension: &'a str, content: &'a str, mode: Option<u32>) -> Self {
        Self {
            path,
            extension,
            content,
            lines: content.lines().collect(),
            mode,
        }
    }
}

pub trait Check: Send + Sync {
    /// Stable identifier, used in reports and `checks.disabled`.
    fn name(&self) -> &'static str;

    /// Severity of the check's primary finding.
    fn severity(&self) -> Severity;

    /// One-line description for `shell-guard checks`.
    fn description(&self) -> &'static str;

    fn applies_to(&self, extension: &str) -> bool;

    /// Evaluate the file. Must not panic on malformed input.
    fn evaluate(&self, input: &CheckInput<'_>) -> Vec<Finding>;
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
