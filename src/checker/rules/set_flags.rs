use regex::Regex;

use crate::checker::{Check, CheckInput, Finding, Severity};

use super::is_shell;

/// Recognizes `set -e` (alone or combined, e.g. `set -eu`) and `set -o errexit`.
///
/// Only `set` at the start of a line counts, so commented-out directives and
/// `bash -e` invocations are not recognized. `trap ... ERR` is not treated as
/// an equivalent.
pub struct FailFastCheck {
    directive: Regex,
}

impl Default for FailFastCheck {
    fn default() -> Self {
        Self::new()
    }
}

impl FailFastCheck {
    #[must_use]
    pub fn new() -> Self {
        Self {
            directive: Regex::new(r"^set\s+(?:\S+\s+)*(?:-[A-Za-z]*e[A-Za-z]*|-o\s+errexit)\b")
                .expect("Invalid regex"),
        }
    }
}

impl Check for FailFastCheck {
    fn name(&self) -> &'static str {
        "fail-fast"
    }

    fn severity(&self) -> Severity {
        Severity::Warning
    }

    fn description(&self) -> &'static str {
        "script should stop on error (set -e / set -o errexit)"
    }

    fn applies_to(&self, extension: &str) -> bool {
        is_shell(extension)
    }

    fn evaluate(&self, input: &CheckInput<'_>) -> Vec<Finding> {
        if has_directive(&self.directive, &input.lines) {
            Vec::new()
        } else {
            vec![Finding::warning(
                self.name(),
                "missing 'set -e' or 'set -o errexit'",
            )]
        }
    }
}

/// Recognizes `set -o pipefail`, including combined flags such as
/// `set -euo pipefail`.
pub struct PipefailCheck {
    directive: Regex,
}

impl Default for PipefailCheck {
    fn default() -> Self {
        Self::new()
    }
}

impl PipefailCheck {
    #[must_use]
    pub fn new() -> Self {
        Self {
            directive: Regex::new(r"^set\s+(?:\S+\s+)*-[A-Za-z]*o\s+pipefail\b")
                .expect("Invalid regex"),
        }
    }
}

impl Check for PipefailCheck {
    fn name(&self) -> &'static str {
        "pipefail"
    }

    fn severity(&self) -> Severity {
        Severity::Warning
    }

    fn description(&self) -> &'static str {
        "pipelines should fail on any stage (set -o pipefail)"
    }

    fn applies_to(&self, extension: &str) -> bool {
        is_shell(extension)
    }

    fn evaluate(&self, input: &CheckInput<'_>) -> Vec<Finding> {
        if has_directive(&self.directive, &input.lines) {
            Vec::new()
        } else {
            vec![Finding::warning(self.name(), "missing 'set -o pipefail'")]
        }
    }
}

fn has_directive(directive: &Regex, lines: &[&str]) -> bool {
    lines.iter().any(|line| directive.is_match(line.trim()))
}

#[cfg(test)]
#[path = "set_flags_tests.rs"]
mod tests;
