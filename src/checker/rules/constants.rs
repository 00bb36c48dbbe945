use regex::Regex;

use crate::checker::{Check, CheckInput, Finding, Severity};

use super::is_shell;

/// Uppercase top-level assignments are treated as constants and should be
/// declared `readonly`. A single `readonly` declaration anywhere satisfies
/// the check; per-variable tracking is deliberately not attempted, and
/// indented assignments (inside functions or blocks) are not considered.
pub struct ReadonlyConstantsCheck {
    assignment: Regex,
    readonly: Regex,
}

impl Default for ReadonlyConstantsCheck {
    fn default() -> Self {
        Self::new()
    }
}

impl ReadonlyConstantsCheck {
    #[must_use]
    pub fn new() -> Self {
        Self {
            assignment: Regex::new(r"^([A-Z_][A-Z0-9_]*)=").expect("Invalid regex"),
            readonly: Regex::new(r"^readonly\s+[A-Z_][A-Z0-9_]*=").expect("Invalid regex"),
        }
    }
}

impl Check for ReadonlyConstantsCheck {
    fn name(&self) -> &'static str {
        "readonly-constants"
    }

    fn severity(&self) -> Severity {
        Severity::Warning
    }

    fn description(&self) -> &'static str {
        "uppercase constants should be declared readonly"
    }

    fn applies_to(&self, extension: &str) -> bool {
        is_shell(extension)
    }

    fn evaluate(&self, input: &CheckInput<'_>) -> Vec<Finding> {
        if input
            .lines
            .iter()
            .any(|line| self.readonly.is_match(line.trim()))
        {
            return Vec::new();
        }

        input
            .lines
            .iter()
            .enumerate()
            .find_map(|(idx, line)| {
                self.assignment
                    .captures(line)
                    .map(|caps| (idx + 1, caps[1].to_string()))
            })
            .map(|(line, name)| {
                vec![
                    Finding::warning(
                        self.name(),
                        format!("uppercase variable '{name}' assigned without 'readonly'"),
                    )
                    .at_line(line),
                ]
            })
            .unwrap_or_default()
    }
}
