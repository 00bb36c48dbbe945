use crate::checker::{Check, CheckInput, Finding, Severity};

use super::is_shell;

/// Line 2 (right after the shebang) must be a comment describing the script,
/// with `#` in the first column. One-line files have no line 2 and pass.
pub struct DescriptionHeaderCheck;

impl Check for DescriptionHeaderCheck {
    fn name(&self) -> &'static str {
        "description-header"
    }

    fn severity(&self) -> Severity {
        Severity::Warning
    }

    fn description(&self) -> &'static str {
        "line 2 must be a comment describing the script"
    }

    fn applies_to(&self, extension: &str) -> bool {
        is_shell(extension)
    }

    fn evaluate(&self, input: &CheckInput<'_>) -> Vec<Finding> {
        match input.lines.get(1) {
            Some(line) if !line.starts_with('#') => vec![
                Finding::warning(self.name(), "missing description comment on line 2").at_line(2),
            ],
            _ => Vec::new(),
        }
    }
}
