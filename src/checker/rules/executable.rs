use crate::checker::{Check, CheckInput, Finding, Severity};

use super::is_shell;

const EXECUTE_BITS: u32 = 0o111;

/// Advisory: scripts may legitimately be run as `bash script.sh`.
/// Platforms without unix permission bits produce no finding.
#[derive(Debug, Default)]
pub struct ExecutableCheck;

impl Check for ExecutableCheck {
    fn name(&self) -> &'static str {
        "executable"
    }

    fn severity(&self) -> Severity {
        Severity::Warning
    }

    fn description(&self) -> &'static str {
        "script file should have an execute permission bit"
    }

    fn applies_to(&self, extension: &str) -> bool {
        is_shell(extension)
    }

    fn evaluate(&self, input: &CheckInput<'_>) -> Vec<Finding> {
        match input.mode {
            Some(mode) if mode & EXECUTE_BITS == 0 => {
                let file_name = input
                    .path
                    .file_name()
                    .map_or_else(|| input.path.display().to_string(), |n| {
                        n.to_string_lossy().to_string()
                    });
                vec![Finding::warning(
                    self.name(),
                    format!("script is not executable (chmod +x {file_name})"),
                )]
            }
            _ => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checker::rules::test_support::run_with;

    #[test]
    fn executable_file_passes() {
        assert!(run_with(&ExecutableCheck, "sh", "", Some(0o755)).is_empty());
        assert!(run_with(&ExecutableCheck, "sh", "", Some(0o744)).is_empty());
    }

    #[test]
    fn any_single_execute_bit_is_enough() {
        assert!(run_with(&ExecutableCheck, "sh", "", Some(0o601)).is_empty());
    }

    #[test]
    fn missing_execute_bit_is_a_warning_with_hint() {
        let findings = run_with(&ExecutableCheck, "sh", "", Some(0o644));

        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].severity, Severity::Warning);
        assert_eq!(findings[0].message, "script is not executable (chmod +x script.sh)");
    }

    #[test]
    fn unknown_mode_is_not_reported() {
        assert!(run_with(&ExecutableCheck, "sh", "", None).is_empty());
    }
}
