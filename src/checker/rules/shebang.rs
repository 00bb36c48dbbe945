use crate::checker::{Check, CheckInput, Finding, Severity};

const NAME: &str = "shebang";

/// Interpreter name expected in the shebang, by extension.
const INTERPRETERS: &[(&str, &str)] = &[("sh", "bash"), ("py", "python")];

/// First line must be an interpreter line; a foreign interpreter is only
/// advisory. Does not check that the interpreter exists on the host.
#[derive(Debug, Default)]
pub struct ShebangCheck;

impl ShebangCheck {
    fn expected_interpreter(extension: &str) -> Option<&'static str> {
        INTERPRETERS
            .iter()
            .find(|(ext, _)| *ext == extension)
            .map(|(_, interpreter)| *interpreter)
    }
}

impl Check for ShebangCheck {
    fn name(&self) -> &'static str {
        NAME
    }

    fn severity(&self) -> Severity {
        Severity::Critical
    }

    fn description(&self) -> &'static str {
        "first line must be a shebang referencing the expected interpreter"
    }

    fn applies_to(&self, extension: &str) -> bool {
        Self::expected_interpreter(extension).is_some()
    }

    fn evaluate(&self, input: &CheckInput<'_>) -> Vec<Finding> {
        let first = input.lines.first().copied().unwrap_or_default();
        if !first.starts_with("#!") {
            return vec![Finding::critical(NAME, "missing shebang").at_line(1)];
        }

        match Self::expected_interpreter(input.extension) {
            Some(interpreter) if !first.contains(interpreter) => vec![
                Finding::warning(
                    NAME,
                    format!("shebang might not be {interpreter}: {}", first.trim()),
                )
                .at_line(1),
            ],
            _ => Vec::new(),
        }
    }
}
