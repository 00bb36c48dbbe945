use std::sync::Arc;

use tracing::warn;

use crate::checker::{Check, CheckInput, Finding, Severity};
use crate::external::{SyntaxValidator, Validation};

use super::is_shell;

const NAME: &str = "syntax";

/// Delegates grammar validation to an external shell (`bash -n`).
pub struct SyntaxCheck {
    validator: Arc<dyn SyntaxValidator>,
}

impl SyntaxCheck {
    #[must_use]
    pub fn new(validator: Arc<dyn SyntaxValidator>) -> Self {
        Self { validator }
    }
}

impl Check for SyntaxCheck {
    fn name(&self) -> &'static str {
        NAME
    }

    fn severity(&self) -> Severity {
        Severity::Critical
    }

    fn description(&self) -> &'static str {
        "file must parse as valid shell (external validator)"
    }

    fn applies_to(&self, extension: &str) -> bool {
        is_shell(extension)
    }

    fn evaluate(&self, input: &CheckInput<'_>) -> Vec<Finding> {
        match self.validator.validate(input.path) {
            Ok(Validation::Valid) => Vec::new(),
            Ok(Validation::Invalid(diagnostic)) => {
                let message = if diagnostic.is_empty() {
                    "syntax error detected".to_string()
                } else {
                    format!("syntax error: {diagnostic}")
                };
                vec![Finding::critical(NAME, message)]
            }
            Err(e) => {
                warn!(path = %input.path.display(), error = %e, "syntax validator failed");
                vec![Finding::critical(
                    NAME,
                    format!("syntax validator failed: {e}"),
                )]
            }
        }
    }
}

#[cfg(test)]
#[path = "syntax_tests.rs"]
mod tests;
