use crate::checker::{Check, CheckInput, Finding, Severity};

use super::is_shell;

/// Scripts must hook into the shared environment. Shell scripts reference
/// the env file path; Python scripts call the loader helper. Any occurrence
/// counts, whether it is sourced, called or only mentioned.
pub struct EnvIntegrationCheck {
    env_file: String,
    python_marker: String,
}

impl EnvIntegrationCheck {
    #[must_use]
    pub fn new(env_file: impl Into<String>, python_marker: impl Into<String>) -> Self {
        Self {
            env_file: env_file.into(),
            python_marker: python_marker.into(),
        }
    }

    /// Required text and how it is named in the finding, per extension.
    fn requirement(&self, extension: &str) -> Option<(&str, String)> {
        match extension {
            "py" => Some((
                self.python_marker.as_str(),
                format!("{} function", self.python_marker),
            )),
            ext if is_shell(ext) => Some((self.env_file.as_str(), self.env_file.clone())),
            _ => None,
        }
    }
}

impl Check for EnvIntegrationCheck {
    fn name(&self) -> &'static str {
        "env-integration"
    }

    fn severity(&self) -> Severity {
        Severity::Warning
    }

    fn description(&self) -> &'static str {
        "scripts must load the shared environment"
    }

    fn applies_to(&self, extension: &str) -> bool {
        extension == "py" || is_shell(extension)
    }

    fn evaluate(&self, input: &CheckInput<'_>) -> Vec<Finding> {
        let Some((needle, shown)) = self.requirement(input.extension) else {
            return Vec::new();
        };
        if input.content.contains(needle) {
            return Vec::new();
        }
        vec![Finding::warning(
            self.name(),
            format!("missing .env integration ({shown})"),
        )]
    }
}
