use std::collections::HashSet;
use std::sync::Arc;

use crate::external::SyntaxValidator;

use super::rules::{
    DescriptionHeaderCheck, EnvIntegrationCheck, ExecutableCheck, FailFastCheck,
    LocalVariablesCheck, LoggingUsageCheck, PaletteCheck, PipefailCheck, ReadonlyConstantsCheck,
    ShebangCheck, SyntaxCheck,
};
use super::{Check, Palette};

/// Every check name in registration order.
pub const ALL_CHECK_NAMES: &[&str] = &[
    "syntax",
    "shebang",
    "fail-fast",
    "pipefail",
    "executable",
    "palette",
    "logging-usage",
    "readonly-constants",
    "local-variables",
    "description-header",
    "env-integration",
];

pub const DEFAULT_ENV_FILE: &str = ".sys/env/.env";
pub const DEFAULT_PYTHON_ENV_MARKER: &str = "load_env";

/// Inputs needed to build the standard registry.
#[derive(Clone)]
pub struct CheckSettings {
    pub palette: Arc<Palette>,
    pub env_file: String,
    /// Call Python scripts must contain.
    pub python_env_marker: String,
    /// `None` leaves the `syntax` check out of the registry.
    pub validator: Option<Arc<dyn SyntaxValidator>>,
    pub disabled: HashSet<String>,
}

impl Default for CheckSettings {
    fn default() -> Self {
        Self {
            palette: Arc::new(Palette::default()),
            env_file: DEFAULT_ENV_FILE.to_string(),
            python_env_marker: DEFAULT_PYTHON_ENV_MARKER.to_string(),
            validator: None,
            disabled: HashSet::new(),
        }
    }
}

/// Ordered, immutable set of checks shared by every worker.
pub struct CheckRegistry {
    checks: Vec<Box<dyn Check>>,
}

impl CheckRegistry {
    #[must_use]
    pub fn standard(settings: &CheckSettings) -> Self {
        let mut checks: Vec<Box<dyn Check>> = Vec::with_capacity(ALL_CHECK_NAMES.len());
        if let Some(validator) = &settings.validator {
            checks.push(Box::new(SyntaxCheck::new(Arc::clone(validator))));
        }
        checks.push(Box::new(ShebangCheck));
        checks.push(Box::new(FailFastCheck::new()));
        checks.push(Box::new(PipefailCheck::new()));
        checks.push(Box::new(ExecutableCheck));
        checks.push(Box::new(PaletteCheck::new(Arc::clone(&settings.palette))));
        checks.push(Box::new(LoggingUsageCheck::new(Arc::clone(
            &settings.palette,
        ))));
        checks.push(Box::new(ReadonlyConstantsCheck::new()));
        checks.push(Box::new(LocalVariablesCheck::new()));
        checks.push(Box::new(DescriptionHeaderCheck));
        checks.push(Box::new(EnvIntegrationCheck::new(
            settings.env_file.clone(),
            settings.python_env_marker.clone(),
        )));

        checks.retain(|check| !settings.disabled.contains(check.name()));
        Self { checks }
    }

    #[must_use]
    pub fn from_checks(checks: Vec<Box<dyn Check>>) -> Self {
        Self { checks }
    }

    #[must_use]
    pub fn checks(&self) -> &[Box<dyn Check>] {
        &self.checks
    }

    /// Checks that apply to `extension`, in registration order.
    pub fn applicable<'a>(&'a self, extension: &'a str) -> impl Iterator<Item = &'a dyn Check> {
        self.checks
            .iter()
            .map(|check| &**check)
            .filter(move |check| check.applies_to(extension))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.checks.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.checks.is_empty()
    }
}

#[must_use]
pub fn is_known_check(name: &str) -> bool {
    ALL_CHECK_NAMES.contains(&name)
}

#[cfg(test)]
#[path = "registry_tests.rs"]
mod tests;
