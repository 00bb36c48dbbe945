use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::checker::{DEFAULT_ENV_FILE, DEFAULT_PYTHON_ENV_MARKER};
use crate::external::{DEFAULT_SHELL, DEFAULT_SHFMT_OPTIONS};

/// Contents of `.shell-guard.toml`. Every section and field is optional.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub scan: ScanConfig,
    pub checks: ChecksConfig,
    pub syntax: SyntaxConfig,
    pub style: StyleConfig,
    /// Color name to expected `r;g;b` code. Empty means the built-in palette.
    pub palette: IndexMap<String, String>,
    pub format: FormatConfig,
}

/// `[scan]`: which files `check` picks up.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct ScanConfig {
    pub extensions: Vec<String>,
    pub recursive: bool,
    /// Glob patterns dropped from directory scans.
    pub exclude: Vec<String>,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            extensions: strings(&["sh", "py"]),
            recursive: false,
            exclude: Vec::new(),
        }
    }
}

/// `[checks]`
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct ChecksConfig {
    /// Check names to skip entirely.
    pub disabled: Vec<String>,
}

/// `[syntax]`: the external grammar check.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct SyntaxConfig {
    pub enabled: bool,
    pub shell: String,
}

impl Default for SyntaxConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            shell: DEFAULT_SHELL.to_string(),
        }
    }
}

/// `[style]`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct StyleConfig {
    /// Path every shell script is expected to reference.
    pub env_file: String,
    /// Call every Python script is expected to make.
    pub python_env_marker: String,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            env_file: DEFAULT_ENV_FILE.to_string(),
            python_env_marker: DEFAULT_PYTHON_ENV_MARKER.to_string(),
        }
    }
}

/// `[format]`: the `fmt` command.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct FormatConfig {
    pub program: String,
    pub options: Vec<String>,
    pub extensions: Vec<String>,
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self {
            program: "shfmt".to_string(),
            options: strings(DEFAULT_SHFMT_OPTIONS),
            extensions: strings(&["sh"]),
        }
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(ToString::to_string).collect()
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;
