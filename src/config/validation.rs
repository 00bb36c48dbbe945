use globset::Glob;

use crate::checker::is_known_check;
use crate::error::{Result, ShellGuardError};

use super::Config;

/// Reject settings that would otherwise fail silently at run time.
///
/// # Errors
/// Returns `Config` for unknown check names, empty palette codes, an empty
/// shell name or empty style markers, and `InvalidPattern` for bad exclude globs.
pub fn validate_config(config: &Config) -> Result<()> {
    if let Some(name) = config.checks.disabled.iter().find(|n| !is_known_check(n)) {
        return Err(ShellGuardError::Config(format!(
            "unknown check '{name}' in checks.disabled (run `shell-guard checks` for the list)"
        )));
    }

    for pattern in &config.scan.exclude {
        Glob::new(pattern).map_err(|source| ShellGuardError::InvalidPattern {
            pattern: pattern.clone(),
            source,
        })?;
    }

    if let Some((name, _)) = config
        .palette
        .iter()
        .find(|(_, code)| code.trim().is_empty())
    {
        return Err(ShellGuardError::Config(format!(
            "palette color '{name}' has an empty code"
        )));
    }

    if config.syntax.shell.trim().is_empty() {
        return Err(ShellGuardError::Config("syntax.shell must not be empty".to_string()));
    }

    // An empty needle matches every file.
    for (key, value) in [
        ("style.env_file", &config.style.env_file),
        ("style.python_env_marker", &config.style.python_env_marker),
    ] {
        if value.trim().is_empty() {
            return Err(ShellGuardError::Config(format!("{key} must not be empty")));
        }
    }

    Ok(())
}
