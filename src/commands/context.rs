use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::cli::Cli;
use crate::config::{Config, ConfigLoader, FileConfigLoader, LoadResult};
use crate::error::{Result, ShellGuardError};
use crate::output::ErrorOutput;
use crate::{EXIT_CHECK_FAILED, EXIT_CONFIG_ERROR};

/// Resolve the configuration per `--config` / `--no-config`.
pub(crate) fn load_config(cli: &Cli) -> Result<Config> {
    if cli.no_config {
        return Ok(Config::default());
    }

    let loader = FileConfigLoader::new();
    let LoadResult { config, source } = cli
        .config
        .as_deref()
        .map_or_else(|| loader.load(), |path| loader.load_from_path(path))?;
    if let Some(source) = source {
        info!(path = %source.display(), "using configuration file");
    }
    Ok(config)
}

/// Directory report paths are shown relative to.
pub(crate) fn display_root() -> Option<PathBuf> {
    std::env::current_dir()
        .ok()
        .and_then(|dir| dunce::canonicalize(dir).ok())
}

/// CLI values replace config values when given.
pub(crate) fn extensions_or(cli: Option<&Vec<String>>, config: &[String]) -> Vec<String> {
    cli.cloned().unwrap_or_else(|| config.to_vec())
}

/// Config excludes plus CLI excludes.
pub(crate) fn merged_excludes(config: &[String], cli: &[String]) -> Vec<String> {
    config.iter().chain(cli).cloned().collect()
}

pub(crate) fn write_output(output_path: Option<&Path>, content: &str, quiet: bool) -> Result<()> {
    if let Some(path) = output_path {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, content)?;
    } else if !quiet {
        print!("{content}");
    }
    Ok(())
}

/// Report a fatal error once on stderr and map it to an exit code.
pub(crate) fn fail(error: &ShellGuardError, cli: &Cli) -> i32 {
    ErrorOutput::new(cli.color.into()).report(error);
    if error.is_check_failure() {
        EXIT_CHECK_FAILED
    } else {
        EXIT_CONFIG_ERROR
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn cli_extensions_replace_config() {
        let config = vec!["sh".to_string(), "py".to_string()];
        let cli = vec!["bash".to_string()];

        assert_eq!(extensions_or(Some(&cli), &config), ["bash"]);
        assert_eq!(extensions_or(None, &config), ["sh", "py"]);
    }

    #[test]
    fn excludes_are_additive() {
        let merged = merged_excludes(&["a/**".to_string()], &["b/**".to_string()]);
        assert_eq!(merged, ["a/**", "b/**"]);
    }

    #[test]
    fn no_config_skips_loading() {
        let cli = Cli::parse_from(["shell-guard", "--no-config", "checks"]);
        assert_eq!(load_config(&cli).unwrap(), Config::default());
    }

    #[test]
    fn explicit_config_is_loaded() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("ci.toml");
        fs::write(&path, "[scan]\nrecursive = true\n").unwrap();
        let cli = Cli::parse_from(["shell-guard", "--config", path.to_str().unwrap(), "checks"]);

        assert!(load_config(&cli).unwrap().scan.recursive);
    }

    #[test]
    fn write_output_creates_parent_directories() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("reports/nested/out.txt");

        write_output(Some(&path), "report", false).unwrap();

        assert_eq!(fs::read_to_string(path).unwrap(), "report");
    }

    #[test]
    fn fail_maps_error_kinds_to_exit_codes() {
        let cli = Cli::parse_from(["shell-guard", "--color", "never", "checks"]);

        let not_found = ShellGuardError::PathNotFound(PathBuf::from("nope"));
        assert_eq!(fail(&not_found, &cli), EXIT_CHECK_FAILED);

        let config = ShellGuardError::Config("bad".into());
        assert_eq!(fail(&config, &cli), EXIT_CONFIG_ERROR);
    }
}
