use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{Result, ShellGuardError};

use super::filesystem::{ConfigFiles, DiskConfigFiles};
use super::{Config, validate_config};

pub const LOCAL_CONFIG_NAME: &str = ".shell-guard.toml";
const USER_CONFIG_NAME: &str = "config.toml";

/// A loaded configuration and where it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadResult {
    pub config: Config,
    /// `None` when no file was found and defaults apply.
    pub source: Option<PathBuf>,
}

impl LoadResult {
    #[must_use]
    pub fn defaults() -> Self {
        Self {
            config: Config::default(),
            source: None,
        }
    }
}

pub trait ConfigLoader {
    /// Load configuration from the default locations.
    ///
    /// # Errors
    /// Returns an error if a found config file cannot be read, parsed or validated.
    fn load(&self) -> Result<LoadResult>;

    /// Load configuration from a specific path.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read, parsed or validated.
    fn load_from_path(&self, path: &Path) -> Result<LoadResult>;
}

/// Search order:
/// 1. `.shell-guard.toml` in the current directory
/// 2. `config.toml` in the platform user config directory
/// 3. built-in defaults
#[derive(Debug, Default)]
pub struct FileConfigLoader<F: ConfigFiles = DiskConfigFiles> {
    files: F,
}

impl FileConfigLoader<DiskConfigFiles> {
    #[must_use]
    pub const fn new() -> Self {
        Self { files: DiskConfigFiles }
    }
}

impl<F: ConfigFiles> FileConfigLoader<F> {
    #[must_use]
    pub const fn with_files(files: F) -> Self {
        Self { files }
    }

    fn candidates(&self) -> Vec<PathBuf> {
        let local = self
            .files
            .project_dir()
            .ok()
            .map(|dir| dir.join(LOCAL_CONFIG_NAME));
        let user = self.files.user_dir().map(|dir| dir.join(USER_CONFIG_NAME));
        local.into_iter().chain(user).collect()
    }

    fn parse(content: &str) -> Result<Config> {
        let config: Config = toml::from_str(content)?;
        validate_config(&config)?;
        Ok(config)
    }
}

impl<F: ConfigFiles> ConfigLoader for FileConfigLoader<F> {
    fn load(&self) -> Result<LoadResult> {
        match self.candidates().into_iter().find(|p| self.files.is_file(p)) {
            Some(path) => self.load_from_path(&path),
            None => {
                debug!("no configuration file found, using defaults");
                Ok(LoadResult::defaults())
            }
        }
    }

    fn load_from_path(&self, path: &Path) -> Result<LoadResult> {
        let content = self
            .files
            .read(path)
            .map_err(|source| ShellGuardError::FileRead {
                path: path.to_path_buf(),
                source,
            })?;
        let config = Self::parse(&content)?;
        debug!(path = %path.display(), "configuration loaded");
        Ok(LoadResult {
            config,
            source: Some(path.to_path_buf()),
        })
    }
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
