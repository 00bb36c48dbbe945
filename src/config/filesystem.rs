use std::io;
use std::path::{Path, PathBuf};

/// Where configuration files are looked up and how they are read. The loader
/// only touches the disk through this seam.
pub trait ConfigFiles {
    /// # Errors
    /// Returns the underlying I/O error.
    fn read(&self, path: &Path) -> io::Result<String>;

    /// Directories do not count.
    fn is_file(&self, path: &Path) -> bool;

    /// Directory searched for `.shell-guard.toml`, normally the cwd.
    ///
    /// # Errors
    /// Returns an error if the working directory is gone.
    fn project_dir(&self) -> io::Result<PathBuf>;

    /// `~/.config/shell-guard` on Linux, the platform equivalent elsewhere.
    fn user_dir(&self) -> Option<PathBuf>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct DiskConfigFiles;

impl ConfigFiles for DiskConfigFiles {
    fn read(&self, path: &Path) -> io::Result<String> {
        std::fs::read_to_string(path)
    }

    fn is_file(&self, path: &Path) -> bool {
        path.is_file()
    }

    fn project_dir(&self) -> io::Result<PathBuf> {
        std::env::current_dir()
    }

    fn user_dir(&self) -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", "shell-guard")
            .map(|dirs| dirs.config_dir().to_path_buf())
    }
}
