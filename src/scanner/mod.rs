mod filter;

pub use filter::{ExtensionFilter, FileFilter, normalize_extension};

use std::path::{Path, PathBuf};

use indexmap::IndexSet;
use tracing::debug;
use walkdir::WalkDir;

use crate::error::{Result, ShellGuardError};

/// A file selected for analysis.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileCandidate {
    pub path: PathBuf,
    pub extension: String,
}

impl FileCandidate {
    #[must_use]
    pub fn new(path: PathBuf) -> Self {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or_default()
            .to_string();
        Self { path, extension }
    }
}

/// Trait for resolving a base path into analysis candidates.
pub trait FileScanner {
    /// Resolve `base` into an ordered, deduplicated list of candidates.
    ///
    /// # Errors
    /// Returns `PathNotFound` if `base` does not exist.
    fn scan(&self, base: &Path, recursive: bool) -> Result<Vec<FileCandidate>>;
}

pub struct DirectoryScanner<F: FileFilter> {
    filter: F,
}

impl<F: FileFilter> DirectoryScanner<F> {
    #[must_use]
    pub const fn new(filter: F) -> Self {
        Self { filter }
    }

    /// Symlinks are followed, so linked scripts are checked under their link
    /// path. Broken links and link cycles are skipped.
    fn scan_dir(&self, root: &Path, recursive: bool) -> Vec<PathBuf> {
        let walker = WalkDir::new(root).min_depth(1).follow_links(true);
        let walker = if recursive { walker } else { walker.max_depth(1) };

        let unique: IndexSet<PathBuf> = walker
            .into_iter()
            .filter_map(std::result::Result::ok)
            .filter(|e| e.file_type().is_file() && self.filter.should_include(e.path()))
            .map(walkdir::DirEntry::into_path)
            .collect();

        let mut files: Vec<PathBuf> = unique.into_iter().collect();
        files.sort_by(|a, b| a.as_os_str().cmp(b.as_os_str()));
        files
    }
}

impl<F: FileFilter> FileScanner for DirectoryScanner<F> {
    fn scan(&self, base: &Path, recursive: bool) -> Result<Vec<FileCandidate>> {
        if !base.exists() {
            return Err(ShellGuardError::PathNotFound(base.to_path_buf()));
        }
        let root = dunce::canonicalize(base).map_err(|e| ShellGuardError::FileRead {
            path: base.to_path_buf(),
            source: e,
        })?;

        // An explicit file is always checked, whatever its extension.
        if root.is_file() {
            debug!(path = %root.display(), "explicit file candidate");
            return Ok(vec![FileCandidate::new(root)]);
        }

        let files = self.scan_dir(&root, recursive);
        debug!(root = %root.display(), recursive, count = files.len(), "scanned directory");
        Ok(files.into_iter().map(FileCandidate::new).collect())
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
