use std::path::Path;

use globset::{Glob, GlobSet, GlobSetBuilder};

use crate::error::{Result, ShellGuardError};

pub trait FileFilter {
    fn should_include(&self, path: &Path) -> bool;
}

/// Keeps files whose extension is in the configured set and that match no
/// exclude glob.
pub struct ExtensionFilter {
    extensions: Vec<String>,
    exclude_patterns: GlobSet,
}

impl ExtensionFilter {
    /// Create a new filter with the given extensions and exclude patterns.
    ///
    /// Extensions are normalized, so `*.sh`, `.sh` and `sh` are equivalent.
    ///
    /// # Errors
    /// Returns an error if any exclude pattern is invalid.
    pub fn new(extensions: &[String], exclude_patterns: &[String]) -> Result<Self> {
        let mut builder = GlobSetBuilder::new();
        for pattern in exclude_patterns {
            let glob = Glob::new(pattern).map_err(|e| ShellGuardError::InvalidPattern {
                pattern: pattern.clone(),
                source: e,
            })?;
            builder.add(glob);
        }
        let exclude_patterns = builder
            .build()
            .map_err(|e| ShellGuardError::InvalidPattern {
                pattern: "combined patterns".to_string(),
                source: e,
            })?;

        let mut normalized: Vec<String> = Vec::with_capacity(extensions.len());
        for ext in extensions.iter().map(|e| normalize_extension(e)) {
            if !ext.is_empty() && !normalized.contains(&ext) {
                normalized.push(ext);
            }
        }

        Ok(Self {
            extensions: normalized,
            exclude_patterns,
        })
    }

    /// Normalized extensions, without leading `*` or `.`.
    #[must_use]
    pub fn extensions(&self) -> &[String] {
        &self.extensions
    }

    fn has_valid_extension(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| self.extensions.iter().any(|e| e == ext))
    }

    fn is_excluded(&self, path: &Path) -> bool {
        self.exclude_patterns.is_match(path)
    }
}

impl FileFilter for ExtensionFilter {
    fn should_include(&self, path: &Path) -> bool {
        self.has_valid_extension(path) && !self.is_excluded(path)
    }
}

/// Strip the glob-ish prefix users tend to type: `*.sh` -> `sh`, `.sh` -> `sh`.
#[must_use]
pub fn normalize_extension(ext: &str) -> String {
    ext.trim().trim_start_matches(['*', '.']).to_string()
}

#[cfg(test)]
#[path = "filter_tests.rs"]
mod tests;
