//! Runs the registry over candidate files.

use std::fs;
use std::path::{Path, PathBuf};

use rayon::prelude::*;
use serde::Serialize;
use tracing::debug;

use crate::checker::{CheckInput, CheckRegistry, Finding, IgnorePolicy, Severity};
use crate::error::{Result, ShellGuardError};
use crate::scanner::FileCandidate;

const UNREADABLE: &str = "unreadable";

/// Outcome of analyzing one file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileResult {
    pub path: PathBuf,
    pub findings: Vec<Finding>,
    /// Carried the ignore marker; no checks ran.
    pub ignored: bool,
}

impl FileResult {
    #[must_use]
    pub const fn ignored(path: PathBuf) -> Self {
        Self {
            path,
            findings: Vec::new(),
            ignored: true,
        }
    }

    #[must_use]
    pub fn passed(&self) -> bool {
        self.ignored || !self.findings.iter().any(Finding::is_critical)
    }

    #[must_use]
    pub fn warning_count(&self) -> usize {
        self.findings
            .iter()
            .filter(|f| f.severity == Severity::Warning)
            .count()
    }

    #[must_use]
    pub fn critical_count(&self) -> usize {
        self.findings.iter().filter(|f| f.is_critical()).count()
    }
}

pub struct Engine {
    registry: CheckRegistry,
    ignore: IgnorePolicy,
}

impl Engine {
    #[must_use]
    pub fn new(registry: CheckRegistry) -> Self {
        Self {
            registry,
            ignore: IgnorePolicy::default(),
        }
    }

    #[must_use]
    pub const fn registry(&self) -> &CheckRegistry {
        &self.registry
    }

    /// Analyze one file. Never fails: problems reading the file become a
    /// critical finding.
    #[must_use]
    pub fn analyze(&self, candidate: &FileCandidate) -> FileResult {
        let path = candidate.path.clone();
        let content = match read_text(&candidate.path) {
            Ok(content) => content,
            Err(message) => {
                debug!(path = %path.display(), %message, "file unreadable");
                return FileResult {
                    path,
                    findings: vec![Finding::critical(UNREADABLE, message)],
                    ignored: false,
                };
            }
        };

        if self.ignore.is_ignored(&content) {
            debug!(path = %path.display(), "ignore marker present, skipping");
            return FileResult::ignored(path);
        }

        let input = CheckInput::new(
            &candidate.path,
            &candidate.extension,
            &content,
            file_mode(&candidate.path),
        );
        let findings: Vec<Finding> = self
            .registry
            .applicable(&candidate.extension)
            .flat_map(|check| check.evaluate(&input))
            .collect();
        debug!(path = %path.display(), findings = findings.len(), "file analyzed");

        FileResult {
            path,
            findings,
            ignored: false,
        }
    }

    /// Analyze every candidate in parallel; results keep candidate order.
    #[must_use]
    pub fn analyze_all(&self, candidates: &[FileCandidate]) -> Vec<FileResult> {
        self.analyze_all_with(candidates, |_| {})
    }

    /// Like [`Self::analyze_all`], calling `on_file` as each file completes.
    pub fn analyze_all_with<F>(&self, candidates: &[FileCandidate], on_file: F) -> Vec<FileResult>
    where
        F: Fn(&FileResult) + Sync,
    {
        candidates
            .par_iter()
            .map(|candidate| {
                let result = self.analyze(candidate);
                on_file(&result);
                result
            })
            .collect()
    }
}

/// Run `op` on a dedicated pool of `jobs` threads, or on the global pool.
///
/// # Errors
/// Returns an error if the thread pool cannot be created.
pub fn with_jobs<T, F>(jobs: Option<usize>, op: F) -> Result<T>
where
    T: Send,
    F: FnOnce() -> T + Send,
{
    let Some(jobs) = jobs else {
        return Ok(op());
    };
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(jobs)
        .build()
        .map_err(|e| ShellGuardError::Io(std::io::Error::other(e)))?;
    Ok(pool.install(op))
}

fn read_text(path: &Path) -> std::result::Result<String, String> {
    let bytes = fs::read(path).map_err(|e| format!("cannot read file: {e}"))?;
    String::from_utf8(bytes).map_err(|_| "file is not valid UTF-8 text".to_string())
}

#[cfg(unix)]
fn file_mode(path: &Path) -> Option<u32> {
    use std::os::unix::fs::PermissionsExt;

    fs::metadata(path).ok().map(|m| m.permissions().mode())
}

#[cfg(not(unix))]
fn file_mode(_path: &Path) -> Option<u32> {
    None
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
