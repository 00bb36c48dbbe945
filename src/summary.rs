use serde::Serialize;

use crate::engine::FileResult;
use crate::{EXIT_CHECK_FAILED, EXIT_SUCCESS};

/// Run-level aggregate. Partial summaries (e.g. per worker) combine with
/// [`RunSummary::merge`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    pub total_files: usize,
    pub passed_files: usize,
    pub failed_files: usize,
    /// Warning findings across all files, passed or failed.
    pub total_warnings: usize,
}

impl RunSummary {
    #[must_use]
    pub fn from_result(result: &FileResult) -> Self {
        let passed = result.passed();
        Self {
            total_files: 1,
            passed_files: usize::from(passed),
            failed_files: usize::from(!passed),
            total_warnings: result.warning_count(),
        }
    }

    #[must_use]
    pub fn from_results(results: &[FileResult]) -> Self {
        results
            .iter()
            .map(Self::from_result)
            .fold(Self::default(), Self::merge)
    }

    #[must_use]
    pub const fn merge(self, other: Self) -> Self {
        Self {
            total_files: self.total_files + other.total_files,
            passed_files: self.passed_files + other.passed_files,
            failed_files: self.failed_files + other.failed_files,
            total_warnings: self.total_warnings + other.total_warnings,
        }
    }

    #[must_use]
    pub const fn passed(&self) -> bool {
        self.failed_files == 0
    }

    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        if self.passed() {
            EXIT_SUCCESS
        } else {
            EXIT_CHECK_FAILED
        }
    }
}

#[cfg(test)]
#[path = "summary_tests.rs"]
mod tests;
