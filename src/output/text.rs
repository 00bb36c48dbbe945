use std::fmt::Write;
use std::path::{Path, PathBuf};

use crate::checker::{Finding, Severity};
use crate::engine::FileResult;
use crate::error::Result;
use crate::external::FormatOutcome;
use crate::summary::RunSummary;

use super::{ColorMode, OutputFormatter, ansi, display_path};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FileStatus {
    Failed,
    Warning,
    Passed,
    Ignored,
}

impl FileStatus {
    fn of(result: &FileResult) -> Self {
        if result.ignored {
            Self::Ignored
        } else if !result.passed() {
            Self::Failed
        } else if result.warning_count() > 0 {
            Self::Warning
        } else {
            Self::Passed
        }
    }

    const fn icon(self) -> &'static str {
        match self {
            Self::Failed => "✗",
            Self::Warning => "⚠",
            Self::Passed => "✓",
            Self::Ignored => "○",
        }
    }

    const fn label(self) -> &'static str {
        match self {
            Self::Failed => "FAILED",
            Self::Warning => "WARNING",
            Self::Passed => "PASSED",
            Self::Ignored => "IGNORED",
        }
    }

    const fn color(self) -> &'static str {
        match self {
            Self::Failed => ansi::RED,
            Self::Warning => ansi::YELLOW,
            Self::Passed => ansi::GREEN,
            Self::Ignored => ansi::CYAN,
        }
    }
}

/// Human-readable report. Failed files come first, then files with warnings;
/// clean and ignored files are listed only in verbose mode.
pub struct TextFormatter {
    use_colors: bool,
    verbose: u8,
    root: Option<PathBuf>,
}

impl TextFormatter {
    #[must_use]
    pub fn new(mode: ColorMode) -> Self {
        Self::with_verbose(mode, 0)
    }

    #[must_use]
    pub fn with_verbose(mode: ColorMode, verbose: u8) -> Self {
        let use_colors = mode.resolve(std::io::IsTerminal::is_terminal(&std::io::stdout()));
        Self {
            use_colors,
            verbose,
            root: None,
        }
    }

    /// Show paths relative to `root`.
    #[must_use]
    pub fn with_root(mut self, root: Option<PathBuf>) -> Self {
        self.root = root;
        self
    }

    fn paint(&self, text: &str, color: &str) -> String {
        if !self.use_colors {
            return text.to_string();
        }
        format!("{color}{text}{}", ansi::RESET)
    }

    fn path(&self, path: &Path) -> String {
        display_path(path, self.root.as_deref())
    }

    fn format_finding(&self, finding: &Finding, out: &mut String) {
        let (icon, color) = match finding.severity {
            Severity::Critical => ("✗", ansi::RED),
            Severity::Warning => ("⚠", ansi::YELLOW),
        };
        let location = finding
            .line
            .map(|line| format!(" line {line}:"))
            .unwrap_or_default();
        let _ = writeln!(
            out,
            "   {} [{}]{location} {}",
            self.paint(icon, color),
            finding.check,
            finding.message
        );
    }

    fn format_result(&self, result: &FileResult, status: FileStatus, out: &mut String) {
        let _ = writeln!(
            out,
            "{} {}: {}",
            status.icon(),
            self.paint(status.label(), status.color()),
            self.path(&result.path)
        );
        for finding in &result.findings {
            self.format_finding(finding, out);
        }
    }

    fn format_summary(&self, summary: &RunSummary) -> String {
        format!(
            "Summary: {} files checked, {} passed, {} failed, {} warnings",
            summary.total_files,
            self.paint(&summary.passed_files.to_string(), ansi::GREEN),
            self.paint(&summary.failed_files.to_string(), ansi::RED),
            self.paint(&summary.total_warnings.to_string(), ansi::YELLOW),
        )
    }

    /// Report for the `fmt` command.
    #[must_use]
    pub fn format_outcomes(&self, outcomes: &[(PathBuf, FormatOutcome)], check_only: bool) -> String {
        let mut out = String::new();
        let mut counts = [0usize; 4];

        for (path, outcome) in outcomes {
            let (slot, icon, label, color) = match outcome {
                FormatOutcome::Unchanged => (0, "✓", "UNCHANGED", ansi::GREEN),
                FormatOutcome::Formatted => (1, "✎", "FORMATTED", ansi::CYAN),
                FormatOutcome::NeedsFormat => (2, "⚠", "NEEDS FORMAT", ansi::YELLOW),
                FormatOutcome::Failed(_) => (3, "✗", "FAILED", ansi::RED),
            };
            counts[slot] += 1;
            if slot == 0 && self.verbose == 0 {
                continue;
            }
            let _ = writeln!(out, "{icon} {}: {}", self.paint(label, color), self.path(path));
            if let FormatOutcome::Failed(reason) = outcome {
                let _ = writeln!(out, "   {reason}");
            }
        }

        let [unchanged, formatted, needs_format, failed] = counts;
        let changed = if check_only {
            format!("{needs_format} need formatting")
        } else {
            format!("{formatted} formatted")
        };
        let _ = writeln!(
            out,
            "Summary: {} files, {unchanged} unchanged, {changed}, {} failed",
            outcomes.len(),
            self.paint(&failed.to_string(), ansi::RED),
        );
        out
    }

    #[cfg(test)]
    pub(crate) const fn plain(verbose: u8) -> Self {
        Self {
            use_colors: false,
            verbose,
            root: None,
        }
    }
}

impl Default for TextFormatter {
    fn default() -> Self {
        Self::new(ColorMode::Auto)
    }
}

impl OutputFormatter for TextFormatter {
    fn format(&self, results: &[FileResult], summary: &RunSummary) -> Result<String> {
        let mut out = String::new();
        let order = [
            FileStatus::Failed,
            FileStatus::Warning,
            FileStatus::Passed,
            FileStatus::Ignored,
        ];

        for status in order {
            if matches!(status, FileStatus::Passed | FileStatus::Ignored) && self.verbose == 0 {
                continue;
            }
            for result in results.iter().filter(|r| FileStatus::of(r) == status) {
                self.format_result(result, status, &mut out);
                out.push('\n');
            }
        }

        let _ = writeln!(out, "{}", self.format_summary(summary));
        Ok(out)
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
