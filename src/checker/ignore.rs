/// Opt-out marker a file can carry to skip every check.
pub const IGNORE_MARKER: &str = "STYLECHECK_IGNORE";

/// Only the head of the file is searched for the marker.
pub const IGNORE_SCAN_LINES: usize = 10;

/// Decides whether a file has exempted itself from analysis.
#[derive(Debug, Clone)]
pub struct IgnorePolicy {
    marker: String,
    scan_lines: usize,
}

impl Default for IgnorePolicy {
    fn default() -> Self {
        Self {
            marker: IGNORE_MARKER.to_string(),
            scan_lines: IGNORE_SCAN_LINES,
        }
    }
}

impl IgnorePolicy {
    #[must_use]
    pub fn is_ignored(&self, content: &str) -> bool {
        content
            .lines()
            .take(self.scan_lines)
            .any(|line| line.contains(self.marker.as_str()))
    }
}

#[cfg(test)]
#[path = "ignore_tests.rs"]
mod tests;
