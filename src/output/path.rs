//! Path display for reports.

use std::path::Path;

/// Format `path` relative to `root` when it lies beneath it, with forward
/// slashes. Returns `"."` when `path` equals `root`.
#[must_use]
pub fn display_path(path: &Path, root: Option<&Path>) -> String {
    let shown = root
        .and_then(|root| path.strip_prefix(root).ok())
        .unwrap_or(path);

    let result = normalize_separators(&shown.to_string_lossy());
    if result.is_empty() {
        ".".to_string()
    } else {
        result
    }
}

#[must_use]
pub fn normalize_separators(path: &str) -> String {
    path.replace('\\', "/")
}
