use std::io::IsTerminal;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use indicatif::{ProgressBar, ProgressStyle};

/// Progress bar on stderr for per-file work. Hidden when quiet or when
/// stderr is not a terminal.
#[derive(Clone)]
pub struct ScanProgress {
    bar: ProgressBar,
    done: Arc<AtomicU64>,
}

impl ScanProgress {
    #[must_use]
    pub fn new(total: u64, label: &str, quiet: bool) -> Self {
        let visible = !quiet && std::io::stderr().is_terminal();
        Self::with_visibility(total, label, visible)
    }

    fn with_visibility(total: u64, label: &str, visible: bool) -> Self {
        let bar = if visible {
            let bar = ProgressBar::new(total);
            let template =
                format!("{{spinner:.green}} {label} [{{bar:40.cyan/blue}}] {{pos}}/{{len}} files");
            if let Ok(style) = ProgressStyle::default_bar().template(&template) {
                bar.set_style(style.progress_chars("█▓░"));
            }
            bar
        } else {
            ProgressBar::hidden()
        };

        Self {
            bar,
            done: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Safe to call from rayon workers.
    pub fn inc(&self) {
        let count = self.done.fetch_add(1, Ordering::Relaxed) + 1;
        self.bar.set_position(count);
    }

    #[must_use]
    pub fn position(&self) -> u64 {
        self.done.load(Ordering::Relaxed)
    }

    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}

#[cfg(test)]
#[path = "progress_tests.rs"]
mod tests;
