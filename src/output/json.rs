use std::path::PathBuf;

use serde::Serialize;

use crate::checker::Finding;
use crate::engine::FileResult;
use crate::error::Result;
use crate::summary::RunSummary;

use super::{OutputFormatter, display_path};

#[derive(Default)]
pub struct JsonFormatter {
    root: Option<PathBuf>,
}

impl JsonFormatter {
    #[must_use]
    pub const fn new(root: Option<PathBuf>) -> Self {
        Self { root }
    }
}

#[derive(Serialize)]
struct JsonOutput<'a> {
    summary: &'a RunSummary,
    passed: bool,
    results: Vec<JsonFileResult<'a>>,
}

#[derive(Serialize)]
struct JsonFileResult<'a> {
    path: String,
    status: &'static str,
    ignored: bool,
    findings: &'a [Finding],
}

impl OutputFormatter for JsonFormatter {
    fn format(&self, results: &[FileResult], summary: &RunSummary) -> Result<String> {
        let output = JsonOutput {
            summary,
            passed: summary.passed(),
            results: results
                .iter()
                .map(|result| JsonFileResult {
                    path: display_path(&result.path, self.root.as_deref()),
                    status: if result.passed() { "passed" } else { "failed" },
                    ignored: result.ignored,
                    findings: &result.findings,
                })
                .collect(),
        };

        Ok(serde_json::to_string_pretty(&output)?)
    }
}
