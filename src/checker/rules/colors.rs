use std::sync::Arc;

use indexmap::IndexMap;
use regex::Regex;

use crate::checker::{Check, CheckInput, Finding, Palette, Severity};

use super::is_shell;

const LOGGING_FUNCTIONS: &[&str] = &["log_error", "log_success", "log_info", "log_warn"];

/// A line assigning one of the palette's color variables.
struct Definition<'a> {
    line_number: usize,
    line: &'a str,
    readonly: bool,
}

/// Finds palette color assignments anchored at the start of a line
/// (`RED=...` or `readonly RED=...`). Assignments inside `export`, `declare`
/// or on the same line as other commands are not recognized.
struct DefinitionMatcher {
    assignment: Regex,
}

impl DefinitionMatcher {
    fn new() -> Self {
        Self {
            assignment: Regex::new(r"^\s*(readonly\s+)?([A-Za-z_][A-Za-z0-9_]*)=")
                .expect("Invalid regex"),
        }
    }

    fn definitions<'a>(
        &self,
        palette: &Palette,
        lines: &[&'a str],
    ) -> IndexMap<String, Vec<Definition<'a>>> {
        let mut found: IndexMap<String, Vec<Definition<'a>>> = IndexMap::new();
        for (idx, line) in lines.iter().enumerate() {
            let Some(caps) = self.assignment.captures(line) else {
                continue;
            };
            let name = &caps[2];
            if palette.expected(name).is_none() {
                continue;
            }
            found.entry(name.to_string()).or_default().push(Definition {
                line_number: idx + 1,
                line,
                readonly: caps.get(1).is_some(),
            });
        }
        found
    }
}

/// Color variables that exist in the reference palette must carry the
/// reference code. The code is matched verbatim on the defining line, so
/// equivalent spellings (hex, 256-color indexes) are reported as mismatches.
pub struct PaletteCheck {
    palette: Arc<Palette>,
    matcher: DefinitionMatcher,
}

impl PaletteCheck {
    #[must_use]
    pub fn new(palette: Arc<Palette>) -> Self {
        Self {
            palette,
            matcher: DefinitionMatcher::new(),
        }
    }
}

impl Check for PaletteCheck {
    fn name(&self) -> &'static str {
        "palette"
    }

    fn severity(&self) -> Severity {
        Severity::Warning
    }

    fn description(&self) -> &'static str {
        "color variables must use the reference palette codes"
    }

    fn applies_to(&self, _extension: &str) -> bool {
        true
    }

    fn evaluate(&self, input: &CheckInput<'_>) -> Vec<Finding> {
        let definitions = self.matcher.definitions(&self.palette, &input.lines);

        self.palette
            .iter()
            .filter_map(|(name, expected)| {
                let defs = definitions.get(name)?;
                if defs.iter().any(|d| d.line.contains(expected)) {
                    return None;
                }
                Some(
                    Finding::warning(
                        self.name(),
                        format!("incorrect color code for {name} (expected: {expected})"),
                    )
                    .at_line(defs[0].line_number),
                )
            })
            .collect()
    }
}

/// Scripts that declare readonly palette colors are expected to print through
/// the shared logging helpers. Any whole-token reference counts, including
/// one inside a comment.
pub struct LoggingUsageCheck {
    palette: Arc<Palette>,
    matcher: DefinitionMatcher,
    logging_call: Regex,
}

impl LoggingUsageCheck {
    #[must_use]
    pub fn new(palette: Arc<Palette>) -> Self {
        let pattern = format!(r"\b(?:{})\b", LOGGING_FUNCTIONS.join("|"));
        Self {
            palette,
            matcher: DefinitionMatcher::new(),
            logging_call: Regex::new(&pattern).expect("Invalid regex"),
        }
    }
}

impl Check for LoggingUsageCheck {
    fn name(&self) -> &'static str {
        "logging-usage"
    }

    fn severity(&self) -> Severity {
        Severity::Warning
    }

    fn description(&self) -> &'static str {
        "scripts defining readonly colors should use the logging helpers"
    }

    fn applies_to(&self, extension: &str) -> bool {
        is_shell(extension)
    }

    fn evaluate(&self, input: &CheckInput<'_>) -> Vec<Finding> {
        let definitions = self.matcher.definitions(&self.palette, &input.lines);
        let first_readonly = definitions
            .values()
            .flatten()
            .filter(|d| d.readonly)
            .map(|d| d.line_number)
            .min();

        match first_readonly {
            Some(line) if !self.logging_call.is_match(input.content) => vec![
                Finding::warning(
                    self.name(),
                    format!(
                        "colors defined but unused by logging (expected one of: {})",
                        LOGGING_FUNCTIONS.join(", ")
                    ),
                )
                .at_line(line),
            ],
            _ => Vec::new(),
        }
    }
}

#[cfg(test)]
#[path = "colors_tests.rs"]
mod tests;
