use regex::Regex;

use crate::checker::{Check, CheckInput, Finding, Severity};

use super::is_shell;

/// Functions whose body has at most this many lines (logging wrappers and
/// similar) are exempt.
pub const MIN_FUNCTION_BODY_LINES: usize = 2;

/// Per-function bookkeeping while inside a body.
struct FunctionBody {
    name: String,
    declared_at: usize,
    line_count: usize,
    has_local: bool,
    has_assignment: bool,
}

impl FunctionBody {
    fn new(name: String, declared_at: usize) -> Self {
        Self {
            name,
            declared_at,
            line_count: 0,
            has_local: false,
            has_assignment: false,
        }
    }

    const fn leaks_variables(&self) -> bool {
        self.has_assignment && !self.has_local && self.line_count > MIN_FUNCTION_BODY_LINES
    }
}

enum ScanState {
    OutsideFunction,
    InsideFunction(FunctionBody),
}

/// Flags functions that assign variables but never declare anything `local`.
///
/// Function boundaries come from line matching: a body opens at `function name`
/// or `name() {` and closes at a line that is exactly `}`. Nested functions
/// restart the scan, heredocs containing a lone `}` end the body early, and
/// assignments hidden behind `;` or `&&` are not seen.
pub struct LocalVariablesCheck {
    declaration: Regex,
    local: Regex,
    assignment: Regex,
}

impl Default for LocalVariablesCheck {
    fn default() -> Self {
        Self::new()
    }
}

impl LocalVariablesCheck {
    #[must_use]
    pub fn new() -> Self {
        Self {
            declaration: Regex::new(
                r"^\s*(?:function\s+([A-Za-z_][A-Za-z0-9_]*)|([A-Za-z_][A-Za-z0-9_]*)\s*\(\s*\)\s*\{)",
            )
            .expect("Invalid regex"),
            local: Regex::new(r"\blocal\b").expect("Invalid regex"),
            assignment: Regex::new(r"^\s*[a-z_][a-z0-9_]*=").expect("Invalid regex"),
        }
    }

    fn declared_function(&self, line: &str) -> Option<String> {
        let caps = self.declaration.captures(line)?;
        caps.get(1)
            .or_else(|| caps.get(2))
            .map(|m| m.as_str().to_string())
    }

    /// `name() { ...; }` opens and closes on the same line.
    fn is_one_liner(line: &str) -> bool {
        let trimmed = line.trim_end();
        trimmed.contains('{') && trimmed.ends_with('}')
    }

    fn finding(&self, body: &FunctionBody) -> Finding {
        Finding::warning(
            self.name(),
            format!(
                "function '{}' assigns variables without declaring them local",
                body.name
            ),
        )
        .at_line(body.declared_at)
    }
}

impl Check for LocalVariablesCheck {
    fn name(&self) -> &'static str {
        "local-variables"
    }

    fn severity(&self) -> Severity {
        Severity::Warning
    }

    fn description(&self) -> &'static str {
        "functions should declare their variables local"
    }

    fn applies_to(&self, extension: &str) -> bool {
        is_shell(extension)
    }

    fn evaluate(&self, input: &CheckInput<'_>) -> Vec<Finding> {
        let mut findings = Vec::new();
        let mut state = ScanState::OutsideFunction;

        for (idx, line) in input.lines.iter().enumerate() {
            if let Some(name) = self.declared_function(line) {
                state = if Self::is_one_liner(line) {
                    ScanState::OutsideFunction
                } else {
                    ScanState::InsideFunction(FunctionBody::new(name, idx + 1))
                };
                continue;
            }

            let ScanState::InsideFunction(body) = &mut state else {
                continue;
            };

            if line.trim() == "}" {
                if body.leaks_variables() {
                    findings.push(self.finding(body));
                }
                state = ScanState::OutsideFunction;
                continue;
            }

            body.line_count += 1;
            if self.local.is_match(line) {
                body.has_local = true;
            }
            if self.assignment.is_match(line) {
                body.has_assignment = true;
            }
        }

        findings
    }
}

#[cfg(test)]
#[path = "locals_tests.rs"]
mod tests;
