use std::fmt::Write;
use std::path::Path;

use crate::EXIT_SUCCESS;
use crate::checker::{Check, CheckRegistry, CheckSettings};
use crate::cli::Cli;
use crate::external::{SyntaxValidator, Validation};

const KNOWN_EXTENSIONS: &[&str] = &["sh", "py"];

/// Stands in for the shell so the listing includes `syntax` without
/// spawning anything.
struct ListingValidator;

impl SyntaxValidator for ListingValidator {
    fn validate(&self, _path: &Path) -> std::io::Result<Validation> {
        Ok(Validation::Valid)
    }
}

#[must_use]
pub fn run_checks(cli: &Cli) -> i32 {
    if !cli.quiet {
        print!("{}", format_checks_table());
    }
    EXIT_SUCCESS
}

/// Every check with its severity, file types and description.
#[must_use]
pub fn format_checks_table() -> String {
    let settings = CheckSettings {
        validator: Some(std::sync::Arc::new(ListingValidator)),
        ..CheckSettings::default()
    };
    let registry = CheckRegistry::standard(&settings);

    let mut out = String::new();
    let _ = writeln!(out, "{:<20} {:<9} {:<7} DESCRIPTION", "NAME", "SEVERITY", "TYPES");
    for check in registry.checks() {
        let _ = writeln!(
            out,
            "{:<20} {:<9} {:<7} {}",
            check.name(),
            check.severity().to_string(),
            applies_to(check.as_ref()),
            check.description()
        );
    }
    out
}

fn applies_to(check: &dyn Check) -> String {
    let matching: Vec<_> = KNOWN_EXTENSIONS
        .iter()
        .copied()
        .filter(|ext| check.applies_to(ext))
        .collect();
    if check.applies_to("") {
        "all".to_string()
    } else {
        matching.join(",")
    }
}
