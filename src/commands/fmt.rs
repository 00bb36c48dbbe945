use std::path::PathBuf;

use rayon::prelude::*;
use tracing::info;

use crate::cli::{Cli, FmtArgs};
use crate::error::{Result, ShellGuardError};
use crate::external::{FormatOutcome, ShellFormatter, Shfmt};
use crate::output::{ScanProgress, TextFormatter};
use crate::scanner::{DirectoryScanner, ExtensionFilter, FileScanner};
use crate::{EXIT_CHECK_FAILED, EXIT_SUCCESS};

use super::context::{
    display_root, extensions_or, fail, load_config, merged_excludes, write_output,
};

#[must_use]
pub fn run_fmt(args: &FmtArgs, cli: &Cli) -> i32 {
    match run_fmt_impl(args, cli) {
        Ok(exit_code) => exit_code,
        Err(e) => fail(&e, cli),
    }
}

/// Format (or, with `--check`, verify formatting of) scripts with shfmt.
///
/// # Errors
/// Returns an error if shfmt is not installed, the configuration is invalid
/// or no files match.
pub fn run_fmt_impl(args: &FmtArgs, cli: &Cli) -> Result<i32> {
    let config = load_config(cli)?;

    let program = args.shfmt.clone().unwrap_or(config.format.program);
    let formatter = Shfmt::new(program, config.format.options);
    let version = formatter.version()?;
    info!(%version, "using shfmt");

    let extensions = extensions_or(args.types.as_ref(), &config.format.extensions);
    let excludes = merged_excludes(&config.scan.exclude, &args.exclude);
    let filter = ExtensionFilter::new(&extensions, &excludes)?;
    let extensions = filter.extensions().to_vec();
    let recursive = args.recursive || config.scan.recursive;

    let candidates = DirectoryScanner::new(filter).scan(&args.path, recursive)?;
    if candidates.is_empty() {
        return Err(ShellGuardError::NoFilesMatched { extensions });
    }

    let paths = candidates.into_iter().map(|c| c.path).collect();
    let outcomes = format_all(&formatter, paths, args.check, cli.quiet);

    let report = TextFormatter::with_verbose(cli.color.into(), cli.verbose)
        .with_root(display_root())
        .format_outcomes(&outcomes, args.check);
    write_output(None, &report, cli.quiet)?;

    Ok(exit_code(&outcomes, args.check))
}

/// Run the formatter over every path in parallel, keeping path order.
pub fn format_all<F: ShellFormatter>(
    formatter: &F,
    paths: Vec<PathBuf>,
    check_only: bool,
    quiet: bool,
) -> Vec<(PathBuf, FormatOutcome)> {
    let label = if check_only { "Verifying" } else { "Formatting" };
    let progress = ScanProgress::new(paths.len() as u64, label, quiet);
    let outcomes = paths
        .into_par_iter()
        .map(|path| {
            let outcome = formatter.format(&path, check_only);
            progress.inc();
            (path, outcome)
        })
        .collect();
    progress.finish();
    outcomes
}

#[must_use]
pub fn exit_code(outcomes: &[(PathBuf, FormatOutcome)], check_only: bool) -> i32 {
    if outcomes.iter().any(|(_, o)| o.is_failure(check_only)) {
        EXIT_CHECK_FAILED
    } else {
        EXIT_SUCCESS
    }
}

#[cfg(test)]
#[path = "fmt_tests.rs"]
mod tests;
