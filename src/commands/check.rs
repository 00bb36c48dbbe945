use std::collections::HashSet;
use std::sync::Arc;

use tracing::{debug, info};

use crate::checker::{CheckRegistry, CheckSettings, Palette};
use crate::cli::{CheckArgs, Cli};
use crate::config::Config;
use crate::engine::{Engine, with_jobs};
use crate::error::{Result, ShellGuardError};
use crate::external::{ShellValidator, SyntaxValidator};
use crate::output::{JsonFormatter, OutputFormat, OutputFormatter, ScanProgress, TextFormatter};
use crate::scanner::{DirectoryScanner, ExtensionFilter, FileScanner};
use crate::summary::RunSummary;

use super::context::{
    display_root, extensions_or, fail, load_config, merged_excludes, write_output,
};

#[must_use]
pub fn run_check(args: &CheckArgs, cli: &Cli) -> i32 {
    match run_check_impl(args, cli) {
        Ok(exit_code) => exit_code,
        Err(e) => fail(&e, cli),
    }
}

/// Scan, analyze and report. Returns the run's exit code.
///
/// # Errors
/// Returns an error for configuration problems, an unavailable validator, a
/// missing path, an empty scan or a failed report write.
pub fn run_check_impl(args: &CheckArgs, cli: &Cli) -> Result<i32> {
    let config = load_config(cli)?;

    let extensions = extensions_or(args.types.as_ref(), &config.scan.extensions);
    let excludes = merged_excludes(&config.scan.exclude, &args.exclude);
    let filter = ExtensionFilter::new(&extensions, &excludes)?;
    let extensions = filter.extensions().to_vec();
    let recursive = args.recursive || config.scan.recursive;

    // Tool setup problems are reported before anything is scanned.
    let validator = syntax_validator(args, &config, &extensions)?;

    let candidates = DirectoryScanner::new(filter).scan(&args.path, recursive)?;
    if candidates.is_empty() {
        return Err(ShellGuardError::NoFilesMatched { extensions });
    }

    let settings = check_settings(&config, validator);
    let engine = Engine::new(CheckRegistry::standard(&settings));
    info!(
        files = candidates.len(),
        checks = engine.registry().len(),
        "starting analysis"
    );

    let progress = ScanProgress::new(candidates.len() as u64, "Checking", cli.quiet);
    let results = with_jobs(args.jobs.map(usize::from), || {
        engine.analyze_all_with(&candidates, |_| progress.inc())
    })?;
    progress.finish();

    let summary = RunSummary::from_results(&results);
    info!(
        total = summary.total_files,
        passed = summary.passed_files,
        failed = summary.failed_files,
        warnings = summary.total_warnings,
        "analysis finished"
    );

    let root = display_root();
    let report = match args.format {
        OutputFormat::Text => TextFormatter::with_verbose(cli.color.into(), cli.verbose)
            .with_root(root)
            .format(&results, &summary)?,
        OutputFormat::Json => JsonFormatter::new(root).format(&results, &summary)?,
    };
    write_output(args.output.as_deref(), &report, cli.quiet)?;

    Ok(summary.exit_code())
}

/// Probe the syntax validator when enabled and the run can include shell
/// scripts: `sh` is among the scanned extensions or the path is a `.sh` file.
fn syntax_validator(
    args: &CheckArgs,
    config: &Config,
    extensions: &[String],
) -> Result<Option<Arc<dyn SyntaxValidator>>> {
    let syntax_enabled = config.syntax.enabled && !args.no_syntax;
    let may_see_shell = extensions.iter().any(|ext| ext == "sh")
        || args.path.extension().is_some_and(|ext| ext == "sh");
    if !(syntax_enabled && may_see_shell) {
        return Ok(None);
    }

    let shell = args.shell.as_deref().unwrap_or(&config.syntax.shell);
    let validator = ShellValidator::new(shell);
    validator.probe()?;
    debug!(shell, "syntax validator ready");
    Ok(Some(Arc::new(validator)))
}

/// Build registry settings from config and the probed validator.
fn check_settings(
    config: &Config,
    validator: Option<Arc<dyn SyntaxValidator>>,
) -> CheckSettings {
    CheckSettings {
        palette: Arc::new(Palette::from_map(&config.palette)),
        env_file: config.style.env_file.clone(),
        python_env_marker: config.style.python_env_marker.clone(),
        validator,
        disabled: config.checks.disabled.iter().cloned().collect::<HashSet<_>>(),
    }
}

#[cfg(test)]
#[path = "check_tests.rs"]
mod tests;
