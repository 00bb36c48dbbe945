use super::*;

fn result(path: &str, findings: Vec<Finding>) -> FileResult {
    FileResult {
        path: PathBuf::from(path),
        findings,
        ignored: false,
    }
}

fn sample() -> Vec<FileResult> {
    vec![
        result("clean.sh", vec![]),
        result(
            "broken.sh",
            vec![Finding::critical("shebang", "missing shebang").at_line(1)],
        ),
        result(
            "style.sh",
            vec![Finding::warning("env-integration", "missing .env integration (.sys/env/.env)")],
        ),
        FileResult::ignored(PathBuf::from("legacy.sh")),
    ]
}

fn render(verbose: u8) -> String {
    let results = sample();
    let summary = RunSummary::from_results(&results);
    TextFormatter::plain(verbose)
        .format(&results, &summary)
        .unwrap()
}

#[test]
fn failures_are_listed_before_warnings() {
    let output = render(0);

    let failed = output.find("FAILED: broken.sh").unwrap();
    let warned = output.find("WARNING: style.sh").unwrap();
    assert!(failed < warned);
}

#[test]
fn findings_show_check_line_and_message() {
    let output = render(0);

    assert!(output.contains("   ✗ [shebang] line 1: missing shebang"));
    assert!(output.contains("   ⚠ [env-integration] missing .env integration"));
}

#[test]
fn clean_and_ignored_files_need_verbose() {
    let quiet = render(0);
    assert!(!quiet.contains("clean.sh"));
    assert!(!quiet.contains("legacy.sh"));

    let verbose = render(1);
    assert!(verbose.contains("✓ PASSED: clean.sh"));
    assert!(verbose.contains("○ IGNORED: legacy.sh"));
}

#[test]
fn summary_line_has_all_totals() {
    let output = render(0);

    assert!(output.ends_with("Summary: 4 files checked, 3 passed, 1 failed, 1 warnings\n"));
}

#[test]
fn colors_wrap_status_labels() {
    let formatter = TextFormatter::new(ColorMode::Always);
    let results = sample();
    let output = formatter
        .format(&results, &RunSummary::from_results(&results))
        .unwrap();

    assert!(output.contains(&format!("{}FAILED{}", ansi::RED, ansi::RESET)));
}

#[test]
fn paths_are_shown_relative_to_root() {
    let results = vec![result(
        "/repo/bin/run.sh",
        vec![Finding::critical("shebang", "missing shebang")],
    )];
    let output = TextFormatter::plain(0)
        .with_root(Some(PathBuf::from("/repo")))
        .format(&results, &RunSummary::from_results(&results))
        .unwrap();

    assert!(output.contains("FAILED: bin/run.sh"));
}

#[test]
fn fmt_report_in_check_mode() {
    let outcomes = vec![
        (PathBuf::from("a.sh"), FormatOutcome::Unchanged),
        (PathBuf::from("b.sh"), FormatOutcome::NeedsFormat),
        (PathBuf::from("c.sh"), FormatOutcome::Failed("1:1: bad".to_string())),
    ];

    let output = TextFormatter::plain(0).format_outcomes(&outcomes, true);

    assert!(!output.contains("a.sh"));
    assert!(output.contains("⚠ NEEDS FORMAT: b.sh"));
    assert!(output.contains("✗ FAILED: c.sh\n   1:1: bad"));
    assert!(output.contains("Summary: 3 files, 1 unchanged, 1 need formatting, 1 failed"));
}

#[test]
fn fmt_report_in_write_mode() {
    let outcomes = vec![(PathBuf::from("a.sh"), FormatOutcome::Formatted)];

    let output = TextFormatter::plain(0).format_outcomes(&outcomes, false);

    assert!(output.contains("✎ FORMATTED: a.sh"));
    assert!(output.contains("1 formatted"));
}
