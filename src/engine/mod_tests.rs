use std::fs;
use std::sync::atomic::{AtomicUsize, Ordering};

use tempfile::TempDir;

use super::*;
use crate::checker::{Check, CheckSettings};

const CLEAN_SCRIPT: &str = "\
#!/bin/bash
# Prints a greeting.
set -euo pipefail
source \"$ROOT/.sys/env/.env\"
echo hello
";

fn write_script(dir: &TempDir, name: &str, content: &[u8]) -> FileCandidate {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
    }
    FileCandidate::new(path)
}

fn standard_engine() -> Engine {
    Engine::new(CheckRegistry::standard(&CheckSettings::default()))
}

#[test]
fn clean_script_passes_without_findings() {
    let dir = TempDir::new().unwrap();
    let candidate = write_script(&dir, "ok.sh", CLEAN_SCRIPT.as_bytes());

    let result = standard_engine().analyze(&candidate);

    assert!(result.passed());
    assert!(result.findings.is_empty(), "{:?}", result.findings);
}

#[test]
fn blank_first_line_is_critical_missing_shebang() {
    let dir = TempDir::new().unwrap();
    let content = format!("\n{CLEAN_SCRIPT}");
    let candidate = write_script(&dir, "bad.sh", content.as_bytes());

    let result = standard_engine().analyze(&candidate);

    assert!(!result.passed());
    let shebang: Vec<_> = result
        .findings
        .iter()
        .filter(|f| f.check == "shebang")
        .collect();
    assert_eq!(shebang.len(), 1);
    assert_eq!(shebang[0].message, "missing shebang");
    assert!(shebang[0].is_critical());
}

#[test]
fn color_mismatch_warns_but_passes() {
    let dir = TempDir::new().unwrap();
    let content = CLEAN_SCRIPT.replace("echo hello", "RED=\"255;0;0\"\necho hello");
    let candidate = write_script(&dir, "colors.sh", content.as_bytes());

    let result = standard_engine().analyze(&candidate);

    assert!(result.passed());
    let palette: Vec<_> = result
        .findings
        .iter()
        .filter(|f| f.check == "palette")
        .collect();
    assert_eq!(palette.len(), 1);
    assert!(palette[0].message.contains("RED"));
    assert!(palette[0].message.contains("243;139;168"));
}

#[test]
fn ignore_marker_suppresses_every_check() {
    let dir = TempDir::new().unwrap();
    let candidate = write_script(&dir, "legacy.sh", b"\n# STYLECHECK_IGNORE\nFOO=1\n");

    let result = standard_engine().analyze(&candidate);

    assert!(result.ignored);
    assert!(result.passed());
    assert!(result.findings.is_empty());
}

#[test]
fn invalid_utf8_is_a_single_critical_finding() {
    let dir = TempDir::new().unwrap();
    let candidate = write_script(&dir, "binary.sh", &[0xff, 0xfe, 0x00, 0x80]);

    let result = standard_engine().analyze(&candidate);

    assert!(!result.passed());
    assert_eq!(result.findings.len(), 1);
    assert_eq!(result.findings[0].check, "unreadable");
}

#[test]
fn missing_file_is_a_single_critical_finding() {
    let dir = TempDir::new().unwrap();
    let candidate = FileCandidate::new(dir.path().join("gone.sh"));

    let result = standard_engine().analyze(&candidate);

    assert_eq!(result.critical_count(), 1);
    assert!(result.findings[0].message.starts_with("cannot read file"));
}

#[cfg(unix)]
#[test]
fn permission_denied_fails_only_that_file() {
    use std::os::unix::fs::PermissionsExt;

    let dir = TempDir::new().unwrap();
    let readable = write_script(&dir, "a.sh", CLEAN_SCRIPT.as_bytes());
    let locked = write_script(&dir, "b.sh", CLEAN_SCRIPT.as_bytes());
    fs::set_permissions(&locked.path, fs::Permissions::from_mode(0o000)).unwrap();
    // Privileged users read through mode 000; nothing to observe then.
    if fs::read(&locked.path).is_ok() {
        return;
    }

    let results = standard_engine().analyze_all(&[readable, locked.clone()]);
    fs::set_permissions(&locked.path, fs::Permissions::from_mode(0o644)).unwrap();

    assert!(results[0].passed());
    assert!(!results[1].passed());
    assert_eq!(results[1].findings.len(), 1);
    assert_eq!(results[1].findings[0].check, "unreadable");
    assert!(results[1].findings[0].message.starts_with("cannot read file"));
}

#[test]
fn analysis_is_deterministic() {
    let dir = TempDir::new().unwrap();
    let candidate = write_script(&dir, "messy.sh", b"echo hi\nFOO=1\nf() {\n x=1\n a\n b\n}\n");
    let engine = standard_engine();

    assert_eq!(engine.analyze(&candidate), engine.analyze(&candidate));
}

#[test]
fn analyze_all_keeps_candidate_order() {
    let dir = TempDir::new().unwrap();
    let candidates: Vec<_> = (0..20)
        .map(|i| write_script(&dir, &format!("s{i:02}.sh"), CLEAN_SCRIPT.as_bytes()))
        .collect();

    let results = standard_engine().analyze_all(&candidates);

    let paths: Vec<_> = results.iter().map(|r| r.path.clone()).collect();
    let expected: Vec<_> = candidates.iter().map(|c| c.path.clone()).collect();
    assert_eq!(paths, expected);
}

#[test]
fn analyze_all_with_reports_every_file() {
    let dir = TempDir::new().unwrap();
    let candidates: Vec<_> = (0..5)
        .map(|i| write_script(&dir, &format!("{i}.sh"), CLEAN_SCRIPT.as_bytes()))
        .collect();
    let seen = AtomicUsize::new(0);

    let results = standard_engine().analyze_all_with(&candidates, |_| {
        seen.fetch_add(1, Ordering::Relaxed);
    });

    assert_eq!(results.len(), 5);
    assert_eq!(seen.load(Ordering::Relaxed), 5);
}

struct Counter;

impl Check for Counter {
    fn name(&self) -> &'static str {
        "counter"
    }

    fn severity(&self) -> Severity {
        Severity::Warning
    }

    fn description(&self) -> &'static str {
        "one warning per line"
    }

    fn applies_to(&self, extension: &str) -> bool {
        extension == "sh"
    }

    fn evaluate(&self, input: &CheckInput<'_>) -> Vec<Finding> {
        (1..=input.lines.len())
            .map(|n| Finding::warning("counter", "line").at_line(n))
            .collect()
    }
}

#[test]
fn only_applicable_checks_run() {
    let dir = TempDir::new().unwrap();
    let engine = Engine::new(CheckRegistry::from_checks(vec![Box::new(Counter)]));
    let sh = write_script(&dir, "a.sh", b"a\nb\n");
    let py = write_script(&dir, "a.py", b"a\nb\n");

    assert_eq!(engine.analyze(&sh).warning_count(), 2);
    assert_eq!(engine.analyze(&py).warning_count(), 0);
}

#[test]
fn with_jobs_runs_on_a_sized_pool() {
    let threads = with_jobs(Some(2), rayon::current_num_threads).unwrap();
    assert_eq!(threads, 2);

    assert_eq!(with_jobs(None, || 7).unwrap(), 7);
}
