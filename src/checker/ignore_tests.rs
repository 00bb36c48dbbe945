use std::fmt::Write;

use super::*;

#[test]
fn marker_on_first_line_is_ignored() {
    let policy = IgnorePolicy::default();
    assert!(policy.is_ignored("# STYLECHECK_IGNORE\necho hi\n"));
}

#[test]
fn marker_anywhere_in_line_counts() {
    let policy = IgnorePolicy::default();
    assert!(policy.is_ignored("#!/bin/bash\n: \"generated, STYLECHECK_IGNORE please\"\n"));
}

#[test]
fn marker_on_tenth_line_is_ignored() {
    let mut content = String::new();
    for i in 0..9 {
        let _ = writeln!(content, "echo {i}");
    }
    content.push_str("# STYLECHECK_IGNORE\n");

    assert!(IgnorePolicy::default().is_ignored(&content));
}

#[test]
fn marker_after_tenth_line_is_not_ignored() {
    let mut content = String::new();
    for i in 0..IGNORE_SCAN_LINES {
        let _ = writeln!(content, "echo {i}");
    }
    content.push_str("# STYLECHECK_IGNORE\n");

    assert!(!IgnorePolicy::default().is_ignored(&content));
}

#[test]
fn empty_content_is_not_ignored() {
    assert!(!IgnorePolicy::default().is_ignored(""));
}
