//! Integration tests for global flags and the `checks` and `init` commands.

mod common;

use common::TestFixture;
use predicates::prelude::*;

#[test]
fn help_lists_subcommands() {
    shell_guard!()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("check"))
        .stdout(predicate::str::contains("fmt"))
        .stdout(predicate::str::contains("init"));
}

#[test]
fn version_flag_prints_version() {
    shell_guard!()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn quiet_and_verbose_conflict() {
    shell_guard!()
        .args(["-q", "-v", "checks"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("cannot be used with"));
}

#[test]
fn checks_lists_every_check_in_order() {
    let output = shell_guard!()
        .arg("checks")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let stdout = String::from_utf8(output).unwrap();

    let names = [
        "syntax",
        "shebang",
        "fail-fast",
        "pipefail",
        "executable",
        "palette",
        "logging-usage",
        "readonly-constants",
        "local-variables",
        "description-header",
        "env-integration",
    ];
    let positions: Vec<usize> = names
        .iter()
        .map(|name| stdout.find(&format!("\n{name} ")).unwrap_or_else(|| panic!("{name} missing")))
        .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn init_writes_a_loadable_template() {
    let fixture = TestFixture::new();

    shell_guard!()
        .current_dir(fixture.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Created configuration file"));

    let content = std::fs::read_to_string(fixture.path().join(".shell-guard.toml")).unwrap();
    assert!(content.contains("[scan]"));

    // The template is picked up as local configuration and is valid.
    fixture.create_file("empty.txt", "");
    shell_guard!()
        .current_dir(fixture.path())
        .args(["check", "empty.txt", "--no-syntax"])
        .assert()
        .success();
}

#[test]
fn init_refuses_to_overwrite_without_force() {
    let fixture = TestFixture::new();
    fixture.create_config("# mine\n");

    shell_guard!()
        .current_dir(fixture.path())
        .arg("init")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("--force"));

    shell_guard!()
        .current_dir(fixture.path())
        .args(["init", "--force"])
        .assert()
        .success();

    let content = std::fs::read_to_string(fixture.path().join(".shell-guard.toml")).unwrap();
    assert!(content.starts_with("# shell-guard configuration file"));
}

#[test]
fn explicit_missing_config_exits_2() {
    let fixture = TestFixture::new();
    fixture.create_file("a.sh", "#!/bin/bash\n");

    shell_guard!()
        .current_dir(fixture.path())
        .args(["--config", "missing.toml", "check", "--no-syntax"])
        .assert()
        .code(2);
}

#[test]
fn malformed_config_exits_2() {
    let fixture = TestFixture::new();
    fixture.create_config("[scan\nrecursive = true\n");
    fixture.create_file("a.sh", "#!/bin/bash\n");

    shell_guard!()
        .current_dir(fixture.path())
        .args(["check", "--no-syntax"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("TomlParse"));
}
