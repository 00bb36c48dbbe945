#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Creates an `assert_cmd` Command for the shell-guard binary.
#[macro_export]
macro_rules! shell_guard {
    () => {
        assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("shell-guard"))
    };
}

/// A script that passes every check except `syntax`, which tests disable.
pub const CLEAN_SCRIPT: &str = "\
#!/bin/bash
# Deploys the application.
set -euo pipefail
source \"$ROOT/.sys/env/.env\"

readonly RED='\\033[38;2;243;139;168m'

log_error() { echo -e \"${RED}$1\"; }

deploy() {
    local target
    target=\"$1\"
    echo \"deploying $target\"
}

deploy prod || log_error \"deploy failed\"
";

/// Temporary directory populated with scripts.
pub struct TestFixture {
    pub dir: TempDir,
}

impl TestFixture {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    pub fn create_file(&self, relative_path: &str, content: &str) -> PathBuf {
        let path = self.dir.path().join(relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        fs::write(&path, content).expect("Failed to write file");
        path
    }

    /// Like `create_file`, with the executable bits set.
    pub fn create_script(&self, relative_path: &str, content: &str) -> PathBuf {
        let path = self.create_file(relative_path, content);
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(&path, fs::Permissions::from_mode(0o755))
                .expect("Failed to set permissions");
        }
        path
    }

    pub fn create_bytes(&self, relative_path: &str, content: &[u8]) -> PathBuf {
        let path = self.dir.path().join(relative_path);
        fs::write(&path, content).expect("Failed to write file");
        path
    }

    pub fn create_config(&self, content: &str) {
        self.create_file(".shell-guard.toml", content);
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}
