//! Test helpers for behavioral specifications.
//!
//! Provides high-level DSL for testing propcheck CLI behavior.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(dead_code)]

pub use assert_cmd::prelude::*;
pub use predicates;
pub use predicates::prelude::PredicateBooleanExt;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

/// Returns a Command configured to run the propcheck binary
pub fn propcheck_cmd() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("propcheck"));
    cmd.env_remove("PROPCHECK_CONFIG").env_remove("PROPCHECK_LOG").env_remove("NO_COLOR");
    cmd
}

/// `propcheck check` run in `dir` with colors off.
pub fn check_in(dir: &Path) -> Command {
    let mut cmd = propcheck_cmd();
    cmd.args(["check", "--color", "never"]).current_dir(dir);
    cmd
}

/// Get path to a test fixture directory
pub fn fixture(name: &str) -> PathBuf {
    let manifest_dir =
        std::env::var("CARGO_MANIFEST_DIR").expect("CARGO_MANIFEST_DIR should be set");
    PathBuf::from(manifest_dir)
        .parent()
        .expect("parent should exist")
        .parent()
        .expect("grandparent should exist")
        .join("tests")
        .join("fixtures")
        .join(name)
}

/// Run a command and parse its stdout as JSON.
pub fn json_output(cmd: &mut Command) -> serde_json::Value {
    let output = cmd.output().expect("command should run");
    serde_json::from_slice(&output.stdout).expect("stdout should be JSON")
}

/// A scratch project directory.
pub struct Project {
    dir: TempDir,
}

impl Project {
    /// An empty directory marked as a git root, so config discovery stays inside.
    pub fn empty() -> Self {
        let dir = TempDir::new().unwrap();
        std::fs::create_dir(dir.path().join(".git")).unwrap();
        Self { dir }
    }

    /// A project with a minimal propcheck.toml.
    pub fn with_config(config: &str) -> Self {
        let project = Self::empty();
        project.file("propcheck.toml", config);
        project
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Write a file, creating parent directories.
    pub fn file(&self, path: &str, content: &str) {
        let full = self.dir.path().join(path);
        if let Some(parent) = full.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(full, content).unwrap();
    }
}
