//! Shared helpers for behavioral specs
//!
//! A [`Project`] is a scratch directory holding a store root and optional
//! config files. [`Project::replog`] builds a CLI invocation against it.

#![allow(dead_code)]
#![allow(deprecated)]

use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Fixed timestamp used across specs
pub const T0: &str = "2023-11-14T22:13:20Z";
pub const T1: &str = "2023-11-14T22:14:20Z";
pub const T2: &str = "2023-11-14T22:15:20Z";

pub struct Project {
    dir: TempDir,
}

impl Project {
    pub fn empty() -> Self {
        Self {
            dir: TempDir::new().unwrap(),
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Store root used by every invocation
    pub fn store_root(&self) -> PathBuf {
        self.path().join("store")
    }

    /// Path of an entry file in the store
    pub fn entry_path(&self, container: &str, entry: &str) -> PathBuf {
        self.store_root().join(container).join(format!("{entry}.json"))
    }

    /// Write a file relative to the project directory
    pub fn file(&self, rel: &str, content: &str) -> PathBuf {
        let path = self.path().join(rel);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(&path, content).unwrap();
        path
    }

    pub fn replog(&self) -> CliBuilder {
        let mut cmd = Command::cargo_bin("replog").unwrap();
        cmd.current_dir(self.path())
            .env_remove("REPLOG_CONFIG")
            .env_remove("RUST_LOG")
            .arg("--root")
            .arg(self.store_root());
        CliBuilder { cmd }
    }
}

pub struct CliBuilder {
    cmd: Command,
}

impl CliBuilder {
    pub fn args<S: AsRef<std::ffi::OsStr>>(mut self, args: &[S]) -> Self {
        self.cmd.args(args);
        self
    }

    pub fn env(mut self, key: &str, value: impl AsRef<std::ffi::OsStr>) -> Self {
        self.cmd.env(key, value);
        self
    }

    /// Run and require a zero exit code
    pub fn passes(mut self) -> RunAssert {
        let output = self.cmd.output().unwrap();
        let run = RunAssert::from(output);
        assert!(run.success, "expected success\nstderr:\n{}", run.stderr);
        run
    }

    /// Run and require a non-zero exit code
    pub fn fails(mut self) -> RunAssert {
        let output = self.cmd.output().unwrap();
        let run = RunAssert::from(output);
        assert!(!run.success, "expected failure\nstdout:\n{}", run.stdout);
        run
    }
}

pub struct RunAssert {
    success: bool,
    stdout: String,
    stderr: String,
}

impl From<std::process::Output> for RunAssert {
    fn from(output: std::process::Output) -> Self {
        Self {
            success: output.status.success(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        }
    }
}

impl RunAssert {
    pub fn stdout(&self) -> &str {
        &self.stdout
    }

    pub fn stdout_has(self, needle: &str) -> Self {
        assert!(
            self.stdout.contains(needle),
            "stdout missing {needle:?}\nstdout:\n{}",
            self.stdout
        );
        self
    }

    pub fn stdout_eq(self, expected: &str) -> Self {
        similar_asserts::assert_eq!(self.stdout.trim_end(), expected.trim_end());
        self
    }

    pub fn stderr_has(self, needle: &str) -> Self {
        assert!(
            self.stderr.contains(needle),
            "stderr missing {needle:?}\nstderr:\n{}",
            self.stderr
        );
        self
    }

    pub fn json(&self) -> serde_json::Value {
        serde_json::from_str(&self.stdout).unwrap()
    }
}
