// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shared test utilities for CLI integration tests.

#![allow(dead_code)]

use assert_cmd::Command;
use std::path::Path;
use tempfile::TempDir;

/// Fresh store root that is removed when dropped
pub fn setup_store() -> TempDir {
    TempDir::new().expect("Failed to create temp directory")
}

/// `replog` command bound to a store root, isolated from the caller's env
pub fn replog(root: &Path) -> Command {
    let mut cmd = Command::cargo_bin("replog").expect("replog binary");
    cmd.env_remove("REPLOG_CONFIG")
        .env_remove("RUST_LOG")
        .arg("--root")
        .arg(root);
    cmd
}

/// Run a command and parse its JSON stdout
pub fn json_output(cmd: &mut Command) -> serde_json::Value {
    let output = cmd.arg("-o").arg("json").assert().success().get_output().clone();
    serde_json::from_slice(&output.stdout).expect("valid JSON output")
}
