//! Error reporting specs
//!
//! Verify failures exit non-zero with a readable message on stderr.

use crate::prelude::*;

#[test]
fn unknown_subcommand_fails() {
    let temp = Project::empty();

    temp.replog().args(&["trim"]).fails();
}

#[test]
fn missing_entry_reports_not_found() {
    let temp = Project::empty();

    temp.replog()
        .args(&["shard", "bounds", "data", "0"])
        .fails()
        .stderr_has("entry not found");
}

#[test]
fn missing_config_file_is_reported() {
    let temp = Project::empty();

    temp.replog()
        .args(&["--config", "nope.toml", "shard", "bounds", "data", "0"])
        .fails()
        .stderr_has("failed to read config");
}

#[test]
fn config_from_environment_is_used() {
    let temp = Project::empty();
    let config = temp.file("replog.toml", "bogus = true\n");

    temp.replog()
        .env("REPLOG_CONFIG", &config)
        .args(&["shard", "bounds", "data", "0"])
        .fails()
        .stderr_has("unknown field");
}

#[test]
fn invalid_item_is_rejected() {
    let temp = Project::empty();

    temp.replog()
        .args(&["shard", "update", "data", "0", "zone-b", "m1", "--item", "no-time"])
        .fails()
        .stderr_has("NAME@TIME");
}

#[test]
fn invalid_bucket_reference_is_rejected() {
    let temp = Project::empty();

    temp.replog()
        .args(&["bucket", "bounds", "photos:"])
        .fails();
}
