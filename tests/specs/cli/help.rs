//! Help output specs
//!
//! Verify the command tree is discoverable from --help.

use crate::prelude::*;

#[test]
fn help_lists_subcommands() {
    let temp = Project::empty();

    temp.replog()
        .args(&["--help"])
        .passes()
        .stdout_has("provision")
        .stdout_has("shard")
        .stdout_has("bucket");
}

#[test]
fn shard_help_lists_operations() {
    let temp = Project::empty();

    temp.replog()
        .args(&["shard", "--help"])
        .passes()
        .stdout_has("update")
        .stdout_has("delete")
        .stdout_has("bounds");
}

#[test]
fn bucket_update_help_mentions_composite_markers() {
    let temp = Project::empty();

    temp.replog()
        .args(&["bucket", "update", "--help"])
        .passes()
        .stdout_has("--shard")
        .stdout_has("NAME@TIME");
}
