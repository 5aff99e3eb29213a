//! Provisioning specs
//!
//! Verify fixed-shard logs are laid out in the store and can be
//! provisioned repeatedly.

use crate::prelude::*;

#[test]
fn provision_reports_every_entry() {
    let temp = Project::empty();

    temp.replog()
        .args(&["provision", "meta", "--shards", "2"])
        .passes()
        .stdout_eq("provisioned replica_shard.meta.0, replica_shard.meta.1 in .log");
}

#[test]
fn provision_writes_empty_entries() {
    let temp = Project::empty();
    temp.replog()
        .args(&["provision", "meta", "--shards", "4"])
        .passes();

    for shard in 0..4 {
        assert!(temp
            .entry_path(".log", &format!("replica_shard.meta.{shard}"))
            .is_file());
    }

    let bounds = temp
        .replog()
        .args(&["-o", "json", "shard", "bounds", "meta", "3"])
        .passes()
        .json();
    assert_eq!(bounds["marker"], "");
    assert_eq!(bounds["markers"], serde_json::json!([]));
}

#[test]
fn reprovision_keeps_progress() {
    let temp = Project::empty();
    temp.replog()
        .args(&["provision", "meta", "--shards", "2"])
        .passes();
    temp.replog()
        .args(&["shard", "update", "meta", "1", "zone-b", "m7", "--time", T0])
        .passes();

    temp.replog()
        .args(&["provision", "meta", "--shards", "2"])
        .passes();

    temp.replog()
        .args(&["shard", "bounds", "meta", "1"])
        .passes()
        .stdout_has("marker: m7");
}

#[test]
fn provision_uses_configured_container() {
    let temp = Project::empty();
    let config = temp.file("replog.toml", "log_container = \"zone2.log\"\n");

    temp.replog()
        .args(&["--config"])
        .args(&[&config])
        .args(&["provision", "meta", "--shards", "1"])
        .passes()
        .stdout_has("in zone2.log");

    assert!(temp.entry_path("zone2.log", "replica_shard.meta.0").is_file());
}
