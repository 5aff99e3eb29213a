//! Index-by-instance specs
//!
//! Verify instance-keyed bucket entries and migration of entries written
//! under the bucket name alone.

use crate::prelude::*;

const INDEXED: &str = "index_by_instance = true\n";

#[test]
fn instance_is_ignored_by_default() {
    let temp = Project::empty();

    temp.replog()
        .args(&["bucket", "update", "photos:i1", "zone-b", "m1", "--shard", "2"])
        .passes()
        .stdout_eq("updated replica_log.photos.2 in .log");
}

#[test]
fn instance_keys_entries_when_enabled() {
    let temp = Project::empty();
    let config = temp.file("replog.toml", INDEXED);

    temp.replog()
        .env("REPLOG_CONFIG", &config)
        .args(&["bucket", "update", "photos:i1", "zone-b", "m1", "--shard", "2"])
        .passes()
        .stdout_eq("updated replica_log.photos:i1.2 in .log");
}

#[test]
fn update_migrates_legacy_entry() {
    let temp = Project::empty();
    let config = temp.file("replog.toml", INDEXED);
    temp.replog()
        .args(&["bucket", "update", "photos", "zone-a", "m0", "--shard", "1", "--time", T0])
        .passes();

    temp.replog()
        .env("REPLOG_CONFIG", &config)
        .args(&["bucket", "update", "photos:i1", "zone-b", "m1", "--shard", "1", "--time", T1])
        .passes();

    assert!(!temp.entry_path(".log", "replica_log.photos.1").exists());
    temp.replog()
        .env("REPLOG_CONFIG", &config)
        .args(&["bucket", "bounds", "photos:i1", "--shard", "1"])
        .passes()
        .stdout_eq(
            "marker: m0
oldest_time: 2023-11-14T22:13:20+00:00
  zone-a @ m0 (2023-11-14T22:13:20+00:00)
  zone-b @ m1 (2023-11-14T22:14:20+00:00)",
        );
}

#[test]
fn bounds_migrates_legacy_entry() {
    let temp = Project::empty();
    let config = temp.file("replog.toml", INDEXED);
    temp.replog()
        .args(&["bucket", "update", "photos", "zone-a", "m0", "--time", T0])
        .passes();

    temp.replog()
        .env("REPLOG_CONFIG", &config)
        .args(&["bucket", "bounds", "photos:i1"])
        .passes()
        .stdout_has("marker: m0");

    assert!(temp.entry_path(".log", "replica_log.photos:i1").is_file());
    assert!(!temp.entry_path(".log", "replica_log.photos").exists());
}

#[test]
fn bounds_without_any_entry_fails() {
    let temp = Project::empty();
    let config = temp.file("replog.toml", INDEXED);

    temp.replog()
        .env("REPLOG_CONFIG", &config)
        .args(&["bucket", "bounds", "photos:i1"])
        .fails()
        .stderr_has("entry not found");
}

#[test]
fn purge_after_migration_removes_both_entries() {
    let temp = Project::empty();
    let config = temp.file("replog.toml", INDEXED);
    temp.replog()
        .args(&["bucket", "update", "photos", "zone-a", "m0"])
        .passes();

    temp.replog()
        .env("REPLOG_CONFIG", &config)
        .args(&["bucket", "delete", "photos:i1", "--purge"])
        .passes();

    assert!(!temp.entry_path(".log", "replica_log.photos").exists());
    assert!(!temp.entry_path(".log", "replica_log.photos:i1").exists());
}
