//! Composite marker specs
//!
//! Verify a composite bucket marker updates one entry per shard and that
//! simple markers are written as is.

use crate::prelude::*;

#[test]
fn composite_marker_fans_out() {
    let temp = Project::empty();

    temp.replog()
        .args(&["bucket", "update", "photos", "zone-b", "1#m1,2#m2,3#m3", "--time", T0])
        .passes()
        .stdout_eq("updated replica_log.photos.1, replica_log.photos.2, replica_log.photos.3 in .log");

    for (shard, marker) in [("1", "m1"), ("2", "m2"), ("3", "m3")] {
        temp.replog()
            .args(&["bucket", "bounds", "photos", "--shard", shard])
            .passes()
            .stdout_has(&format!("zone-b @ {marker} (2023-11-14T22:13:20+00:00)"));
    }
}

#[test]
fn empty_elements_are_skipped() {
    let temp = Project::empty();

    temp.replog()
        .args(&["bucket", "update", "photos", "zone-b", ",4#m4,,"])
        .passes()
        .stdout_eq("updated replica_log.photos.4 in .log");
}

#[test]
fn submarkers_may_contain_separator() {
    let temp = Project::empty();

    temp.replog()
        .args(&["bucket", "update", "photos", "zone-b", "0#a#b"])
        .passes();

    let bounds = temp
        .replog()
        .args(&["-o", "json", "bucket", "bounds", "photos", "--shard", "0"])
        .passes()
        .json();
    assert_eq!(bounds["marker"], "a#b");
}

#[test]
fn malformed_marker_writes_nothing() {
    let temp = Project::empty();

    temp.replog()
        .args(&["bucket", "update", "photos", "zone-b", "1#m1,two#m2"])
        .fails()
        .stderr_has("invalid shard id");

    assert!(!temp.entry_path(".log", "replica_log.photos.1").exists());
}

#[test]
fn duplicate_shard_is_rejected() {
    let temp = Project::empty();

    temp.replog()
        .args(&["bucket", "update", "photos", "zone-b", "1#a,1#b"])
        .fails()
        .stderr_has("more than once");
}

#[test]
fn simple_marker_targets_unsharded_entry() {
    let temp = Project::empty();

    temp.replog()
        .args(&["bucket", "update", "photos", "zone-b", "00042"])
        .passes()
        .stdout_eq("updated replica_log.photos in .log");

    assert!(temp.entry_path(".log", "replica_log.photos").is_file());
}

#[test]
fn json_output_lists_entries() {
    let temp = Project::empty();

    let outcome = temp
        .replog()
        .args(&["-o", "json", "bucket", "update", "photos", "zone-b", "5#x,7#y"])
        .passes()
        .json();

    assert_eq!(
        outcome,
        serde_json::json!({
            "action": "updated",
            "container": ".log",
            "entries": ["replica_log.photos.5", "replica_log.photos.7"],
        })
    );
}
