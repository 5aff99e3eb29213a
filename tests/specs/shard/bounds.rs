//! Shard bounds specs
//!
//! Verify updates, deletes and the oldest-position bound of a shard.

use crate::prelude::*;

fn update(temp: &Project, daemon: &str, marker: &str, time: &str) {
    temp.replog()
        .args(&["shard", "update", "data", "0", daemon, marker, "--time", time])
        .passes()
        .stdout_eq("updated replica_shard.data.0 in .log");
}

#[test]
fn bounds_show_oldest_daemon() {
    let temp = Project::empty();
    update(&temp, "zone-a", "m-late", T2);
    update(&temp, "zone-b", "m-early", T0);

    temp.replog()
        .args(&["shard", "bounds", "data", "0"])
        .passes()
        .stdout_eq(
            "marker: m-early
oldest_time: 2023-11-14T22:13:20+00:00
  zone-a @ m-late (2023-11-14T22:15:20+00:00)
  zone-b @ m-early (2023-11-14T22:13:20+00:00)",
        );
}

#[test]
fn update_replaces_daemon_record() {
    let temp = Project::empty();
    update(&temp, "zone-b", "m1", T0);
    update(&temp, "zone-b", "m2", T1);

    let bounds = temp
        .replog()
        .args(&["-o", "json", "shard", "bounds", "data", "0"])
        .passes()
        .json();
    assert_eq!(bounds["markers"].as_array().unwrap().len(), 1);
    assert_eq!(bounds["marker"], "m2");
    assert_eq!(bounds["oldest_time"], T1);
}

#[test]
fn items_in_progress_are_kept() {
    let temp = Project::empty();
    let cat = format!("photos/cat.jpg@{T1}");
    let dog = format!("photos/dog.jpg@{T2}");

    temp.replog()
        .args(&[
            "shard",
            "update",
            "data",
            "0",
            "zone-b",
            "m1",
            "--time",
            T0,
            "--item",
            cat.as_str(),
            "--item",
            dog.as_str(),
        ])
        .passes();

    temp.replog()
        .args(&["shard", "bounds", "data", "0"])
        .passes()
        .stdout_has("    photos/cat.jpg 2023-11-14T22:14:20+00:00")
        .stdout_has("    photos/dog.jpg 2023-11-14T22:15:20+00:00");
}

#[test]
fn delete_unknown_daemon_is_noop() {
    let temp = Project::empty();
    update(&temp, "zone-b", "m1", T0);

    temp.replog()
        .args(&["shard", "delete", "data", "0", "zone-x"])
        .passes();
    temp.replog()
        .args(&["shard", "delete", "data", "0", "zone-x"])
        .passes();

    temp.replog()
        .args(&["shard", "bounds", "data", "0"])
        .passes()
        .stdout_has("zone-b @ m1");
}

#[test]
fn delete_last_daemon_moves_bound() {
    let temp = Project::empty();
    update(&temp, "zone-a", "m-old", T0);
    update(&temp, "zone-b", "m-new", T1);

    temp.replog()
        .args(&["shard", "delete", "data", "0", "zone-a"])
        .passes();

    temp.replog()
        .args(&["shard", "bounds", "data", "0"])
        .passes()
        .stdout_has("marker: m-new");
}

#[test]
fn purge_removes_entry_file() {
    let temp = Project::empty();
    update(&temp, "zone-a", "m1", T0);
    assert!(temp.entry_path(".log", "replica_shard.data.0").is_file());

    temp.replog()
        .args(&["shard", "delete", "data", "0", "--purge"])
        .passes();

    assert!(!temp.entry_path(".log", "replica_shard.data.0").exists());
}
