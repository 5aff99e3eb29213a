// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Checkpoint bounds: per-daemon progress records for one log entry

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A fine-grained in-flight item reported alongside a daemon's position
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemMarker {
    pub name: String,
    pub timestamp: DateTime<Utc>,
}

impl ItemMarker {
    pub fn new(name: impl Into<String>, timestamp: DateTime<Utc>) -> Self {
        Self {
            name: name.into(),
            timestamp,
        }
    }
}

/// One daemon's progress against a log entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressMarker {
    #[serde(rename = "entity")]
    pub daemon_id: String,
    pub position_marker: String,
    pub position_time: DateTime<Utc>,
    #[serde(rename = "items_in_progress", default)]
    pub items: Vec<ItemMarker>,
}

impl ProgressMarker {
    pub fn new(
        daemon_id: impl Into<String>,
        position_marker: impl Into<String>,
        position_time: DateTime<Utc>,
    ) -> Self {
        Self {
            daemon_id: daemon_id.into(),
            position_marker: position_marker.into(),
            position_time,
            items: Vec::new(),
        }
    }

    pub fn with_items(mut self, items: Vec<ItemMarker>) -> Self {
        self.items = items;
        self
    }
}

/// Queryable state of one log entry
///
/// `marker` and `oldest_time` always describe the daemon record with the
/// oldest `position_time`: the point before which no daemon still needs
/// the upstream log.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckpointBounds {
    pub marker: String,
    pub oldest_time: DateTime<Utc>,
    pub markers: Vec<ProgressMarker>,
}

impl CheckpointBounds {
    /// Build bounds from a set of records, recomputing the trim point
    pub fn from_markers(markers: impl IntoIterator<Item = ProgressMarker>) -> Self {
        let mut bounds = Self::default();
        for progress in markers {
            bounds.upsert(progress);
        }
        bounds
    }

    /// Look up the record for a daemon
    pub fn marker_for(&self, daemon_id: &str) -> Option<&ProgressMarker> {
        self.markers.iter().find(|m| m.daemon_id == daemon_id)
    }

    /// Insert or replace the record for `progress.daemon_id`
    ///
    /// A replaced record moves to the end, so `markers` stays in report order.
    pub fn upsert(&mut self, progress: ProgressMarker) {
        self.markers.retain(|m| m.daemon_id != progress.daemon_id);
        self.markers.push(progress);
        self.recompute();
    }

    /// Remove the record for a daemon; absent daemons are ignored
    pub fn remove(&mut self, daemon_id: &str) -> Option<ProgressMarker> {
        let pos = self.markers.iter().position(|m| m.daemon_id == daemon_id)?;
        let removed = self.markers.remove(pos);
        self.recompute();
        Some(removed)
    }

    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }

    fn recompute(&mut self) {
        // min_by_key keeps the first of equal elements
        match self.markers.iter().min_by_key(|m| m.position_time) {
            Some(oldest) => {
                self.marker = oldest.position_marker.clone();
                self.oldest_time = oldest.position_time;
            }
            None => {
                self.marker.clear();
                self.oldest_time = DateTime::<Utc>::default();
            }
        }
    }
}

impl fmt::Display for CheckpointBounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "marker: {}", self.marker)?;
        write!(f, "oldest_time: {}", self.oldest_time.to_rfc3339())?;
        for m in &self.markers {
            write!(
                f,
                "\n  {} @ {} ({})",
                m.daemon_id,
                m.position_marker,
                m.position_time.to_rfc3339()
            )?;
            for item in &m.items {
                write!(f, "\n    {} {}", item.name, item.timestamp.to_rfc3339())?;
            }
        }
        Ok(())
    }
}

/// Encode bounds as JSON
pub fn encode_bounds(bounds: &CheckpointBounds) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(bounds)
}

/// Decode bounds from JSON produced by [`encode_bounds`]
pub fn decode_bounds(json: &str) -> Result<CheckpointBounds, serde_json::Error> {
    serde_json::from_str(json)
}

#[cfg(test)]
#[path = "bounds_tests.rs"]
mod tests;
