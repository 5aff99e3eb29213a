// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Logger for bucket logs with composite markers
//!
//! A bucket update either targets one shard entry directly or carries a
//! composite marker that is decoded and fanned out to one entry per
//! shard. With index-by-instance enabled, entries written under the
//! bucket name alone are migrated on first touch.

use crate::addressing::{BucketAddressing, EntryAddressing};
use crate::error::LogError;
use crate::logger::{CheckpointLogger, DeleteTarget};
use replog_core::{is_composite, BucketRef, CheckpointBounds, CompositeMarker, ProgressMarker, ShardId};
use replog_storage::{BackingStore, StoreError};
use tracing::{info, warn};

/// Checkpoints for bucket logs
#[derive(Clone)]
pub struct BucketLogger<S> {
    logger: CheckpointLogger<S>,
    addressing: BucketAddressing,
}

impl<S: BackingStore> BucketLogger<S> {
    pub fn new(store: S, addressing: BucketAddressing) -> Self {
        Self {
            logger: CheckpointLogger::new(store),
            addressing,
        }
    }

    pub fn addressing(&self) -> &BucketAddressing {
        &self.addressing
    }

    /// Record a daemon's position in a bucket log
    ///
    /// With an explicit `shard`, or a marker that is not composite, the
    /// marker is written verbatim to that one entry. Otherwise the marker
    /// is decoded and each shard's entry receives its own submarker along
    /// with the same time and items.
    ///
    /// Fan-out tries every shard even after a failure. If any shard fails,
    /// the last failure is returned as [`LogError::FanOut`]. A marker that
    /// does not decode fails before anything is written.
    pub fn update_bound(
        &self,
        bucket: &BucketRef,
        shard: Option<ShardId>,
        progress: &ProgressMarker,
    ) -> Result<(), LogError> {
        if shard.is_some() || !is_composite(&progress.position_marker) {
            self.update_entry(bucket, shard, progress)?;
            return Ok(());
        }

        let composite = CompositeMarker::decode(&progress.position_marker)?;
        let mut last_error = None;

        for (shard, marker) in composite.iter() {
            let shard_progress = ProgressMarker {
                position_marker: marker.to_string(),
                ..progress.clone()
            };
            if let Err(err) = self.update_entry(bucket, Some(shard), &shard_progress) {
                warn!(bucket = %bucket, %shard, error = %err, "shard update failed");
                last_error = Some((shard, err));
            }
        }

        match last_error {
            Some((shard, source)) => Err(LogError::FanOut { shard, source }),
            None => Ok(()),
        }
    }

    /// Remove a daemon's record, or the whole entry, from one bucket shard
    pub fn delete_bound(
        &self,
        bucket: &BucketRef,
        shard: Option<ShardId>,
        target: DeleteTarget<'_>,
    ) -> Result<(), LogError> {
        let entry_id = self.entry_id(bucket, shard);
        let container = self.addressing.container();

        if !self.addressing.keyed_by_instance(bucket) {
            self.logger
                .delete_bound_with(&entry_id, container, target, false)?;
            return Ok(());
        }

        match self
            .logger
            .delete_bound_with(&entry_id, container, target, true)
        {
            Err(err) if err.is_entry_not_found() => {
                self.convert_legacy(bucket, shard)?;
                self.logger
                    .delete_bound_with(&entry_id, container, target, false)?;
                Ok(())
            }
            other => other.map_err(LogError::from),
        }
    }

    /// Read one bucket shard's bounds
    ///
    /// A missing instance-keyed entry falls back to the legacy entry,
    /// migrating it first.
    pub fn get_bounds(
        &self,
        bucket: &BucketRef,
        shard: Option<ShardId>,
    ) -> Result<CheckpointBounds, LogError> {
        let entry_id = self.entry_id(bucket, shard);

        match self.logger.get_bounds(&entry_id, self.addressing.container()) {
            Err(err) if err.is_entry_not_found() && self.addressing.keyed_by_instance(bucket) => {
                match self.convert_legacy(bucket, shard)? {
                    Some(bounds) => Ok(bounds),
                    None => Err(err.into()),
                }
            }
            other => other.map_err(LogError::from),
        }
    }

    fn entry_id(&self, bucket: &BucketRef, shard: Option<ShardId>) -> String {
        self.addressing
            .entry_id(&self.addressing.entry(bucket, shard))
    }

    fn update_entry(
        &self,
        bucket: &BucketRef,
        shard: Option<ShardId>,
        progress: &ProgressMarker,
    ) -> Result<(), StoreError> {
        let entry_id = self.entry_id(bucket, shard);
        let container = self.addressing.container();

        if !self.addressing.keyed_by_instance(bucket) {
            return self.logger.update_bound(&entry_id, container, progress);
        }

        match self
            .logger
            .update_bound_with(&entry_id, container, progress, true)
        {
            Err(err) if err.is_entry_not_found() => {
                self.convert_legacy(bucket, shard)?;
                self.logger.update_bound(&entry_id, container, progress)
            }
            other => other,
        }
    }

    /// Move a legacy entry to its instance-keyed id
    ///
    /// Returns the migrated bounds, or `None` if there was no legacy entry.
    fn convert_legacy(
        &self,
        bucket: &BucketRef,
        shard: Option<ShardId>,
    ) -> Result<Option<CheckpointBounds>, StoreError> {
        let container = self.addressing.container();
        let legacy_id = self
            .addressing
            .entry_id(&self.addressing.legacy_entry(bucket, shard));
        let entry_id = self.entry_id(bucket, shard);

        let bounds = match self.logger.get_bounds(&legacy_id, container) {
            Ok(bounds) => bounds,
            Err(err) if err.is_entry_not_found() => return Ok(None),
            Err(err) => return Err(err),
        };

        self.logger.write_bounds(&entry_id, container, &bounds)?;
        self.logger
            .delete_bound_with(&legacy_id, container, DeleteTarget::All, false)?;

        info!(
            container,
            from = %legacy_id,
            to = %entry_id,
            daemons = bounds.markers.len(),
            "migrated legacy bucket entry"
        );
        Ok(Some(bounds))
    }
}

#[cfg(test)]
#[path = "bucket_tests.rs"]
mod tests;
