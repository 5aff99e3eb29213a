// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Logger for logs with a fixed number of shards

use crate::addressing::{EntryAddressing, FixedShardAddressing};
use crate::error::LogError;
use crate::logger::{CheckpointLogger, DeleteTarget};
use replog_core::{CheckpointBounds, ProgressMarker, ShardId};
use replog_storage::BackingStore;
use tracing::info;

/// Checkpoints for one fixed-shard log
///
/// Markers are stored verbatim; no composite decoding happens here.
#[derive(Clone)]
pub struct FixedShardLogger<S> {
    logger: CheckpointLogger<S>,
    addressing: FixedShardAddressing,
}

impl<S: BackingStore> FixedShardLogger<S> {
    pub fn new(store: S, addressing: FixedShardAddressing) -> Self {
        Self {
            logger: CheckpointLogger::new(store),
            addressing,
        }
    }

    pub fn addressing(&self) -> &FixedShardAddressing {
        &self.addressing
    }

    /// Ensure the container and one empty entry per shard exist
    ///
    /// Entries that already exist are left untouched, so provisioning can
    /// be repeated. The first failure aborts; earlier shards stay created.
    pub fn provision(&self, shard_count: u32) -> Result<(), LogError> {
        let container = self.addressing.container();
        let handle = self.logger.open(container)?.into_handle();

        for shard in (0..shard_count).map(ShardId) {
            let entry_id = self.addressing.entry_id(&shard);
            self.logger.store().create_entry(&handle, &entry_id, false)?;
        }

        info!(
            container,
            log_key = self.addressing.log_key(),
            shard_count,
            "provisioned shards"
        );
        Ok(())
    }

    /// Upsert a daemon's position for one shard
    pub fn update_bound(&self, shard: ShardId, progress: &ProgressMarker) -> Result<(), LogError> {
        let entry_id = self.addressing.entry_id(&shard);
        self.logger
            .update_bound(&entry_id, self.addressing.container(), progress)?;
        Ok(())
    }

    /// Remove a daemon's record from one shard
    pub fn delete_bound(&self, shard: ShardId, daemon_id: &str) -> Result<(), LogError> {
        let entry_id = self.addressing.entry_id(&shard);
        self.logger
            .delete_bound(&entry_id, self.addressing.container(), daemon_id)?;
        Ok(())
    }

    /// Drop a shard's entry altogether
    pub fn purge(&self, shard: ShardId) -> Result<(), LogError> {
        let entry_id = self.addressing.entry_id(&shard);
        self.logger.delete_bound_with(
            &entry_id,
            self.addressing.container(),
            DeleteTarget::All,
            false,
        )?;
        Ok(())
    }

    pub fn get_bounds(&self, shard: ShardId) -> Result<CheckpointBounds, LogError> {
        let entry_id = self.addressing.entry_id(&shard);
        Ok(self
            .logger
            .get_bounds(&entry_id, self.addressing.container())?)
    }
}

#[cfg(test)]
#[path = "fixed_tests.rs"]
mod tests;
