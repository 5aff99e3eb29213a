// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Generic checkpoint logger
//!
//! CRUD on one addressed entry. Every call first resolves the container
//! through the gateway (creating it if missing), then issues a single
//! compound write or read. Atomicity is the backing store's job; this
//! layer adds no locking or retries.

use replog_core::{CheckpointBounds, ProgressMarker, WriteOp};
use replog_storage::{BackingStore, ContainerHandle, Gateway, Opened, StoreError};
use tracing::debug;

/// What a delete removes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteTarget<'a> {
    /// One daemon's record
    Daemon(&'a str),
    /// The whole entry
    All,
}

/// Checkpoint CRUD against explicitly addressed entries
#[derive(Clone)]
pub struct CheckpointLogger<S> {
    gateway: Gateway<S>,
}

impl<S: BackingStore> CheckpointLogger<S> {
    pub fn new(store: S) -> Self {
        Self {
            gateway: Gateway::new(store),
        }
    }

    pub fn store(&self) -> &S {
        self.gateway.store()
    }

    /// Resolve a container, creating it if needed
    pub fn open(&self, container: &str) -> Result<Opened, StoreError> {
        self.gateway.open_container(container)
    }

    fn handle(&self, container: &str) -> Result<ContainerHandle, StoreError> {
        self.open(container).map(Opened::into_handle)
    }

    /// Upsert one daemon's record in an entry, creating the entry if needed
    pub fn update_bound(
        &self,
        entry_id: &str,
        container: &str,
        progress: &ProgressMarker,
    ) -> Result<(), StoreError> {
        self.update_bound_with(entry_id, container, progress, false)
    }

    /// Upsert one daemon's record; with `need_to_exist` a missing entry
    /// fails with `EntryNotFound` instead of being created
    pub fn update_bound_with(
        &self,
        entry_id: &str,
        container: &str,
        progress: &ProgressMarker,
        need_to_exist: bool,
    ) -> Result<(), StoreError> {
        let handle = self.handle(container)?;

        let mut op = WriteOp::new();
        if need_to_exist {
            op = op.assert_exists();
        }
        let op = op.upsert(progress.clone());

        debug!(
            container,
            entry = entry_id,
            daemon = %progress.daemon_id,
            marker = %progress.position_marker,
            items = progress.items.len(),
            "update bound"
        );
        self.store().submit(&handle, entry_id, &op)
    }

    /// Remove one daemon's record; a daemon without a record is not an error
    pub fn delete_bound(
        &self,
        entry_id: &str,
        container: &str,
        daemon_id: &str,
    ) -> Result<(), StoreError> {
        self.delete_bound_with(entry_id, container, DeleteTarget::Daemon(daemon_id), false)
    }

    /// Remove a daemon's record or the whole entry
    pub fn delete_bound_with(
        &self,
        entry_id: &str,
        container: &str,
        target: DeleteTarget<'_>,
        need_to_exist: bool,
    ) -> Result<(), StoreError> {
        let handle = self.handle(container)?;

        let mut op = WriteOp::new();
        if need_to_exist {
            op = op.assert_exists();
        }
        let op = match target {
            DeleteTarget::Daemon(daemon_id) => op.delete(daemon_id),
            DeleteTarget::All => op.remove(),
        };

        debug!(container, entry = entry_id, ?target, "delete bound");
        self.store().submit(&handle, entry_id, &op)
    }

    /// Upsert every record of `bounds` in one compound write
    pub fn write_bounds(
        &self,
        entry_id: &str,
        container: &str,
        bounds: &CheckpointBounds,
    ) -> Result<(), StoreError> {
        let handle = self.handle(container)?;

        let op = bounds
            .markers
            .iter()
            .cloned()
            .fold(WriteOp::new(), WriteOp::upsert);

        debug!(container, entry = entry_id, daemons = bounds.markers.len(), "write bounds");
        self.store().submit(&handle, entry_id, &op)
    }

    /// Read the full state of an entry
    pub fn get_bounds(&self, entry_id: &str, container: &str) -> Result<CheckpointBounds, StoreError> {
        let handle = self.handle(container)?;
        self.store().read_entry(&handle, entry_id)
    }
}

#[cfg(test)]
#[path = "logger_tests.rs"]
mod tests;
