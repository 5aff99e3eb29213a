// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! In-memory backing store

use crate::store::{BackingStore, ContainerHandle, StoreError};
use replog_core::{CheckpointBounds, WriteOp};
use std::collections::{BTreeMap, HashMap};
use std::sync::{Arc, Mutex, MutexGuard};

type Containers = HashMap<String, BTreeMap<String, CheckpointBounds>>;

/// Backing store kept in process memory
///
/// Clones share the same containers. Each compound write runs under a
/// single lock, so writes to one entry never interleave.
#[derive(Clone, Default)]
pub struct MemoryStore {
    containers: Arc<Mutex<Containers>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store that already holds an empty container
    pub fn with_container(name: &str) -> Self {
        let store = Self::new();
        store.lock().insert(name.to_string(), BTreeMap::new());
        store
    }

    /// Names of all containers, sorted
    pub fn containers(&self) -> Vec<String> {
        let mut names: Vec<_> = self.lock().keys().cloned().collect();
        names.sort();
        names
    }

    /// Ids of all entries in a container, sorted
    pub fn entry_ids(&self, container: &str) -> Vec<String> {
        self.lock()
            .get(container)
            .map(|entries| entries.keys().cloned().collect())
            .unwrap_or_default()
    }

    fn lock(&self) -> MutexGuard<'_, Containers> {
        self.containers.lock().unwrap_or_else(|e| e.into_inner())
    }
}

fn entries_mut<'a>(
    containers: &'a mut Containers,
    handle: &ContainerHandle,
) -> Result<&'a mut BTreeMap<String, CheckpointBounds>, StoreError> {
    containers
        .get_mut(handle.name())
        .ok_or_else(|| StoreError::ContainerNotFound(handle.name().to_string()))
}

impl BackingStore for MemoryStore {
    fn open_container(&self, name: &str) -> Result<ContainerHandle, StoreError> {
        if self.lock().contains_key(name) {
            Ok(ContainerHandle::new(name))
        } else {
            Err(StoreError::ContainerNotFound(name.to_string()))
        }
    }

    fn create_container(&self, name: &str) -> Result<(), StoreError> {
        let mut containers = self.lock();
        if containers.contains_key(name) {
            return Err(StoreError::ContainerExists(name.to_string()));
        }
        containers.insert(name.to_string(), BTreeMap::new());
        Ok(())
    }

    fn create_entry(
        &self,
        container: &ContainerHandle,
        entry_id: &str,
        exclusive: bool,
    ) -> Result<(), StoreError> {
        let mut containers = self.lock();
        let entries = entries_mut(&mut containers, container)?;
        if entries.contains_key(entry_id) {
            if exclusive {
                return Err(StoreError::EntryExists {
                    container: container.name().to_string(),
                    entry: entry_id.to_string(),
                });
            }
            return Ok(());
        }
        entries.insert(entry_id.to_string(), CheckpointBounds::default());
        Ok(())
    }

    fn submit(
        &self,
        container: &ContainerHandle,
        entry_id: &str,
        op: &WriteOp,
    ) -> Result<(), StoreError> {
        let mut containers = self.lock();
        let entries = entries_mut(&mut containers, container)?;
        let next = op
            .apply(entries.get(entry_id))
            .map_err(|e| StoreError::from_apply(e, container, entry_id))?;

        match next {
            Some(bounds) => {
                entries.insert(entry_id.to_string(), bounds);
            }
            None => {
                entries.remove(entry_id);
            }
        }
        Ok(())
    }

    fn read_entry(
        &self,
        container: &ContainerHandle,
        entry_id: &str,
    ) -> Result<CheckpointBounds, StoreError> {
        let mut containers = self.lock();
        let entries = entries_mut(&mut containers, container)?;
        entries
            .get(entry_id)
            .cloned()
            .ok_or_else(|| StoreError::entry_not_found(container, entry_id))
    }
}

#[cfg(test)]
#[path = "memory_tests.rs"]
mod tests;
