// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fake backing store for testing
//!
//! Wraps a [`MemoryStore`], records every call and lets tests inject
//! failures per container or per entry.

use crate::memory::MemoryStore;
use crate::store::{BackingStore, ContainerHandle, StoreError};
use replog_core::{CheckpointBounds, WriteOp};
use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex, MutexGuard};

/// Recorded call to the store
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreCall {
    OpenContainer {
        name: String,
    },
    CreateContainer {
        name: String,
    },
    CreateEntry {
        container: String,
        entry_id: String,
        exclusive: bool,
    },
    Submit {
        container: String,
        entry_id: String,
        op: WriteOp,
    },
    ReadEntry {
        container: String,
        entry_id: String,
    },
}

/// A failure to return from an open
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OpenFault {
    /// Report the container as missing even if it exists
    NotFound,
    /// Fail with a backend error
    Backend(String),
}

#[derive(Default)]
struct FakeState {
    calls: Vec<StoreCall>,
    open_faults: HashMap<String, VecDeque<OpenFault>>,
    create_container_fault: Option<String>,
    create_entry_faults: HashMap<String, String>,
    submit_faults: HashMap<String, String>,
    read_faults: HashMap<String, String>,
}

/// Fake store with call recording and failure injection
#[derive(Clone, Default)]
pub struct FakeStore {
    inner: MemoryStore,
    state: Arc<Mutex<FakeState>>,
}

impl FakeStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a fake that already holds an empty container
    pub fn with_container(name: &str) -> Self {
        Self {
            inner: MemoryStore::with_container(name),
            state: Arc::default(),
        }
    }

    /// The underlying memory store (bypasses recording and faults)
    pub fn memory(&self) -> &MemoryStore {
        &self.inner
    }

    /// Get all recorded calls
    pub fn calls(&self) -> Vec<StoreCall> {
        self.lock().calls.clone()
    }

    /// Clear recorded calls
    pub fn clear_calls(&self) {
        self.lock().calls.clear();
    }

    /// Entry ids of every recorded submit, in order
    pub fn submitted_entries(&self) -> Vec<String> {
        self.lock()
            .calls
            .iter()
            .filter_map(|call| match call {
                StoreCall::Submit { entry_id, .. } => Some(entry_id.clone()),
                _ => None,
            })
            .collect()
    }

    /// Queue a fault for the next open of `container`
    ///
    /// Faults are consumed one per open call, in order.
    pub fn push_open_fault(&self, container: &str, fault: OpenFault) {
        self.lock()
            .open_faults
            .entry(container.to_string())
            .or_default()
            .push_back(fault);
    }

    /// Make every container creation fail
    pub fn fail_create_container(&self, message: impl Into<String>) {
        self.lock().create_container_fault = Some(message.into());
    }

    /// Make creating `entry_id` fail
    pub fn fail_create_entry(&self, entry_id: &str, message: impl Into<String>) {
        self.lock()
            .create_entry_faults
            .insert(entry_id.to_string(), message.into());
    }

    /// Make every write to `entry_id` fail
    pub fn fail_submit(&self, entry_id: &str, message: impl Into<String>) {
        self.lock()
            .submit_faults
            .insert(entry_id.to_string(), message.into());
    }

    /// Make every read of `entry_id` fail
    pub fn fail_read(&self, entry_id: &str, message: impl Into<String>) {
        self.lock()
            .read_faults
            .insert(entry_id.to_string(), message.into());
    }

    /// Remove all injected faults
    pub fn clear_faults(&self) {
        let mut state = self.lock();
        state.open_faults.clear();
        state.create_container_fault = None;
        state.create_entry_faults.clear();
        state.submit_faults.clear();
        state.read_faults.clear();
    }

    fn lock(&self) -> MutexGuard<'_, FakeState> {
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl BackingStore for FakeStore {
    fn open_container(&self, name: &str) -> Result<ContainerHandle, StoreError> {
        let fault = {
            let mut state = self.lock();
            state.calls.push(StoreCall::OpenContainer {
                name: name.to_string(),
            });
            state.open_faults.get_mut(name).and_then(VecDeque::pop_front)
        };

        match fault {
            Some(OpenFault::NotFound) => Err(StoreError::ContainerNotFound(name.to_string())),
            Some(OpenFault::Backend(message)) => Err(StoreError::Backend(message)),
            None => self.inner.open_container(name),
        }
    }

    fn create_container(&self, name: &str) -> Result<(), StoreError> {
        let fault = {
            let mut state = self.lock();
            state.calls.push(StoreCall::CreateContainer {
                name: name.to_string(),
            });
            state.create_container_fault.clone()
        };

        match fault {
            Some(message) => Err(StoreError::Backend(message)),
            None => self.inner.create_container(name),
        }
    }

    fn create_entry(
        &self,
        container: &ContainerHandle,
        entry_id: &str,
        exclusive: bool,
    ) -> Result<(), StoreError> {
        let fault = {
            let mut state = self.lock();
            state.calls.push(StoreCall::CreateEntry {
                container: container.name().to_string(),
                entry_id: entry_id.to_string(),
                exclusive,
            });
            state.create_entry_faults.get(entry_id).cloned()
        };

        match fault {
            Some(message) => Err(StoreError::Backend(message)),
            None => self.inner.create_entry(container, entry_id, exclusive),
        }
    }

    fn submit(
        &self,
        container: &ContainerHandle,
        entry_id: &str,
        op: &WriteOp,
    ) -> Result<(), StoreError> {
        let fault = {
            let mut state = self.lock();
            state.calls.push(StoreCall::Submit {
                container: container.name().to_string(),
                entry_id: entry_id.to_string(),
                op: op.clone(),
            });
            state.submit_faults.get(entry_id).cloned()
        };

        match fault {
            Some(message) => Err(StoreError::Backend(message)),
            None => self.inner.submit(container, entry_id, op),
        }
    }

    fn read_entry(
        &self,
        container: &ContainerHandle,
        entry_id: &str,
    ) -> Result<CheckpointBounds, StoreError> {
        let fault = {
            let mut state = self.lock();
            state.calls.push(StoreCall::ReadEntry {
                container: container.name().to_string(),
                entry_id: entry_id.to_string(),
            });
            state.read_faults.get(entry_id).cloned()
        };

        match fault {
            Some(message) => Err(StoreError::Backend(message)),
            None => self.inner.read_entry(container, entry_id),
        }
    }
}

#[cfg(test)]
#[path = "fake_tests.rs"]
mod tests;
