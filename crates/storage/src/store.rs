// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Backing store interface
//!
//! A backing store holds named containers, each holding entries addressed
//! by string id. Writes are compound [`WriteOp`]s applied atomically per
//! entry; the store is responsible for durability.

use replog_core::{ApplyError, CheckpointBounds, WriteOp};
use thiserror::Error;

/// Errors from backing store operations
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("container not found: {0}")]
    ContainerNotFound(String),
    #[error("container already exists: {0}")]
    ContainerExists(String),
    #[error("entry not found: {container}/{entry}")]
    EntryNotFound { container: String, entry: String },
    #[error("entry already exists: {container}/{entry}")]
    EntryExists { container: String, entry: String },
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("backend error: {0}")]
    Backend(String),
}

impl StoreError {
    pub(crate) fn entry_not_found(container: &ContainerHandle, entry: &str) -> Self {
        Self::EntryNotFound {
            container: container.name().to_string(),
            entry: entry.to_string(),
        }
    }

    /// Map a failed write application to the store error it represents
    pub(crate) fn from_apply(err: ApplyError, container: &ContainerHandle, entry: &str) -> Self {
        match err {
            ApplyError::EntryMissing => Self::entry_not_found(container, entry),
        }
    }

    /// True if this error means the addressed entry does not exist
    pub fn is_entry_not_found(&self) -> bool {
        matches!(self, Self::EntryNotFound { .. })
    }
}

/// An opened container
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ContainerHandle {
    name: String,
}

impl ContainerHandle {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Storage for checkpoint entries
///
/// Every call blocks until the store has completed it.
pub trait BackingStore: Send + Sync {
    /// Open an existing container; `ContainerNotFound` if it does not exist
    fn open_container(&self, name: &str) -> Result<ContainerHandle, StoreError>;

    /// Create a container; `ContainerExists` if it already exists
    fn create_container(&self, name: &str) -> Result<(), StoreError>;

    /// Create an empty entry
    ///
    /// With `exclusive` set an existing entry is an error, otherwise it is
    /// left as is.
    fn create_entry(
        &self,
        container: &ContainerHandle,
        entry_id: &str,
        exclusive: bool,
    ) -> Result<(), StoreError>;

    /// Apply a compound write to one entry, all-or-nothing
    fn submit(
        &self,
        container: &ContainerHandle,
        entry_id: &str,
        op: &WriteOp,
    ) -> Result<(), StoreError>;

    /// Read the full state of one entry
    fn read_entry(
        &self,
        container: &ContainerHandle,
        entry_id: &str,
    ) -> Result<CheckpointBounds, StoreError>;
}
