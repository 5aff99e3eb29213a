// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Traced store wrapper for consistent observability

use crate::store::{BackingStore, ContainerHandle, StoreError};
use replog_core::{CheckpointBounds, WriteOp};
use std::time::Instant;

/// Wrapper that adds tracing to any BackingStore
#[derive(Clone)]
pub struct TracedStore<S> {
    inner: S,
}

impl<S> TracedStore<S> {
    pub fn new(inner: S) -> Self {
        Self { inner }
    }

    pub fn inner(&self) -> &S {
        &self.inner
    }
}

impl<S: BackingStore> BackingStore for TracedStore<S> {
    fn open_container(&self, name: &str) -> Result<ContainerHandle, StoreError> {
        let result = self.inner.open_container(name);
        // A missing container is the gateway's cue to create it
        match &result {
            Ok(_) => tracing::trace!(container = name, "opened"),
            Err(StoreError::ContainerNotFound(_)) => {
                tracing::debug!(container = name, "container not found")
            }
            Err(e) => tracing::error!(container = name, error = %e, "open failed"),
        }
        result
    }

    fn create_container(&self, name: &str) -> Result<(), StoreError> {
        let span = tracing::info_span!("store.create_container", container = name);
        let _guard = span.enter();

        let result = self.inner.create_container(name);
        match &result {
            Ok(()) => tracing::info!("container created"),
            Err(e) => tracing::error!(error = %e, "create failed"),
        }
        result
    }

    fn create_entry(
        &self,
        container: &ContainerHandle,
        entry_id: &str,
        exclusive: bool,
    ) -> Result<(), StoreError> {
        let span = tracing::info_span!(
            "store.create_entry",
            container = container.name(),
            entry = entry_id
        );
        let _guard = span.enter();

        let result = self.inner.create_entry(container, entry_id, exclusive);
        match &result {
            Ok(()) => tracing::debug!(exclusive, "entry ready"),
            Err(e) => tracing::error!(exclusive, error = %e, "create failed"),
        }
        result
    }

    fn submit(
        &self,
        container: &ContainerHandle,
        entry_id: &str,
        op: &WriteOp,
    ) -> Result<(), StoreError> {
        let span = tracing::info_span!(
            "store.submit",
            container = container.name(),
            entry = entry_id
        );
        let _guard = span.enter();

        tracing::debug!(steps = op.steps().len(), "submitting");
        let start = Instant::now();
        let result = self.inner.submit(container, entry_id, op);
        let elapsed_ms = start.elapsed().as_millis() as u64;

        match &result {
            Ok(()) => tracing::debug!(elapsed_ms, "applied"),
            // Asserted-missing entries are handled by callers
            Err(e) if e.is_entry_not_found() => {
                tracing::debug!(elapsed_ms, "entry not found")
            }
            Err(e) => tracing::error!(elapsed_ms, error = %e, "submit failed"),
        }
        result
    }

    fn read_entry(
        &self,
        container: &ContainerHandle,
        entry_id: &str,
    ) -> Result<CheckpointBounds, StoreError> {
        let start = Instant::now();
        let result = self.inner.read_entry(container, entry_id);
        tracing::trace!(
            container = container.name(),
            entry = entry_id,
            elapsed_ms = start.elapsed().as_millis() as u64,
            daemons = result.as_ref().map(|b| b.markers.len()).ok(),
            "read"
        );
        result
    }
}

#[cfg(test)]
#[path = "traced_tests.rs"]
mod tests;
