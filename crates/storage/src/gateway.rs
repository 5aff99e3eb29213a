// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Container gateway with create-on-first-use
//!
//! Opening a missing container provisions it and retries the open once.
//! The result says which path was taken.

use crate::store::{BackingStore, ContainerHandle, StoreError};
use tracing::{error, info};

/// Result of opening a container through the gateway
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Opened {
    /// The container already existed
    Existing(ContainerHandle),
    /// The container was missing and has been created
    Created(ContainerHandle),
}

impl Opened {
    pub fn handle(&self) -> &ContainerHandle {
        match self {
            Opened::Existing(handle) | Opened::Created(handle) => handle,
        }
    }

    pub fn into_handle(self) -> ContainerHandle {
        match self {
            Opened::Existing(handle) | Opened::Created(handle) => handle,
        }
    }

    pub fn was_created(&self) -> bool {
        matches!(self, Opened::Created(_))
    }
}

/// Resolves containers on a backing store
#[derive(Clone)]
pub struct Gateway<S> {
    store: S,
}

impl<S: BackingStore> Gateway<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Open `name`, creating it if it does not exist
    ///
    /// Only `ContainerNotFound` triggers creation; any other open failure
    /// is returned as is. A `ContainerExists` from the create means another
    /// caller won the race, and the open is retried the same way.
    pub fn open_container(&self, name: &str) -> Result<Opened, StoreError> {
        match self.store.open_container(name) {
            Ok(handle) => Ok(Opened::Existing(handle)),
            Err(StoreError::ContainerNotFound(_)) => {
                info!(container = name, "container missing, creating");
                match self.store.create_container(name) {
                    Ok(()) | Err(StoreError::ContainerExists(_)) => {}
                    Err(e) => {
                        error!(container = name, error = %e, "could not create container");
                        return Err(e);
                    }
                }

                // retry
                match self.store.open_container(name) {
                    Ok(handle) => Ok(Opened::Created(handle)),
                    Err(e) => {
                        error!(container = name, error = %e, "could not open container");
                        Err(e)
                    }
                }
            }
            Err(e) => {
                error!(container = name, error = %e, "could not open container");
                Err(e)
            }
        }
    }
}

#[cfg(test)]
#[path = "gateway_tests.rs"]
mod tests;
