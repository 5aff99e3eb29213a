// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! Backing stores for checkpoint entries

pub mod dir;
pub mod gateway;
pub mod memory;
pub mod store;
pub mod traced;

#[cfg(any(test, feature = "test-support"))]
pub mod fake;

pub use dir::DirStore;
pub use gateway::{Gateway, Opened};
pub use memory::MemoryStore;
pub use store::{BackingStore, ContainerHandle, StoreError};
pub use traced::TracedStore;

// Test support - only compiled for tests or when explicitly requested
#[cfg(any(test, feature = "test-support"))]
pub use fake::{FakeStore, OpenFault, StoreCall};
