// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! replog-logger: checkpoint loggers over a backing store
//!
//! - [`CheckpointLogger`] does CRUD on explicitly addressed entries
//! - [`FixedShardLogger`] handles logs with a fixed shard count
//! - [`BucketLogger`] handles bucket logs, decoding composite markers

pub mod addressing;
pub mod bucket;
pub mod error;
pub mod fixed;
pub mod logger;

pub use addressing::{BucketAddressing, BucketEntry, EntryAddressing, FixedShardAddressing};
pub use bucket::BucketLogger;
pub use error::LogError;
pub use fixed::FixedShardLogger;
pub use logger::{CheckpointLogger, DeleteTarget};
