// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! replog-core: data model for the replication checkpoint store
//!
//! This crate provides:
//! - Checkpoint bounds and per-daemon progress records
//! - The composite multi-shard marker encoding and bucket references
//! - Compound write operations applied atomically by backing stores
//! - TOML configuration

pub mod bounds;
pub mod bucket;
pub mod config;
pub mod marker;
pub mod operation;

pub use bounds::{decode_bounds, encode_bounds, CheckpointBounds, ItemMarker, ProgressMarker};
pub use bucket::{BucketParseError, BucketRef};
pub use config::{Config, ConfigError};
pub use marker::{is_composite, CompositeMarker, MarkerDecodeError, ShardId};
pub use operation::{ApplyError, WriteOp, WriteStep};
