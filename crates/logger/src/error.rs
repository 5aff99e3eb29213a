// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for checkpoint loggers

use replog_core::{MarkerDecodeError, ShardId};
use replog_storage::StoreError;
use thiserror::Error;

/// Errors that can occur while recording or reading checkpoints
#[derive(Debug, Error)]
pub enum LogError {
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error("invalid composite marker: {0}")]
    MarkerDecode(#[from] MarkerDecodeError),
    /// At least one shard of a composite update failed
    ///
    /// Only the last failure is reported. Other shards may or may not have
    /// been updated; retry the whole update.
    #[error("update of shard {shard} failed: {source}")]
    FanOut {
        shard: ShardId,
        #[source]
        source: StoreError,
    },
}
