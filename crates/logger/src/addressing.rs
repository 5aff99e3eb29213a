// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Entry addressing strategies
//!
//! An addressing strategy maps a logical key to the container and entry id
//! a checkpoint lives at. Ids have the form `prefix + key [+ "." + shard]`.

use replog_core::config::DEFAULT_LOG_CONTAINER;
use replog_core::{BucketRef, Config, ShardId};

/// Maps logical keys to entry locations
pub trait EntryAddressing {
    type Key: ?Sized;

    /// Container holding every entry of this strategy
    fn container(&self) -> &str;

    /// Entry id for a key
    fn entry_id(&self, key: &Self::Key) -> String;
}

fn join_entry_id(prefix: &str, key: &str, shard: Option<ShardId>) -> String {
    match shard {
        Some(shard) => format!("{}{}.{}", prefix, key, shard),
        None => format!("{}{}", prefix, key),
    }
}

/// Addressing for a log with a fixed number of shards
///
/// Entries are `prefix + log_key + "." + shard`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedShardAddressing {
    container: String,
    prefix: String,
    log_key: String,
}

impl FixedShardAddressing {
    /// Address `log_key` in the default log container
    pub fn new(prefix: impl Into<String>, log_key: impl Into<String>) -> Self {
        Self {
            container: DEFAULT_LOG_CONTAINER.to_string(),
            prefix: prefix.into(),
            log_key: log_key.into(),
        }
    }

    pub fn from_config(config: &Config, log_key: impl Into<String>) -> Self {
        Self::new(config.shard_prefix.clone(), log_key).in_container(&config.log_container)
    }

    /// Override the container; an empty name keeps the current one
    pub fn in_container(mut self, container: &str) -> Self {
        if !container.is_empty() {
            self.container = container.to_string();
        }
        self
    }

    pub fn log_key(&self) -> &str {
        &self.log_key
    }
}

impl EntryAddressing for FixedShardAddressing {
    type Key = ShardId;

    fn container(&self) -> &str {
        &self.container
    }

    fn entry_id(&self, shard: &ShardId) -> String {
        join_entry_id(&self.prefix, &self.log_key, Some(*shard))
    }
}

/// A bucket key and optional shard, ready to be prefixed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BucketEntry {
    pub key: String,
    pub shard: Option<ShardId>,
}

/// Addressing for bucket logs whose markers may be composite
///
/// Entries are `prefix + bucket_key [+ "." + shard]`, with no suffix for
/// an unsharded bucket.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BucketAddressing {
    container: String,
    prefix: String,
    index_by_instance: bool,
}

impl BucketAddressing {
    pub fn new(container: impl Into<String>, prefix: impl Into<String>) -> Self {
        Self {
            container: container.into(),
            prefix: prefix.into(),
            index_by_instance: false,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.log_container.clone(), config.bucket_prefix())
            .index_by_instance(config.index_by_instance)
    }

    pub fn index_by_instance(mut self, enabled: bool) -> Self {
        self.index_by_instance = enabled;
        self
    }

    /// True if `bucket` is keyed by instance and may need legacy migration
    pub fn keyed_by_instance(&self, bucket: &BucketRef) -> bool {
        bucket.keyed_by_instance(self.index_by_instance)
    }

    /// Current entry for a bucket shard
    pub fn entry(&self, bucket: &BucketRef, shard: Option<ShardId>) -> BucketEntry {
        BucketEntry {
            key: bucket.key(self.index_by_instance),
            shard,
        }
    }

    /// Entry the bucket shard used before index-by-instance
    pub fn legacy_entry(&self, bucket: &BucketRef, shard: Option<ShardId>) -> BucketEntry {
        BucketEntry {
            key: bucket.legacy_key().to_string(),
            shard,
        }
    }
}

impl EntryAddressing for BucketAddressing {
    type Key = BucketEntry;

    fn container(&self) -> &str {
        &self.container
    }

    fn entry_id(&self, entry: &BucketEntry) -> String {
        join_entry_id(&self.prefix, &entry.key, entry.shard)
    }
}

#[cfg(test)]
#[path = "addressing_tests.rs"]
mod tests;
