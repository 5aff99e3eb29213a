// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Progress markers and the composite multi-shard encoding
//!
//! A composite marker packs one marker per internal shard into a single
//! token: `"<shard>#<marker>,<shard>#<marker>"`. Any marker containing the
//! key/value separator is treated as composite; everything else is simple.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Separates `shard#marker` elements
pub const SHARD_SEPARATOR: char = ',';
/// Separates the shard index from its marker inside one element
pub const KEY_VALUE_SEPARATOR: char = '#';

/// Index of one shard of a sharded log
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ShardId(pub u32);

impl fmt::Display for ShardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for ShardId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

/// Errors from decoding a composite marker
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MarkerDecodeError {
    #[error("marker element {element:?} is missing '{KEY_VALUE_SEPARATOR}'")]
    MissingSeparator { element: String },
    #[error("invalid shard id {shard:?} in marker element")]
    InvalidShard { shard: String },
    #[error("shard {0} appears more than once")]
    DuplicateShard(ShardId),
    #[error("composite marker has no shards")]
    Empty,
}

/// Returns true if `marker` uses the composite encoding
pub fn is_composite(marker: &str) -> bool {
    marker.contains(KEY_VALUE_SEPARATOR)
}

/// A decoded composite marker: one submarker per shard, ordered by shard
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompositeMarker {
    shards: BTreeMap<ShardId, String>,
}

impl CompositeMarker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the submarker for a shard, returning the previous one
    pub fn insert(&mut self, shard: ShardId, marker: impl Into<String>) -> Option<String> {
        self.shards.insert(shard, marker.into())
    }

    pub fn get(&self, shard: ShardId) -> Option<&str> {
        self.shards.get(&shard).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.shards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shards.is_empty()
    }

    /// Iterate `(shard, submarker)` pairs in ascending shard order
    pub fn iter(&self) -> impl Iterator<Item = (ShardId, &str)> {
        self.shards.iter().map(|(shard, m)| (*shard, m.as_str()))
    }

    /// Decode a composite marker string
    ///
    /// Empty elements are skipped. The submarker is everything after the
    /// first separator, so submarkers may themselves contain `#`.
    pub fn decode(marker: &str) -> Result<Self, MarkerDecodeError> {
        let mut decoded = Self::new();

        for element in marker.split(SHARD_SEPARATOR) {
            if element.is_empty() {
                continue;
            }
            let (shard, sub) = element.split_once(KEY_VALUE_SEPARATOR).ok_or_else(|| {
                MarkerDecodeError::MissingSeparator {
                    element: element.to_string(),
                }
            })?;
            let shard = shard
                .parse::<u32>()
                .map(ShardId)
                .map_err(|_| MarkerDecodeError::InvalidShard {
                    shard: shard.to_string(),
                })?;
            if decoded.insert(shard, sub).is_some() {
                return Err(MarkerDecodeError::DuplicateShard(shard));
            }
        }

        if decoded.is_empty() {
            return Err(MarkerDecodeError::Empty);
        }
        Ok(decoded)
    }

    /// Encode back to the composite string form
    pub fn encode(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for CompositeMarker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (shard, marker)) in self.iter().enumerate() {
            if i > 0 {
                write!(f, "{}", SHARD_SEPARATOR)?;
            }
            write!(f, "{}{}{}", shard, KEY_VALUE_SEPARATOR, marker)?;
        }
        Ok(())
    }
}

impl FromStr for CompositeMarker {
    type Err = MarkerDecodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::decode(s)
    }
}

impl<M: Into<String>> FromIterator<(ShardId, M)> for CompositeMarker {
    fn from_iter<I: IntoIterator<Item = (ShardId, M)>>(iter: I) -> Self {
        let mut marker = Self::new();
        for (shard, sub) in iter {
            marker.insert(shard, sub);
        }
        marker
    }
}

#[cfg(test)]
#[path = "marker_tests.rs"]
mod tests;
