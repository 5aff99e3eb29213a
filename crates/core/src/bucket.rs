// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Bucket references used to key composite-marker logs

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Separates bucket name and instance id in keys and on the command line
pub const INSTANCE_SEPARATOR: char = ':';

/// Errors parsing a bucket reference
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BucketParseError {
    #[error("bucket name is empty")]
    EmptyName,
    #[error("bucket instance id is empty")]
    EmptyInstance,
}

/// A bucket, optionally pinned to one instance
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BucketRef {
    pub name: String,
    pub instance: Option<String>,
}

impl BucketRef {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            instance: None,
        }
    }

    pub fn with_instance(mut self, instance: impl Into<String>) -> Self {
        self.instance = Some(instance.into());
        self
    }

    /// True if entries for this bucket are keyed by instance
    pub fn keyed_by_instance(&self, index_by_instance: bool) -> bool {
        index_by_instance && self.instance.is_some()
    }

    /// Logical key, `name:instance` when keyed by instance
    pub fn key(&self, index_by_instance: bool) -> String {
        match &self.instance {
            Some(instance) if index_by_instance => {
                format!("{}{}{}", self.name, INSTANCE_SEPARATOR, instance)
            }
            _ => self.name.clone(),
        }
    }

    /// Key used before entries were indexed by instance
    pub fn legacy_key(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for BucketRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key(true))
    }
}

impl FromStr for BucketRef {
    type Err = BucketParseError;

    /// Parse `name` or `name:instance`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (name, instance) = match s.split_once(INSTANCE_SEPARATOR) {
            Some((name, instance)) => (name, Some(instance)),
            None => (s, None),
        };
        if name.is_empty() {
            return Err(BucketParseError::EmptyName);
        }
        let bucket = Self::new(name);
        match instance {
            Some("") => Err(BucketParseError::EmptyInstance),
            Some(instance) => Ok(bucket.with_instance(instance)),
            None => Ok(bucket),
        }
    }
}
