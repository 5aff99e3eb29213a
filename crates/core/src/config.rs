// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Replica log configuration
//!
//! Loaded from TOML. Every key is optional:
//!
//! ```toml
//! log_container = ".log"
//! entry_prefix = "replica_log"
//! shard_prefix = "replica_shard."
//! index_by_instance = false
//! root = "/var/lib/replog"
//! ```

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Container used when a logger is not given one explicitly
pub const DEFAULT_LOG_CONTAINER: &str = ".log";
/// Prefix for bucket entry names
pub const DEFAULT_ENTRY_PREFIX: &str = "replica_log";
/// Prefix for fixed-shard entry names
pub const DEFAULT_SHARD_PREFIX: &str = "replica_shard.";
/// Data directory for the directory-backed store
pub const DEFAULT_ROOT: &str = "replog-data";

/// Errors loading configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Replica log settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Default container for log entries
    pub log_container: String,
    /// Prefix for bucket entry names; a "." is added before the bucket key
    pub entry_prefix: String,
    /// Prefix for fixed-shard entry names, used verbatim
    pub shard_prefix: String,
    /// Key bucket entries by name and instance id instead of name only
    pub index_by_instance: bool,
    /// Root directory of the directory-backed store
    pub root: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_container: DEFAULT_LOG_CONTAINER.to_string(),
            entry_prefix: DEFAULT_ENTRY_PREFIX.to_string(),
            shard_prefix: DEFAULT_SHARD_PREFIX.to_string(),
            index_by_instance: false,
            root: PathBuf::from(DEFAULT_ROOT),
        }
    }
}

impl Config {
    /// Parse configuration from TOML content
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml(&content)?;
        tracing::debug!(path = %path.display(), ?config, "loaded config");
        Ok(config)
    }

    /// Load from `path` if given, otherwise use defaults
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    /// Prefix for bucket-keyed entries
    pub fn bucket_prefix(&self) -> String {
        format!("{}.", self.entry_prefix)
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
