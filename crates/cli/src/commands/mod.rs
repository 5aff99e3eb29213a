// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! CLI command implementations

pub mod bucket;
pub mod provision;
pub mod shard;

use crate::output::OutputFormat;
use chrono::{DateTime, Utc};
use clap::Args;
use replog_core::{Config, ItemMarker, ProgressMarker};
use replog_logger::DeleteTarget;
use replog_storage::{DirStore, TracedStore};

/// Everything a command needs to run
pub struct Context {
    pub config: Config,
    pub store: TracedStore<DirStore>,
    pub format: OutputFormat,
}

/// A daemon's position, as given on the command line
#[derive(Args)]
pub struct ProgressArgs {
    /// Daemon recording its position
    pub daemon: String,
    /// Position marker
    pub marker: String,
    /// Position time, RFC 3339 (defaults to now)
    #[arg(long, value_parser = parse_time)]
    pub time: Option<DateTime<Utc>>,
    /// In-flight item as NAME@TIME (repeatable)
    #[arg(long = "item", value_name = "NAME@TIME", value_parser = parse_item)]
    pub items: Vec<ItemMarker>,
}

impl ProgressArgs {
    pub fn into_progress(self) -> ProgressMarker {
        let time = self.time.unwrap_or_else(Utc::now);
        ProgressMarker::new(self.daemon, self.marker, time).with_items(self.items)
    }
}

/// Which record a delete command removes
#[derive(Args)]
pub struct DeleteArgs {
    /// Daemon whose record to remove
    #[arg(required_unless_present = "purge", conflicts_with = "purge")]
    pub daemon: Option<String>,
    /// Remove the whole entry
    #[arg(long)]
    pub purge: bool,
}

impl DeleteArgs {
    pub fn target(&self) -> DeleteTarget<'_> {
        match self.daemon.as_deref() {
            Some(daemon) if !self.purge => DeleteTarget::Daemon(daemon),
            _ => DeleteTarget::All,
        }
    }
}

fn parse_time(s: &str) -> Result<DateTime<Utc>, String> {
    DateTime::parse_from_rfc3339(s)
        .map(|t| t.with_timezone(&Utc))
        .map_err(|e| format!("invalid RFC 3339 time {s:?}: {e}"))
}

/// Parse `NAME@TIME`; the name may itself contain `@`
fn parse_item(s: &str) -> Result<ItemMarker, String> {
    let (name, time) = s
        .rsplit_once('@')
        .ok_or_else(|| format!("expected NAME@TIME, got {s:?}"))?;
    if name.is_empty() {
        return Err(format!("item name is empty in {s:?}"));
    }
    Ok(ItemMarker::new(name, parse_time(time)?))
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
