// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fixed-shard log commands

use super::{Context, DeleteArgs, ProgressArgs};
use crate::output::{self, Outcome};
use clap::{Args, Subcommand};
use replog_core::ShardId;
use replog_logger::{DeleteTarget, EntryAddressing, FixedShardAddressing, FixedShardLogger};
use replog_storage::{DirStore, TracedStore};

#[derive(Args)]
pub struct ShardArgs {
    #[command(subcommand)]
    pub command: ShardCommand,
}

/// Identifies one shard of a fixed-shard log
#[derive(Args)]
pub struct ShardTarget {
    /// Log the shard belongs to
    pub log_key: String,
    /// Shard number
    pub shard: u32,
    /// Container, overriding the configured one
    #[arg(long)]
    pub container: Option<String>,
}

#[derive(Subcommand)]
pub enum ShardCommand {
    /// Record a daemon's position in a shard
    Update {
        #[command(flatten)]
        target: ShardTarget,
        #[command(flatten)]
        progress: ProgressArgs,
    },
    /// Remove a daemon's record, or the whole shard entry
    Delete {
        #[command(flatten)]
        target: ShardTarget,
        #[command(flatten)]
        delete: DeleteArgs,
    },
    /// Show a shard's bounds
    Bounds {
        #[command(flatten)]
        target: ShardTarget,
    },
}

pub fn handle(command: ShardCommand, ctx: Context) -> anyhow::Result<()> {
    match command {
        ShardCommand::Update { target, progress } => {
            let (logger, shard) = open(target, &ctx);
            logger.update_bound(shard, &progress.into_progress())?;
            print_outcome("updated", &logger, shard, &ctx)
        }
        ShardCommand::Delete { target, delete } => {
            let (logger, shard) = open(target, &ctx);
            match delete.target() {
                DeleteTarget::Daemon(daemon) => logger.delete_bound(shard, daemon)?,
                DeleteTarget::All => logger.purge(shard)?,
            }
            print_outcome("deleted", &logger, shard, &ctx)
        }
        ShardCommand::Bounds { target } => {
            let (logger, shard) = open(target, &ctx);
            output::print(&logger.get_bounds(shard)?, ctx.format)
        }
    }
}

fn open(target: ShardTarget, ctx: &Context) -> (FixedShardLogger<TracedStore<DirStore>>, ShardId) {
    let addressing = FixedShardAddressing::from_config(&ctx.config, target.log_key)
        .in_container(target.container.as_deref().unwrap_or_default());
    (
        FixedShardLogger::new(ctx.store.clone(), addressing),
        ShardId(target.shard),
    )
}

fn print_outcome(
    action: &'static str,
    logger: &FixedShardLogger<TracedStore<DirStore>>,
    shard: ShardId,
    ctx: &Context,
) -> anyhow::Result<()> {
    let addressing = logger.addressing();
    let outcome = Outcome {
        action,
        container: addressing.container().to_string(),
        entries: vec![addressing.entry_id(&shard)],
    };
    output::print(&outcome, ctx.format)
}
