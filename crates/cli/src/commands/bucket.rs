// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Bucket log commands

use super::{Context, DeleteArgs, ProgressArgs};
use crate::output::{self, Outcome};
use clap::{Args, Subcommand};
use replog_core::{is_composite, BucketRef, CompositeMarker, ShardId};
use replog_logger::{BucketAddressing, BucketLogger, EntryAddressing};
use replog_storage::{DirStore, TracedStore};

#[derive(Args)]
pub struct BucketArgs {
    #[command(subcommand)]
    pub command: BucketCommand,
}

/// Identifies a bucket log entry
#[derive(Args)]
pub struct BucketTarget {
    /// Bucket as NAME or NAME:INSTANCE
    pub bucket: BucketRef,
    /// Shard number; omit for an unsharded bucket
    #[arg(long)]
    pub shard: Option<u32>,
}

#[derive(Subcommand)]
pub enum BucketCommand {
    /// Record a daemon's position; a composite marker updates every shard it names
    Update {
        #[command(flatten)]
        target: BucketTarget,
        #[command(flatten)]
        progress: ProgressArgs,
    },
    /// Remove a daemon's record, or the whole entry
    Delete {
        #[command(flatten)]
        target: BucketTarget,
        #[command(flatten)]
        delete: DeleteArgs,
    },
    /// Show a bucket shard's bounds
    Bounds {
        #[command(flatten)]
        target: BucketTarget,
    },
}

pub fn handle(command: BucketCommand, ctx: Context) -> anyhow::Result<()> {
    let logger = BucketLogger::new(ctx.store.clone(), BucketAddressing::from_config(&ctx.config));

    match command {
        BucketCommand::Update { target, progress } => {
            let shard = target.shard.map(ShardId);
            let progress = progress.into_progress();
            logger.update_bound(&target.bucket, shard, &progress)?;

            let shards: Vec<Option<ShardId>> = match shard {
                None if is_composite(&progress.position_marker) => {
                    CompositeMarker::decode(&progress.position_marker)?
                        .iter()
                        .map(|(shard, _)| Some(shard))
                        .collect()
                }
                _ => vec![shard],
            };
            print_outcome("updated", &logger, &target.bucket, shards, &ctx)
        }
        BucketCommand::Delete { target, delete } => {
            let shard = target.shard.map(ShardId);
            logger.delete_bound(&target.bucket, shard, delete.target())?;
            print_outcome("deleted", &logger, &target.bucket, vec![shard], &ctx)
        }
        BucketCommand::Bounds { target } => {
            let bounds = logger.get_bounds(&target.bucket, target.shard.map(ShardId))?;
            output::print(&bounds, ctx.format)
        }
    }
}

fn print_outcome(
    action: &'static str,
    logger: &BucketLogger<TracedStore<DirStore>>,
    bucket: &BucketRef,
    shards: Vec<Option<ShardId>>,
    ctx: &Context,
) -> anyhow::Result<()> {
    let addressing = logger.addressing();
    let outcome = Outcome {
        action,
        container: addressing.container().to_string(),
        entries: shards
            .into_iter()
            .map(|shard| addressing.entry_id(&addressing.entry(bucket, shard)))
            .collect(),
    };
    output::print(&outcome, ctx.format)
}
