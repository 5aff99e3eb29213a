// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Provision command

use super::Context;
use crate::output::{self, Outcome};
use clap::Args;
use replog_core::ShardId;
use replog_logger::{EntryAddressing, FixedShardAddressing, FixedShardLogger};

#[derive(Args)]
pub struct ProvisionArgs {
    /// Log to provision
    pub log_key: String,
    /// Number of shards
    #[arg(long)]
    pub shards: u32,
    /// Container, overriding the configured one
    #[arg(long)]
    pub container: Option<String>,
}

pub fn handle(args: ProvisionArgs, ctx: Context) -> anyhow::Result<()> {
    let addressing = FixedShardAddressing::from_config(&ctx.config, args.log_key)
        .in_container(args.container.as_deref().unwrap_or_default());
    let logger = FixedShardLogger::new(ctx.store, addressing);

    logger.provision(args.shards)?;

    let addressing = logger.addressing();
    let outcome = Outcome {
        action: "provisioned",
        container: addressing.container().to_string(),
        entries: (0..args.shards)
            .map(|shard| addressing.entry_id(&ShardId(shard)))
            .collect(),
    };
    output::print(&outcome, ctx.format)
}
