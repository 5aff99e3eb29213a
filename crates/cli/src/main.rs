// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! replog - replication checkpoint store CLI

mod commands;
mod output;

use anyhow::{Context as _, Result};
use clap::{Parser, Subcommand};
use commands::{bucket, provision, shard, Context};
use output::OutputFormat;
use replog_core::Config;
use replog_storage::{DirStore, TracedStore};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "replog",
    version,
    about = "Replica log - replication checkpoint store"
)]
struct Cli {
    /// Configuration file (TOML)
    #[arg(long, global = true, env = "REPLOG_CONFIG")]
    config: Option<PathBuf>,

    /// Store root directory, overriding the configured one
    #[arg(long, global = true)]
    root: Option<PathBuf>,

    /// Output format
    #[arg(short = 'o', long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    output: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create the entries of a fixed-shard log
    Provision(provision::ProvisionArgs),
    /// Fixed-shard log checkpoints
    Shard(shard::ShardArgs),
    /// Bucket log checkpoints
    Bucket(bucket::BucketArgs),
}

fn main() -> Result<()> {
    setup_logging();

    let cli = Cli::parse();
    let config = Config::load_or_default(cli.config.as_deref())?;
    let root = cli.root.unwrap_or_else(|| config.root.clone());
    tracing::debug!(root = %root.display(), "opening store");
    let store = DirStore::open(&root)
        .with_context(|| format!("failed to open store at {}", root.display()))?;

    let ctx = Context {
        config,
        store: TracedStore::new(store),
        format: cli.output,
    };

    match cli.command {
        Commands::Provision(args) => provision::handle(args, ctx),
        Commands::Shard(args) => shard::handle(args.command, ctx),
        Commands::Bucket(args) => bucket::handle(args.command, ctx),
    }
}

fn setup_logging() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
}
