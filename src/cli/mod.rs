//! Command-line interface for taskstore
//!
//! This module defines the CLI structure using clap derive macros.
//! Each subcommand maps 1:1 to one Task Store operation and lives in its
//! own submodule.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::Config;
use crate::error::Result;
use crate::storage::Storage;
use crate::store::TaskStore;

mod create;
mod delete;
mod filter;
mod get;
mod list;
mod update;

/// taskstore - sharded, file-backed task tracking
///
/// Task records are persisted as JSON array shards under a storage root,
/// one shard per project plus a default shard.
#[derive(Parser, Debug)]
#[command(name = "taskstore")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Storage root for shard files (defaults to the platform data dir)
    #[arg(long, global = true, env = "TASKSTORE_ROOT")]
    pub root: Option<PathBuf>,

    /// Output in JSON format
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create a task
    Create {
        /// Task description (required, non-empty)
        content: String,

        /// Initial status: pending, in_progress, completed, cancelled
        #[arg(long)]
        status: Option<String>,

        /// Priority: high, medium, low
        #[arg(long)]
        priority: Option<String>,

        /// Project label; routes the record to its shard
        #[arg(long)]
        project: Option<String>,

        /// Conversation label (opaque filter key)
        #[arg(long)]
        conversation: Option<String>,
    },

    /// Fetch a task by id
    Get {
        /// Task id
        id: String,
    },

    /// Apply a partial update to a task
    Update {
        /// Task id
        id: String,

        /// New description
        #[arg(long)]
        content: Option<String>,

        /// New status: pending, in_progress, completed, cancelled
        #[arg(long)]
        status: Option<String>,

        /// New priority: high, medium, low
        #[arg(long)]
        priority: Option<String>,

        /// New project label (does not move the record between shards)
        #[arg(long)]
        project: Option<String>,

        /// New conversation label
        #[arg(long)]
        conversation: Option<String>,
    },

    /// Delete a task (soft-cancel by default)
    Delete {
        /// Task id
        id: String,

        /// Remove the record entirely instead of cancelling it
        #[arg(long)]
        hard: bool,
    },

    /// List all tasks
    List,

    /// Filter tasks by conjunctive criteria
    Filter {
        /// Match status exactly
        #[arg(long)]
        status: Option<String>,

        /// Match priority exactly
        #[arg(long)]
        priority: Option<String>,

        /// Match project label exactly
        #[arg(long)]
        project: Option<String>,

        /// Match conversation label exactly
        #[arg(long)]
        conversation: Option<String>,

        /// Case-insensitive substring match within content
        #[arg(long)]
        keyword: Option<String>,
    },
}

impl Commands {
    /// Command name as reported in the output envelope
    pub fn name(&self) -> &'static str {
        match self {
            Commands::Create { .. } => "create",
            Commands::Get { .. } => "get",
            Commands::Update { .. } => "update",
            Commands::Delete { .. } => "delete",
            Commands::List => "list",
            Commands::Filter { .. } => "filter",
        }
    }
}

impl Cli {
    /// Execute the CLI command
    pub fn run(self) -> Result<()> {
        let store = open_store(self.root)?;
        let options = crate::output::OutputOptions {
            json: self.json,
            quiet: self.quiet,
        };

        match self.command {
            Commands::Create {
                content,
                status,
                priority,
                project,
                conversation,
            } => create::run(
                &store,
                create::CreateOptions {
                    content,
                    status,
                    priority,
                    project,
                    conversation,
                },
                options,
            ),
            Commands::Get { id } => get::run(&store, &id, options),
            Commands::Update {
                id,
                content,
                status,
                priority,
                project,
                conversation,
            } => update::run(
                &store,
                update::UpdateOptions {
                    id,
                    content,
                    status,
                    priority,
                    project,
                    conversation,
                },
                options,
            ),
            Commands::Delete { id, hard } => delete::run(&store, &id, hard, options),
            Commands::List => list::run(&store, options),
            Commands::Filter {
                status,
                priority,
                project,
                conversation,
                keyword,
            } => filter::run(
                &store,
                filter::FilterOptions {
                    status,
                    priority,
                    project,
                    conversation,
                    keyword,
                },
                options,
            ),
        }
    }
}

/// Open the task store from the resolved configuration
fn open_store(flag_root: Option<PathBuf>) -> Result<TaskStore> {
    let cwd = std::env::current_dir()?;
    let config = Config::load_from_dir(&cwd);
    let root = config.resolve_root(flag_root)?;
    TaskStore::new(Storage::new(root), config.lock_timeout_ms)
}
