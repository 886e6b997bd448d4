//! taskstore - sharded, file-backed task tracking
//!
//! The core of this crate is a persistent task store: it durably records
//! task records as JSON array shards (one shard per project plus a default
//! shard), assigns identity, locates records by id across the shard layout,
//! and applies flat conjunctive filters.
//!
//! # Module Organization
//!
//! - `cli`: Command-line interface using clap
//! - `config`: Configuration loading from `taskstore.toml`
//! - `error`: Error types and result aliases
//! - `lock`: File locking and atomic writes for concurrency safety
//! - `output`: JSON envelope and human output formatting
//! - `shard`: Project label to shard id resolution
//! - `storage`: Shard file I/O and directory management
//! - `store`: The task store public contract
//! - `task`: Task record data model

pub mod cli;
pub mod config;
pub mod error;
pub mod lock;
pub mod output;
pub mod shard;
pub mod storage;
pub mod store;
pub mod task;

pub use error::{Error, Result};
