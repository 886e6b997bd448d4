//! Error types for taskstore
//!
//! Exit codes:
//! - 0: Success
//! - 2: User error (invalid input, unknown task id)
//! - 4: Operation failed (storage fault, corrupt shard, lock contention)

use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the taskstore CLI
pub mod exit_codes {
    pub const SUCCESS: i32 = 0;
    pub const USER_ERROR: i32 = 2;
    pub const OPERATION_FAILED: i32 = 4;
}

/// Main error type for store operations
#[derive(Error, Debug)]
pub enum Error {
    // User errors (exit code 2)
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Task not found: {0}")]
    NotFound(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    // Operation failures (exit code 4)
    #[error("Storage unavailable: {0}")]
    StorageUnavailable(#[from] std::io::Error),

    #[error("Corrupt shard '{shard}': {source}")]
    CorruptShard {
        shard: String,
        source: serde_json::Error,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("TOML serialize error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("Lock acquisition failed: {0}")]
    LockFailed(PathBuf),
}

impl Error {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            // User errors
            Error::InvalidInput(_) | Error::NotFound(_) | Error::InvalidConfig(_) => {
                exit_codes::USER_ERROR
            }

            // Operation failures
            Error::StorageUnavailable(_)
            | Error::CorruptShard { .. }
            | Error::Json(_)
            | Error::TomlParse(_)
            | Error::TomlSerialize(_)
            | Error::LockFailed(_) => exit_codes::OPERATION_FAILED,
        }
    }

    /// Stable machine-readable kind for the JSON error envelope
    pub fn kind(&self) -> &'static str {
        match self {
            Error::InvalidInput(_) => "invalid_input",
            Error::NotFound(_) => "not_found",
            Error::InvalidConfig(_) => "invalid_config",
            Error::StorageUnavailable(_) => "storage_unavailable",
            Error::CorruptShard { .. } => "corrupt_shard",
            Error::Json(_) | Error::TomlParse(_) | Error::TomlSerialize(_) => "serialization",
            Error::LockFailed(_) => "lock_failed",
        }
    }
}

/// Result type alias for store operations
pub type Result<T> = std::result::Result<T, Error>;
