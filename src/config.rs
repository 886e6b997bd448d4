//! Configuration loading and management
//!
//! Handles parsing of `taskstore.toml` configuration files. The storage root
//! is an explicit configured value injected into the store at construction,
//! never read implicitly from process environment inside the store; the CLI
//! resolves it with the precedence flag > `TASKSTORE_ROOT` env (via clap) >
//! config file > platform data directory.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::lock::DEFAULT_LOCK_TIMEOUT_MS;

/// Name of the configuration file
pub const CONFIG_FILE: &str = "taskstore.toml";

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Storage root for shard files
    #[serde(default)]
    pub root: Option<PathBuf>,

    /// Shard lock acquisition timeout in milliseconds
    #[serde(default = "default_lock_timeout_ms")]
    pub lock_timeout_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            root: None,
            lock_timeout_ms: default_lock_timeout_ms(),
        }
    }
}

fn default_lock_timeout_ms() -> u64 {
    DEFAULT_LOCK_TIMEOUT_MS
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load `taskstore.toml` from a directory, falling back to defaults
    /// when the file is missing or unreadable
    pub fn load_from_dir(dir: &Path) -> Self {
        let config_path = dir.join(CONFIG_FILE);
        if config_path.exists() {
            Self::load(&config_path).unwrap_or_default()
        } else {
            Self::default()
        }
    }

    /// Save configuration to a file
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Resolve the effective storage root.
    ///
    /// `flag_root` comes from the CLI (`--root`, or `TASKSTORE_ROOT` via
    /// clap's env support) and wins over the config file; the platform data
    /// directory is the last resort.
    pub fn resolve_root(&self, flag_root: Option<PathBuf>) -> Result<PathBuf> {
        if let Some(root) = flag_root {
            return Ok(root);
        }
        if let Some(root) = &self.root {
            return Ok(root.clone());
        }
        default_root()
    }

    fn validate(&self) -> Result<()> {
        if self.lock_timeout_ms == 0 {
            return Err(Error::InvalidConfig(
                "lock_timeout_ms must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}

/// Platform data directory for taskstore (e.g. `~/.local/share/taskstore`)
fn default_root() -> Result<PathBuf> {
    directories::ProjectDirs::from("", "", "taskstore")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| {
            Error::InvalidConfig("cannot determine a data directory for this platform".to_string())
        })
}
