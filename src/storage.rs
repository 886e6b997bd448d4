//! Shard I/O for taskstore
//!
//! Persistent state lives under a single storage root:
//!
//! ```text
//! <root>/
//!   shards/                     # One JSON array per shard
//!     default.json              # Records with no project label
//!     <sanitized-project>.json  # Records routed by project
//!     <shard>.json.lock         # Advisory lock, held across mutations
//! ```
//!
//! A shard file is replaced as a whole on every write, via the atomic
//! temp-file + rename pattern in [`crate::lock`], so a concurrent reader
//! never observes a truncated or half-serialized array.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::lock;
use crate::task::TaskRecord;

/// Name of the shard directory under the storage root
pub const SHARDS_DIR: &str = "shards";

/// Shard file extension
const SHARD_EXT: &str = "json";

/// Storage manager for the sharded task layout
#[derive(Debug, Clone)]
pub struct Storage {
    /// Storage root, injected at construction
    root: PathBuf,
}

impl Storage {
    /// Create a storage manager rooted at `root`
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// Path to the storage root
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path to the shard directory
    pub fn shards_dir(&self) -> PathBuf {
        self.root.join(SHARDS_DIR)
    }

    /// Path to a shard file
    pub fn shard_path(&self, shard: &str) -> PathBuf {
        self.shards_dir().join(format!("{shard}.{SHARD_EXT}"))
    }

    /// Path to a shard's lock file
    pub fn shard_lock_path(&self, shard: &str) -> PathBuf {
        lock::lock_path_for(&self.shard_path(shard))
    }

    /// Idempotently create the storage root and shard directory
    pub fn ensure_root(&self) -> Result<()> {
        fs::create_dir_all(self.shards_dir())?;
        Ok(())
    }

    /// Read the full contents of one shard.
    ///
    /// A missing shard file reads as an empty sequence; "no records yet" and
    /// "empty shard" are indistinguishable and both valid. Undecodable bytes
    /// are reported as [`Error::CorruptShard`].
    pub fn read_shard(&self, shard: &str) -> Result<Vec<TaskRecord>> {
        let path = self.shard_path(shard);
        if !path.exists() {
            return Ok(Vec::new());
        }

        let content = fs::read_to_string(&path)?;
        serde_json::from_str(&content).map_err(|source| Error::CorruptShard {
            shard: shard.to_string(),
            source,
        })
    }

    /// Replace the entire contents of one shard as a single durable write.
    ///
    /// Pretty-printed so shard files stay human-diffable. The caller is
    /// expected to hold the shard lock when this is part of a
    /// read-modify-write; the write itself is atomic either way.
    pub fn write_shard(&self, shard: &str, records: &[TaskRecord]) -> Result<()> {
        self.ensure_root()?;
        let json = serde_json::to_string_pretty(records)?;
        lock::write_atomic(self.shard_path(shard), json.as_bytes())?;
        tracing::debug!(shard, records = records.len(), "shard written");
        Ok(())
    }

    /// Enumerate every shard that currently exists, sorted by shard id.
    ///
    /// The sort keeps scan order and `list` output stable; lock and temp
    /// files alongside the shards are skipped.
    pub fn shard_ids(&self) -> Result<Vec<String>> {
        let dir = self.shards_dir();
        if !dir.exists() {
            return Ok(Vec::new());
        }

        let mut ids = Vec::new();
        for entry in fs::read_dir(&dir)? {
            let path = entry?.path();
            if path.extension().and_then(|e| e.to_str()) != Some(SHARD_EXT) {
                continue;
            }
            if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                ids.push(stem.to_string());
            }
        }

        ids.sort();
        Ok(ids)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::task::NewTask;
    use tempfile::TempDir;

    fn storage() -> (TempDir, Storage) {
        let temp = TempDir::new().unwrap();
        let storage = Storage::new(temp.path().join("store"));
        (temp, storage)
    }

    #[test]
    fn missing_shard_reads_as_empty() {
        let (_temp, storage) = storage();
        let records = storage.read_shard("default").unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn write_then_read_round_trips() {
        let (_temp, storage) = storage();
        let records = vec![
            NewTask::new("first").into_record(),
            NewTask::new("second").into_record(),
        ];

        storage.write_shard("default", &records).unwrap();
        let read_back = storage.read_shard("default").unwrap();
        assert_eq!(read_back, records);
    }

    #[test]
    fn shard_files_are_json_arrays() {
        let (_temp, storage) = storage();
        storage
            .write_shard("api", &[NewTask::new("x").into_record()])
            .unwrap();

        let raw = fs::read_to_string(storage.shard_path("api")).unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert!(value.is_array());
        assert_eq!(value.as_array().unwrap().len(), 1);
    }

    #[test]
    fn corrupt_shard_is_classified() {
        let (_temp, storage) = storage();
        storage.ensure_root().unwrap();
        fs::write(storage.shard_path("broken"), "{not json").unwrap();

        let err = storage.read_shard("broken").unwrap_err();
        assert!(matches!(err, Error::CorruptShard { ref shard, .. } if shard == "broken"));
    }

    #[test]
    fn shard_ids_sorted_and_ignore_non_shard_files() {
        let (_temp, storage) = storage();
        storage.write_shard("zeta", &[]).unwrap();
        storage.write_shard("alpha", &[]).unwrap();
        fs::write(storage.shards_dir().join("alpha.json.lock"), "").unwrap();
        fs::write(storage.shards_dir().join("notes.txt"), "").unwrap();

        assert_eq!(storage.shard_ids().unwrap(), vec!["alpha", "zeta"]);
    }

    #[test]
    fn ensure_root_is_idempotent() {
        let (_temp, storage) = storage();
        storage.ensure_root().unwrap();
        storage.ensure_root().unwrap();
        assert!(storage.shards_dir().exists());
    }
}
