//! The task store
//!
//! Public contract over the sharded layout: create, fetch-by-id,
//! update-by-id, delete-by-id (soft/hard), list-all, filter. Create routes
//! directly to one shard via [`crate::shard::shard_for`]; every operation
//! that targets an existing record scans shards in enumeration order until
//! the id is found, because there is no secondary id-to-shard index.
//!
//! Mutations are read-modify-write over exactly one shard, serialized by an
//! exclusive file lock on that shard. Reads take no locks and never block.

use crate::error::{Error, Result};
use crate::lock::FileLock;
use crate::shard;
use crate::storage::Storage;
use crate::task::{DeleteOutcome, NewTask, Status, TaskFilter, TaskRecord, TaskUpdate};

/// Persistent task store over a sharded file layout
#[derive(Debug, Clone)]
pub struct TaskStore {
    storage: Storage,
    lock_timeout_ms: u64,
}

impl TaskStore {
    /// Open a store rooted at the given storage, creating the root if absent
    pub fn new(storage: Storage, lock_timeout_ms: u64) -> Result<Self> {
        storage.ensure_root()?;
        Ok(Self {
            storage,
            lock_timeout_ms,
        })
    }

    pub fn storage(&self) -> &Storage {
        &self.storage
    }

    /// Create a task: validate, assign identity, stamp timestamps, apply
    /// defaults, append to the shard resolved from `project`.
    pub fn create(&self, new: NewTask) -> Result<TaskRecord> {
        if new.content.trim().is_empty() {
            return Err(Error::InvalidInput(
                "content is required and must be non-empty".to_string(),
            ));
        }

        let record = new.into_record();
        let shard = shard::shard_for(record.project.as_deref());
        let created = record.clone();
        self.with_shard_mut(&shard, move |records| {
            records.push(record);
            Ok(())
        })?;
        Ok(created)
    }

    /// Fetch a task by id, scanning shards in enumeration order
    pub fn get(&self, id: &str) -> Result<TaskRecord> {
        for shard in self.storage.shard_ids()? {
            let records = self.read_shard_degraded(&shard)?;
            if let Some(record) = records.into_iter().find(|r| r.id == id) {
                return Ok(record);
            }
        }
        Err(Error::NotFound(id.to_string()))
    }

    /// Apply a partial update to a task.
    ///
    /// Only fields present in `update` are merged; `updatedAt` is always
    /// refreshed. The record stays in the shard where it was found even when
    /// `project` changes.
    pub fn update(&self, id: &str, update: TaskUpdate) -> Result<TaskRecord> {
        let shard = self.find_shard(id)?;
        let id = id.to_string();
        self.with_shard_mut(&shard, move |records| {
            let record = records
                .iter_mut()
                .find(|r| r.id == id)
                .ok_or(Error::NotFound(id))?;
            update.apply_to(record);
            Ok(record.clone())
        })
    }

    /// Delete a task.
    ///
    /// Hard delete removes the record from its shard; soft delete (the
    /// default) cancels it in place and refreshes `updatedAt`.
    pub fn delete(&self, id: &str, hard: bool) -> Result<DeleteOutcome> {
        let shard = self.find_shard(id)?;
        let id = id.to_string();
        self.with_shard_mut(&shard, move |records| {
            let idx = records
                .iter()
                .position(|r| r.id == id)
                .ok_or(Error::NotFound(id))?;

            if hard {
                let removed = records.remove(idx);
                return Ok(DeleteOutcome::removed(removed.id));
            }

            let update = TaskUpdate {
                status: Some(Status::Cancelled),
                ..TaskUpdate::default()
            };
            update.apply_to(&mut records[idx]);
            Ok(DeleteOutcome::Cancelled(records[idx].clone()))
        })
    }

    /// All records, in shard-enumeration order then in-shard order
    pub fn list_all(&self) -> Result<Vec<TaskRecord>> {
        let mut all = Vec::new();
        for shard in self.storage.shard_ids()? {
            all.extend(self.read_shard_degraded(&shard)?);
        }
        Ok(all)
    }

    /// Conjunctive filtered query over `list_all`, order preserved
    pub fn filter(&self, filter: &TaskFilter) -> Result<Vec<TaskRecord>> {
        let mut all = self.list_all()?;
        all.retain(|record| filter.matches(record));
        Ok(all)
    }

    /// Locate the shard holding `id`, or fail with `NotFound`
    fn find_shard(&self, id: &str) -> Result<String> {
        for shard in self.storage.shard_ids()? {
            let records = self.read_shard_degraded(&shard)?;
            if records.iter().any(|r| r.id == id) {
                return Ok(shard);
            }
        }
        Err(Error::NotFound(id.to_string()))
    }

    /// Read a shard for a scan path, degrading corrupt shards to empty.
    ///
    /// One undecodable shard must not break queries over unrelated shards;
    /// it is logged and skipped. Write paths go through `with_shard_mut`,
    /// where the same read propagates `CorruptShard` and refuses the write.
    fn read_shard_degraded(&self, shard: &str) -> Result<Vec<TaskRecord>> {
        match self.storage.read_shard(shard) {
            Ok(records) => Ok(records),
            Err(Error::CorruptShard { shard, source }) => {
                tracing::warn!(%shard, error = %source, "corrupt shard skipped during scan");
                Ok(Vec::new())
            }
            Err(err) => Err(err),
        }
    }

    /// Run a read-modify-write over one shard under its exclusive lock
    fn with_shard_mut<T>(
        &self,
        shard: &str,
        mutate: impl FnOnce(&mut Vec<TaskRecord>) -> Result<T>,
    ) -> Result<T> {
        let _lock = FileLock::acquire(self.storage.shard_lock_path(shard), self.lock_timeout_ms)?;

        let mut records = self.storage.read_shard(shard)?;
        let result = mutate(&mut records)?;
        self.storage.write_shard(shard, &records)?;

        Ok(result)
    }
}
