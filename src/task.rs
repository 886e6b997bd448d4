//! Task record data model
//!
//! Records are persisted as pretty-printed JSON arrays, one array per shard,
//! with camelCase field names so the on-disk shape matches the wire shape
//! handed back to callers.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Task status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    Pending,
    InProgress,
    Completed,
    Cancelled,
}

impl Default for Status {
    fn default() -> Self {
        Status::Pending
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Status::Pending => "pending",
            Status::InProgress => "in_progress",
            Status::Completed => "completed",
            Status::Cancelled => "cancelled",
        })
    }
}

impl std::str::FromStr for Status {
    type Err = crate::error::Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "pending" => Ok(Status::Pending),
            "in_progress" => Ok(Status::InProgress),
            "completed" => Ok(Status::Completed),
            "cancelled" => Ok(Status::Cancelled),
            _ => Err(crate::error::Error::InvalidInput(format!(
                "invalid status '{}': must be pending, in_progress, completed, or cancelled",
                s
            ))),
        }
    }
}

/// Task priority
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Default for Priority {
    fn default() -> Self {
        Priority::Medium
    }
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Priority::High => "high",
            Priority::Medium => "medium",
            Priority::Low => "low",
        })
    }
}

impl std::str::FromStr for Priority {
    type Err = crate::error::Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "high" => Ok(Priority::High),
            "medium" => Ok(Priority::Medium),
            "low" => Ok(Priority::Low),
            _ => Err(crate::error::Error::InvalidInput(format!(
                "invalid priority '{}': must be high, medium, or low",
                s
            ))),
        }
    }
}

/// A single persisted task
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskRecord {
    /// Unique identifier, assigned by the store at creation
    pub id: String,
    /// Free-text description
    pub content: String,
    #[serde(default)]
    pub status: Status,
    #[serde(default)]
    pub priority: Priority,
    /// Project label; absent means the record lives in the default shard
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project: Option<String>,
    /// Opaque conversation label, used only as a filter key
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conversation: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Caller-supplied fields for task creation
#[derive(Debug, Clone, Default)]
pub struct NewTask {
    pub content: String,
    pub status: Option<Status>,
    pub priority: Option<Priority>,
    pub project: Option<String>,
    pub conversation: Option<String>,
}

impl NewTask {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            ..Self::default()
        }
    }

    /// Materialize a record: assign identity, stamp timestamps, apply
    /// defaults. An empty `project` is normalized to absent, matching the
    /// shard resolver's treatment of empty labels.
    pub fn into_record(self) -> TaskRecord {
        let now = Utc::now();
        TaskRecord {
            id: Uuid::new_v4().to_string(),
            content: self.content,
            status: self.status.unwrap_or_default(),
            priority: self.priority.unwrap_or_default(),
            project: self.project.filter(|project| !project.is_empty()),
            conversation: self.conversation,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Partial update for an existing task
///
/// Only fields explicitly supplied by the caller participate in the merge;
/// `None` leaves the existing value untouched. A present-but-empty string
/// does overwrite. `id` and `createdAt` are never mutable.
#[derive(Debug, Clone, Default)]
pub struct TaskUpdate {
    pub content: Option<String>,
    pub status: Option<Status>,
    pub priority: Option<Priority>,
    pub project: Option<String>,
    pub conversation: Option<String>,
}

impl TaskUpdate {
    /// Merge the supplied fields into `record` and refresh `updatedAt`
    pub fn apply_to(self, record: &mut TaskRecord) {
        if let Some(content) = self.content {
            record.content = content;
        }
        if let Some(status) = self.status {
            record.status = status;
        }
        if let Some(priority) = self.priority {
            record.priority = priority;
        }
        if let Some(project) = self.project {
            // Changing project does NOT move the record between shards;
            // shard membership is fixed at creation.
            record.project = Some(project);
        }
        if let Some(conversation) = self.conversation {
            record.conversation = Some(conversation);
        }
        record.updated_at = Utc::now();
    }
}

/// Conjunctive filter criteria; absent criteria impose no constraint
#[derive(Debug, Clone, Default)]
pub struct TaskFilter {
    pub status: Option<Status>,
    pub priority: Option<Priority>,
    pub project: Option<String>,
    pub conversation: Option<String>,
    /// Case-insensitive substring match within `content`
    pub keyword: Option<String>,
}

impl TaskFilter {
    pub fn matches(&self, record: &TaskRecord) -> bool {
        if let Some(status) = self.status {
            if record.status != status {
                return false;
            }
        }
        if let Some(priority) = self.priority {
            if record.priority != priority {
                return false;
            }
        }
        if let Some(project) = &self.project {
            if record.project.as_deref() != Some(project.as_str()) {
                return false;
            }
        }
        if let Some(conversation) = &self.conversation {
            if record.conversation.as_deref() != Some(conversation.as_str()) {
                return false;
            }
        }
        if let Some(keyword) = &self.keyword {
            let haystack = record.content.to_lowercase();
            if !haystack.contains(&keyword.to_lowercase()) {
                return false;
            }
        }
        true
    }
}

/// Outcome of a delete operation
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum DeleteOutcome {
    /// Hard delete: the record was removed from its shard
    Removed { id: String, deleted: bool },
    /// Soft delete: the record was cancelled in place
    Cancelled(TaskRecord),
}

impl DeleteOutcome {
    pub fn removed(id: impl Into<String>) -> Self {
        DeleteOutcome::Removed {
            id: id.into(),
            deleted: true,
        }
    }
}
