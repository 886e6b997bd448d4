//! Shard resolution
//!
//! Maps a task's project label to the shard it is stored in. Pure functions,
//! no I/O; enumeration of shards that exist on disk lives on
//! [`crate::storage::Storage::shard_ids`].

/// Shard holding records with no project label
pub const DEFAULT_SHARD: &str = "default";

/// Substitute for characters that are not safe in a file name
const SHARD_SEPARATOR: char = '-';

/// Resolve the shard id for an optional project label.
///
/// Absent or empty projects map to [`DEFAULT_SHARD`]. Otherwise every
/// character outside `[A-Za-z0-9]` is replaced with `-` so the shard id is a
/// safe file name without escaping. Two projects that sanitize to the same
/// string share a shard; this is an accepted collision, not an error.
pub fn shard_for(project: Option<&str>) -> String {
    match project {
        Some(project) if !project.is_empty() => sanitize(project),
        _ => DEFAULT_SHARD.to_string(),
    }
}

fn sanitize(label: &str) -> String {
    label
        .chars()
        .map(|ch| {
            if ch.is_ascii_alphanumeric() {
                ch
            } else {
                SHARD_SEPARATOR
            }
        })
        .collect()
}
