//! `taskstore list` - list every task across all shards

use crate::error::Result;
use crate::output::{emit_success, HumanOutput, OutputOptions};
use crate::store::TaskStore;
use crate::task::TaskRecord;

pub fn run(store: &TaskStore, output: OutputOptions) -> Result<()> {
    let tasks = store.list_all()?;
    emit_success(output, "list", &tasks, Some(&summarize("Tasks", &tasks)))
}

/// Shared human rendering for list and filter output
pub fn summarize(header: &str, tasks: &[TaskRecord]) -> HumanOutput {
    let mut human = HumanOutput::new(format!("{header}: {}", tasks.len()));
    for task in tasks {
        human.push_summary(
            format!("{} [{}/{}]", task.id, task.status, task.priority),
            task.content.clone(),
        );
    }
    human
}
