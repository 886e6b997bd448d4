//! `taskstore update` - apply a partial update to a task

use crate::error::Result;
use crate::output::{emit_success, HumanOutput, OutputOptions};
use crate::store::TaskStore;
use crate::task::TaskUpdate;

pub struct UpdateOptions {
    pub id: String,
    pub content: Option<String>,
    pub status: Option<String>,
    pub priority: Option<String>,
    pub project: Option<String>,
    pub conversation: Option<String>,
}

pub fn run(store: &TaskStore, opts: UpdateOptions, output: OutputOptions) -> Result<()> {
    let status = opts.status.as_deref().map(str::parse).transpose()?;
    let priority = opts.priority.as_deref().map(str::parse).transpose()?;

    let record = store.update(
        &opts.id,
        TaskUpdate {
            content: opts.content,
            status,
            priority,
            project: opts.project,
            conversation: opts.conversation,
        },
    )?;

    let mut human = HumanOutput::new(format!("Updated task {}", record.id));
    human.push_summary("status", record.status.to_string());
    human.push_summary("priority", record.priority.to_string());
    human.push_summary("updated", record.updated_at.to_rfc3339());

    emit_success(output, "update", &record, Some(&human))
}
