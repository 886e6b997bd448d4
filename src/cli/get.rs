//! `taskstore get` - fetch a task by id

use crate::error::Result;
use crate::output::{emit_success, HumanOutput, OutputOptions};
use crate::store::TaskStore;

pub fn run(store: &TaskStore, id: &str, output: OutputOptions) -> Result<()> {
    let record = store.get(id)?;

    let mut human = HumanOutput::new(format!("Task {}", record.id));
    human.push_summary("content", &record.content);
    human.push_summary("status", record.status.to_string());
    human.push_summary("priority", record.priority.to_string());
    if let Some(project) = &record.project {
        human.push_summary("project", project);
    }
    if let Some(conversation) = &record.conversation {
        human.push_summary("conversation", conversation);
    }
    human.push_summary("created", record.created_at.to_rfc3339());
    human.push_summary("updated", record.updated_at.to_rfc3339());

    emit_success(output, "get", &record, Some(&human))
}
