//! `taskstore create` - create a task

use crate::error::Result;
use crate::output::{emit_success, HumanOutput, OutputOptions};
use crate::store::TaskStore;
use crate::task::NewTask;

pub struct CreateOptions {
    pub content: String,
    pub status: Option<String>,
    pub priority: Option<String>,
    pub project: Option<String>,
    pub conversation: Option<String>,
}

pub fn run(store: &TaskStore, opts: CreateOptions, output: OutputOptions) -> Result<()> {
    let status = opts.status.as_deref().map(str::parse).transpose()?;
    let priority = opts.priority.as_deref().map(str::parse).transpose()?;

    let record = store.create(NewTask {
        content: opts.content,
        status,
        priority,
        project: opts.project,
        conversation: opts.conversation,
    })?;

    let mut human = HumanOutput::new(format!("Created task {}", record.id));
    human.push_summary("content", &record.content);
    human.push_summary("status", record.status.to_string());
    if let Some(project) = &record.project {
        human.push_summary("project", project);
    }

    emit_success(output, "create", &record, Some(&human))
}
