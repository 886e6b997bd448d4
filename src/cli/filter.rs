//! `taskstore filter` - conjunctive filtered query

use crate::error::Result;
use crate::output::{emit_success, OutputOptions};
use crate::store::TaskStore;
use crate::task::TaskFilter;

use super::list::summarize;

pub struct FilterOptions {
    pub status: Option<String>,
    pub priority: Option<String>,
    pub project: Option<String>,
    pub conversation: Option<String>,
    pub keyword: Option<String>,
}

pub fn run(store: &TaskStore, opts: FilterOptions, output: OutputOptions) -> Result<()> {
    let status = opts.status.as_deref().map(str::parse).transpose()?;
    let priority = opts.priority.as_deref().map(str::parse).transpose()?;

    let tasks = store.filter(&TaskFilter {
        status,
        priority,
        project: opts.project,
        conversation: opts.conversation,
        keyword: opts.keyword,
    })?;

    emit_success(output, "filter", &tasks, Some(&summarize("Matches", &tasks)))
}
