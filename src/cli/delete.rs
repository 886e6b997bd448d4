//! `taskstore delete` - soft-cancel or remove a task

use crate::error::Result;
use crate::output::{emit_success, HumanOutput, OutputOptions};
use crate::store::TaskStore;
use crate::task::DeleteOutcome;

pub fn run(store: &TaskStore, id: &str, hard: bool, output: OutputOptions) -> Result<()> {
    let outcome = store.delete(id, hard)?;

    let human = match &outcome {
        DeleteOutcome::Removed { id, .. } => HumanOutput::new(format!("Deleted task {id}")),
        DeleteOutcome::Cancelled(record) => {
            let mut human = HumanOutput::new(format!("Cancelled task {}", record.id));
            human.push_summary("status", record.status.to_string());
            human
        }
    };

    emit_success(output, "delete", &outcome, Some(&human))
}
