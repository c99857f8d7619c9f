//! Completes a task from Inbox or Today.
//!
//! Recurring tasks spawn their next instance only when `--expand` is
//! passed; completion itself never creates follow-ups.

use crate::libs::messages::Message;
use crate::libs::recurrence;
use crate::libs::store::TaskStore;
use crate::{msg_info, msg_success};
use anyhow::Result;
use chrono::Local;
use clap::Args;

#[derive(Debug, Args)]
pub struct CompleteArgs {
    /// Task id or unique id prefix
    #[arg(required = true)]
    task: String,

    /// Create the next instance of a recurring task
    #[arg(short, long)]
    expand: bool,
}

pub fn cmd(args: CompleteArgs) -> Result<()> {
    let mut store = TaskStore::load()?;
    let task = store.find_by_prefix(&args.task)?;
    let id = task.id;
    let title = task.title.clone();

    store.complete(id)?;

    if args.expand {
        match recurrence::expand(&mut store, id, Local::now())? {
            Some(next_id) => {
                let next = store.get(next_id).cloned();
                if let Some(next) = next {
                    let due = next
                        .due
                        .map(|d| d.format("%Y-%m-%d %H:%M").to_string())
                        .unwrap_or_else(|| "-".to_string());
                    msg_info!(Message::NextOccurrenceCreated(next.title, due));
                }
            }
            None => msg_info!(Message::RecurrenceFinished(title.clone())),
        }
    }

    store.save()?;
    msg_success!(Message::TaskCompleted(title));
    Ok(())
}
