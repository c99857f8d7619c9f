//! Moves an Inbox task to the Today bucket.

use crate::libs::messages::Message;
use crate::libs::store::TaskStore;
use crate::msg_success;
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct TodayArgs {
    /// Task id or unique id prefix
    #[arg(required = true)]
    task: String,
}

pub fn cmd(args: TodayArgs) -> Result<()> {
    let mut store = TaskStore::load()?;
    let task = store.find_by_prefix(&args.task)?;
    let id = task.id;
    let title = task.title.clone();

    store.move_to_today(id)?;
    store.save()?;

    msg_success!(Message::TaskMovedToToday(title));
    Ok(())
}
