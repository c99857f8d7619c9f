//! Restores a completed task to the bucket it was completed from.

use crate::libs::messages::Message;
use crate::libs::store::TaskStore;
use crate::msg_success;
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct RestoreArgs {
    /// Task id or unique id prefix
    #[arg(required = true)]
    task: String,
}

pub fn cmd(args: RestoreArgs) -> Result<()> {
    let mut store = TaskStore::load()?;
    let task = store.find_by_prefix(&args.task)?;
    let id = task.id;
    let title = task.title.clone();

    let target = store.restore(id)?;
    store.save()?;

    msg_success!(Message::TaskRestored(title, target.as_str().to_string()));
    Ok(())
}
