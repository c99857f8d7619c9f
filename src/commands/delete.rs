//! Deletes a task permanently, cancelling its pending reminders.

use crate::libs::messages::Message;
use crate::libs::store::TaskStore;
use crate::{msg_info, msg_success};
use anyhow::Result;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Confirm};

#[derive(Debug, Args)]
pub struct DeleteArgs {
    /// Task id or unique id prefix
    #[arg(required = true)]
    task: String,

    /// Skip the confirmation prompt
    #[arg(short, long)]
    yes: bool,
}

pub fn cmd(args: DeleteArgs) -> Result<()> {
    let mut store = TaskStore::load()?;
    let task = store.find_by_prefix(&args.task)?;
    let id = task.id;
    let title = task.title.clone();

    if !args.yes {
        let confirmed = Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::ConfirmDeleteTask(title.clone()).to_string())
            .default(false)
            .interact()?;
        if !confirmed {
            msg_info!(Message::OperationCancelled);
            return Ok(());
        }
    }

    store.delete(id)?;
    store.save()?;

    msg_success!(Message::TaskDeleted(title));
    Ok(())
}
