//! Reminder inspection command.
//!
//! Derives the trigger set for every task plus the settings-driven daily
//! summary and weekly review, and renders the result. This is a read-only
//! view: it never touches the store document.

use crate::libs::messages::Message;
use crate::libs::notify::TriggerRegistry;
use crate::libs::store::TaskStore;
use crate::{msg_info, msg_print};
use anyhow::Result;
use chrono::Local;
use clap::Args;

#[derive(Debug, Args)]
pub struct NotifyArgs {
    /// Include the repeating daily summary / weekly review triggers
    #[arg(short, long)]
    all: bool,
}

pub fn cmd(args: NotifyArgs) -> Result<()> {
    let mut store = TaskStore::load()?;
    let now = Local::now();

    let snapshot = store.tasks().to_vec();
    for task in &snapshot {
        store.scheduler_mut().schedule_for(task, now);
    }
    if args.all {
        store.scheduler_mut().sync_settings_triggers(now);
    }

    let pending = store.scheduler().registry().pending();
    if pending.is_empty() {
        msg_info!(Message::NoPendingTriggers);
        return Ok(());
    }

    msg_print!(Message::TriggersHeader, true);
    crate::libs::view::View::triggers(&pending)?;
    Ok(())
}
