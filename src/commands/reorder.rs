//! Reorders tasks within one bucket.
//!
//! Positions refer to the bucket's current manual order, 0-based. After
//! the move every task in the bucket gets a contiguous `sort_order`.

use crate::libs::messages::Message;
use crate::libs::store::TaskStore;
use crate::libs::task::TaskStatus;
use crate::msg_success;
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct ReorderArgs {
    /// Bucket to reorder
    #[arg(value_enum)]
    status: TaskStatus,

    /// Source position(s) within the bucket (repeatable)
    #[arg(short, long = "from", required = true)]
    from: Vec<usize>,

    /// Destination position the moved tasks are inserted before
    #[arg(short, long)]
    to: usize,
}

pub fn cmd(args: ReorderArgs) -> Result<()> {
    let mut store = TaskStore::load()?;
    store.reorder(args.status, &args.from, args.to)?;
    store.save()?;

    msg_success!(Message::TasksReordered(args.status.as_str().to_string()));
    Ok(())
}
