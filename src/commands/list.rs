//! Task listing command.
//!
//! Renders a filtered, sorted view of the store, either as one table or
//! grouped by category. Defaults for sort key, direction and completed
//! visibility come from the display section of the configuration.

use crate::libs::config::Config;
use crate::libs::messages::Message;
use crate::libs::query::{self, SortDirection, SortKey};
use crate::libs::store::{canonical_tag, TaskStore};
use crate::libs::task::{Task, TaskStatus};
use crate::libs::view::View;
use crate::{msg_info, msg_print};
use anyhow::Result;
use clap::Args;
use std::collections::HashSet;

#[derive(Debug, Args)]
pub struct ListArgs {
    /// Bucket to list; all three when omitted
    #[arg(short, long, value_enum)]
    status: Option<TaskStatus>,

    /// Sort key
    #[arg(short = 'k', long, value_enum)]
    sort: Option<SortKey>,

    /// Sort direction (priority, due-date, category and title honor it)
    #[arg(short, long, value_enum)]
    direction: Option<SortDirection>,

    /// Keep only tasks carrying one of these tags (repeatable)
    #[arg(short, long = "tag")]
    tags: Vec<String>,

    /// Hide completed tasks
    #[arg(long)]
    hide_completed: bool,

    /// Group the view by category
    #[arg(short, long)]
    grouped: bool,
}

pub fn cmd(args: ListArgs) -> Result<()> {
    let store = TaskStore::load()?;
    let display = Config::read()?.display_config();

    let snapshot: Vec<Task> = match args.status {
        Some(status) => store.bucket_with_done(status).into_iter().cloned().collect(),
        None => store.tasks().to_vec(),
    };

    let key = args.sort.unwrap_or(display.default_sort);
    let direction = args
        .direction
        .or(display.default_direction)
        .unwrap_or_else(|| SortDirection::default_for(key));
    let hide_completed = args.hide_completed || display.hide_completed;

    let mut tag_filter = HashSet::new();
    for tag in &args.tags {
        tag_filter.insert(canonical_tag(tag)?);
    }

    let tasks = query::view(
        &snapshot,
        store.categories(),
        key,
        direction,
        &tag_filter,
        hide_completed,
    );
    if tasks.is_empty() {
        msg_info!(Message::NoTasksFound);
        return Ok(());
    }

    let label = match args.status {
        Some(status) => status.as_str().to_string(),
        None => "all tasks".to_string(),
    };
    msg_print!(Message::TasksHeader(label), true);

    if args.grouped {
        let groups = query::grouped(&tasks, store.categories());
        View::grouped(&groups, store.categories())?;
    } else {
        View::tasks(&tasks, store.categories())?;
    }
    Ok(())
}
