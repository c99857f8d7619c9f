//! Task capture command.
//!
//! Creates a new task in the Inbox bucket, optionally with due date,
//! priority, context, category, tags, reminder time and recurrence.

use crate::libs::formatter::{parse_date_arg, parse_datetime_arg};
use crate::libs::messages::Message;
use crate::libs::store::TaskStore;
use crate::libs::task::{RecurrenceRule, RepeatUnit, Task, TaskContext, TaskPriority};
use crate::{msg_bail_anyhow, msg_success};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct AddArgs {
    /// Task title
    #[arg(required = true)]
    title: String,

    /// Additional notes
    #[arg(short, long)]
    notes: Option<String>,

    /// Due date (YYYY-MM-DD or "YYYY-MM-DD HH:MM")
    #[arg(short, long)]
    due: Option<String>,

    /// Task priority
    #[arg(short, long, value_enum, default_value = "normal")]
    priority: TaskPriority,

    /// GTD context
    #[arg(short, long, value_enum, default_value = "none")]
    context: TaskContext,

    /// Category name or id prefix
    #[arg(short = 'g', long)]
    category: Option<String>,

    /// Tag to attach (repeatable); the leading '#' is optional
    #[arg(short, long = "tag")]
    tags: Vec<String>,

    /// Explicit reminder time, independent of the due date
    #[arg(long)]
    remind_at: Option<String>,

    /// Disable notifications for this task
    #[arg(long)]
    no_notify: bool,

    /// Repeat unit for a recurring task
    #[arg(long, value_enum)]
    repeat: Option<RepeatUnit>,

    /// Repeat interval (used together with --repeat)
    #[arg(long, default_value_t = 1)]
    every: u32,

    /// Last date of the recurrence (YYYY-MM-DD)
    #[arg(long)]
    until: Option<String>,
}

pub async fn cmd(args: AddArgs) -> Result<()> {
    let mut store = TaskStore::load()?;

    let mut task = Task::new(&args.title)
        .with_priority(args.priority)
        .with_tags(args.tags.clone());
    task.context = args.context;
    task.notes = args.notes.clone();
    task.notification_enabled = !args.no_notify;

    if let Some(due) = &args.due {
        task.due = Some(parse_datetime_arg(due)?);
    }
    if let Some(remind_at) = &args.remind_at {
        task.notification_time = Some(parse_datetime_arg(remind_at)?);
    }
    if let Some(name) = &args.category {
        match store.find_category(name) {
            Some(category) => task.category_id = Some(category.id),
            None => msg_bail_anyhow!(Message::CategoryNotFound(name.clone())),
        }
    }
    if let Some(unit) = args.repeat {
        let mut rule = RecurrenceRule::new(unit, args.every);
        if let Some(until) = &args.until {
            rule.end_date = Some(parse_date_arg(until)?);
        }
        task.recurrence = Some(rule);
    }

    store.add(task)?;
    store.save()?;

    msg_success!(Message::TaskCreated(args.title));
    Ok(())
}
