//! Recurrence expansion.
//!
//! A recurrence rule on a task is descriptive metadata; completing a task
//! never creates follow-ups by itself. This module is the explicit
//! expander: it reads a completed recurring task, computes the next due
//! date, and creates the next instance through the store's normal `add`
//! path with a fresh id.

use crate::libs::store::{StoreError, TaskStore};
use crate::libs::task::{RecurrenceRule, RepeatUnit, Task, TaskStatus};
use chrono::{DateTime, Duration, Local, Months};
use uuid::Uuid;

/// Computes the next occurrence strictly after `previous`, or `None` when
/// the rule is disabled or the next occurrence falls past the end date.
pub fn next_due(rule: &RecurrenceRule, previous: DateTime<Local>) -> Option<DateTime<Local>> {
    if !rule.enabled {
        return None;
    }
    let interval = rule.interval.max(1);
    let next = match rule.unit {
        RepeatUnit::Daily => previous + Duration::days(i64::from(interval)),
        RepeatUnit::Weekly => previous + Duration::weeks(i64::from(interval)),
        RepeatUnit::Monthly => previous.checked_add_months(Months::new(interval))?,
        RepeatUnit::Yearly => previous.checked_add_months(Months::new(interval * 12))?,
    };
    if let Some(end) = rule.end_date {
        if next.date_naive() > end {
            return None;
        }
    }
    Some(next)
}

/// Creates the next instance of a completed recurring task. Returns the
/// id of the created task, or `None` when the recurrence has run out.
pub fn expand(store: &mut TaskStore, id: Uuid, now: DateTime<Local>) -> Result<Option<Uuid>, StoreError> {
    let task = store.get(id).ok_or(StoreError::TaskNotFound(id))?.clone();
    if task.status != TaskStatus::Done {
        return Err(StoreError::Transition {
            op: "expand recurrence",
            status: task.status.as_str(),
        });
    }
    let rule = match &task.recurrence {
        Some(rule) if rule.enabled => rule.clone(),
        _ => return Ok(None),
    };

    let previous = task.due.unwrap_or(now);
    let next = match next_due(&rule, previous) {
        Some(next) => next,
        None => return Ok(None),
    };

    let mut instance = Task::new(&task.title);
    instance.notes = task.notes.clone();
    instance.due = Some(next);
    instance.priority = task.priority;
    instance.context = task.context;
    instance.category_id = task.category_id;
    instance.tags = task.tags.clone();
    instance.notification_enabled = task.notification_enabled;
    instance.recurrence = Some(rule);
    let new_id = store.add(instance)?;
    Ok(Some(new_id))
}
