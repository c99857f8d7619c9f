//! Task entity model.
//!
//! Defines the core `Task` value type together with its lifecycle status,
//! priority, context and recurrence descriptor. These are pure data types;
//! all mutation rules live in [`crate::libs::store`].

use chrono::{DateTime, Local, NaiveDate};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Lifecycle state of a task. A task is in exactly one state at any time;
/// the store derives its bucket views from this field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum TaskStatus {
    Inbox,
    Today,
    Done,
}

impl TaskStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::Inbox => "inbox",
            TaskStatus::Today => "today",
            TaskStatus::Done => "done",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "inbox" => Some(TaskStatus::Inbox),
            "today" => Some(TaskStatus::Today),
            "done" => Some(TaskStatus::Done),
            _ => None,
        }
    }
}

/// Task priority with a total order: High > Normal > Low.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum TaskPriority {
    Low,
    Normal,
    High,
}

impl TaskPriority {
    /// Numeric rank used by the priority sort key (High=3, Normal=2, Low=1).
    pub fn rank(&self) -> u8 {
        match self {
            TaskPriority::Low => 1,
            TaskPriority::Normal => 2,
            TaskPriority::High => 3,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TaskPriority::Low => "low",
            TaskPriority::Normal => "normal",
            TaskPriority::High => "high",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "low" => Some(TaskPriority::Low),
            "normal" => Some(TaskPriority::Normal),
            "high" => Some(TaskPriority::High),
            _ => None,
        }
    }
}

/// Where a task is actionable (GTD context).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum TaskContext {
    None,
    Home,
    Work,
    Call,
    Errand,
}

impl TaskContext {
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskContext::None => "none",
            TaskContext::Home => "home",
            TaskContext::Work => "work",
            TaskContext::Call => "call",
            TaskContext::Errand => "errand",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "none" => Some(TaskContext::None),
            "home" => Some(TaskContext::Home),
            "work" => Some(TaskContext::Work),
            "call" => Some(TaskContext::Call),
            "errand" => Some(TaskContext::Errand),
            _ => None,
        }
    }
}

/// Calendar unit for recurrence rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum RepeatUnit {
    Daily,
    Weekly,
    Monthly,
    Yearly,
}

impl RepeatUnit {
    pub fn as_str(&self) -> &'static str {
        match self {
            RepeatUnit::Daily => "daily",
            RepeatUnit::Weekly => "weekly",
            RepeatUnit::Monthly => "monthly",
            RepeatUnit::Yearly => "yearly",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "daily" => Some(RepeatUnit::Daily),
            "weekly" => Some(RepeatUnit::Weekly),
            "monthly" => Some(RepeatUnit::Monthly),
            "yearly" => Some(RepeatUnit::Yearly),
            _ => None,
        }
    }
}

/// Recurrence descriptor carried by a task. The store validates
/// `interval >= 1`; expansion into future task instances is handled by
/// [`crate::libs::recurrence`], never by `complete` itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecurrenceRule {
    pub enabled: bool,
    pub unit: RepeatUnit,
    pub interval: u32,
    pub end_date: Option<NaiveDate>,
}

impl RecurrenceRule {
    pub fn new(unit: RepeatUnit, interval: u32) -> Self {
        Self {
            enabled: true,
            unit,
            interval,
            end_date: None,
        }
    }
}

/// A single task. The `id` is minted once at construction and never
/// changes; `updated_at` is refreshed by every store mutation that
/// touches the task.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: Uuid,
    pub title: String,
    pub notes: Option<String>,
    pub due: Option<DateTime<Local>>,
    pub created_at: DateTime<Local>,
    pub updated_at: DateTime<Local>,
    pub status: TaskStatus,
    pub priority: TaskPriority,
    pub context: TaskContext,
    /// Weak reference into the category collection; cleared when the
    /// category is deleted.
    pub category_id: Option<Uuid>,
    /// Tag strings referencing the store-owned registry, each with a
    /// canonical `#` prefix.
    pub tags: Vec<String>,
    /// Manual position within the current status bucket.
    pub sort_order: usize,
    pub notification_enabled: bool,
    /// Explicit reminder time, independent of the due-date reminder.
    pub notification_time: Option<DateTime<Local>>,
    pub recurrence: Option<RecurrenceRule>,
    /// Status the task had before it was completed; consumed by restore.
    pub original_status: Option<TaskStatus>,
}

impl Task {
    pub fn new(title: &str) -> Self {
        let now = Local::now();
        Self {
            id: Uuid::new_v4(),
            title: title.to_string(),
            notes: None,
            due: None,
            created_at: now,
            updated_at: now,
            status: TaskStatus::Inbox,
            priority: TaskPriority::Normal,
            context: TaskContext::None,
            category_id: None,
            tags: Vec::new(),
            sort_order: 0,
            notification_enabled: true,
            notification_time: None,
            recurrence: None,
            original_status: None,
        }
    }

    pub fn with_priority(mut self, priority: TaskPriority) -> Self {
        self.priority = priority;
        self
    }

    pub fn with_due(mut self, due: DateTime<Local>) -> Self {
        self.due = Some(due);
        self
    }

    pub fn with_notes(mut self, notes: &str) -> Self {
        self.notes = Some(notes.to_string());
        self
    }

    pub fn with_tags(mut self, tags: Vec<String>) -> Self {
        self.tags = tags;
        self
    }

    pub fn with_category(mut self, category_id: Uuid) -> Self {
        self.category_id = Some(category_id);
        self
    }

    /// True when the task carries an active recurrence rule.
    pub fn is_recurring(&self) -> bool {
        self.recurrence.as_ref().map(|r| r.enabled).unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn priority_rank_total_order() {
        assert!(TaskPriority::High.rank() > TaskPriority::Normal.rank());
        assert!(TaskPriority::Normal.rank() > TaskPriority::Low.rank());
    }

    #[test]
    fn status_round_trips_through_strings() {
        for status in [TaskStatus::Inbox, TaskStatus::Today, TaskStatus::Done] {
            assert_eq!(TaskStatus::parse(status.as_str()), Some(status));
        }
        assert_eq!(TaskStatus::parse("deleted"), None);
    }

    #[test]
    fn new_task_starts_in_inbox() {
        let task = Task::new("Write report");
        assert_eq!(task.status, TaskStatus::Inbox);
        assert_eq!(task.priority, TaskPriority::Normal);
        assert!(task.original_status.is_none());
        assert!(task.notification_enabled);
    }
}
