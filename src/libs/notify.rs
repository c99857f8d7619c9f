//! Notification trigger derivation and scheduling.
//!
//! The scheduler maps a task snapshot plus the global
//! [`NotificationSettings`](crate::libs::config::NotificationSettings)
//! into a set of trigger descriptors, and applies them to an injected
//! [`TriggerRegistry`]. Identifiers are deterministic per `(task, kind)`,
//! so rescheduling always cancels the previous trigger first and can
//! never stack duplicates.
//!
//! Delivery is out of scope: the registry is the boundary behind which an
//! OS notification center (or a test double) lives. Registry failures are
//! logged and never propagated to store callers.

use crate::libs::config::NotificationSettings;
use crate::libs::task::Task;
use chrono::{DateTime, Datelike, Duration, Local, NaiveTime};
use std::collections::HashMap;
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum SchedulingError {
    #[error("trigger registry rejected '{identifier}': {reason}")]
    Rejected { identifier: String, reason: String },
}

/// Action category of a trigger, mirrored in the descriptor payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriggerKind {
    /// Reminder derived from the task's due date minus the lead time.
    DueReminder,
    /// Reminder at an explicitly chosen notification time.
    Custom,
    DailySummary,
    WeeklyReview,
    FocusSession,
}

impl TriggerKind {
    /// Kinds whose identifiers are derived from a task id.
    pub const TASK_KINDS: [TriggerKind; 3] =
        [TriggerKind::DueReminder, TriggerKind::Custom, TriggerKind::FocusSession];

    pub fn category(&self) -> &'static str {
        match self {
            TriggerKind::DueReminder | TriggerKind::Custom => "TASK_REMINDER",
            TriggerKind::DailySummary => "DAILY_REVIEW",
            TriggerKind::WeeklyReview => "WEEKLY_REVIEW",
            TriggerKind::FocusSession => "FOCUS_SESSION",
        }
    }

    /// Deterministic identifier for this kind. Task-derived kinds embed
    /// the task id; the summary/review kinds use fixed identifiers so a
    /// reschedule always replaces the previous trigger.
    pub fn identifier(&self, task_id: Uuid) -> String {
        match self {
            TriggerKind::DueReminder => format!("task_{}", task_id),
            TriggerKind::Custom => format!("custom_task_{}", task_id),
            TriggerKind::FocusSession => format!("focus_session_{}", task_id),
            TriggerKind::DailySummary => DAILY_REVIEW_ID.to_string(),
            TriggerKind::WeeklyReview => WEEKLY_REVIEW_ID.to_string(),
        }
    }
}

/// Fixed identifiers for the settings-driven triggers.
pub const DAILY_REVIEW_ID: &str = "daily_review";
pub const WEEKLY_REVIEW_ID: &str = "weekly_review";

/// A scheduled-notification record, abstracted from any OS framework.
#[derive(Debug, Clone, PartialEq)]
pub struct TriggerDescriptor {
    pub identifier: String,
    pub fire_at: DateTime<Local>,
    pub title: String,
    pub body: String,
    pub kind: TriggerKind,
    pub repeats: bool,
}

/// Boundary to the concrete notification backend.
pub trait TriggerRegistry {
    fn schedule(&mut self, trigger: TriggerDescriptor) -> Result<(), SchedulingError>;
    fn cancel(&mut self, identifier: &str);
    fn pending(&self) -> Vec<TriggerDescriptor>;
}

/// In-memory registry used by the CLI and by tests. Scheduling a trigger
/// with an identifier that is already pending replaces it.
#[derive(Debug, Default)]
pub struct PendingTriggers {
    triggers: HashMap<String, TriggerDescriptor>,
}

impl PendingTriggers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn identifiers(&self) -> Vec<String> {
        let mut ids: Vec<String> = self.triggers.keys().cloned().collect();
        ids.sort();
        ids
    }
}

impl TriggerRegistry for PendingTriggers {
    fn schedule(&mut self, trigger: TriggerDescriptor) -> Result<(), SchedulingError> {
        self.triggers.insert(trigger.identifier.clone(), trigger);
        Ok(())
    }

    fn cancel(&mut self, identifier: &str) {
        self.triggers.remove(identifier);
    }

    fn pending(&self) -> Vec<TriggerDescriptor> {
        let mut all: Vec<TriggerDescriptor> = self.triggers.values().cloned().collect();
        all.sort_by(|a, b| a.fire_at.cmp(&b.fire_at).then_with(|| a.identifier.cmp(&b.identifier)));
        all
    }
}

/// Derives and applies triggers for tasks and the settings-driven
/// summary/review notifications.
pub struct Scheduler {
    pub settings: NotificationSettings,
    registry: Box<dyn TriggerRegistry>,
}

impl Scheduler {
    pub fn new(settings: NotificationSettings, registry: Box<dyn TriggerRegistry>) -> Self {
        Self { settings, registry }
    }

    pub fn with_defaults() -> Self {
        Self::new(NotificationSettings::default(), Box::new(PendingTriggers::new()))
    }

    pub fn registry(&self) -> &dyn TriggerRegistry {
        self.registry.as_ref()
    }

    /// Pure derivation: the set of triggers that should exist for `task`
    /// as of `now`. Past fire times produce no trigger.
    pub fn triggers_for(
        task: &Task,
        settings: &NotificationSettings,
        now: DateTime<Local>,
    ) -> Vec<TriggerDescriptor> {
        let mut triggers = Vec::new();
        if !task.notification_enabled {
            return triggers;
        }

        if settings.task_reminders_enabled {
            if let Some(due) = task.due {
                let fire_at = apply_quiet_hours(
                    due - Duration::minutes(settings.reminder_lead_minutes),
                    settings,
                );
                if fire_at > now {
                    triggers.push(TriggerDescriptor {
                        identifier: TriggerKind::DueReminder.identifier(task.id),
                        fire_at,
                        title: "Task due soon".to_string(),
                        body: task.title.clone(),
                        kind: TriggerKind::DueReminder,
                        repeats: false,
                    });
                }
            }
        }

        if let Some(time) = task.notification_time {
            let fire_at = apply_quiet_hours(time, settings);
            if fire_at > now {
                triggers.push(TriggerDescriptor {
                    identifier: TriggerKind::Custom.identifier(task.id),
                    fire_at,
                    title: "Task reminder".to_string(),
                    body: task.title.clone(),
                    kind: TriggerKind::Custom,
                    repeats: false,
                });
            }
        }

        triggers
    }

    /// Cancels every trigger derived from the task id, then schedules the
    /// currently derived set. Registry failures are logged only.
    pub fn schedule_for(&mut self, task: &Task, now: DateTime<Local>) {
        self.cancel_all(task.id);
        for trigger in Self::triggers_for(task, &self.settings, now) {
            let identifier = trigger.identifier.clone();
            if let Err(err) = self.registry.schedule(trigger) {
                tracing::warn!(identifier = %identifier, "notification scheduling failed: {err}");
            }
        }
    }

    /// Removes every pending trigger whose identifier derives from the
    /// given task id, regardless of kind.
    pub fn cancel_all(&mut self, task_id: Uuid) {
        for kind in TriggerKind::TASK_KINDS {
            self.registry.cancel(&kind.identifier(task_id));
        }
    }

    /// Replaces the settings-driven daily summary and weekly review
    /// triggers according to the current settings.
    pub fn sync_settings_triggers(&mut self, now: DateTime<Local>) {
        self.registry.cancel(DAILY_REVIEW_ID);
        self.registry.cancel(WEEKLY_REVIEW_ID);

        if self.settings.daily_summary_enabled {
            let trigger = TriggerDescriptor {
                identifier: DAILY_REVIEW_ID.to_string(),
                fire_at: next_time(self.settings.daily_summary_time, now),
                title: "Daily review".to_string(),
                body: "Look back at today's tasks and plan tomorrow".to_string(),
                kind: TriggerKind::DailySummary,
                repeats: true,
            };
            if let Err(err) = self.registry.schedule(trigger) {
                tracing::warn!("daily summary scheduling failed: {err}");
            }
        }

        if self.settings.weekly_review_enabled {
            let trigger = TriggerDescriptor {
                identifier: WEEKLY_REVIEW_ID.to_string(),
                fire_at: next_weekday_time(
                    self.settings.weekly_review_day,
                    self.settings.weekly_review_time,
                    now,
                ),
                title: "Weekly review".to_string(),
                body: "Look back at this week's tasks and plan the next".to_string(),
                kind: TriggerKind::WeeklyReview,
                repeats: true,
            };
            if let Err(err) = self.registry.schedule(trigger) {
                tracing::warn!("weekly review scheduling failed: {err}");
            }
        }
    }

    /// One-shot focus-session completion notice, fired `minutes` from now.
    pub fn focus_session(&mut self, task: &Task, minutes: i64, now: DateTime<Local>) {
        if !self.settings.focus_session_enabled {
            return;
        }
        let trigger = TriggerDescriptor {
            identifier: TriggerKind::FocusSession.identifier(task.id),
            fire_at: now + Duration::minutes(minutes),
            title: "Focus session finished".to_string(),
            body: format!("Focus time for '{}' is over", task.title),
            kind: TriggerKind::FocusSession,
            repeats: false,
        };
        if let Err(err) = self.registry.schedule(trigger) {
            tracing::warn!("focus session scheduling failed: {err}");
        }
    }
}

/// Defers a fire time that falls inside the quiet-hours window to the end
/// of the window. The window may span midnight.
fn apply_quiet_hours(fire_at: DateTime<Local>, settings: &NotificationSettings) -> DateTime<Local> {
    if !settings.quiet_hours_enabled {
        return fire_at;
    }
    let start = settings.quiet_hours_start;
    let end = settings.quiet_hours_end;
    let time = fire_at.time();

    let in_window = if start <= end {
        time >= start && time < end
    } else {
        time >= start || time < end
    };
    if !in_window {
        return fire_at;
    }

    let same_day_end = fire_at.date_naive().and_time(end);
    let adjusted = if start > end && time >= start {
        same_day_end + Duration::days(1)
    } else {
        same_day_end
    };
    adjusted.and_local_timezone(Local).single().unwrap_or(fire_at)
}

/// Next local occurrence of `time`, strictly after `now`.
fn next_time(time: NaiveTime, now: DateTime<Local>) -> DateTime<Local> {
    let today = now.date_naive().and_time(time);
    let candidate = today.and_local_timezone(Local).single().unwrap_or(now);
    if candidate > now {
        candidate
    } else {
        candidate + Duration::days(1)
    }
}

/// Next occurrence of `time` on the given weekday (0 = Sunday), strictly
/// after `now`.
fn next_weekday_time(day: u8, time: NaiveTime, now: DateTime<Local>) -> DateTime<Local> {
    let current = now.weekday().num_days_from_sunday() as i64;
    let target = i64::from(day.min(6));
    let mut ahead = (target - current).rem_euclid(7);
    let candidate = (now.date_naive() + Duration::days(ahead)).and_time(time);
    let mut candidate = candidate.and_local_timezone(Local).single().unwrap_or(now);
    if candidate <= now {
        ahead += 7;
        let bumped = (now.date_naive() + Duration::days(ahead)).and_time(time);
        candidate = bumped.and_local_timezone(Local).single().unwrap_or(candidate);
    }
    candidate
}
