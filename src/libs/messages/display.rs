//! Display implementation for taskdeck application messages.
//!
//! Single source of truth for all user-facing text. Every `Message`
//! variant is rendered here, so wording stays consistent across commands
//! and can be adjusted in one place.

use super::types::Message;
use std::fmt;

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            // === TASK MESSAGES ===
            Message::TaskCreated(title) => format!("Task '{}' added to Inbox", title),
            Message::TaskUpdated(title) => format!("Task '{}' updated", title),
            Message::TaskCompleted(title) => format!("Task '{}' completed", title),
            Message::TaskRestored(title, bucket) => {
                format!("Task '{}' restored to {}", title, bucket)
            }
            Message::TaskDeleted(title) => format!("Task '{}' deleted", title),
            Message::TaskMovedToToday(title) => format!("Task '{}' moved to Today", title),
            Message::TaskNotFound(id) => format!("No task matches '{}'", id),
            Message::TasksHeader(label) => format!("📋 {}", label),
            Message::NoTasksFound => "No tasks found".to_string(),
            Message::ConfirmDeleteTask(title) => {
                format!("Delete task '{}'? This cannot be undone", title)
            }
            Message::TasksReordered(bucket) => format!("{} tasks reordered", bucket),
            Message::NextOccurrenceCreated(title, due) => {
                format!("Next occurrence of '{}' scheduled for {}", title, due)
            }
            Message::RecurrenceFinished(title) => {
                format!("Recurrence of '{}' has reached its end date", title)
            }

            // === CATEGORY MESSAGES ===
            Message::CategoryCreated(name) => format!("Category '{}' created", name),
            Message::CategoryUpdated(name) => format!("Category '{}' updated", name),
            Message::CategoryDeleted(name, count) => {
                format!("Category '{}' deleted, {} task(s) detached", name, count)
            }
            Message::CategoryNotFound(id) => format!("No category matches '{}'", id),
            Message::CategoryListHeader => "📁 Categories".to_string(),
            Message::NoCategoriesFound => "No categories found".to_string(),
            Message::ConfirmDeleteCategory(name) => {
                format!("Delete category '{}'? Tasks keep their other fields", name)
            }

            // === TAG MESSAGES ===
            Message::TagAdded(name) => format!("Tag '{}' added", name),
            Message::TagRenamed(old, new) => format!("Tag '{}' renamed to '{}'", old, new),
            Message::TagRemoved(name, count) => {
                format!("Tag '{}' removed from {} task(s)", name, count)
            }
            Message::TagNotFound(name) => format!("No tag matches '{}'", name),
            Message::TagAlreadyExists(name) => format!("Tag '{}' already exists", name),
            Message::TagListHeader => "🏷️ Tags".to_string(),
            Message::NoTagsFound => "No tags found".to_string(),
            Message::ConfirmRemoveTag(name) => {
                format!("Remove tag '{}' from every task? This cannot be undone", name)
            }

            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigFileNotFound => "Configuration file not found".to_string(),
            Message::ConfigParseError => "Failed to parse configuration".to_string(),
            Message::ConfigSaveError => "Failed to save configuration".to_string(),
            Message::PromptReminderLead => "Reminder lead time before due (minutes)".to_string(),
            Message::PromptQuietHoursEnabled => "Enable quiet hours".to_string(),
            Message::PromptQuietHoursStart => "Quiet hours start (HH:MM)".to_string(),
            Message::PromptQuietHoursEnd => "Quiet hours end (HH:MM)".to_string(),
            Message::PromptDailySummaryEnabled => "Enable daily summary".to_string(),
            Message::PromptDailySummaryTime => "Daily summary time (HH:MM)".to_string(),
            Message::PromptWeeklyReviewEnabled => "Enable weekly review".to_string(),
            Message::PromptWeeklyReviewDay => "Weekly review day (0=Sunday .. 6=Saturday)".to_string(),
            Message::PromptWeeklyReviewTime => "Weekly review time (HH:MM)".to_string(),

            // === NOTIFICATION MESSAGES ===
            Message::TriggersHeader => "🔔 Pending reminders".to_string(),
            Message::NoPendingTriggers => "No pending reminders".to_string(),
            Message::NotificationScheduleFailed(detail) => {
                format!("Failed to schedule notification: {}", detail)
            }

            // === EXPORT / IMPORT MESSAGES ===
            Message::ExportCompleted(path) => format!("Data exported successfully to: {}", path),
            Message::NothingToExport => "Nothing to export".to_string(),
            Message::ImportCompleted(tasks, categories, skipped) => format!(
                "Imported {} task(s) and {} category(ies), {} record(s) skipped",
                tasks, categories, skipped
            ),
            Message::ImportFailed(detail) => format!("Import failed: {}", detail),
            Message::ImportSkippedRecords(count) => {
                format!("{} record(s) skipped during import", count)
            }
            Message::ConfirmImportReplace => {
                "Importing replaces all current tasks and categories. Continue?".to_string()
            }

            // === STORE MESSAGES ===
            Message::StoreSaved(path) => format!("Store saved to {}", path),
            Message::StoreLoadFailed(detail) => format!("Failed to load store: {}", detail),

            // === GENERIC MESSAGES ===
            Message::OperationCancelled => "Operation cancelled".to_string(),
            Message::InvalidDateFormat(value) => {
                format!("'{}' is not a valid date (expected YYYY-MM-DD or YYYY-MM-DD HH:MM)", value)
            }
            Message::InvalidTimeFormat(value) => {
                format!("'{}' is not a valid time (expected HH:MM)", value)
            }
        };
        write!(f, "{}", text)
    }
}
