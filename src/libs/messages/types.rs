#[derive(Debug, Clone)]
pub enum Message {
    // === TASK MESSAGES ===
    TaskCreated(String),
    TaskUpdated(String),
    TaskCompleted(String),
    TaskRestored(String, String), // title, target bucket
    TaskDeleted(String),
    TaskMovedToToday(String),
    TaskNotFound(String),
    TasksHeader(String), // bucket or view label
    NoTasksFound,
    ConfirmDeleteTask(String),
    TasksReordered(String), // bucket
    NextOccurrenceCreated(String, String), // title, due
    RecurrenceFinished(String),

    // === CATEGORY MESSAGES ===
    CategoryCreated(String),
    CategoryUpdated(String),
    CategoryDeleted(String, usize), // name, tasks detached
    CategoryNotFound(String),
    CategoryListHeader,
    NoCategoriesFound,
    ConfirmDeleteCategory(String),

    // === TAG MESSAGES ===
    TagAdded(String),
    TagRenamed(String, String),
    TagRemoved(String, usize), // name, tasks touched
    TagNotFound(String),
    TagAlreadyExists(String),
    TagListHeader,
    NoTagsFound,
    ConfirmRemoveTag(String),

    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigFileNotFound,
    ConfigParseError,
    ConfigSaveError,
    PromptReminderLead,
    PromptQuietHoursEnabled,
    PromptQuietHoursStart,
    PromptQuietHoursEnd,
    PromptDailySummaryEnabled,
    PromptDailySummaryTime,
    PromptWeeklyReviewEnabled,
    PromptWeeklyReviewDay,
    PromptWeeklyReviewTime,

    // === NOTIFICATION MESSAGES ===
    TriggersHeader,
    NoPendingTriggers,
    NotificationScheduleFailed(String),

    // === EXPORT / IMPORT MESSAGES ===
    ExportCompleted(String),                 // path
    NothingToExport,
    ImportCompleted(usize, usize, usize),    // tasks, categories, skipped records
    ImportFailed(String),
    ImportSkippedRecords(usize),
    ConfirmImportReplace,

    // === STORE MESSAGES ===
    StoreSaved(String),        // path
    StoreLoadFailed(String),

    // === GENERIC MESSAGES ===
    OperationCancelled,
    InvalidDateFormat(String),
    InvalidTimeFormat(String),
}
