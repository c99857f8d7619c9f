//! Portable document codec for store snapshots.
//!
//! The document is the persistence boundary: a single version-tagged JSON
//! object with `tasks[]`, `categories[]`, a string settings map and an
//! open `metadata` map. Field names are stable camelCase, dates are
//! ISO-8601, and unknown per-record extension data rides in
//! `customFields` untouched.
//!
//! Decoding is strict at the document level (malformed JSON fails the
//! whole import) and permissive at the record level: records with
//! unrecognized enum strings are skipped and counted, never fatal.

use crate::libs::category::{Category, CategoryColor, CategoryIcon};
use crate::libs::task::{RecurrenceRule, RepeatUnit, Task, TaskContext, TaskPriority, TaskStatus};
use chrono::{DateTime, Local, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use thiserror::Error;
use uuid::Uuid;

/// Version tag written into every exported document.
pub const DOCUMENT_VERSION: &str = "1.0.0";

#[derive(Debug, Error)]
pub enum ImportError {
    #[error("malformed document: {0}")]
    Malformed(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskDocument {
    pub version: String,
    pub last_modified: DateTime<Utc>,
    pub tasks: Vec<TaskRecord>,
    pub categories: Vec<CategoryRecord>,
    #[serde(default)]
    pub settings: BTreeMap<String, String>,
    #[serde(default)]
    pub metadata: BTreeMap<String, Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskRecord {
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub status: String,
    pub priority: String,
    #[serde(default = "default_context")]
    pub context: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_id: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub sort_order: usize,
    #[serde(default = "default_true")]
    pub notification_enabled: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notification_time: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_status: Option<String>,
    #[serde(default)]
    pub repeat_enabled: bool,
    #[serde(default = "default_repeat_unit")]
    pub repeat_unit: String,
    #[serde(default = "default_repeat_interval")]
    pub repeat_interval: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repeat_end_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub custom_fields: BTreeMap<String, Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryRecord {
    pub id: String,
    pub name: String,
    pub icon: String,
    pub color: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub custom_fields: BTreeMap<String, Value>,
}

fn default_true() -> bool {
    true
}

fn default_context() -> String {
    "none".to_string()
}

fn default_repeat_unit() -> String {
    "daily".to_string()
}

fn default_repeat_interval() -> u32 {
    1
}

/// Result of decoding a document: the reconstructed collections plus the
/// number of records dropped for carrying unrecognized values.
#[derive(Debug)]
pub struct DecodedStore {
    pub tasks: Vec<Task>,
    pub categories: Vec<Category>,
    pub settings: BTreeMap<String, String>,
    pub metadata: BTreeMap<String, Value>,
    pub skipped: usize,
}

/// Builds the export document from a store snapshot.
pub fn encode(
    tasks: &[Task],
    categories: &[Category],
    settings: BTreeMap<String, String>,
    metadata: BTreeMap<String, Value>,
) -> TaskDocument {
    TaskDocument {
        version: DOCUMENT_VERSION.to_string(),
        last_modified: Utc::now(),
        tasks: tasks.iter().map(encode_task).collect(),
        categories: categories.iter().map(encode_category).collect(),
        settings,
        metadata,
    }
}

fn encode_task(task: &Task) -> TaskRecord {
    let recurrence = task.recurrence.clone();
    TaskRecord {
        id: task.id.to_string(),
        title: task.title.clone(),
        notes: task.notes.clone(),
        due: task.due.map(|t| t.with_timezone(&Utc)),
        created_at: task.created_at.with_timezone(&Utc),
        updated_at: task.updated_at.with_timezone(&Utc),
        status: task.status.as_str().to_string(),
        priority: task.priority.as_str().to_string(),
        context: task.context.as_str().to_string(),
        category_id: task.category_id.map(|id| id.to_string()),
        tags: task.tags.clone(),
        sort_order: task.sort_order,
        notification_enabled: task.notification_enabled,
        notification_time: task.notification_time.map(|t| t.with_timezone(&Utc)),
        original_status: task.original_status.map(|s| s.as_str().to_string()),
        repeat_enabled: recurrence.as_ref().map(|r| r.enabled).unwrap_or(false),
        repeat_unit: recurrence
            .as_ref()
            .map(|r| r.unit.as_str().to_string())
            .unwrap_or_else(default_repeat_unit),
        repeat_interval: recurrence.as_ref().map(|r| r.interval).unwrap_or(1),
        repeat_end_date: recurrence.as_ref().and_then(|r| r.end_date),
        custom_fields: BTreeMap::new(),
    }
}

fn encode_category(category: &Category) -> CategoryRecord {
    CategoryRecord {
        id: category.id.to_string(),
        name: category.name.clone(),
        icon: category.icon.as_str().to_string(),
        color: category.color.as_str().to_string(),
        created_at: category.created_at.with_timezone(&Utc),
        updated_at: category.updated_at.with_timezone(&Utc),
        custom_fields: BTreeMap::new(),
    }
}

/// Rebuilds collections from a document, skipping unrecognizable records.
pub fn decode(document: &TaskDocument) -> DecodedStore {
    let mut skipped = 0;

    let categories: Vec<Category> = document
        .categories
        .iter()
        .filter_map(|record| {
            let category = decode_category(record);
            if category.is_none() {
                skipped += 1;
                tracing::debug!(id = %record.id, "skipping category record with unknown values");
            }
            category
        })
        .collect();

    let tasks: Vec<Task> = document
        .tasks
        .iter()
        .filter_map(|record| {
            let task = decode_task(record);
            if task.is_none() {
                skipped += 1;
                tracing::debug!(id = %record.id, "skipping task record with unknown values");
            }
            task
        })
        .collect();

    DecodedStore {
        tasks,
        categories,
        settings: document.settings.clone(),
        metadata: document.metadata.clone(),
        skipped,
    }
}

fn decode_task(record: &TaskRecord) -> Option<Task> {
    let id = Uuid::parse_str(&record.id).ok()?;
    let status = TaskStatus::parse(&record.status)?;
    let priority = TaskPriority::parse(&record.priority)?;
    let context = TaskContext::parse(&record.context)?;
    let unit = RepeatUnit::parse(&record.repeat_unit)?;

    let recurrence = if record.repeat_enabled
        || record.repeat_interval != 1
        || record.repeat_end_date.is_some()
        || unit != RepeatUnit::Daily
    {
        Some(RecurrenceRule {
            enabled: record.repeat_enabled,
            unit,
            interval: record.repeat_interval.max(1),
            end_date: record.repeat_end_date,
        })
    } else {
        None
    };

    Some(Task {
        id,
        title: record.title.clone(),
        notes: record.notes.clone(),
        due: record.due.map(|t| t.with_timezone(&Local)),
        created_at: record.created_at.with_timezone(&Local),
        updated_at: record.updated_at.with_timezone(&Local),
        status,
        priority,
        context,
        // An unparseable category id degrades to "no category" rather
        // than dropping the whole record.
        category_id: record.category_id.as_deref().and_then(|id| Uuid::parse_str(id).ok()),
        tags: record.tags.clone(),
        sort_order: record.sort_order,
        notification_enabled: record.notification_enabled,
        notification_time: record.notification_time.map(|t| t.with_timezone(&Local)),
        recurrence,
        original_status: record.original_status.as_deref().and_then(TaskStatus::parse),
    })
}

fn decode_category(record: &CategoryRecord) -> Option<Category> {
    Some(Category {
        id: Uuid::parse_str(&record.id).ok()?,
        name: record.name.clone(),
        icon: CategoryIcon::parse(&record.icon)?,
        color: CategoryColor::parse(&record.color)?,
        created_at: record.created_at.with_timezone(&Local),
        updated_at: record.updated_at.with_timezone(&Local),
    })
}

/// Serializes a document as pretty-printed JSON.
pub fn to_json(document: &TaskDocument) -> Result<String, ImportError> {
    Ok(serde_json::to_string_pretty(document)?)
}

/// Parses a document from JSON. Failure here fails the whole import.
pub fn from_json(json: &str) -> Result<TaskDocument, ImportError> {
    Ok(serde_json::from_str(json)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::libs::category::default_categories;
    use crate::libs::task::TaskPriority;

    #[test]
    fn task_record_round_trips() {
        let mut task = Task::new("Pay rent").with_priority(TaskPriority::High);
        task.tags = vec!["#home".to_string()];
        task.recurrence = Some(RecurrenceRule::new(RepeatUnit::Monthly, 1));
        let decoded = decode_task(&encode_task(&task)).unwrap();
        assert_eq!(decoded.id, task.id);
        assert_eq!(decoded.title, task.title);
        assert_eq!(decoded.priority, task.priority);
        assert_eq!(decoded.tags, task.tags);
        assert_eq!(decoded.recurrence, task.recurrence);
    }

    #[test]
    fn unknown_priority_drops_record_only() {
        let task = Task::new("Good");
        let mut bad = encode_task(&Task::new("Bad"));
        bad.priority = "urgent".to_string();
        let document = TaskDocument {
            version: DOCUMENT_VERSION.to_string(),
            last_modified: Utc::now(),
            tasks: vec![encode_task(&task), bad],
            categories: Vec::new(),
            settings: BTreeMap::new(),
            metadata: BTreeMap::new(),
        };
        let decoded = decode(&document);
        assert_eq!(decoded.tasks.len(), 1);
        assert_eq!(decoded.skipped, 1);
    }

    #[test]
    fn malformed_json_fails_whole_import() {
        assert!(from_json("{not json").is_err());
    }

    #[test]
    fn custom_fields_survive_serialization() {
        let mut record = encode_task(&Task::new("With extras"));
        record
            .custom_fields
            .insert("focusSessions".to_string(), serde_json::json!([{"duration": 25}]));
        let document = TaskDocument {
            version: DOCUMENT_VERSION.to_string(),
            last_modified: Utc::now(),
            tasks: vec![record],
            categories: default_categories().iter().map(encode_category).collect(),
            settings: BTreeMap::new(),
            metadata: BTreeMap::new(),
        };
        let json = to_json(&document).unwrap();
        let parsed = from_json(&json).unwrap();
        assert_eq!(parsed.tasks[0].custom_fields["focusSessions"][0]["duration"], 25);
        assert_eq!(parsed.categories.len(), 4);
    }
}
