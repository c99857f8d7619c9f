//! Authoritative task and category store.
//!
//! Owns the single task collection (status is a field, bucket views are
//! derived projections), the category collection and the tag registry.
//! Every public mutation is atomic from the caller's perspective and
//! refreshes `updated_at` on the tasks it touches. Notification
//! scheduling runs as a side effect of mutations through the embedded
//! [`Scheduler`]; scheduling failures are logged, never rolled back.
//!
//! ## Lifecycle
//!
//! ```text
//! Inbox ──move_to_today──▶ Today
//!   │                        │
//!   └────────complete────────┘
//!                │
//!                ▼
//!              Done ──restore──▶ (recorded prior bucket)
//! ```
//!
//! Tasks are created in Inbox and leave the store only through `delete`,
//! which also cancels their pending triggers.

use crate::libs::category::{default_categories, Category};
use crate::libs::config::Config;
use crate::libs::data_storage::DataStorage;
use crate::libs::document::{self, ImportError, TaskDocument};
use crate::libs::notify::{PendingTriggers, Scheduler};
use crate::libs::task::{Task, TaskStatus};
use chrono::Local;
use serde_json::Value;
use std::collections::BTreeMap;
use std::fs;
use thiserror::Error;
use uuid::Uuid;

/// File name of the persisted store document in the data directory.
pub const STORE_FILE_NAME: &str = "taskdeck.json";

/// Metadata key under which the tag registry rides in the document.
const TAG_REGISTRY_KEY: &str = "tagRegistry";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("validation failed: {0}")]
    Validation(String),
    #[error("no task with id {0}")]
    TaskNotFound(Uuid),
    #[error("no task matches '{0}'")]
    NoTaskMatch(String),
    #[error("no category with id {0}")]
    CategoryNotFound(Uuid),
    #[error("no tag named '{0}'")]
    TagNotFound(String),
    #[error("cannot {op}: task is in {status}")]
    Transition { op: &'static str, status: &'static str },
    #[error(transparent)]
    Import(#[from] ImportError),
    #[error("failed to access store file: {0}")]
    Io(#[from] std::io::Error),
}

pub struct TaskStore {
    tasks: Vec<Task>,
    categories: Vec<Category>,
    tags: Vec<String>,
    scheduler: Scheduler,
    // Preserved verbatim from imported documents for forward compatibility.
    doc_settings: BTreeMap<String, String>,
    doc_metadata: BTreeMap<String, Value>,
}

impl TaskStore {
    pub fn new(scheduler: Scheduler) -> Self {
        Self {
            tasks: Vec::new(),
            categories: Vec::new(),
            tags: Vec::new(),
            scheduler,
            doc_settings: BTreeMap::new(),
            doc_metadata: BTreeMap::new(),
        }
    }

    pub fn with_defaults() -> Self {
        Self::new(Scheduler::with_defaults())
    }

    /// Loads the store from the persisted document, seeding default
    /// categories on first run.
    pub fn load() -> Result<Self, StoreError> {
        let config = Config::read().unwrap_or_default();
        let scheduler = Scheduler::new(config.notification_settings(), Box::new(PendingTriggers::new()));
        let mut store = Self::new(scheduler);

        let path = DataStorage::new()
            .get_path(STORE_FILE_NAME)
            .map_err(|e| StoreError::Validation(e.to_string()))?;
        if path.exists() {
            let contents = fs::read_to_string(&path)?;
            let doc = document::from_json(&contents)?;
            store.import(&doc)?;
        } else {
            store.categories = default_categories();
        }
        Ok(store)
    }

    /// Persists the current state as the export document.
    pub fn save(&self) -> Result<String, StoreError> {
        let path = DataStorage::new()
            .get_path(STORE_FILE_NAME)
            .map_err(|e| StoreError::Validation(e.to_string()))?;
        let json = document::to_json(&self.export())?;
        fs::write(&path, json)?;
        Ok(path.display().to_string())
    }

    // === ACCESSORS ===

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    pub fn has_tag(&self, name: &str) -> bool {
        canonical_tag(name).map(|t| self.tags.contains(&t)).unwrap_or(false)
    }

    pub fn scheduler(&self) -> &Scheduler {
        &self.scheduler
    }

    pub fn scheduler_mut(&mut self) -> &mut Scheduler {
        &mut self.scheduler
    }

    pub fn get(&self, id: Uuid) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    /// Resolves a task from a full id or an unambiguous id prefix.
    pub fn find_by_prefix(&self, prefix: &str) -> Result<&Task, StoreError> {
        if let Ok(id) = Uuid::parse_str(prefix) {
            return self.get(id).ok_or(StoreError::TaskNotFound(id));
        }
        let needle = prefix.to_lowercase();
        let mut matches = self
            .tasks
            .iter()
            .filter(|t| t.id.to_string().starts_with(&needle));
        match (matches.next(), matches.next()) {
            (Some(task), None) => Ok(task),
            (Some(_), Some(_)) => Err(StoreError::Validation(format!(
                "'{}' matches more than one task",
                prefix
            ))),
            (None, _) => Err(StoreError::NoTaskMatch(prefix.to_string())),
        }
    }

    /// Tasks of one bucket in manual order.
    pub fn bucket(&self, status: TaskStatus) -> Vec<&Task> {
        let mut tasks: Vec<&Task> = self.tasks.iter().filter(|t| t.status == status).collect();
        tasks.sort_by_key(|t| t.sort_order);
        tasks
    }

    pub fn bucket_len(&self, status: TaskStatus) -> usize {
        self.tasks.iter().filter(|t| t.status == status).count()
    }

    /// A bucket plus the completed tasks that originated from it, so a
    /// view can show "done" entries inline until they are hidden.
    pub fn bucket_with_done(&self, status: TaskStatus) -> Vec<&Task> {
        if status == TaskStatus::Done {
            return self.bucket(status);
        }
        let mut tasks = self.bucket(status);
        tasks.extend(
            self.bucket(TaskStatus::Done)
                .into_iter()
                .filter(|t| t.original_status == Some(status)),
        );
        tasks
    }

    // === TASK MANAGEMENT ===

    /// Inserts a new task at the end of the Inbox bucket.
    pub fn add(&mut self, mut task: Task) -> Result<Uuid, StoreError> {
        validate_title(&task.title)?;
        validate_recurrence(&task)?;
        task.tags = self.register_tags(task.tags)?;
        task.status = TaskStatus::Inbox;
        task.original_status = None;
        task.sort_order = self.bucket_len(TaskStatus::Inbox);
        let id = task.id;
        if task.notification_enabled {
            self.scheduler.schedule_for(&task, Local::now());
        }
        self.tasks.push(task);
        Ok(id)
    }

    /// Replaces a task's editable fields in place. Bucket membership is
    /// preserved; status only changes through the dedicated transitions.
    pub fn update(&mut self, task: Task) -> Result<(), StoreError> {
        validate_title(&task.title)?;
        validate_recurrence(&task)?;
        let index = self
            .tasks
            .iter()
            .position(|t| t.id == task.id)
            .ok_or(StoreError::TaskNotFound(task.id))?;

        let tags = self.register_tags(task.tags.clone())?;
        let existing = &self.tasks[index];

        let reschedule = existing.due != task.due
            || existing.notification_enabled != task.notification_enabled
            || existing.notification_time != task.notification_time;

        let mut updated = task;
        updated.tags = tags;
        updated.status = existing.status;
        updated.sort_order = existing.sort_order;
        updated.original_status = existing.original_status;
        updated.created_at = existing.created_at;
        updated.updated_at = Local::now();

        if reschedule {
            // Cancel-then-reschedule so triggers never stack.
            self.scheduler.schedule_for(&updated, Local::now());
        }
        self.tasks[index] = updated;
        Ok(())
    }

    /// Toggles notification fields and rewires pending triggers.
    pub fn set_notification(
        &mut self,
        id: Uuid,
        enabled: bool,
        time: Option<chrono::DateTime<Local>>,
    ) -> Result<(), StoreError> {
        let task = self
            .tasks
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or(StoreError::TaskNotFound(id))?;
        task.notification_enabled = enabled;
        task.notification_time = time;
        task.updated_at = Local::now();
        let snapshot = task.clone();
        self.scheduler.schedule_for(&snapshot, Local::now());
        Ok(())
    }

    /// Moves an Inbox task to the end of the Today bucket.
    pub fn move_to_today(&mut self, id: Uuid) -> Result<(), StoreError> {
        let target_order = self.bucket_len(TaskStatus::Today);
        let task = self
            .tasks
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or(StoreError::TaskNotFound(id))?;
        if task.status != TaskStatus::Inbox {
            return Err(StoreError::Transition {
                op: "move to Today",
                status: task.status.as_str(),
            });
        }
        task.status = TaskStatus::Today;
        task.sort_order = target_order;
        task.updated_at = Local::now();
        Ok(())
    }

    /// Completes a task from Inbox or Today, remembering where it came
    /// from so `restore` can send it back.
    pub fn complete(&mut self, id: Uuid) -> Result<(), StoreError> {
        let target_order = self.bucket_len(TaskStatus::Done);
        let task = self
            .tasks
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or(StoreError::TaskNotFound(id))?;
        if task.status == TaskStatus::Done {
            return Err(StoreError::Transition {
                op: "complete",
                status: task.status.as_str(),
            });
        }
        task.original_status = Some(task.status);
        task.status = TaskStatus::Done;
        task.sort_order = target_order;
        task.updated_at = Local::now();
        Ok(())
    }

    /// Returns a Done task to its recorded prior bucket (Inbox when the
    /// provenance is unknown), appended at the end.
    pub fn restore(&mut self, id: Uuid) -> Result<TaskStatus, StoreError> {
        let index = self
            .tasks
            .iter()
            .position(|t| t.id == id)
            .ok_or(StoreError::TaskNotFound(id))?;
        if self.tasks[index].status != TaskStatus::Done {
            return Err(StoreError::Transition {
                op: "restore",
                status: self.tasks[index].status.as_str(),
            });
        }
        let target = self.tasks[index].original_status.unwrap_or(TaskStatus::Inbox);
        let target_order = self.bucket_len(target);
        let task = &mut self.tasks[index];
        task.status = target;
        task.original_status = None;
        task.sort_order = target_order;
        task.updated_at = Local::now();
        Ok(target)
    }

    /// Removes a task permanently and cancels its pending triggers.
    pub fn delete(&mut self, id: Uuid) -> Result<Task, StoreError> {
        let index = self
            .tasks
            .iter()
            .position(|t| t.id == id)
            .ok_or(StoreError::TaskNotFound(id))?;
        let task = self.tasks.remove(index);
        self.scheduler.cancel_all(id);
        Ok(task)
    }

    /// Moves the tasks at `from_indices` (positions within the bucket's
    /// manual order) in front of `to_index`, then reassigns `sort_order`
    /// 0-based and contiguous for the whole bucket. Other buckets are
    /// untouched.
    pub fn reorder(
        &mut self,
        status: TaskStatus,
        from_indices: &[usize],
        to_index: usize,
    ) -> Result<(), StoreError> {
        let mut order: Vec<Uuid> = self.bucket(status).iter().map(|t| t.id).collect();
        if from_indices.iter().any(|&i| i >= order.len()) || to_index > order.len() {
            return Err(StoreError::Validation(format!(
                "reorder positions out of range for {} task(s)",
                order.len()
            )));
        }

        let mut sources: Vec<usize> = from_indices.to_vec();
        sources.sort_unstable();
        sources.dedup();
        let moving: Vec<Uuid> = sources.iter().map(|&i| order[i]).collect();
        for &i in sources.iter().rev() {
            order.remove(i);
        }
        let dest = to_index - sources.iter().filter(|&&i| i < to_index).count();
        for (offset, id) in moving.into_iter().enumerate() {
            order.insert(dest + offset, id);
        }

        let now = Local::now();
        for (position, id) in order.into_iter().enumerate() {
            if let Some(task) = self.tasks.iter_mut().find(|t| t.id == id) {
                if task.sort_order != position {
                    task.sort_order = position;
                    task.updated_at = now;
                }
            }
        }
        Ok(())
    }

    // === CATEGORY MANAGEMENT ===

    pub fn add_category(&mut self, category: Category) -> Result<Uuid, StoreError> {
        if category.name.trim().is_empty() {
            return Err(StoreError::Validation("category name must not be empty".to_string()));
        }
        let id = category.id;
        self.categories.push(category);
        Ok(id)
    }

    pub fn update_category(&mut self, category: Category) -> Result<(), StoreError> {
        if category.name.trim().is_empty() {
            return Err(StoreError::Validation("category name must not be empty".to_string()));
        }
        let existing = self
            .categories
            .iter_mut()
            .find(|c| c.id == category.id)
            .ok_or(StoreError::CategoryNotFound(category.id))?;
        existing.name = category.name;
        existing.icon = category.icon;
        existing.color = category.color;
        existing.updated_at = Local::now();
        Ok(())
    }

    /// Deletes a category and clears the reference on every task that
    /// pointed at it. Tasks themselves are never deleted. Returns the
    /// number of detached tasks.
    pub fn delete_category(&mut self, id: Uuid) -> Result<usize, StoreError> {
        let index = self
            .categories
            .iter()
            .position(|c| c.id == id)
            .ok_or(StoreError::CategoryNotFound(id))?;
        self.categories.remove(index);

        let now = Local::now();
        let mut detached = 0;
        for task in self.tasks.iter_mut().filter(|t| t.category_id == Some(id)) {
            task.category_id = None;
            task.updated_at = now;
            detached += 1;
        }
        Ok(detached)
    }

    /// Resolves a category from its name or an id prefix.
    pub fn find_category(&self, needle: &str) -> Option<&Category> {
        self.categories
            .iter()
            .find(|c| c.name == needle)
            .or_else(|| {
                self.categories
                    .iter()
                    .find(|c| c.id.to_string().starts_with(&needle.to_lowercase()))
            })
    }

    // === TAG MANAGEMENT ===

    /// Adds a tag to the registry, canonicalized with a leading `#`.
    /// Adding an existing tag is a no-op.
    pub fn add_tag(&mut self, name: &str) -> Result<String, StoreError> {
        let tag = canonical_tag(name)?;
        if !self.tags.contains(&tag) {
            self.tags.push(tag.clone());
        }
        Ok(tag)
    }

    /// Renames a tag in the registry and rewrites the literal string on
    /// every task that carries it. Returns the number of tasks touched.
    pub fn rename_tag(&mut self, old: &str, new: &str) -> Result<usize, StoreError> {
        let old = canonical_tag(old)?;
        let new = canonical_tag(new)?;
        let index = self
            .tags
            .iter()
            .position(|t| *t == old)
            .ok_or_else(|| StoreError::TagNotFound(old.clone()))?;
        if self.tags.contains(&new) {
            self.tags.remove(index);
        } else {
            self.tags[index] = new.clone();
        }

        let now = Local::now();
        let mut touched = 0;
        for task in self.tasks.iter_mut() {
            if task.tags.iter().any(|t| *t == old) {
                task.tags = task
                    .tags
                    .iter()
                    .map(|t| if *t == old { new.clone() } else { t.clone() })
                    .collect();
                dedup_preserving_order(&mut task.tags);
                task.updated_at = now;
                touched += 1;
            }
        }
        Ok(touched)
    }

    /// Removes a tag from the registry and filters it out of every
    /// task's tag list. Returns the number of tasks touched.
    pub fn remove_tag(&mut self, name: &str) -> Result<usize, StoreError> {
        let tag = canonical_tag(name)?;
        let index = self
            .tags
            .iter()
            .position(|t| *t == tag)
            .ok_or_else(|| StoreError::TagNotFound(tag.clone()))?;
        self.tags.remove(index);

        let now = Local::now();
        let mut touched = 0;
        for task in self.tasks.iter_mut() {
            let before = task.tags.len();
            task.tags.retain(|t| *t != tag);
            if task.tags.len() != before {
                task.updated_at = now;
                touched += 1;
            }
        }
        Ok(touched)
    }

    fn register_tags(&mut self, tags: Vec<String>) -> Result<Vec<String>, StoreError> {
        let mut canonical = Vec::with_capacity(tags.len());
        for tag in tags {
            canonical.push(self.add_tag(&tag)?);
        }
        dedup_preserving_order(&mut canonical);
        Ok(canonical)
    }

    // === EXPORT / IMPORT ===

    /// Snapshots the full store state as a portable document.
    pub fn export(&self) -> TaskDocument {
        let mut metadata = self.doc_metadata.clone();
        metadata.insert(
            TAG_REGISTRY_KEY.to_string(),
            Value::Array(self.tags.iter().cloned().map(Value::String).collect()),
        );
        document::encode(&self.tasks, &self.categories, self.doc_settings.clone(), metadata)
    }

    /// Replaces the in-memory collections wholesale from a document.
    /// Records with unrecognized values are skipped; their count is
    /// returned. Pending triggers are not rewired here.
    pub fn import(&mut self, doc: &TaskDocument) -> Result<usize, StoreError> {
        let decoded = document::decode(doc);
        self.tasks = decoded.tasks;
        self.categories = decoded.categories;
        self.doc_settings = decoded.settings;
        self.doc_metadata = decoded.metadata;

        self.tags = match self.doc_metadata.get(TAG_REGISTRY_KEY) {
            Some(Value::Array(entries)) => entries
                .iter()
                .filter_map(|v| v.as_str().map(str::to_string))
                .collect(),
            _ => Vec::new(),
        };
        self.doc_metadata.remove(TAG_REGISTRY_KEY);
        for task in &self.tasks {
            for tag in &task.tags {
                if !self.tags.contains(tag) {
                    self.tags.push(tag.clone());
                }
            }
        }
        Ok(decoded.skipped)
    }
}

fn validate_title(title: &str) -> Result<(), StoreError> {
    if title.trim().is_empty() {
        return Err(StoreError::Validation("task title must not be empty".to_string()));
    }
    Ok(())
}

fn validate_recurrence(task: &Task) -> Result<(), StoreError> {
    if let Some(rule) = &task.recurrence {
        if rule.interval < 1 {
            return Err(StoreError::Validation(
                "recurrence interval must be at least 1".to_string(),
            ));
        }
    }
    Ok(())
}

/// Normalizes a tag name to its canonical `#`-prefixed form.
pub fn canonical_tag(name: &str) -> Result<String, StoreError> {
    let trimmed = name.trim();
    let bare = trimmed.strip_prefix('#').unwrap_or(trimmed);
    if bare.is_empty() {
        return Err(StoreError::Validation("tag name must not be empty".to_string()));
    }
    Ok(format!("#{}", bare))
}

fn dedup_preserving_order(tags: &mut Vec<String>) {
    let mut seen = Vec::with_capacity(tags.len());
    tags.retain(|t| {
        if seen.contains(t) {
            false
        } else {
            seen.push(t.clone());
            true
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::libs::task::Task;

    fn store() -> TaskStore {
        TaskStore::with_defaults()
    }

    #[test]
    fn add_assigns_inbox_positions() {
        let mut store = store();
        let a = store.add(Task::new("A")).unwrap();
        let b = store.add(Task::new("B")).unwrap();
        assert_eq!(store.get(a).unwrap().sort_order, 0);
        assert_eq!(store.get(b).unwrap().sort_order, 1);
        assert_eq!(store.bucket_len(TaskStatus::Inbox), 2);
    }

    #[test]
    fn add_rejects_blank_title() {
        let mut store = store();
        let err = store.add(Task::new("   ")).unwrap_err();
        assert!(matches!(err, StoreError::Validation(_)));
        assert!(store.tasks().is_empty());
    }

    #[test]
    fn update_cannot_smuggle_a_status_change() {
        let mut store = store();
        let id = store.add(Task::new("Stay put")).unwrap();
        let mut edited = store.get(id).unwrap().clone();
        edited.status = TaskStatus::Done;
        edited.title = "Stay put, renamed".to_string();
        store.update(edited).unwrap();
        let task = store.get(id).unwrap();
        assert_eq!(task.status, TaskStatus::Inbox);
        assert_eq!(task.title, "Stay put, renamed");
    }

    #[test]
    fn tags_are_canonicalized_on_add() {
        let mut store = store();
        let id = store.add(Task::new("Tagged").with_tags(vec!["work".into(), "#work".into()])).unwrap();
        assert_eq!(store.get(id).unwrap().tags, vec!["#work".to_string()]);
        assert_eq!(store.tags(), &["#work".to_string()]);
    }

    #[test]
    fn reorder_moves_within_bucket_only() {
        let mut store = store();
        store.add(Task::new("A")).unwrap();
        store.add(Task::new("B")).unwrap();
        store.add(Task::new("C")).unwrap();
        store.reorder(TaskStatus::Inbox, &[2], 0).unwrap();
        let titles: Vec<_> = store.bucket(TaskStatus::Inbox).iter().map(|t| t.title.clone()).collect();
        assert_eq!(titles, vec!["C", "A", "B"]);
        let orders: Vec<_> = store.bucket(TaskStatus::Inbox).iter().map(|t| t.sort_order).collect();
        assert_eq!(orders, vec![0, 1, 2]);
    }

    #[test]
    fn reorder_rejects_out_of_range() {
        let mut store = store();
        store.add(Task::new("Only")).unwrap();
        assert!(matches!(
            store.reorder(TaskStatus::Inbox, &[3], 0),
            Err(StoreError::Validation(_))
        ));
    }
}
