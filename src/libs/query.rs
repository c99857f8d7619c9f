//! Stateless filtering, sorting and grouping over task snapshots.
//!
//! Every function here is a pure transform over slices passed in by the
//! caller; nothing reaches back into mutable store state. Sorting is
//! stable and every tie is broken by ascending `sort_order`, which makes
//! manual order the deterministic tiebreaker for all other keys and
//! repeated sorts idempotent.

use crate::libs::category::Category;
use crate::libs::task::{Task, TaskStatus};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::{BTreeMap, HashSet};
use uuid::Uuid;

/// Synthetic category label for tasks without a category reference.
pub const UNCATEGORIZED: &str = "Uncategorized";

/// Dimension used to order a task view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum SortKey {
    Manual,
    Priority,
    DueDate,
    Category,
    CreatedAt,
    Title,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    /// Natural direction of each key: priority and creation time read
    /// newest/highest first, everything else ascending.
    pub fn default_for(key: SortKey) -> Self {
        match key {
            SortKey::Priority | SortKey::CreatedAt => SortDirection::Descending,
            _ => SortDirection::Ascending,
        }
    }
}

/// Resolves the display name for a task's category reference.
pub fn category_name(categories: &[Category], category_id: Option<Uuid>) -> String {
    category_id
        .and_then(|id| categories.iter().find(|c| c.id == id))
        .map(|c| c.name.clone())
        .unwrap_or_else(|| UNCATEGORIZED.to_string())
}

/// Produces the filtered, ordered view of a task snapshot.
///
/// `hide_completed` drops Done tasks; a non-empty `tag_filter` keeps only
/// tasks whose tag set intersects it.
pub fn view(
    tasks: &[Task],
    categories: &[Category],
    key: SortKey,
    direction: SortDirection,
    tag_filter: &HashSet<String>,
    hide_completed: bool,
) -> Vec<Task> {
    let mut selected: Vec<Task> = tasks
        .iter()
        .filter(|t| !hide_completed || t.status != TaskStatus::Done)
        .filter(|t| tag_filter.is_empty() || t.tags.iter().any(|tag| tag_filter.contains(tag)))
        .cloned()
        .collect();
    sort(&mut selected, categories, key, direction);
    selected
}

/// Sorts a task list in place by the given key. Stable; ties always fall
/// back to ascending `sort_order` regardless of direction.
pub fn sort(tasks: &mut [Task], categories: &[Category], key: SortKey, direction: SortDirection) {
    tasks.sort_by(|a, b| {
        primary_ordering(a, b, categories, key, direction).then_with(|| a.sort_order.cmp(&b.sort_order))
    });
}

fn primary_ordering(
    a: &Task,
    b: &Task,
    categories: &[Category],
    key: SortKey,
    direction: SortDirection,
) -> Ordering {
    let ascending = match key {
        // Manual order has no secondary dimension to flip.
        SortKey::Manual => return Ordering::Equal,
        SortKey::Priority => a.priority.rank().cmp(&b.priority.rank()),
        SortKey::DueDate => {
            // Tasks without a due date sort as infinitely late.
            match (a.due, b.due) {
                (Some(x), Some(y)) => x.cmp(&y),
                (Some(_), None) => Ordering::Less,
                (None, Some(_)) => Ordering::Greater,
                (None, None) => Ordering::Equal,
            }
        }
        SortKey::Category => {
            category_name(categories, a.category_id).cmp(&category_name(categories, b.category_id))
        }
        // Newest first by design, independent of the direction toggle.
        SortKey::CreatedAt => return b.created_at.cmp(&a.created_at),
        SortKey::Title => a.title.to_lowercase().cmp(&b.title.to_lowercase()),
    };
    match direction {
        SortDirection::Ascending => ascending,
        SortDirection::Descending => ascending.reverse(),
    }
}

/// Partitions an already-sorted view by resolved category name. BTreeMap
/// keys iterate lexicographically for display, with the synthetic
/// "Uncategorized" bucket included.
pub fn grouped(tasks: &[Task], categories: &[Category]) -> BTreeMap<String, Vec<Task>> {
    let mut groups: BTreeMap<String, Vec<Task>> = BTreeMap::new();
    for task in tasks {
        groups
            .entry(category_name(categories, task.category_id))
            .or_default()
            .push(task.clone());
    }
    groups
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::libs::category::{Category, CategoryColor, CategoryIcon};
    use crate::libs::task::TaskPriority;
    use chrono::{Duration, Local};

    fn task(title: &str, order: usize) -> Task {
        let mut t = Task::new(title);
        t.sort_order = order;
        t
    }

    #[test]
    fn priority_descends_by_default_with_manual_tiebreak() {
        let tasks = vec![
            task("low", 0).with_priority(TaskPriority::Low),
            task("high", 1).with_priority(TaskPriority::High),
            task("normal a", 2),
            task("normal b", 3),
        ];
        let sorted = view(
            &tasks,
            &[],
            SortKey::Priority,
            SortDirection::default_for(SortKey::Priority),
            &HashSet::new(),
            false,
        );
        let titles: Vec<_> = sorted.iter().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, vec!["high", "normal a", "normal b", "low"]);
    }

    #[test]
    fn missing_due_dates_sort_last() {
        let now = Local::now();
        let mut dated = task("dated", 5);
        dated.due = Some(now + Duration::days(1));
        let undated = task("undated", 0);
        let sorted = view(
            &[undated, dated],
            &[],
            SortKey::DueDate,
            SortDirection::Ascending,
            &HashSet::new(),
            false,
        );
        assert_eq!(sorted[0].title, "dated");
        assert_eq!(sorted[1].title, "undated");
    }

    #[test]
    fn created_at_ignores_direction_toggle() {
        let mut older = task("older", 0);
        older.created_at = Local::now() - Duration::hours(2);
        let newer = task("newer", 1);
        for direction in [SortDirection::Ascending, SortDirection::Descending] {
            let sorted = view(
                &[older.clone(), newer.clone()],
                &[],
                SortKey::CreatedAt,
                direction,
                &HashSet::new(),
                false,
            );
            assert_eq!(sorted[0].title, "newer");
        }
    }

    #[test]
    fn sorting_twice_is_idempotent() {
        let tasks = vec![
            task("b", 1).with_priority(TaskPriority::High),
            task("a", 0).with_priority(TaskPriority::High),
            task("c", 2),
        ];
        let once = view(&tasks, &[], SortKey::Priority, SortDirection::Descending, &HashSet::new(), false);
        let twice = view(&once, &[], SortKey::Priority, SortDirection::Descending, &HashSet::new(), false);
        assert_eq!(once, twice);
    }

    #[test]
    fn tag_filter_keeps_intersecting_tasks() {
        let tagged = task("tagged", 0).with_tags(vec!["#work".to_string()]);
        let other = task("other", 1).with_tags(vec!["#home".to_string()]);
        let untagged = task("untagged", 2);
        let filter: HashSet<String> = ["#work".to_string()].into_iter().collect();
        let viewed = view(
            &[tagged, other, untagged],
            &[],
            SortKey::Manual,
            SortDirection::Ascending,
            &filter,
            false,
        );
        assert_eq!(viewed.len(), 1);
        assert_eq!(viewed[0].title, "tagged");
    }

    #[test]
    fn grouping_uses_lexicographic_category_keys() {
        let work = Category::new("Work", CategoryIcon::Briefcase, CategoryColor::Blue);
        let home = Category::new("Home", CategoryIcon::House, CategoryColor::Orange);
        let mut a = task("a", 0);
        a.category_id = Some(work.id);
        let mut b = task("b", 1);
        b.category_id = Some(home.id);
        let c = task("c", 2);
        let categories = vec![work, home];
        let groups = grouped(&[a, b, c], &categories);
        let keys: Vec<_> = groups.keys().cloned().collect();
        assert_eq!(keys, vec!["Home", "Uncategorized", "Work"]);
    }
}
