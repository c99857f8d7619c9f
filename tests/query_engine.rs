#[cfg(test)]
mod tests {
    use chrono::{Duration, Local};
    use std::collections::HashSet;
    use taskdeck::libs::category::{Category, CategoryColor, CategoryIcon};
    use taskdeck::libs::query::{self, SortDirection, SortKey, UNCATEGORIZED};
    use taskdeck::libs::store::TaskStore;
    use taskdeck::libs::task::{Task, TaskPriority, TaskStatus};

    fn no_filter() -> HashSet<String> {
        HashSet::new()
    }

    fn sample_store() -> TaskStore {
        let mut store = TaskStore::with_defaults();
        let now = Local::now();
        store
            .add(Task::new("write minutes").with_priority(TaskPriority::Low))
            .unwrap();
        store
            .add(Task::new("Answer mail").with_due(now + Duration::days(2)))
            .unwrap();
        store
            .add(
                Task::new("Book flights")
                    .with_priority(TaskPriority::High)
                    .with_due(now + Duration::days(1))
                    .with_tags(vec!["#travel".into()]),
            )
            .unwrap();
        store
    }

    #[test]
    fn test_manual_sort_follows_sort_order() {
        let store = sample_store();
        let view = query::view(
            store.tasks(),
            store.categories(),
            SortKey::Manual,
            SortDirection::Ascending,
            &no_filter(),
            false,
        );
        let orders: Vec<_> = view.iter().map(|t| t.sort_order).collect();
        assert_eq!(orders, vec![0, 1, 2]);
    }

    #[test]
    fn test_priority_sort_high_first_then_manual_order() {
        let store = sample_store();
        let view = query::view(
            store.tasks(),
            store.categories(),
            SortKey::Priority,
            SortDirection::default_for(SortKey::Priority),
            &no_filter(),
            false,
        );
        let titles: Vec<_> = view.iter().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, vec!["Book flights", "Answer mail", "write minutes"]);
    }

    #[test]
    fn test_priority_sort_ascending_when_toggled() {
        let store = sample_store();
        let view = query::view(
            store.tasks(),
            store.categories(),
            SortKey::Priority,
            SortDirection::Ascending,
            &no_filter(),
            false,
        );
        assert_eq!(view[0].title, "write minutes");
        assert_eq!(view[2].title, "Book flights");
    }

    #[test]
    fn test_due_date_sort_puts_undated_last() {
        let store = sample_store();
        let view = query::view(
            store.tasks(),
            store.categories(),
            SortKey::DueDate,
            SortDirection::Ascending,
            &no_filter(),
            false,
        );
        let titles: Vec<_> = view.iter().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, vec!["Book flights", "Answer mail", "write minutes"]);
    }

    #[test]
    fn test_title_sort_is_case_insensitive() {
        let store = sample_store();
        let view = query::view(
            store.tasks(),
            store.categories(),
            SortKey::Title,
            SortDirection::Ascending,
            &no_filter(),
            false,
        );
        let titles: Vec<_> = view.iter().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, vec!["Answer mail", "Book flights", "write minutes"]);
    }

    #[test]
    fn test_hide_completed_drops_done_tasks() {
        let mut store = sample_store();
        let id = store.tasks()[0].id;
        store.complete(id).unwrap();

        let visible = query::view(
            store.tasks(),
            store.categories(),
            SortKey::Manual,
            SortDirection::Ascending,
            &no_filter(),
            true,
        );
        assert_eq!(visible.len(), 2);
        assert!(visible.iter().all(|t| t.status != TaskStatus::Done));

        let all = query::view(
            store.tasks(),
            store.categories(),
            SortKey::Manual,
            SortDirection::Ascending,
            &no_filter(),
            false,
        );
        assert_eq!(all.len(), 3);
    }

    #[test]
    fn test_tag_filter_is_set_intersection() {
        let store = sample_store();
        let filter: HashSet<String> = ["#travel".to_string(), "#unused".to_string()]
            .into_iter()
            .collect();
        let view = query::view(
            store.tasks(),
            store.categories(),
            SortKey::Manual,
            SortDirection::Ascending,
            &filter,
            false,
        );
        assert_eq!(view.len(), 1);
        assert_eq!(view[0].title, "Book flights");
    }

    #[test]
    fn test_repeated_sorts_are_stable() {
        let store = sample_store();
        for key in [
            SortKey::Manual,
            SortKey::Priority,
            SortKey::DueDate,
            SortKey::Category,
            SortKey::CreatedAt,
            SortKey::Title,
        ] {
            let direction = SortDirection::default_for(key);
            let once = query::view(store.tasks(), store.categories(), key, direction, &no_filter(), false);
            let twice = query::view(&once, store.categories(), key, direction, &no_filter(), false);
            assert_eq!(once, twice, "sort by {:?} must be idempotent", key);
        }
    }

    #[test]
    fn test_grouped_view_partitions_by_category_name() {
        let mut store = TaskStore::with_defaults();
        let work = Category::new("Work", CategoryIcon::Briefcase, CategoryColor::Blue);
        let work_id = store.add_category(work).unwrap();
        store.add(Task::new("Standup").with_category(work_id)).unwrap();
        store.add(Task::new("Loose end")).unwrap();

        let view = query::view(
            store.tasks(),
            store.categories(),
            SortKey::Manual,
            SortDirection::Ascending,
            &no_filter(),
            false,
        );
        let groups = query::grouped(&view, store.categories());
        let keys: Vec<_> = groups.keys().cloned().collect();
        assert_eq!(keys, vec![UNCATEGORIZED.to_string(), "Work".to_string()]);
        assert_eq!(groups["Work"].len(), 1);
        assert_eq!(groups[UNCATEGORIZED].len(), 1);
    }
}
