#[cfg(test)]
mod tests {
    use taskdeck::libs::category::{Category, CategoryColor, CategoryIcon};
    use taskdeck::libs::store::{StoreError, TaskStore};
    use taskdeck::libs::task::Task;

    fn category(name: &str) -> Category {
        Category::new(name, CategoryIcon::Folder, CategoryColor::Blue)
    }

    #[test]
    fn test_delete_category_detaches_every_referencing_task() {
        // Scenario: delete a category referenced by 3 tasks
        let mut store = TaskStore::with_defaults();
        let cat = category("Errands");
        let cat_id = store.add_category(cat).unwrap();

        let mut task_ids = Vec::new();
        for title in ["Post office", "Groceries", "Pharmacy"] {
            let id = store.add(Task::new(title).with_category(cat_id)).unwrap();
            task_ids.push(id);
        }

        let detached = store.delete_category(cat_id).unwrap();
        assert_eq!(detached, 3);
        assert!(store.categories().is_empty());
        assert_eq!(store.tasks().len(), 3);
        for id in task_ids {
            assert_eq!(store.get(id).unwrap().category_id, None);
        }
    }

    #[test]
    fn test_category_name_must_not_be_empty() {
        let mut store = TaskStore::with_defaults();
        let err = store.add_category(category("  ")).unwrap_err();
        assert!(matches!(err, StoreError::Validation(_)));
    }

    #[test]
    fn test_update_category_keeps_creation_time() {
        let mut store = TaskStore::with_defaults();
        let id = store.add_category(category("Work")).unwrap();
        let created_at = store.categories()[0].created_at;

        let mut edited = store.categories()[0].clone();
        edited.name = "Office".to_string();
        edited.color = CategoryColor::Teal;
        store.update_category(edited).unwrap();

        let updated = store.categories().iter().find(|c| c.id == id).unwrap();
        assert_eq!(updated.name, "Office");
        assert_eq!(updated.color, CategoryColor::Teal);
        assert_eq!(updated.created_at, created_at);
    }

    #[test]
    fn test_rename_tag_rewrites_every_task() {
        // Scenario: rename "#work" to "#job" across 2 tasks
        let mut store = TaskStore::with_defaults();
        let a = store.add(Task::new("Report").with_tags(vec!["#work".into()])).unwrap();
        let b = store.add(Task::new("Slides").with_tags(vec!["#work".into(), "#deck".into()])).unwrap();
        let untouched = store.add(Task::new("Groceries").with_tags(vec!["#home".into()])).unwrap();

        let touched = store.rename_tag("#work", "#job").unwrap();
        assert_eq!(touched, 2);
        assert_eq!(store.get(a).unwrap().tags, vec!["#job".to_string()]);
        assert_eq!(store.get(b).unwrap().tags, vec!["#job".to_string(), "#deck".to_string()]);
        assert_eq!(store.get(untouched).unwrap().tags, vec!["#home".to_string()]);
        // The literal old string is gone everywhere
        assert!(store.tasks().iter().all(|t| !t.tags.contains(&"#work".to_string())));
        assert!(!store.tags().contains(&"#work".to_string()));
        assert!(store.tags().contains(&"#job".to_string()));
    }

    #[test]
    fn test_rename_into_existing_tag_merges() {
        let mut store = TaskStore::with_defaults();
        let id = store
            .add(Task::new("Both tags").with_tags(vec!["#old".into(), "#new".into()]))
            .unwrap();

        store.rename_tag("#old", "#new").unwrap();
        // No duplicate on the task, no duplicate in the registry
        assert_eq!(store.get(id).unwrap().tags, vec!["#new".to_string()]);
        assert_eq!(store.tags().iter().filter(|t| *t == "#new").count(), 1);
    }

    #[test]
    fn test_remove_tag_filters_it_from_tasks() {
        let mut store = TaskStore::with_defaults();
        let id = store
            .add(Task::new("Tagged").with_tags(vec!["#gone".into(), "#kept".into()]))
            .unwrap();

        let touched = store.remove_tag("#gone").unwrap();
        assert_eq!(touched, 1);
        assert_eq!(store.get(id).unwrap().tags, vec!["#kept".to_string()]);
        assert!(!store.tags().contains(&"#gone".to_string()));
    }

    #[test]
    fn test_tag_operations_require_existing_tag() {
        let mut store = TaskStore::with_defaults();
        assert!(matches!(store.rename_tag("#ghost", "#new"), Err(StoreError::TagNotFound(_))));
        assert!(matches!(store.remove_tag("#ghost"), Err(StoreError::TagNotFound(_))));
    }

    #[test]
    fn test_add_tag_is_canonicalized_and_idempotent() {
        let mut store = TaskStore::with_defaults();
        assert_eq!(store.add_tag("focus").unwrap(), "#focus");
        assert_eq!(store.add_tag("#focus").unwrap(), "#focus");
        assert_eq!(store.tags(), &["#focus".to_string()]);
        assert!(matches!(store.add_tag("  "), Err(StoreError::Validation(_))));
    }
}
